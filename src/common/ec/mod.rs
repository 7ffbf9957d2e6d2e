pub mod encoder;
pub mod galois;

pub use encoder::*;
pub use galois::G;
