//! # qrsmith
//!
//! A Rust library for generating QR codes (Model 2, versions 1 to 40) with Reed-Solomon error
//! correction.
//!
//! ## Features
//!
//! - **Automatic mode selection**: Picks the densest of numeric, alphanumeric, kanji and byte
//!   modes that can represent the whole input
//! - **Automatic version selection**: Finds the smallest version whose capacity fits the data
//! - **Reed-Solomon Error Correction**: Four levels (L, M, Q, H) recovering roughly 7, 15, 25
//!   and 30 percent of codewords
//! - **Penalty-scored masking**: Evaluates all eight mask patterns and keeps the lowest penalty
//! - **Rendering**: Grayscale images through the `image` crate, or unicode text
//!
//! ## Quick Start
//!
//! ### Simple QR Code Generation
//!
//! ```rust
//! use qrsmith::{ECLevel, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Mode, version and mask are chosen automatically
//! let qr = qrsmith::encode("HELLO WORLD", ECLevel::Q)?;
//! assert_eq!(qr.version(), Version::new(1)?);
//! assert_eq!(qr.width(), 21);
//!
//! let img = qr.to_image(4); // 4 pixels per module
//! assert_eq!(img.width(), (21 + 8) * 4);
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrsmith::{ECLevel, MaskPattern, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new("Hello, World!")
//!     .version(Version::new(2)?)       // if not provided, finds smallest version to fit data
//!     .ec_level(ECLevel::H)            // if not provided, defaults to ECLevel::M
//!     .mask(MaskPattern::new(3)?)      // if not provided, finds best mask based on penalty score
//!     .build()?;
//!
//! assert_eq!(qr.width(), 25);
//! println!("{}", qr.to_str(1));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Correction Levels
//!
//! - `ECLevel::L` - Low (~7% recovery)
//! - `ECLevel::M` - Medium (~15% recovery)
//! - `ECLevel::Q` - Quartile (~25% recovery)
//! - `ECLevel::H` - High (~30% recovery)
//!
//! ## Logging
//!
//! The pipeline emits `tracing` events at debug and trace level. Install any subscriber to see
//! them; nothing is printed otherwise.

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;

pub use builder::{Module, QRBuilder, QR};
pub use common::{
    codec::Mode,
    error::{QRError, QRResult},
    mask::MaskPattern,
    metadata::{Color, ECLevel, Metadata, Version},
};

/// Encodes `text` into the smallest QR symbol that holds it at the given error correction
/// level, with the lowest penalty mask.
///
/// Returns [`QRError::DataTooLong`] if the text exceeds the capacity of version 40.
pub fn encode(text: &str, ecl: ECLevel) -> QRResult<QR> {
    QRBuilder::new(text).ec_level(ecl).build()
}
