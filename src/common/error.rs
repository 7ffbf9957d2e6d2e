use std::fmt::{Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // Measured length of the input (chars, or bytes in byte mode)
    DataTooLong(usize),
    InvalidVersion,
    InvalidMaskingPattern,
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match *self {
            Self::DataTooLong(len) => {
                write!(f, "Data too long: {len} exceeds the capacity of the symbol")
            }
            Self::InvalidVersion => f.write_str("Invalid version"),
            Self::InvalidMaskingPattern => f.write_str("Invalid masking pattern"),
        }
    }
}

impl std::error::Error for QRError {}

pub type QRResult<T> = Result<T, QRError>;
