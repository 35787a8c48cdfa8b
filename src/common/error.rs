use std::fmt::{Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // Link validation
    InvalidLink,

    // QR builder
    DataTooLong,
    InvalidChar,
    InvalidMaskingPattern,
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            // Link validation
            Self::InvalidLink => "Validation error: input is not a valid link",

            // QR builder
            Self::DataTooLong => "Capacity error: data too long for a version 1-L symbol",
            Self::InvalidChar => "Encoding error: input contains non-latin characters",
            Self::InvalidMaskingPattern => "Invalid masking pattern",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for QRError {}

pub type QRResult<T> = Result<T, QRError>;
