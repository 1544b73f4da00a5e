use thiserror::Error;

/// Broad category of a descriptor failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument is not a usable number.
    InvalidType,
    /// An argument is a number outside the accepted range.
    InvalidValue,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DescriptorError {
    #[error("Sphere centre coordinate '{axis}' is not a finite number (got {value})")]
    NonNumericCoordinate { axis: char, value: f64 },

    #[error("Sphere radius is not a finite number (got {0})")]
    NonNumericRadius(f64),

    #[error("Sphere radius must be non-negative (got {0})")]
    NegativeRadius(f64),
}

impl DescriptorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NonNumericCoordinate { .. } | Self::NonNumericRadius(_) => ErrorKind::InvalidType,
            Self::NegativeRadius(_) => ErrorKind::InvalidValue,
        }
    }
}
