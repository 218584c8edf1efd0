use thiserror::Error;

/// Errors returned when a byte count cannot be formatted.
///
/// The rejected size is kept for callers; the message never includes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SizeError {
    /// The size was negative.
    #[error("number must be non-negative")]
    InvalidArgument { size: i128 },

    /// The size is past the largest suffix of the chosen base.
    #[error("number too large")]
    Overflow { size: i128 },
}

impl SizeError {
    /// The input that was rejected.
    pub fn size(&self) -> i128 {
        match self {
            Self::InvalidArgument { size } | Self::Overflow { size } => *size,
        }
    }
}
