use std::fmt;

/// Convenient alias for results produced by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can be produced while decoding offsets or validating a region table.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The 5-bit hour field of an offset byte held a value above 23.
    #[error("hour offset out of range: {0} (expected 0..=23)")]
    HourOutOfRange(u8),

    /// A table record violated one of the table invariants.
    #[error("invalid record at index {index}: {reason}")]
    InvalidRecord {
        /// Position of the offending record in declaration order.
        index: usize,
        /// Human-readable description of the violation.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid_record<T: fmt::Display>(index: usize, reason: T) -> Self {
        Self::InvalidRecord {
            index,
            reason: reason.to_string(),
        }
    }
}
