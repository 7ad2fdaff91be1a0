pub mod currency;
pub mod words;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("Invalid amount {0}: must be a finite number")]
    InvalidAmount(f64),

    #[error("Cannot convert {value} to words: {reason}")]
    DomainError { value: String, reason: &'static str },

    #[error("Amount overflow while computing {0}")]
    Overflow(&'static str),
}

impl FormatError {
    fn domain(value: impl ToString, reason: &'static str) -> FormatError {
        FormatError::DomainError {
            value: value.to_string(),
            reason,
        }
    }
}
