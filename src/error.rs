//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O errors, and provides semantic variants for token
//! parsing and computation preconditions.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid numeric token: '{token}'")]
    ParseToken { token: String },

    #[error("weights and numbers must have same length: {numbers} numbers, {weights} weights")]
    LengthMismatch { numbers: usize, weights: usize },

    #[error("Total weight is zero; the weighted average is undefined")]
    ZeroTotalWeight,
}
