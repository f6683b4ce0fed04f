//! Error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed face set: empty, duplicated faces or unparsable notation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Weight is not a finite, non-negative number.
    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    /// Weight change targets a face that is not on the die.
    #[error("Unknown face: {0}")]
    UnknownFace(String),

    /// Unsupported table form, or a roll count of zero.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Results were requested before any play.
    #[error("The game has not been played yet")]
    NoPlay,
}
