//! # Error Types
//!
//! Errors raised while decoding records or reading fixed collections.

use rlp::DecoderError;
use thiserror::Error;

/// Errors that can occur in the entity model and its codecs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypesError {
    /// The binary form does not match the expected structured shape.
    ///
    /// Covers wrong field counts, truncated or non-canonical length prefixes,
    /// integers with leading zero bytes and fixed-width fields of the wrong size.
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(#[from] DecoderError),

    /// The JSON form could not be parsed into the record shape.
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    /// Receipt status code other than failed (`0`) or successful (`1`).
    #[error("Invalid receipt status: {0}")]
    InvalidStatus(u64),

    /// Collection access outside `[0, size)`.
    #[error("Index out of bounds: {index} not in [0, {size})")]
    IndexOutOfBounds { index: isize, size: usize },
}

impl From<serde_json::Error> for TypesError {
    fn from(e: serde_json::Error) -> Self {
        TypesError::MalformedJson(e.to_string())
    }
}
