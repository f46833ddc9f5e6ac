//! # Messaging Errors

use thiserror::Error;
use web3_types::TypesError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessagingError {
    /// Input is not valid JSON for the requested record.
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    #[error(transparent)]
    Types(#[from] TypesError),
}

impl From<serde_json::Error> for MessagingError {
    fn from(err: serde_json::Error) -> Self {
        MessagingError::MalformedJson(err.to_string())
    }
}
