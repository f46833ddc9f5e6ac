//! # Signer Errors

use thiserror::Error;
use web3_types::{TypesError, U256};

/// Errors that can occur while signing or recovering a transaction sender.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignerError {
    /// Raw signature is not `r ‖ s ‖ recid`.
    #[error("Invalid signature length: expected {expected} bytes, got {actual}")]
    InvalidSignatureLength { expected: usize, actual: usize },

    /// The transaction carries no signature.
    #[error("Transaction is not signed")]
    MissingSignature,

    /// Signature values are out of range, malleable or unrecoverable.
    #[error("Invalid signature: {0}")]
    InvalidSignature(&'static str),

    /// Replay-protected signature bound to a different chain.
    #[error("Invalid chain id: expected {expected}, got {actual}")]
    InvalidChainId { expected: U256, actual: U256 },

    /// Secret key bytes are not a valid secp256k1 scalar.
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Failure reported by the curve library.
    #[error("Curve primitive failure: {0}")]
    Primitive(String),

    #[error(transparent)]
    Types(#[from] TypesError),
}
