//! # Web3 Signer Crate
//!
//! Signs and recovers the sender of [`Transaction`](web3_types::Transaction)
//! values for two signature schemes:
//!
//! - **Legacy**: `v = 27 + recid`, digest over the six transaction fields.
//! - **Replay-protected (EIP-155)**: `v = 35 + 2·chainId + recid`, digest
//!   additionally commits to the chain identifier.
//!
//! ## Security Notes
//!
//! - Signatures are produced and accepted in low-s form only (homestead rule).
//! - `r` and `s` must lie in `[1, n-1]` before recovery is attempted.
//! - A replay-protected signature bound to another chain is rejected with
//!   [`SignerError::InvalidChainId`].

pub mod domain;

pub use domain::config::SignerConfig;
pub use domain::ecdsa::{recover_public_key, sign_digest, SIGNATURE_LENGTH};
pub use domain::errors::SignerError;
pub use domain::keys::{
    generate_key, pubkey_to_address, public_key_bytes, secret_key_bytes, secret_key_from_hex,
    to_checksum_address,
};
pub use domain::signer::{
    recover_sender, sign_transaction, signing_digest, with_signature, Signer, TransactionSigning,
};

pub use k256::ecdsa::{SigningKey, VerifyingKey};
