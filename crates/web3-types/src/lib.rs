//! # Web3 Types Crate
//!
//! Immutable Ethereum records (headers, blocks, transactions, receipts) with
//! their canonical binary (RLP) and RPC-style JSON encodings.
//!
//! ## Design Principles
//!
//! - **Owned Values**: every entity owns its fields; decoding copies all
//!   variable-length data out of the caller's buffer.
//! - **Recomputed Digests**: `hash()` accessors are pure functions of the
//!   current field values and are never cached.
//! - **Canonical Only**: non-canonical RLP is rejected with
//!   [`TypesError::MalformedEncoding`], never normalised.
//! - **Read-only Views**: [`Headers`], [`Transactions`] and [`Logs`] borrow
//!   from the owning block or receipt and expose bounds-checked access only.

pub mod block;
pub mod codec;
pub mod collections;
pub mod errors;
pub mod header;
pub mod primitives;
pub mod receipt;
pub mod transaction;

pub use block::Block;
pub use codec::{decode_exact, keccak256};
pub use collections::{FixedView, Headers, Logs, Transactions};
pub use errors::TypesError;
pub use header::Header;
pub use primitives::{Bloom, Bytes, Nonce};
pub use receipt::{
    Log, Receipt, ReceiptStatus, RECEIPT_STATUS_FAILED, RECEIPT_STATUS_SUCCESSFUL,
};
pub use transaction::{Transaction, TxSignature};

// Re-export the fixed-width primitives so downstream crates share one definition.
pub use ethereum_types::{Address, H256, H64, U256};
