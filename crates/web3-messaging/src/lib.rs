//! # Web3 Messaging Crate
//!
//! Flat records for the pub/sub messaging interchange:
//!
//! - [`NewMessage`]: outbound, built field by field before posting.
//! - [`Message`]: inbound snapshot, read-only.
//! - [`Criteria`]: subscription filter over [`Topic`]s.
//! - [`Messages`]: bounds-checked view over a received [`MessageBatch`].
//!
//! No validation happens here; the messaging node owns it.

pub mod domain;

pub use domain::criteria::Criteria;
pub use domain::errors::MessagingError;
pub use domain::info::NodeInfo;
pub use domain::message::{Message, MessageBatch, Messages};
pub use domain::new_message::NewMessage;
pub use domain::topic::{Topic, TOPIC_LENGTH};
