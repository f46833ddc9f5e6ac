//! Inbound messages as delivered by the messaging node.

use super::errors::MessagingError;
use super::topic::Topic;
use serde::{Deserialize, Serialize};
use tracing::trace;
use web3_types::{Bytes, FixedView};

/// A received message. Read-only: it is presumed validated by its origin.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Message {
    /// Public key of the signer, empty for unsigned messages.
    #[serde(default, skip_serializing_if = "Bytes::is_empty")]
    sig: Bytes,
    #[serde(default)]
    ttl: u32,
    #[serde(default)]
    timestamp: u32,
    #[serde(default)]
    topic: Topic,
    #[serde(default)]
    payload: Bytes,
    #[serde(default)]
    padding: Bytes,
    #[serde(default)]
    pow: f64,
    #[serde(default)]
    hash: Bytes,
    #[serde(
        rename = "recipientPublicKey",
        default,
        skip_serializing_if = "Bytes::is_empty"
    )]
    dst: Bytes,
}

impl Message {
    pub fn from_json(data: &str) -> Result<Self, MessagingError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn to_json(&self) -> Result<String, MessagingError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn sig(&self) -> &[u8] {
        self.sig.as_slice()
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Seconds since the Unix epoch at which the envelope was created.
    pub fn timestamp(&self) -> u32 {
        self.timestamp
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn payload(&self) -> &[u8] {
        self.payload.as_slice()
    }

    pub fn padding(&self) -> &[u8] {
        self.padding.as_slice()
    }

    pub fn pow(&self) -> f64 {
        self.pow
    }

    pub fn hash(&self) -> &[u8] {
        self.hash.as_slice()
    }

    /// Recipient public key, empty for symmetric messages.
    pub fn dst(&self) -> &[u8] {
        self.dst.as_slice()
    }
}

/// Messages received from the node in one poll.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageBatch {
    messages: Vec<Message>,
}

impl MessageBatch {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Parse a JSON array of messages.
    pub fn from_json(data: &str) -> Result<Self, MessagingError> {
        let batch: MessageBatch = serde_json::from_str(data)?;
        trace!(count = batch.messages.len(), "decoded message batch");
        Ok(batch)
    }

    pub fn to_json(&self) -> Result<String, MessagingError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn messages(&self) -> Messages<'_> {
        Messages::from_owner(&self.messages)
    }
}

/// Received messages.
pub type Messages<'a> = FixedView<'a, Message>;
