//! Outbound message, assembled field by field before it is posted.

use super::errors::MessagingError;
use super::topic::Topic;
use serde::{Deserialize, Serialize};
use web3_types::Bytes;

/// A message to be posted through the messaging node's RPC.
///
/// Fields carry no cross-field invariants; either `sym_key_id` or
/// `public_key` selects the encryption, and the node validates the rest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    #[serde(rename = "symKeyID", default, skip_serializing_if = "String::is_empty")]
    sym_key_id: String,
    #[serde(rename = "pubKey", default, skip_serializing_if = "Bytes::is_empty")]
    public_key: Bytes,
    /// Identifier of the signing key held by the node.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    sig: String,
    #[serde(default)]
    ttl: u32,
    #[serde(default)]
    topic: Topic,
    #[serde(default)]
    payload: Bytes,
    #[serde(default, skip_serializing_if = "Bytes::is_empty")]
    padding: Bytes,
    #[serde(default)]
    pow_time: u32,
    #[serde(default)]
    pow_target: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    target_peer: String,
}

impl NewMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(data: &str) -> Result<Self, MessagingError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn to_json(&self) -> Result<String, MessagingError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn sym_key_id(&self) -> &str {
        &self.sym_key_id
    }

    pub fn set_sym_key_id(&mut self, sym_key_id: impl Into<String>) {
        self.sym_key_id = sym_key_id.into();
    }

    pub fn public_key(&self) -> &[u8] {
        self.public_key.as_slice()
    }

    pub fn set_public_key(&mut self, public_key: &[u8]) {
        self.public_key = Bytes::from_slice(public_key);
    }

    pub fn sig(&self) -> &str {
        &self.sig
    }

    pub fn set_sig(&mut self, sig: impl Into<String>) {
        self.sig = sig.into();
    }

    /// Time-to-live in seconds.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn set_ttl(&mut self, ttl: u32) {
        self.ttl = ttl;
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    /// Normalised through [`Topic::from_bytes`].
    pub fn set_topic(&mut self, topic: &[u8]) {
        self.topic = Topic::from_bytes(topic);
    }

    pub fn payload(&self) -> &[u8] {
        self.payload.as_slice()
    }

    pub fn set_payload(&mut self, payload: &[u8]) {
        self.payload = Bytes::from_slice(payload);
    }

    pub fn padding(&self) -> &[u8] {
        self.padding.as_slice()
    }

    pub fn set_padding(&mut self, padding: &[u8]) {
        self.padding = Bytes::from_slice(padding);
    }

    /// Maximal time in seconds to be spent on proof of work.
    pub fn pow_time(&self) -> u32 {
        self.pow_time
    }

    pub fn set_pow_time(&mut self, pow_time: u32) {
        self.pow_time = pow_time;
    }

    pub fn pow_target(&self) -> f64 {
        self.pow_target
    }

    pub fn set_pow_target(&mut self, pow_target: f64) {
        self.pow_target = pow_target;
    }

    /// Enode URL of a peer for direct delivery.
    pub fn target_peer(&self) -> &str {
        &self.target_peer
    }

    pub fn set_target_peer(&mut self, target_peer: impl Into<String>) {
        self.target_peer = target_peer.into();
    }
}
