//! Subscription filter for inbound messages.

use super::errors::MessagingError;
use super::topic::Topic;
use serde::{Deserialize, Serialize};
use web3_types::Bytes;

/// Filter options handed to the messaging node to open a subscription.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(rename = "symKeyID", default, skip_serializing_if = "String::is_empty")]
    sym_key_id: String,
    #[serde(
        rename = "privateKeyID",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    private_key_id: String,
    /// Only accept messages signed by this public key.
    #[serde(default, skip_serializing_if = "Bytes::is_empty")]
    sig: Bytes,
    #[serde(rename = "minPow", default)]
    min_pow: f64,
    #[serde(default)]
    topics: Vec<Topic>,
    #[serde(rename = "allowP2P", default)]
    allow_p2p: bool,
}

impl Criteria {
    /// Filter on the single topic obtained by normalising `topic`.
    pub fn new(topic: &[u8]) -> Self {
        Self {
            topics: vec![Topic::from_bytes(topic)],
            ..Self::default()
        }
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

    pub fn private_key_id(&self) -> &str {
        &self.private_key_id
    }

    pub fn set_private_key_id(&mut self, private_key_id: impl Into<String>) {
        self.private_key_id = private_key_id.into();
    }

    pub fn sig(&self) -> &[u8] {
        self.sig.as_slice()
    }

    pub fn set_sig(&mut self, sig: &[u8]) {
        self.sig = Bytes::from_slice(sig);
    }

    pub fn min_pow(&self) -> f64 {
        self.min_pow
    }

    pub fn set_min_pow(&mut self, min_pow: f64) {
        self.min_pow = min_pow;
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Whether expired peer-to-peer messages are delivered.
    pub fn allow_p2p(&self) -> bool {
        self.allow_p2p
    }

    pub fn set_allow_p2p(&mut self, allow_p2p: bool) {
        self.allow_p2p = allow_p2p;
    }
}
