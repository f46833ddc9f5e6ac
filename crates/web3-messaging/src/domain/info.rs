//! Diagnostic information reported by the messaging node.

use super::errors::MessagingError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    /// Memory size of the floating messages in bytes.
    #[serde(default)]
    memory: u64,
    /// Number of floating messages.
    #[serde(default)]
    messages: u64,
    #[serde(default)]
    min_pow: f64,
    #[serde(default)]
    max_message_size: u32,
}

impl NodeInfo {
    pub fn from_json(data: &str) -> Result<Self, MessagingError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn memory(&self) -> u64 {
        self.memory
    }

    pub fn messages(&self) -> u64 {
        self.messages
    }

    pub fn min_pow(&self) -> f64 {
        self.min_pow
    }

    pub fn max_message_size(&self) -> u32 {
        self.max_message_size
    }
}
