//! Fixed-width message topic.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Width of a topic in bytes.
pub const TOPIC_LENGTH: usize = 4;

/// A 4-byte message topic, serialized as `0x`-prefixed hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Topic([u8; TOPIC_LENGTH]);

impl Topic {
    /// Normalise arbitrary bytes into a topic: the first four bytes are
    /// kept, shorter input is zero-padded on the right.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut topic = [0u8; TOPIC_LENGTH];
        let n = bytes.len().min(TOPIC_LENGTH);
        topic[..n].copy_from_slice(&bytes[..n]);
        Topic(topic)
    }

    pub fn as_bytes(&self) -> &[u8; TOPIC_LENGTH] {
        &self.0
    }
}

impl From<[u8; TOPIC_LENGTH]> for Topic {
    fn from(bytes: [u8; TOPIC_LENGTH]) -> Self {
        Topic(bytes)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for Topic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Topic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let digits = text
            .strip_prefix("0x")
            .ok_or_else(|| de::Error::custom("topic must be 0x-prefixed hex"))?;
        let mut topic = [0u8; TOPIC_LENGTH];
        hex::decode_to_slice(digits, &mut topic).map_err(de::Error::custom)?;
        Ok(Topic(topic))
    }
}
