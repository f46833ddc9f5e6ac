//! # Primitive Values
//!
//! Fixed-size and variable-size byte values shared by every record.

use ethereum_types::{Bloom as EthBloom, H64};
use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A 64-bit proof-of-work value which, combined with the mix digest, shows
/// that enough computation went into a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nonce(pub H64);

impl Nonce {
    pub fn from_u64(value: u64) -> Self {
        Nonce(H64::from_low_u64_be(value))
    }

    /// Raw nonce bytes.
    pub fn bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// `0x`-prefixed hex string of the nonce bytes.
    pub fn hex(&self) -> String {
        format!("0x{}", hex::encode(self.0.as_bytes()))
    }

    /// Big-endian integer value of the nonce.
    pub fn as_u64(&self) -> u64 {
        self.0.to_low_u64_be()
    }
}

impl Encodable for Nonce {
    fn rlp_append(&self, s: &mut RlpStream) {
        self.0.rlp_append(s);
    }
}

impl Decodable for Nonce {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        Ok(Nonce(rlp.as_val()?))
    }
}

/// A 2048-bit log bloom filter. Only storage is modelled, not membership tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bloom(pub EthBloom);

impl Bloom {
    /// Bloom from exactly 256 bytes; `None` for any other width.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        (bytes.len() == 256).then(|| Bloom(EthBloom::from_slice(bytes)))
    }

    /// Raw filter bytes.
    pub fn bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// `0x`-prefixed hex string of the filter bytes.
    pub fn hex(&self) -> String {
        format!("0x{}", hex::encode(self.0.as_bytes()))
    }
}

impl Encodable for Bloom {
    fn rlp_append(&self, s: &mut RlpStream) {
        self.0.rlp_append(s);
    }
}

impl Decodable for Bloom {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        Ok(Bloom(rlp.as_val()?))
    }
}

/// Owned byte string with `0x` hex serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    pub fn new() -> Self {
        Bytes(Vec::new())
    }

    pub fn from_slice(slice: &[u8]) -> Self {
        Bytes(slice.to_vec())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(v: Vec<u8>) -> Self {
        Bytes(v)
    }
}

impl From<&[u8]> for Bytes {
    fn from(v: &[u8]) -> Self {
        Bytes(v.to_vec())
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl Encodable for Bytes {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.encoder().encode_value(&self.0);
    }
}

impl Decodable for Bytes {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        rlp.decoder().decode_value(|bytes| Ok(Bytes(bytes.to_vec())))
    }
}

impl Serialize for Bytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| de::Error::custom("hex bytes must be 0x-prefixed"))?;
        hex::decode(s)
            .map(Bytes)
            .map_err(|_| de::Error::custom("invalid hex bytes"))
    }
}
