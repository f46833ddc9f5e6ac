//! # Canonical Encoder
//!
//! Shared plumbing for the binary (RLP) and JSON forms of every record.
//!
//! The binary form is built on the `rlp` crate, whose decoder already rejects
//! non-canonical length prefixes and integers with leading zero bytes. The
//! only extra check needed at the top level is that the item spans the whole
//! input: `Rlp::new` happily ignores trailing bytes.

use crate::errors::TypesError;
use ethereum_types::H256;
use rlp::{Decodable, DecoderError, Encodable, Rlp};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha3::{Digest, Keccak256};

/// Keccak-256 digest of `data`.
pub fn keccak256(data: &[u8]) -> H256 {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    H256::from_slice(&hasher.finalize())
}

/// Decode a single top-level RLP item that must span all of `bytes`.
pub fn decode_exact<T: Decodable>(bytes: &[u8]) -> Result<T, TypesError> {
    let rlp = Rlp::new(bytes);
    let info = rlp.payload_info()?;
    let total = info.header_len + info.value_len;
    if total < bytes.len() {
        return Err(DecoderError::RlpIsTooBig.into());
    }
    Ok(rlp.as_val()?)
}

/// Encode a value into its canonical RLP bytes.
pub fn encode<T: Encodable>(value: &T) -> Vec<u8> {
    rlp::encode(value).to_vec()
}

/// Split a list into its items, failing unless the items tile the payload
/// exactly and every item header is well formed.
///
/// `Rlp::item_count` and `Rlp::as_list` stop silently at the first malformed
/// element and treat a byte string as an empty list, so they cannot be used
/// on untrusted input.
pub(crate) fn list_items<'a>(rlp: &Rlp<'a>) -> Result<Vec<Rlp<'a>>, DecoderError> {
    if !rlp.is_list() {
        return Err(DecoderError::RlpExpectedToBeList);
    }
    let info = rlp.payload_info()?;
    let mut rest = rlp
        .as_raw()
        .get(info.header_len..info.header_len + info.value_len)
        .ok_or(DecoderError::RlpIsTooShort)?;
    let mut items = Vec::new();
    while !rest.is_empty() {
        let item_len = Rlp::new(rest).payload_info()?.total();
        let item = rest.get(..item_len).ok_or(DecoderError::RlpIsTooShort)?;
        items.push(Rlp::new(item));
        rest = &rest[item_len..];
    }
    Ok(items)
}

/// Expect `rlp` to be a well-formed list with exactly `expected` items.
pub(crate) fn expect_list(rlp: &Rlp, expected: usize) -> Result<(), DecoderError> {
    if list_items(rlp)?.len() != expected {
        return Err(DecoderError::RlpIncorrectListLen);
    }
    Ok(())
}

/// Decode the list at `index`, rejecting byte strings and any bad element.
pub(crate) fn decode_list<T: Decodable>(rlp: &Rlp, index: usize) -> Result<Vec<T>, DecoderError> {
    list_items(&rlp.at(index)?)?
        .iter()
        .map(|item| item.as_val())
        .collect()
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String, TypesError> {
    Ok(serde_json::to_string(value)?)
}

pub(crate) fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, TypesError> {
    Ok(serde_json::from_str(text)?)
}

/// Serde adapter for 64-bit numeric fields.
///
/// Emits a native JSON number. Accepts a number, a `0x` hex quantity or a
/// decimal string, since RPC nodes emit quantities as hex strings.
pub mod quantity {
    use serde::{de, Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(QuantityVisitor)
    }

    pub(crate) fn parse(value: &str) -> Result<u64, String> {
        if let Some(hex_str) = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
        {
            if hex_str.is_empty() {
                return Err("empty hex quantity".to_string());
            }
            u64::from_str_radix(hex_str, 16).map_err(|e| format!("invalid hex quantity: {e}"))
        } else {
            value
                .parse::<u64>()
                .map_err(|e| format!("invalid decimal quantity: {e}"))
        }
    }

    struct QuantityVisitor;

    impl<'de> de::Visitor<'de> for QuantityVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a 64-bit number or a 0x-prefixed hex quantity")
        }

        fn visit_u64<E>(self, value: u64) -> Result<u64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<u64, E>
        where
            E: de::Error,
        {
            u64::try_from(value).map_err(|_| E::custom("negative quantity"))
        }

        fn visit_str<E>(self, value: &str) -> Result<u64, E>
        where
            E: de::Error,
        {
            parse(value).map_err(E::custom)
        }
    }
}

/// Serde adapter for optional 64-bit numeric fields. `null` reads as `None`.
pub mod opt_quantity {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    struct Quantity(#[serde(with = "super::quantity")] u64);

    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_u64(*v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Quantity>::deserialize(deserializer)?.map(|q| q.0))
    }
}
