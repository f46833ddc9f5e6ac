//! # Block Header
//!
//! The fifteen-field header of a proof-of-work block. Its digest is the
//! Keccak-256 of its canonical RLP and is recomputed on every call.

use crate::codec::{self, expect_list, keccak256};
use crate::errors::TypesError;
use crate::primitives::{Bloom, Bytes, Nonce};
use ethereum_types::{Address, H256, U256};
use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Number of items in a header's RLP list.
const HEADER_FIELDS: usize = 15;

/// A block header in the Ethereum blockchain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    parent_hash: H256,
    #[serde(rename = "sha3Uncles")]
    uncle_hash: H256,
    #[serde(rename = "miner")]
    coinbase: Address,
    #[serde(rename = "stateRoot")]
    root: H256,
    #[serde(rename = "transactionsRoot")]
    tx_hash: H256,
    #[serde(rename = "receiptsRoot")]
    receipt_hash: H256,
    #[serde(rename = "logsBloom")]
    bloom: Bloom,
    difficulty: U256,
    number: U256,
    #[serde(with = "codec::quantity")]
    gas_limit: u64,
    #[serde(with = "codec::quantity")]
    gas_used: u64,
    #[serde(rename = "timestamp", with = "codec::quantity")]
    time: u64,
    #[serde(rename = "extraData")]
    extra: Bytes,
    #[serde(rename = "mixHash")]
    mix_digest: H256,
    nonce: Nonce,
}

/// JSON view of a header that carries the computed digest.
#[derive(Serialize)]
pub(crate) struct HeaderWithHash<'a> {
    #[serde(flatten)]
    pub header: &'a Header,
    pub hash: H256,
}

impl Header {
    /// Parse a header from its canonical RLP form.
    pub fn from_rlp(data: &[u8]) -> Result<Self, TypesError> {
        let header: Header = codec::decode_exact(data)?;
        trace!(number = header.number(), "decoded header");
        Ok(header)
    }

    /// Encode the header into its canonical RLP form.
    pub fn rlp_bytes(&self) -> Vec<u8> {
        codec::encode(self)
    }

    /// Parse a header from its RPC JSON form. A `hash` field, if present, is ignored.
    pub fn from_json(data: &str) -> Result<Self, TypesError> {
        codec::from_json(data)
    }

    /// Encode the header into its RPC JSON form, including the computed `hash`.
    pub fn to_json(&self) -> Result<String, TypesError> {
        codec::to_json(&self.with_hash())
    }

    pub(crate) fn with_hash(&self) -> HeaderWithHash<'_> {
        HeaderWithHash {
            header: self,
            hash: self.hash(),
        }
    }

    /// Keccak-256 of the header's canonical RLP.
    pub fn hash(&self) -> H256 {
        keccak256(&self.rlp_bytes())
    }

    pub fn parent_hash(&self) -> H256 {
        self.parent_hash
    }

    pub fn uncle_hash(&self) -> H256 {
        self.uncle_hash
    }

    pub fn coinbase(&self) -> Address {
        self.coinbase
    }

    pub fn root(&self) -> H256 {
        self.root
    }

    pub fn tx_hash(&self) -> H256 {
        self.tx_hash
    }

    pub fn receipt_hash(&self) -> H256 {
        self.receipt_hash
    }

    pub fn bloom(&self) -> &Bloom {
        &self.bloom
    }

    pub fn difficulty(&self) -> U256 {
        self.difficulty
    }

    /// Block number truncated to 64 bits.
    pub fn number(&self) -> u64 {
        self.number.low_u64()
    }

    pub fn number_big(&self) -> U256 {
        self.number
    }

    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    pub fn gas_used(&self) -> u64 {
        self.gas_used
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn extra(&self) -> &[u8] {
        self.extra.as_slice()
    }

    pub fn mix_digest(&self) -> H256 {
        self.mix_digest
    }

    pub fn nonce(&self) -> Nonce {
        self.nonce
    }

    // Builder-style constructors. Each consumes the header and returns the
    // updated value, so an existing header is never changed in place.

    pub fn with_parent_hash(mut self, parent_hash: H256) -> Self {
        self.parent_hash = parent_hash;
        self
    }

    pub fn with_uncle_hash(mut self, uncle_hash: H256) -> Self {
        self.uncle_hash = uncle_hash;
        self
    }

    pub fn with_coinbase(mut self, coinbase: Address) -> Self {
        self.coinbase = coinbase;
        self
    }

    pub fn with_root(mut self, root: H256) -> Self {
        self.root = root;
        self
    }

    pub fn with_tx_hash(mut self, tx_hash: H256) -> Self {
        self.tx_hash = tx_hash;
        self
    }

    pub fn with_receipt_hash(mut self, receipt_hash: H256) -> Self {
        self.receipt_hash = receipt_hash;
        self
    }

    pub fn with_bloom(mut self, bloom: Bloom) -> Self {
        self.bloom = bloom;
        self
    }

    pub fn with_difficulty(mut self, difficulty: U256) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_number(mut self, number: U256) -> Self {
        self.number = number;
        self
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    pub fn with_gas_used(mut self, gas_used: u64) -> Self {
        self.gas_used = gas_used;
        self
    }

    pub fn with_time(mut self, time: u64) -> Self {
        self.time = time;
        self
    }

    pub fn with_extra(mut self, extra: &[u8]) -> Self {
        self.extra = Bytes::from_slice(extra);
        self
    }

    pub fn with_mix_digest(mut self, mix_digest: H256) -> Self {
        self.mix_digest = mix_digest;
        self
    }

    pub fn with_nonce(mut self, nonce: Nonce) -> Self {
        self.nonce = nonce;
        self
    }
}

impl Encodable for Header {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(HEADER_FIELDS);
        s.append(&self.parent_hash);
        s.append(&self.uncle_hash);
        s.append(&self.coinbase);
        s.append(&self.root);
        s.append(&self.tx_hash);
        s.append(&self.receipt_hash);
        s.append(&self.bloom);
        s.append(&self.difficulty);
        s.append(&self.number);
        s.append(&self.gas_limit);
        s.append(&self.gas_used);
        s.append(&self.time);
        s.append(&self.extra);
        s.append(&self.mix_digest);
        s.append(&self.nonce);
    }
}

impl Decodable for Header {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        expect_list(rlp, HEADER_FIELDS)?;
        Ok(Header {
            parent_hash: rlp.val_at(0)?,
            uncle_hash: rlp.val_at(1)?,
            coinbase: rlp.val_at(2)?,
            root: rlp.val_at(3)?,
            tx_hash: rlp.val_at(4)?,
            receipt_hash: rlp.val_at(5)?,
            bloom: rlp.val_at(6)?,
            difficulty: rlp.val_at(7)?,
            number: rlp.val_at(8)?,
            gas_limit: rlp.val_at(9)?,
            gas_used: rlp.val_at(10)?,
            time: rlp.val_at(11)?,
            extra: rlp.val_at(12)?,
            mix_digest: rlp.val_at(13)?,
            nonce: rlp.val_at(14)?,
        })
    }
}
