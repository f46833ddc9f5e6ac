//! # Block
//!
//! A header plus its body (transactions and uncle headers). Header-level
//! accessors delegate to the owned [`Header`]; the block keeps no copy of
//! header state of its own.

use crate::codec::{self, decode_list, expect_list};
use crate::collections::{Headers, Transactions};
use crate::errors::TypesError;
use crate::header::{Header, HeaderWithHash};
use crate::primitives::Bloom;
use crate::transaction::Transaction;
use ethereum_types::{Address, H256, U256};
use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Number of items in a block's RLP list: header, transactions, uncles.
const BLOCK_FIELDS: usize = 3;

/// An entire block in the Ethereum blockchain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    header: Header,
    transactions: Vec<Transaction>,
    uncles: Vec<Header>,
}

impl Block {
    pub fn new(header: Header, transactions: Vec<Transaction>, uncles: Vec<Header>) -> Self {
        Self {
            header,
            transactions,
            uncles,
        }
    }

    /// Parse a block from its canonical RLP form.
    pub fn from_rlp(data: &[u8]) -> Result<Self, TypesError> {
        let block: Block = codec::decode_exact(data)?;
        trace!(
            number = block.number(),
            transactions = block.transactions.len(),
            uncles = block.uncles.len(),
            "decoded block"
        );
        Ok(block)
    }

    /// Encode the block into its canonical RLP form.
    pub fn rlp_bytes(&self) -> Vec<u8> {
        codec::encode(self)
    }

    /// Parse a block from its JSON form.
    pub fn from_json(data: &str) -> Result<Self, TypesError> {
        let rpc: BlockRpcIn = codec::from_json(data)?;
        Ok(Block::new(rpc.header, rpc.transactions, rpc.uncles))
    }

    /// Encode the block into its JSON form: header fields flattened alongside
    /// `hash`, full `transactions` and full `uncles` headers.
    pub fn to_json(&self) -> Result<String, TypesError> {
        let uncles: Vec<HeaderWithHash<'_>> = self.uncles.iter().map(Header::with_hash).collect();
        codec::to_json(&BlockRpcOut {
            header: self.header.with_hash(),
            transactions: &self.transactions,
            uncles,
        })
    }

    /// Digest of the block, which is the digest of its header.
    pub fn hash(&self) -> H256 {
        self.header.hash()
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn uncles(&self) -> Headers<'_> {
        Headers::new(&self.uncles)
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions::new(&self.transactions)
    }

    /// Transaction whose digest equals `hash`, if the block contains one.
    pub fn transaction(&self, hash: &H256) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.hash() == *hash)
    }

    pub fn parent_hash(&self) -> H256 {
        self.header.parent_hash()
    }

    pub fn uncle_hash(&self) -> H256 {
        self.header.uncle_hash()
    }

    pub fn coinbase(&self) -> Address {
        self.header.coinbase()
    }

    pub fn root(&self) -> H256 {
        self.header.root()
    }

    pub fn tx_hash(&self) -> H256 {
        self.header.tx_hash()
    }

    pub fn receipt_hash(&self) -> H256 {
        self.header.receipt_hash()
    }

    pub fn bloom(&self) -> &Bloom {
        self.header.bloom()
    }

    pub fn difficulty(&self) -> U256 {
        self.header.difficulty()
    }

    pub fn number(&self) -> u64 {
        self.header.number()
    }

    pub fn gas_limit(&self) -> u64 {
        self.header.gas_limit()
    }

    pub fn gas_used(&self) -> u64 {
        self.header.gas_used()
    }

    pub fn time(&self) -> u64 {
        self.header.time()
    }

    pub fn extra(&self) -> &[u8] {
        self.header.extra()
    }

    pub fn mix_digest(&self) -> H256 {
        self.header.mix_digest()
    }

    /// Header nonce as a big-endian integer.
    pub fn nonce(&self) -> u64 {
        self.header.nonce().as_u64()
    }
}

impl Encodable for Block {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(BLOCK_FIELDS);
        s.append(&self.header);
        s.append_list::<Transaction, _>(&self.transactions);
        s.append_list::<Header, _>(&self.uncles);
    }
}

impl Decodable for Block {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        expect_list(rlp, BLOCK_FIELDS)?;
        Ok(Block {
            header: rlp.val_at(0)?,
            transactions: decode_list(rlp, 1)?,
            uncles: decode_list(rlp, 2)?,
        })
    }
}

#[derive(Serialize)]
struct BlockRpcOut<'a> {
    #[serde(flatten)]
    header: HeaderWithHash<'a>,
    transactions: &'a [Transaction],
    uncles: Vec<HeaderWithHash<'a>>,
}

#[derive(Deserialize)]
struct BlockRpcIn {
    #[serde(flatten)]
    header: Header,
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    uncles: Vec<Header>,
}
