//! # Transaction
//!
//! A legacy (pre-typed-envelope) Ethereum transaction. A transaction is either
//! unsigned (`v = r = s = 0` on the wire) or carries a [`TxSignature`]; the
//! signer crate attaches signatures by producing a new value via
//! [`Transaction::with_signature_values`].

use crate::codec::{self, expect_list, keccak256};
use crate::errors::TypesError;
use crate::primitives::Bytes;
use ethereum_types::{Address, H256, U256};
use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Number of items in a transaction's RLP list.
const TRANSACTION_FIELDS: usize = 9;

/// Raw ECDSA signature values as carried on the wire.
///
/// `v` is `27 + recid` for legacy signatures and `35 + 2·chainId + recid`
/// for replay-protected (EIP-155) ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxSignature {
    pub v: U256,
    pub r: U256,
    pub s: U256,
}

impl TxSignature {
    /// Whether `v` binds a chain identifier (anything other than 27 or 28).
    pub fn is_protected(&self) -> bool {
        self.v != U256::from(27u8) && self.v != U256::from(28u8)
    }

    /// Chain identifier encoded in `v`, `None` for unprotected signatures.
    pub fn chain_id(&self) -> Option<U256> {
        if !self.is_protected() {
            return None;
        }
        self.v.checked_sub(U256::from(35u8)).map(|x| x / 2)
    }

    fn is_zero(&self) -> bool {
        self.v.is_zero() && self.r.is_zero() && self.s.is_zero()
    }
}

/// A single Ethereum transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "TransactionRpc", into = "TransactionRpc")]
pub struct Transaction {
    nonce: u64,
    gas_price: U256,
    gas: u64,
    to: Option<Address>,
    value: U256,
    data: Bytes,
    signature: Option<TxSignature>,
}

impl Transaction {
    /// Create an unsigned transaction. `to = None` creates a contract.
    pub fn new(
        nonce: u64,
        to: Option<Address>,
        value: U256,
        gas_limit: u64,
        gas_price: U256,
        data: &[u8],
    ) -> Self {
        Self {
            nonce,
            gas_price,
            gas: gas_limit,
            to,
            value,
            data: Bytes::from_slice(data),
            signature: None,
        }
    }

    /// Parse a transaction from its canonical RLP form.
    pub fn from_rlp(data: &[u8]) -> Result<Self, TypesError> {
        let tx: Transaction = codec::decode_exact(data)?;
        trace!(nonce = tx.nonce, signed = tx.signature.is_some(), "decoded transaction");
        Ok(tx)
    }

    /// Encode the transaction into its canonical RLP form.
    pub fn rlp_bytes(&self) -> Vec<u8> {
        codec::encode(self)
    }

    /// Parse a transaction from its RPC JSON form.
    pub fn from_json(data: &str) -> Result<Self, TypesError> {
        codec::from_json(data)
    }

    /// Encode the transaction into its RPC JSON form, including the computed `hash`.
    pub fn to_json(&self) -> Result<String, TypesError> {
        codec::to_json(self)
    }

    /// Keccak-256 of the full encoding, signature included.
    pub fn hash(&self) -> H256 {
        keccak256(&self.rlp_bytes())
    }

    /// Copy of this transaction carrying `signature` in place of any existing one.
    pub fn with_signature_values(&self, signature: TxSignature) -> Self {
        Self {
            signature: Some(signature),
            ..self.clone()
        }
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn gas_price(&self) -> U256 {
        self.gas_price
    }

    /// Gas limit.
    pub fn gas(&self) -> u64 {
        self.gas
    }

    /// Recipient, `None` for contract creation.
    pub fn to(&self) -> Option<Address> {
        self.to
    }

    pub fn value(&self) -> U256 {
        self.value
    }

    pub fn data(&self) -> &[u8] {
        self.data.as_slice()
    }

    /// `gas * gas_price + value`, saturating at `U256::MAX`.
    pub fn cost(&self) -> U256 {
        self.gas_price
            .saturating_mul(U256::from(self.gas))
            .saturating_add(self.value)
    }

    pub fn signature(&self) -> Option<&TxSignature> {
        self.signature.as_ref()
    }

    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// `(v, r, s)` as they appear on the wire; all zero when unsigned.
    pub fn raw_signature_values(&self) -> (U256, U256, U256) {
        match self.signature {
            Some(sig) => (sig.v, sig.r, sig.s),
            None => (U256::zero(), U256::zero(), U256::zero()),
        }
    }

    /// Append the six signable fields, in wire order, to `s`.
    ///
    /// Signers build their digests around this prefix.
    pub fn append_unsigned_fields(&self, s: &mut RlpStream) {
        s.append(&self.nonce);
        s.append(&self.gas_price);
        s.append(&self.gas);
        match &self.to {
            Some(to) => s.append(to),
            None => s.append_empty_data(),
        };
        s.append(&self.value);
        s.append(&self.data);
    }
}

impl Encodable for Transaction {
    fn rlp_append(&self, s: &mut RlpStream) {
        let (v, r, sig_s) = self.raw_signature_values();
        s.begin_list(TRANSACTION_FIELDS);
        self.append_unsigned_fields(s);
        s.append(&v);
        s.append(&r);
        s.append(&sig_s);
    }
}

impl Decodable for Transaction {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        expect_list(rlp, TRANSACTION_FIELDS)?;

        let to_rlp = rlp.at(3)?;
        let to = if to_rlp.is_data() && to_rlp.is_empty() {
            None
        } else {
            Some(to_rlp.as_val()?)
        };

        let signature = TxSignature {
            v: rlp.val_at(6)?,
            r: rlp.val_at(7)?,
            s: rlp.val_at(8)?,
        };

        Ok(Transaction {
            nonce: rlp.val_at(0)?,
            gas_price: rlp.val_at(1)?,
            gas: rlp.val_at(2)?,
            to,
            value: rlp.val_at(4)?,
            data: rlp.val_at(5)?,
            signature: (!signature.is_zero()).then_some(signature),
        })
    }
}

/// RPC JSON shape of a transaction.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionRpc {
    #[serde(with = "codec::quantity")]
    nonce: u64,
    gas_price: U256,
    #[serde(with = "codec::quantity")]
    gas: u64,
    #[serde(default)]
    to: Option<Address>,
    value: U256,
    #[serde(alias = "data")]
    input: Bytes,
    #[serde(default)]
    v: U256,
    #[serde(default)]
    r: U256,
    #[serde(default)]
    s: U256,
    #[serde(default, skip_deserializing)]
    hash: H256,
}

impl From<TransactionRpc> for Transaction {
    fn from(rpc: TransactionRpc) -> Self {
        let signature = TxSignature {
            v: rpc.v,
            r: rpc.r,
            s: rpc.s,
        };
        Transaction {
            nonce: rpc.nonce,
            gas_price: rpc.gas_price,
            gas: rpc.gas,
            to: rpc.to,
            value: rpc.value,
            data: rpc.input,
            signature: (!signature.is_zero()).then_some(signature),
        }
    }
}

impl From<Transaction> for TransactionRpc {
    fn from(tx: Transaction) -> Self {
        let hash = tx.hash();
        let (v, r, s) = tx.raw_signature_values();
        TransactionRpc {
            nonce: tx.nonce,
            gas_price: tx.gas_price,
            gas: tx.gas,
            to: tx.to,
            value: tx.value,
            input: tx.data,
            v,
            r,
            s,
            hash,
        }
    }
}
