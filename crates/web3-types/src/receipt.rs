//! # Receipt
//!
//! The result of executing a transaction: status (or legacy post-state root),
//! gas accounting, bloom and log entries.
//!
//! Two binary forms exist:
//! - the **consensus** form `[postStateOrStatus, cumulativeGasUsed, bloom, logs]`
//!   exchanged on the network and hashed into the receipts root;
//! - the **storage** form, which additionally carries the transaction digest,
//!   created contract address, per-transaction gas and the log coordinates.

use crate::codec::{self, decode_list, expect_list};
use crate::collections::Logs;
use crate::errors::TypesError;
use crate::primitives::{Bloom, Bytes};
use ethereum_types::{Address, H256};
use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Status code of a receipt whose transaction failed.
pub const RECEIPT_STATUS_FAILED: u64 = 0;

/// Status code of a receipt whose transaction succeeded.
pub const RECEIPT_STATUS_SUCCESSFUL: u64 = 1;

const RECEIPT_FIELDS: usize = 4;
const RECEIPT_STORAGE_FIELDS: usize = 7;
const LOG_FIELDS: usize = 3;
const LOG_STORAGE_FIELDS: usize = 8;

/// A log entry emitted during execution.
///
/// Only `address`, `topics` and `data` are part of the consensus encoding;
/// the remaining fields locate the log and are filled in by the node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    address: Address,
    topics: Vec<H256>,
    data: Bytes,
    #[serde(default, with = "codec::quantity")]
    block_number: u64,
    #[serde(default, rename = "transactionHash")]
    tx_hash: H256,
    #[serde(default, rename = "transactionIndex", with = "codec::quantity")]
    tx_index: u64,
    #[serde(default)]
    block_hash: H256,
    #[serde(default, rename = "logIndex", with = "codec::quantity")]
    index: u64,
    #[serde(default)]
    removed: bool,
}

impl Log {
    pub fn new(address: Address, topics: Vec<H256>, data: &[u8]) -> Self {
        Self {
            address,
            topics,
            data: Bytes::from_slice(data),
            ..Default::default()
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn topics(&self) -> &[H256] {
        &self.topics
    }

    pub fn data(&self) -> &[u8] {
        self.data.as_slice()
    }

    pub fn block_number(&self) -> u64 {
        self.block_number
    }

    pub fn tx_hash(&self) -> H256 {
        self.tx_hash
    }

    pub fn tx_index(&self) -> u64 {
        self.tx_index
    }

    pub fn block_hash(&self) -> H256 {
        self.block_hash
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    /// Whether the log was reverted by a chain reorganisation.
    pub fn removed(&self) -> bool {
        self.removed
    }

    /// Set the block/transaction coordinates of the log.
    pub fn with_location(
        mut self,
        block_number: u64,
        block_hash: H256,
        tx_hash: H256,
        tx_index: u64,
        index: u64,
    ) -> Self {
        self.block_number = block_number;
        self.block_hash = block_hash;
        self.tx_hash = tx_hash;
        self.tx_index = tx_index;
        self.index = index;
        self
    }

    pub fn with_removed(mut self, removed: bool) -> Self {
        self.removed = removed;
        self
    }

    fn append_stored(&self, s: &mut RlpStream) {
        s.begin_list(LOG_STORAGE_FIELDS);
        s.append(&self.address);
        s.append_list::<H256, _>(&self.topics);
        s.append(&self.data);
        s.append(&self.block_number);
        s.append(&self.tx_hash);
        s.append(&self.tx_index);
        s.append(&self.block_hash);
        s.append(&self.index);
    }
}

impl Encodable for Log {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(LOG_FIELDS);
        s.append(&self.address);
        s.append_list::<H256, _>(&self.topics);
        s.append(&self.data);
    }
}

impl Decodable for Log {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        expect_list(rlp, LOG_FIELDS)?;
        Ok(Log {
            address: rlp.val_at(0)?,
            topics: decode_list(rlp, 1)?,
            data: rlp.val_at(2)?,
            ..Default::default()
        })
    }
}

/// Log in the storage encoding.
struct StoredLog(Log);

impl Decodable for StoredLog {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        expect_list(rlp, LOG_STORAGE_FIELDS)?;
        Ok(StoredLog(Log {
            address: rlp.val_at(0)?,
            topics: decode_list(rlp, 1)?,
            data: rlp.val_at(2)?,
            block_number: rlp.val_at(3)?,
            tx_hash: rlp.val_at(4)?,
            tx_index: rlp.val_at(5)?,
            block_hash: rlp.val_at(6)?,
            index: rlp.val_at(7)?,
            removed: false,
        }))
    }
}

/// Outcome recorded in a receipt's first field.
///
/// Post-Byzantium receipts carry a success flag; earlier ones carry the
/// intermediate state root instead. The two are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReceiptStatus {
    #[default]
    Failed,
    Successful,
    /// Pre-Byzantium intermediate state root.
    PostState(H256),
}

impl ReceiptStatus {
    /// Status from a numeric code; only `0` and `1` are defined.
    pub fn from_code(code: u64) -> Result<Self, TypesError> {
        match code {
            RECEIPT_STATUS_FAILED => Ok(ReceiptStatus::Failed),
            RECEIPT_STATUS_SUCCESSFUL => Ok(ReceiptStatus::Successful),
            other => Err(TypesError::InvalidStatus(other)),
        }
    }

    /// Numeric status code. Post-state receipts report `0`.
    pub fn code(&self) -> u64 {
        match self {
            ReceiptStatus::Successful => RECEIPT_STATUS_SUCCESSFUL,
            ReceiptStatus::Failed | ReceiptStatus::PostState(_) => RECEIPT_STATUS_FAILED,
        }
    }

    pub fn post_state(&self) -> Option<H256> {
        match self {
            ReceiptStatus::PostState(root) => Some(*root),
            _ => None,
        }
    }
}

impl Encodable for ReceiptStatus {
    fn rlp_append(&self, s: &mut RlpStream) {
        match self {
            ReceiptStatus::Failed => s.append_empty_data(),
            ReceiptStatus::Successful => s.append(&RECEIPT_STATUS_SUCCESSFUL),
            ReceiptStatus::PostState(root) => s.append(root),
        };
    }
}

impl Decodable for ReceiptStatus {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        let raw: Vec<u8> = rlp.as_val()?;
        match raw.as_slice() {
            [] => Ok(ReceiptStatus::Failed),
            [0x01] => Ok(ReceiptStatus::Successful),
            root if root.len() == 32 => Ok(ReceiptStatus::PostState(H256::from_slice(root))),
            _ => Err(DecoderError::Custom("invalid receipt status")),
        }
    }
}

/// The results of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "ReceiptRpc", into = "ReceiptRpc")]
pub struct Receipt {
    status: ReceiptStatus,
    cumulative_gas_used: u64,
    bloom: Bloom,
    logs: Vec<Log>,
    tx_hash: H256,
    contract_address: Option<Address>,
    gas_used: u64,
}

impl Receipt {
    pub fn new(status: ReceiptStatus, cumulative_gas_used: u64) -> Self {
        Self {
            status,
            cumulative_gas_used,
            ..Default::default()
        }
    }

    /// Parse a receipt from its consensus RLP form.
    ///
    /// The transaction digest, contract address and gas used are not part of
    /// this form and come back zeroed / absent.
    pub fn from_rlp(data: &[u8]) -> Result<Self, TypesError> {
        let receipt: Receipt = codec::decode_exact(data)?;
        trace!(status = receipt.status_code(), logs = receipt.logs.len(), "decoded receipt");
        Ok(receipt)
    }

    /// Encode the receipt into its consensus RLP form.
    pub fn rlp_bytes(&self) -> Vec<u8> {
        codec::encode(self)
    }

    /// Parse a receipt from its storage RLP form.
    pub fn from_storage_rlp(data: &[u8]) -> Result<Self, TypesError> {
        Ok(codec::decode_exact::<StoredReceipt>(data)?.0)
    }

    /// Encode the receipt into its storage RLP form.
    ///
    /// An absent contract address is stored as the zero address.
    pub fn storage_rlp_bytes(&self) -> Vec<u8> {
        let mut s = RlpStream::new_list(RECEIPT_STORAGE_FIELDS);
        s.append(&self.status);
        s.append(&self.cumulative_gas_used);
        s.append(&self.bloom);
        s.append(&self.tx_hash);
        s.append(&self.contract_address.unwrap_or_default());
        s.begin_list(self.logs.len());
        for log in &self.logs {
            log.append_stored(&mut s);
        }
        s.append(&self.gas_used);
        s.out().to_vec()
    }

    /// Parse a receipt from its RPC JSON form.
    ///
    /// Fails when `status` is neither `0` nor `1`, or when a `root` is given
    /// alongside a non-zero `status`.
    pub fn from_json(data: &str) -> Result<Self, TypesError> {
        codec::from_json(data)
    }

    /// Encode the receipt into its RPC JSON form.
    pub fn to_json(&self) -> Result<String, TypesError> {
        codec::to_json(self)
    }

    pub fn status(&self) -> ReceiptStatus {
        self.status
    }

    /// Numeric status code: [`RECEIPT_STATUS_FAILED`] or
    /// [`RECEIPT_STATUS_SUCCESSFUL`].
    pub fn status_code(&self) -> u64 {
        self.status.code()
    }

    /// Intermediate state root of pre-Byzantium receipts.
    pub fn post_state(&self) -> Option<H256> {
        self.status.post_state()
    }

    pub fn cumulative_gas_used(&self) -> u64 {
        self.cumulative_gas_used
    }

    pub fn bloom(&self) -> &Bloom {
        &self.bloom
    }

    pub fn logs(&self) -> Logs<'_> {
        Logs::new(&self.logs)
    }

    pub fn tx_hash(&self) -> H256 {
        self.tx_hash
    }

    /// Address of the contract created by the transaction, if any.
    pub fn contract_address(&self) -> Option<Address> {
        self.contract_address
    }

    pub fn gas_used(&self) -> u64 {
        self.gas_used
    }

    pub fn with_status(mut self, status: ReceiptStatus) -> Self {
        self.status = status;
        self
    }

    /// Replace the status code with a pre-Byzantium state root.
    pub fn with_post_state(self, root: H256) -> Self {
        self.with_status(ReceiptStatus::PostState(root))
    }

    pub fn with_bloom(mut self, bloom: Bloom) -> Self {
        self.bloom = bloom;
        self
    }

    pub fn with_logs(mut self, logs: Vec<Log>) -> Self {
        self.logs = logs;
        self
    }

    pub fn with_tx_hash(mut self, tx_hash: H256) -> Self {
        self.tx_hash = tx_hash;
        self
    }

    /// Record the created contract.
    ///
    /// The zero address means "no contract", as in the storage form, so it
    /// is kept as absent.
    pub fn with_contract_address(mut self, address: Address) -> Self {
        self.contract_address = non_zero(address);
        self
    }

    pub fn with_gas_used(mut self, gas_used: u64) -> Self {
        self.gas_used = gas_used;
        self
    }
}

fn non_zero(address: Address) -> Option<Address> {
    (!address.is_zero()).then_some(address)
}

impl Encodable for Receipt {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(RECEIPT_FIELDS);
        s.append(&self.status);
        s.append(&self.cumulative_gas_used);
        s.append(&self.bloom);
        s.append_list::<Log, _>(&self.logs);
    }
}

impl Decodable for Receipt {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        expect_list(rlp, RECEIPT_FIELDS)?;
        Ok(Receipt {
            status: rlp.val_at(0)?,
            cumulative_gas_used: rlp.val_at(1)?,
            bloom: rlp.val_at(2)?,
            logs: decode_list(rlp, 3)?,
            ..Default::default()
        })
    }
}

/// Receipt in the storage encoding.
struct StoredReceipt(Receipt);

impl Decodable for StoredReceipt {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        expect_list(rlp, RECEIPT_STORAGE_FIELDS)?;
        let logs: Vec<StoredLog> = decode_list(rlp, 5)?;
        Ok(StoredReceipt(Receipt {
            status: rlp.val_at(0)?,
            cumulative_gas_used: rlp.val_at(1)?,
            bloom: rlp.val_at(2)?,
            tx_hash: rlp.val_at(3)?,
            contract_address: non_zero(rlp.val_at(4)?),
            logs: logs.into_iter().map(|l| l.0).collect(),
            gas_used: rlp.val_at(6)?,
        }))
    }
}

/// RPC JSON shape of a receipt.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReceiptRpc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    root: Option<H256>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "codec::opt_quantity")]
    status: Option<u64>,
    #[serde(with = "codec::quantity")]
    cumulative_gas_used: u64,
    logs_bloom: Bloom,
    logs: Vec<Log>,
    transaction_hash: H256,
    #[serde(default)]
    contract_address: Option<Address>,
    #[serde(with = "codec::quantity")]
    gas_used: u64,
}

impl TryFrom<ReceiptRpc> for Receipt {
    type Error = TypesError;

    fn try_from(rpc: ReceiptRpc) -> Result<Self, Self::Error> {
        let status = match (rpc.root, rpc.status) {
            (Some(root), None | Some(RECEIPT_STATUS_FAILED)) => ReceiptStatus::PostState(root),
            (Some(_), Some(_)) => {
                return Err(TypesError::MalformedJson(
                    "receipt carries both root and a success status".to_string(),
                ))
            }
            (None, Some(code)) => ReceiptStatus::from_code(code)?,
            (None, None) => {
                return Err(TypesError::MalformedJson(
                    "receipt carries neither root nor status".to_string(),
                ))
            }
        };
        Ok(Receipt {
            status,
            cumulative_gas_used: rpc.cumulative_gas_used,
            bloom: rpc.logs_bloom,
            logs: rpc.logs,
            tx_hash: rpc.transaction_hash,
            contract_address: rpc.contract_address.and_then(non_zero),
            gas_used: rpc.gas_used,
        })
    }
}

impl From<Receipt> for ReceiptRpc {
    fn from(receipt: Receipt) -> Self {
        let (root, status) = match receipt.status {
            ReceiptStatus::PostState(root) => (Some(root), None),
            other => (None, Some(other.code())),
        };
        ReceiptRpc {
            root,
            status,
            cumulative_gas_used: receipt.cumulative_gas_used,
            logs_bloom: receipt.bloom,
            logs: receipt.logs,
            transaction_hash: receipt.tx_hash,
            contract_address: receipt.contract_address,
            gas_used: receipt.gas_used,
        }
    }
}
