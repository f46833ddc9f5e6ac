//! # Transaction Signer
//!
//! Two signing schemes, selected by whether a chain identifier is supplied:
//!
//! | Variant  | Digest                                                  | `v`                        |
//! |----------|---------------------------------------------------------|----------------------------|
//! | Legacy   | `keccak(rlp[nonce, gasPrice, gas, to, value, data])`    | `27 + recid`               |
//! | EIP-155  | `keccak(rlp[nonce, …, data, chainId, 0, 0])`            | `35 + 2·chainId + recid`   |
//!
//! The digest never covers the signature, so signing is idempotent with
//! respect to an already-signed transaction.

use super::ecdsa::{recover_public_key, sign_digest, SIGNATURE_LENGTH};
use super::errors::SignerError;
use super::keys::pubkey_to_address;
use k256::ecdsa::SigningKey;
use rlp::RlpStream;
use tracing::{debug, trace};
use web3_types::{keccak256, Address, Transaction, TxSignature, H256, U256};

/// Items in the legacy signing payload.
const LEGACY_PAYLOAD_FIELDS: usize = 6;

/// Items in the replay-protected signing payload.
const EIP155_PAYLOAD_FIELDS: usize = 9;

/// Signature scheme used to sign and recover transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Signer {
    /// Homestead rules, no chain binding.
    #[default]
    Legacy,
    /// Replay-protected signatures bound to `chain_id`.
    Eip155 { chain_id: U256 },
}

impl Signer {
    /// Replay-protected when a chain identifier is supplied, legacy otherwise.
    pub fn new(chain_id: Option<U256>) -> Self {
        let signer = match chain_id {
            Some(chain_id) => Signer::Eip155 { chain_id },
            None => Signer::Legacy,
        };
        trace!(?signer, "selected signer");
        signer
    }

    pub fn chain_id(&self) -> Option<U256> {
        match self {
            Signer::Legacy => None,
            Signer::Eip155 { chain_id } => Some(*chain_id),
        }
    }

    /// RLP payload whose keccak digest is signed.
    pub fn signing_payload(&self, tx: &Transaction) -> Vec<u8> {
        match self {
            Signer::Legacy => legacy_payload(tx),
            Signer::Eip155 { chain_id } => {
                let mut s = RlpStream::new_list(EIP155_PAYLOAD_FIELDS);
                tx.append_unsigned_fields(&mut s);
                s.append(chain_id);
                s.append(&0u8);
                s.append(&0u8);
                s.out().to_vec()
            }
        }
    }

    /// Digest to be signed for `tx`. Any signature `tx` carries is ignored.
    pub fn signing_digest(&self, tx: &Transaction) -> H256 {
        keccak256(&self.signing_payload(tx))
    }

    /// Convert a raw `r ‖ s ‖ recid` signature into wire values for this scheme.
    pub fn signature_values(&self, sig: &[u8]) -> Result<TxSignature, SignerError> {
        if sig.len() != SIGNATURE_LENGTH {
            return Err(SignerError::InvalidSignatureLength {
                expected: SIGNATURE_LENGTH,
                actual: sig.len(),
            });
        }
        let recid = match sig[64] {
            id @ (0 | 1) => U256::from(id),
            _ => return Err(SignerError::InvalidSignature("invalid recovery id")),
        };

        let v = match self {
            Signer::Legacy => recid + U256::from(27u8),
            Signer::Eip155 { chain_id } => chain_id
                .checked_mul(U256::from(2u8))
                .and_then(|x| x.checked_add(U256::from(35u8) + recid))
                .ok_or(SignerError::InvalidSignature("chain id overflows v"))?,
        };

        Ok(TxSignature {
            v,
            r: U256::from_big_endian(&sig[..32]),
            s: U256::from_big_endian(&sig[32..64]),
        })
    }

    /// Attach a raw signature to a copy of `tx`.
    pub fn with_signature(&self, tx: &Transaction, sig: &[u8]) -> Result<Transaction, SignerError> {
        Ok(tx.with_signature_values(self.signature_values(sig)?))
    }

    /// Sign `tx` with `key` and return the signed copy.
    pub fn sign(&self, tx: &Transaction, key: &SigningKey) -> Result<Transaction, SignerError> {
        let sig = sign_digest(key, &self.signing_digest(tx))?;
        self.with_signature(tx, &sig)
    }

    /// Recover the address that signed `tx`.
    pub fn recover_sender(&self, tx: &Transaction) -> Result<Address, SignerError> {
        let sig = tx.signature().ok_or(SignerError::MissingSignature)?;

        let (digest, recid) = match self {
            Signer::Legacy => (keccak256(&legacy_payload(tx)), legacy_recovery_id(sig.v)?),
            // Unprotected signatures stay valid under a replay-protected signer.
            Signer::Eip155 { .. } if !sig.is_protected() => {
                (keccak256(&legacy_payload(tx)), legacy_recovery_id(sig.v)?)
            }
            Signer::Eip155 { chain_id } => {
                let actual = sig
                    .chain_id()
                    .ok_or(SignerError::InvalidSignature("invalid v"))?;
                if actual != *chain_id {
                    return Err(SignerError::InvalidChainId {
                        expected: *chain_id,
                        actual,
                    });
                }
                let recid = sig.v - (actual * U256::from(2u8) + U256::from(35u8));
                (self.signing_digest(tx), recid.low_u64() as u8)
            }
        };

        let mut raw = [0u8; SIGNATURE_LENGTH];
        sig.r.to_big_endian(&mut raw[..32]);
        sig.s.to_big_endian(&mut raw[32..64]);
        raw[64] = recid;

        let public_key = recover_public_key(&digest, &raw)?;
        let sender = pubkey_to_address(&public_key);
        debug!(tx_hash = ?tx.hash(), ?sender, "recovered transaction sender");
        Ok(sender)
    }
}

fn legacy_payload(tx: &Transaction) -> Vec<u8> {
    let mut s = RlpStream::new_list(LEGACY_PAYLOAD_FIELDS);
    tx.append_unsigned_fields(&mut s);
    s.out().to_vec()
}

fn legacy_recovery_id(v: U256) -> Result<u8, SignerError> {
    if v == U256::from(27u8) {
        Ok(0)
    } else if v == U256::from(28u8) {
        Ok(1)
    } else {
        Err(SignerError::InvalidSignature("invalid v"))
    }
}

/// Digest to be signed for `tx` under the scheme chosen by `chain_id`.
pub fn signing_digest(tx: &Transaction, chain_id: Option<U256>) -> H256 {
    Signer::new(chain_id).signing_digest(tx)
}

/// Attach a 65-byte `r ‖ s ‖ recid` signature to a copy of `tx`.
pub fn with_signature(
    tx: &Transaction,
    sig: &[u8],
    chain_id: Option<U256>,
) -> Result<Transaction, SignerError> {
    Signer::new(chain_id).with_signature(tx, sig)
}

/// Recover the sender of a signed transaction.
pub fn recover_sender(tx: &Transaction, chain_id: Option<U256>) -> Result<Address, SignerError> {
    Signer::new(chain_id).recover_sender(tx)
}

/// Digest, sign and attach in one step.
pub fn sign_transaction(
    tx: &Transaction,
    key: &SigningKey,
    chain_id: Option<U256>,
) -> Result<Transaction, SignerError> {
    Signer::new(chain_id).sign(tx, key)
}

/// Signing conveniences on [`Transaction`] itself.
pub trait TransactionSigning {
    fn signing_digest(&self, chain_id: Option<U256>) -> H256;

    /// Legacy signing digest.
    fn sig_hash(&self) -> H256;

    fn with_signature(&self, sig: &[u8], chain_id: Option<U256>)
        -> Result<Transaction, SignerError>;

    /// Sender address (the `from` of the transaction).
    fn sender(&self, chain_id: Option<U256>) -> Result<Address, SignerError>;
}

impl TransactionSigning for Transaction {
    fn signing_digest(&self, chain_id: Option<U256>) -> H256 {
        signing_digest(self, chain_id)
    }

    fn sig_hash(&self) -> H256 {
        Signer::Legacy.signing_digest(self)
    }

    fn with_signature(
        &self,
        sig: &[u8],
        chain_id: Option<U256>,
    ) -> Result<Transaction, SignerError> {
        with_signature(self, sig, chain_id)
    }

    fn sender(&self, chain_id: Option<U256>) -> Result<Address, SignerError> {
        recover_sender(self, chain_id)
    }
}
