//! # Key Helpers
//!
//! Secret key generation and import, public key serialization and address
//! derivation (including the EIP-55 mixed-case checksum form).

use super::errors::SignerError;
use k256::ecdsa::{SigningKey, VerifyingKey};
use web3_types::{keccak256, Address};
use zeroize::Zeroizing;

/// Generate a fresh secp256k1 secret key from the thread-local CSPRNG.
pub fn generate_key() -> SigningKey {
    SigningKey::random(&mut rand::thread_rng())
}

/// Parse a 32-byte secret key from hex, with or without a `0x` prefix.
pub fn secret_key_from_hex(input: &str) -> Result<SigningKey, SignerError> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    let bytes = Zeroizing::new(hex::decode(digits).map_err(|_| SignerError::InvalidPrivateKey)?);
    if bytes.len() != 32 {
        return Err(SignerError::InvalidPrivateKey);
    }
    SigningKey::from_slice(&bytes).map_err(|_| SignerError::InvalidPrivateKey)
}

/// Big-endian secret scalar, wiped from memory on drop.
pub fn secret_key_bytes(key: &SigningKey) -> Zeroizing<[u8; 32]> {
    let mut out = Zeroizing::new([0u8; 32]);
    out.copy_from_slice(&key.to_bytes());
    out
}

/// Uncompressed SEC1 public key: `0x04 ‖ x ‖ y`.
pub fn public_key_bytes(key: &SigningKey) -> [u8; 65] {
    let point = key.verifying_key().to_encoded_point(false);
    let mut out = [0u8; 65];
    out.copy_from_slice(point.as_bytes());
    out
}

/// Derive the account address: the last 20 bytes of the keccak digest of the
/// uncompressed public key without its `0x04` prefix.
pub fn pubkey_to_address(public_key: &VerifyingKey) -> Address {
    let point = public_key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&hash.as_bytes()[12..])
}

/// EIP-55 mixed-case checksum encoding, `0x`-prefixed.
pub fn to_checksum_address(address: &Address) -> String {
    let lower = hex::encode(address.as_bytes());
    let hash = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = (hash.as_bytes()[i / 2] >> (if i % 2 == 0 { 4 } else { 0 })) & 0x0f;
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
