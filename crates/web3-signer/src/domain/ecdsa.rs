//! # ECDSA Primitive Adapter (secp256k1)
//!
//! Thin layer over `k256` working on the 65-byte `r ‖ s ‖ recid` form used by
//! transaction signatures.
//!
//! ## Security Notes
//!
//! - **Malleability (EIP-2)**: produced signatures are normalised to low-s and
//!   recovery rejects `s > n/2`.
//! - **Scalar Range**: `r` and `s` must be in `[1, n-1]`.

use super::errors::SignerError;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use web3_types::{H256, U256};
use zeroize::Zeroize;

/// Length of a raw recoverable signature: `r (32) ‖ s (32) ‖ recid (1)`.
pub const SIGNATURE_LENGTH: usize = 65;

/// secp256k1 curve order n
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// floor(n / 2)
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// Sign a 32-byte digest, returning `r ‖ s ‖ recid` with `s` in the lower half
/// of the curve order.
pub fn sign_digest(key: &SigningKey, digest: &H256) -> Result<[u8; SIGNATURE_LENGTH], SignerError> {
    let (sig, recid) = key
        .sign_prehash_recoverable(digest.as_bytes())
        .map_err(|e| SignerError::Primitive(e.to_string()))?;

    // Negating s flips the parity of the recovered point.
    let (sig, recid) = match sig.normalize_s() {
        Some(normalized) => {
            let flipped = RecoveryId::from_byte(recid.to_byte() ^ 1)
                .ok_or(SignerError::InvalidSignature("invalid recovery id"))?;
            (normalized, flipped)
        }
        None => (sig, recid),
    };

    let mut out = [0u8; SIGNATURE_LENGTH];
    out[..64].copy_from_slice(&sig.to_bytes());
    out[64] = recid.to_byte();
    Ok(out)
}

/// Recover the public key that produced `sig` over `digest`.
pub fn recover_public_key(digest: &H256, sig: &[u8]) -> Result<VerifyingKey, SignerError> {
    if sig.len() != SIGNATURE_LENGTH {
        return Err(SignerError::InvalidSignatureLength {
            expected: SIGNATURE_LENGTH,
            actual: sig.len(),
        });
    }

    let recid = match sig[64] {
        0 | 1 => RecoveryId::from_byte(sig[64])
            .ok_or(SignerError::InvalidSignature("invalid recovery id"))?,
        _ => return Err(SignerError::InvalidSignature("invalid recovery id")),
    };

    let r = U256::from_big_endian(&sig[..32]);
    let s = U256::from_big_endian(&sig[32..64]);
    validate_scalars(r, s)?;

    let mut rs = [0u8; 64];
    rs.copy_from_slice(&sig[..64]);
    let parsed = Signature::from_slice(&rs);
    rs.zeroize();
    let parsed = parsed.map_err(|_| SignerError::InvalidSignature("malformed signature"))?;

    VerifyingKey::recover_from_prehash(digest.as_bytes(), &parsed, recid)
        .map_err(|_| SignerError::InvalidSignature("public key recovery failed"))
}

/// Homestead validity: `r, s ∈ [1, n-1]` and `s ≤ n/2`.
pub(crate) fn validate_scalars(r: U256, s: U256) -> Result<(), SignerError> {
    let order = U256::from_big_endian(&SECP256K1_ORDER);
    let half_order = U256::from_big_endian(&SECP256K1_HALF_ORDER);

    if r.is_zero() || r >= order {
        return Err(SignerError::InvalidSignature("r out of range"));
    }
    if s.is_zero() || s >= order {
        return Err(SignerError::InvalidSignature("s out of range"));
    }
    if s > half_order {
        return Err(SignerError::InvalidSignature("malleable signature (high s)"));
    }
    Ok(())
}
