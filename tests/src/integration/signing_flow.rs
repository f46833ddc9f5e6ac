//! # Signing Flow
//!
//! Unsigned transaction → signing digest → raw signature → signed
//! transaction → wire bytes → decoded transaction → recovered sender.

#[cfg(test)]
mod tests {
    use crate::init_tracing;
    use web3_signer::{
        pubkey_to_address, recover_sender, secret_key_from_hex, sign_digest, signing_digest,
        with_signature, SignerConfig, SignerError, TransactionSigning,
    };
    use web3_types::{Address, Block, Header, Transaction, U256};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const TEST_KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    fn unsigned_transfer() -> Transaction {
        Transaction::new(
            0,
            Some(Address::repeat_byte(0xaa)),
            U256::from(1000u64),
            21_000,
            U256::one(),
            &[],
        )
    }

    // =============================================================================
    // END-TO-END
    // =============================================================================

    #[test]
    fn test_sign_encode_decode_recover() {
        init_tracing();
        let key = secret_key_from_hex(TEST_KEY).unwrap();
        let chain_id = Some(U256::one());
        let tx = unsigned_transfer();

        let digest = signing_digest(&tx, chain_id);
        let sig = sign_digest(&key, &digest).unwrap();
        let signed = with_signature(&tx, &sig, chain_id).unwrap();

        let expected = pubkey_to_address(key.verifying_key());
        assert_eq!(recover_sender(&signed, chain_id).unwrap(), expected);

        let decoded = Transaction::from_rlp(&signed.rlp_bytes()).unwrap();
        assert_eq!(decoded.nonce(), 0);
        assert_eq!(decoded.to(), Some(Address::repeat_byte(0xaa)));
        assert_eq!(decoded.value(), U256::from(1000u64));
        assert_eq!(decoded.gas(), 21_000);
        assert_eq!(decoded.gas_price(), U256::one());
        assert!(decoded.is_signed());
        assert_eq!(decoded, signed);
        assert_eq!(recover_sender(&decoded, chain_id).unwrap(), expected);
    }

    #[test]
    fn test_digest_unchanged_by_signature() {
        let key = secret_key_from_hex(TEST_KEY).unwrap();
        let tx = unsigned_transfer();
        let chain_id = Some(U256::one());

        let before = signing_digest(&tx, chain_id);
        let sig = sign_digest(&key, &before).unwrap();
        let signed = tx.with_signature(&sig, chain_id).unwrap();

        assert_eq!(signed.signing_digest(chain_id), before);
        assert!(!tx.is_signed());
    }

    #[test]
    fn test_chain_binding_holds() {
        let key = secret_key_from_hex(TEST_KEY).unwrap();
        let signer_address = pubkey_to_address(key.verifying_key());
        let signed = web3_signer::sign_transaction(&unsigned_transfer(), &key, Some(U256::one()))
            .unwrap();

        for other in [2u64, 3, 61, 1337] {
            match recover_sender(&signed, Some(U256::from(other))) {
                Ok(address) => assert_ne!(address, signer_address),
                Err(err) => assert!(matches!(err, SignerError::InvalidChainId { .. })),
            }
        }
        // The legacy digest differs, so the legacy signer cannot recover it either.
        assert!(recover_sender(&signed, None).is_err());
    }

    #[test]
    fn test_configured_signer_round_trip() {
        let key = secret_key_from_hex(TEST_KEY).unwrap();
        let signer = SignerConfig::from_json(r#"{"chainId":"0x2a"}"#)
            .unwrap()
            .signer();

        let signed = signer.sign(&unsigned_transfer(), &key).unwrap();
        assert_eq!(signed.signature().unwrap().chain_id(), Some(U256::from(42u8)));
        assert_eq!(
            signed.sender(Some(U256::from(42u8))).unwrap(),
            pubkey_to_address(key.verifying_key())
        );
    }

    #[test]
    fn test_signed_transactions_survive_block_encoding() {
        let key = secret_key_from_hex(TEST_KEY).unwrap();
        let chain_id = Some(U256::one());
        let txs: Vec<Transaction> = (0..3)
            .map(|nonce| {
                let tx = Transaction::new(
                    nonce,
                    Some(Address::repeat_byte(0xbb)),
                    U256::from(nonce * 10),
                    21_000,
                    U256::from(2u8),
                    &[],
                );
                web3_signer::sign_transaction(&tx, &key, chain_id).unwrap()
            })
            .collect();

        let header = Header::default().with_number(U256::from(7u8));
        let block = Block::from_rlp(&Block::new(header, txs, vec![]).rlp_bytes()).unwrap();

        let expected = pubkey_to_address(key.verifying_key());
        for tx in block.transactions() {
            assert_eq!(recover_sender(tx, chain_id).unwrap(), expected);
            assert_eq!(block.transaction(&tx.hash()), Some(tx));
        }
    }
}
