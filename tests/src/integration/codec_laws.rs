//! # Codec Laws
//!
//! Round-trip, determinism and digest purity across all four record types,
//! in both wire formats.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use web3_types::{
        Address, Block, Bloom, Header, Log, Nonce, Receipt, ReceiptStatus, Transaction,
        TxSignature, H256, U256, RECEIPT_STATUS_SUCCESSFUL,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn header(number: u64) -> Header {
        Header::default()
            .with_parent_hash(H256::repeat_byte(0x01))
            .with_coinbase(Address::repeat_byte(0x02))
            .with_root(H256::repeat_byte(0x03))
            .with_difficulty(U256::from(131_072u64))
            .with_number(U256::from(number))
            .with_gas_limit(8_000_000)
            .with_gas_used(21_000)
            .with_time(1_438_269_988)
            .with_extra(b"integration")
            .with_nonce(Nonce::from_u64(42))
    }

    fn signed_tx(nonce: u64) -> Transaction {
        Transaction::new(
            nonce,
            Some(Address::repeat_byte(0x44)),
            U256::from(5u8),
            30_000,
            U256::from(3u8),
            b"calldata",
        )
        .with_signature_values(TxSignature {
            v: U256::from(38u8),
            r: U256::from(0xabcdefu64),
            s: U256::from(0x123456u64),
        })
    }

    fn receipt() -> Receipt {
        let mut bloom_bytes = [0u8; 256];
        bloom_bytes[7] = 0x40;
        Receipt::new(ReceiptStatus::Successful, 63_000)
            .with_bloom(Bloom::from_slice(&bloom_bytes).unwrap())
            .with_logs(vec![
                Log::new(Address::repeat_byte(0x55), vec![H256::repeat_byte(0x66)], b"one"),
                Log::new(Address::repeat_byte(0x77), vec![], &[]),
            ])
            .with_tx_hash(H256::repeat_byte(0x88))
            .with_gas_used(21_000)
    }

    // =============================================================================
    // BINARY FORM
    // =============================================================================

    #[test]
    fn test_binary_round_trips_are_byte_identical() {
        let header = header(12);
        let bytes = header.rlp_bytes();
        assert_eq!(Header::from_rlp(&bytes).unwrap().rlp_bytes(), bytes);

        let block = Block::new(header.clone(), vec![signed_tx(0), signed_tx(1)], vec![self::header(11)]);
        let bytes = block.rlp_bytes();
        assert_eq!(Block::from_rlp(&bytes).unwrap(), block);
        assert_eq!(Block::from_rlp(&bytes).unwrap().rlp_bytes(), bytes);

        let tx = signed_tx(9);
        let bytes = tx.rlp_bytes();
        assert_eq!(Transaction::from_rlp(&bytes).unwrap(), tx);

        // Consensus form drops the derived fields, so compare re-encodings.
        let receipt = receipt();
        let bytes = receipt.rlp_bytes();
        let decoded = Receipt::from_rlp(&bytes).unwrap();
        assert_eq!(decoded.rlp_bytes(), bytes);
        assert_eq!(decoded.status_code(), RECEIPT_STATUS_SUCCESSFUL);
        assert_eq!(decoded.logs().size(), 2);

        let stored = receipt.storage_rlp_bytes();
        assert_eq!(Receipt::from_storage_rlp(&stored).unwrap(), receipt);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let a = header(1).rlp_bytes();
        let _unrelated = signed_tx(3).rlp_bytes();
        let _unrelated = receipt().to_json().unwrap();
        let b = header(1).rlp_bytes();
        assert_eq!(a, b);
    }

    #[test]
    fn test_block_hash_is_header_hash() {
        let block = Block::new(header(5), vec![signed_tx(0)], vec![]);
        let decoded = Block::from_rlp(&block.rlp_bytes()).unwrap();
        assert_eq!(decoded.hash(), decoded.header().hash());
        assert_eq!(decoded.header().hash(), decoded.header().hash());
    }

    // =============================================================================
    // JSON FORM
    // =============================================================================

    #[test]
    fn test_json_round_trips() {
        let header = header(12);
        assert_eq!(Header::from_json(&header.to_json().unwrap()).unwrap(), header);

        let tx = signed_tx(4);
        assert_eq!(Transaction::from_json(&tx.to_json().unwrap()).unwrap(), tx);

        let block = Block::new(header, vec![tx], vec![]);
        assert_eq!(Block::from_json(&block.to_json().unwrap()).unwrap(), block);

        let receipt = receipt();
        assert_eq!(Receipt::from_json(&receipt.to_json().unwrap()).unwrap(), receipt);
    }

    #[test]
    fn test_json_and_binary_agree() {
        let block = Block::new(header(3), vec![signed_tx(0)], vec![header(2)]);
        let via_json = Block::from_json(&block.to_json().unwrap()).unwrap();
        assert_eq!(via_json.rlp_bytes(), block.rlp_bytes());
        assert_eq!(via_json.hash(), block.hash());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_block_round_trip(number in any::<u64>(), tx_count in 0usize..4, uncle_count in 0usize..3) {
            let txs = (0..tx_count as u64).map(signed_tx).collect();
            let uncles = (0..uncle_count as u64).map(header).collect();
            let block = Block::new(header(number), txs, uncles);
            let bytes = block.rlp_bytes();
            let decoded = Block::from_rlp(&bytes).unwrap();
            prop_assert_eq!(decoded.rlp_bytes(), bytes);
            prop_assert_eq!(decoded, block);
        }
    }
}
