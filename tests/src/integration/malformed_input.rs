//! # Malformed Input
//!
//! Truncated or structurally wrong input fails with a typed error for every
//! record type; nothing panics and no zero-filled entity is returned.

#[cfg(test)]
mod tests {
    use rlp::RlpStream;
    use web3_messaging::{Criteria, Message, MessageBatch, MessagingError, NewMessage};
    use rlp::DecoderError;
    use web3_types::{
        Address, Block, Bloom, Header, Receipt, ReceiptStatus, Transaction, TypesError, H256,
        U256,
    };

    /// Every strict prefix of `bytes` must be rejected as malformed.
    fn assert_prefixes_rejected<T, F>(bytes: &[u8], decode: F)
    where
        T: std::fmt::Debug,
        F: Fn(&[u8]) -> Result<T, TypesError>,
    {
        for len in 0..bytes.len() {
            match decode(&bytes[..len]) {
                Err(TypesError::MalformedEncoding(_)) => {}
                other => panic!("prefix of length {len} decoded to {other:?}"),
            }
        }
    }

    #[test]
    fn test_truncated_records_rejected() {
        let header = Header::default()
            .with_parent_hash(H256::repeat_byte(0x11))
            .with_number(U256::from(9u8));
        assert_prefixes_rejected(&header.rlp_bytes(), Header::from_rlp);

        let tx = sample_tx();
        assert_prefixes_rejected(&tx.rlp_bytes(), Transaction::from_rlp);

        let block = Block::new(header, vec![tx], vec![]);
        assert_prefixes_rejected(&block.rlp_bytes(), Block::from_rlp);

        let receipt = Receipt::new(ReceiptStatus::Failed, 21_000);
        assert_prefixes_rejected(&receipt.rlp_bytes(), Receipt::from_rlp);
    }

    #[test]
    fn test_short_digest_field_rejected() {
        // A header whose parent hash carries a single byte instead of 32.
        let good = Header::default().rlp_bytes();
        let fields = rlp::Rlp::new(&good);
        let mut s = RlpStream::new_list(fields.item_count().unwrap());
        s.append(&vec![0x01u8]);
        for i in 1..fields.item_count().unwrap() {
            s.append_raw(fields.at(i).unwrap().as_raw(), 1);
        }
        assert!(matches!(
            Header::from_rlp(&s.out()),
            Err(TypesError::MalformedEncoding(_))
        ));
    }

    fn sample_tx() -> Transaction {
        Transaction::new(1, Some(Address::repeat_byte(0x22)), U256::one(), 21_000, U256::one(), &[])
    }

    #[test]
    fn test_byte_string_in_place_of_list_rejected() {
        // Transactions given as the string "abc".
        let mut s = RlpStream::new_list(3);
        s.append(&Header::default());
        s.append(&b"abc".to_vec());
        s.begin_list(0);
        assert_eq!(
            Block::from_rlp(&s.out()).unwrap_err(),
            TypesError::MalformedEncoding(DecoderError::RlpExpectedToBeList)
        );

        // Uncles given as the empty string 0x80.
        let mut s = RlpStream::new_list(3);
        s.append(&Header::default());
        s.begin_list(0);
        s.append_empty_data();
        assert_eq!(
            Block::from_rlp(&s.out()).unwrap_err(),
            TypesError::MalformedEncoding(DecoderError::RlpExpectedToBeList)
        );

        // A log whose topics are a 40-byte string.
        let mut s = RlpStream::new_list(4);
        s.append(&1u64);
        s.append(&21_000u64);
        s.append(&Bloom::default());
        s.begin_list(1);
        s.begin_list(3);
        s.append(&Address::repeat_byte(0x33));
        s.append(&vec![0x44u8; 40]);
        s.append_empty_data();
        assert_eq!(
            Receipt::from_rlp(&s.out()).unwrap_err(),
            TypesError::MalformedEncoding(DecoderError::RlpExpectedToBeList)
        );
    }

    #[test]
    fn test_malformed_list_element_not_dropped() {
        // One valid transaction followed by a string header claiming five
        // bytes with only one present.
        let mut s = RlpStream::new_list(3);
        s.append(&Header::default());
        s.begin_list(2);
        s.append(&sample_tx());
        s.append_raw(&[0x85, 0x01], 1);
        s.begin_list(0);
        assert!(matches!(
            Block::from_rlp(&s.out()),
            Err(TypesError::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_junk_after_last_field_rejected() {
        let good = Header::default().rlp_bytes();
        let fields = rlp::Rlp::new(&good);
        let count = fields.item_count().unwrap();
        let mut s = RlpStream::new_list(count + 1);
        for i in 0..count {
            s.append_raw(fields.at(i).unwrap().as_raw(), 1);
        }
        s.append_raw(&[0x85, 0x01], 1);
        assert!(matches!(
            Header::from_rlp(&s.out()),
            Err(TypesError::MalformedEncoding(_))
        ));

        let tx = sample_tx().rlp_bytes();
        let fields = rlp::Rlp::new(&tx);
        let count = fields.item_count().unwrap();
        let mut s = RlpStream::new_list(count + 1);
        for i in 0..count {
            s.append_raw(fields.at(i).unwrap().as_raw(), 1);
        }
        s.append_raw(&[0xc2, 0x01], 1);
        assert!(matches!(
            Transaction::from_rlp(&s.out()),
            Err(TypesError::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_receipt_status_constrained() {
        assert_eq!(
            ReceiptStatus::from_code(5).unwrap_err(),
            TypesError::InvalidStatus(5)
        );

        let receipt = Receipt::new(ReceiptStatus::Successful, 21_000);
        let mut value: serde_json::Value = serde_json::from_str(&receipt.to_json().unwrap()).unwrap();
        value["root"] = serde_json::json!(H256::repeat_byte(0x99));
        assert!(matches!(
            Receipt::from_json(&value.to_string()),
            Err(TypesError::MalformedJson(_))
        ));

        value.as_object_mut().unwrap().remove("root");
        value["status"] = serde_json::json!(2);
        assert!(matches!(
            Receipt::from_json(&value.to_string()),
            Err(TypesError::MalformedJson(_))
        ));

        // Every reachable status survives both wire formats.
        for status in [
            ReceiptStatus::Failed,
            ReceiptStatus::Successful,
            ReceiptStatus::PostState(H256::repeat_byte(0x99)),
        ] {
            let receipt = Receipt::new(status, 21_000);
            assert_eq!(Receipt::from_rlp(&receipt.rlp_bytes()).unwrap(), receipt);
            assert_eq!(Receipt::from_json(&receipt.to_json().unwrap()).unwrap(), receipt);
        }
    }

    #[test]
    fn test_zero_contract_address_round_trips() {
        let receipt = Receipt::new(ReceiptStatus::Successful, 21_000)
            .with_contract_address(Address::zero());
        assert_eq!(receipt.contract_address(), None);
        assert_eq!(
            Receipt::from_storage_rlp(&receipt.storage_rlp_bytes()).unwrap(),
            receipt
        );
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut bytes = Transaction::default().rlp_bytes();
        bytes.push(0x00);
        assert!(matches!(
            Transaction::from_rlp(&bytes),
            Err(TypesError::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            Header::from_json("{\"number\":"),
            Err(TypesError::MalformedJson(_))
        ));
        assert!(matches!(
            Transaction::from_json("{\"nonce\":\"0xzz\"}"),
            Err(TypesError::MalformedJson(_))
        ));
        assert!(Block::from_json("[]").is_err());
        assert!(Receipt::from_json("{\"status\":true}").is_err());

        assert!(matches!(
            NewMessage::from_json("{\"payload\":\"nothex\"}"),
            Err(MessagingError::MalformedJson(_))
        ));
        assert!(Message::from_json("7").is_err());
        assert!(Criteria::from_json("{\"allowP2P\":\"yes\"}").is_err());
        assert!(MessageBatch::from_json("[{\"ttl\":-1}]").is_err());
    }

    #[test]
    fn test_collection_bounds() {
        let receipt = Receipt::new(ReceiptStatus::Failed, 0);
        let logs = receipt.logs();
        assert_eq!(
            logs.get(0).unwrap_err(),
            TypesError::IndexOutOfBounds { index: 0, size: 0 }
        );

        let batch = MessageBatch::new(vec![Message::default(); 3]);
        let messages = batch.messages();
        for i in 0..3 {
            assert!(messages.get(i).is_ok());
        }
        assert!(messages.get(-1).is_err());
        assert!(messages.get(3).is_err());
    }
}
