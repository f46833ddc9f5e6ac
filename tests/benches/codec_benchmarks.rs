//! # Web3 Bindings Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | Codec | Block RLP encode / decode by transaction count |
//! | Codec | Header JSON encode / decode |
//! | Signer | Sign and recover sender (legacy, EIP-155) |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;
use web3_signer::{generate_key, recover_sender, sign_transaction};
use web3_types::{Address, Block, Header, Transaction, U256};

fn sample_transaction(nonce: u64) -> Transaction {
    Transaction::new(
        nonce,
        Some(Address::repeat_byte(0xaa)),
        U256::from(1000u64),
        21_000,
        U256::one(),
        &[0u8; 64],
    )
}

// ============================================================================
// Codec
// ============================================================================

fn bench_block_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("block-codec");
    let key = generate_key();

    for size in [0usize, 10, 100, 500] {
        let txs = (0..size as u64)
            .map(|n| sign_transaction(&sample_transaction(n), &key, Some(U256::one())))
            .collect::<Result<Vec<_>, _>>()
            .expect("signing failed");
        let block = Block::new(Header::default().with_number(U256::from(size)), txs, vec![]);
        let encoded = block.rlp_bytes();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &block, |b, block| {
            b.iter(|| black_box(block.rlp_bytes()))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, bytes| {
            b.iter(|| black_box(Block::from_rlp(bytes).is_ok()))
        });
    }

    group.finish();
}

fn bench_header_json(c: &mut Criterion) {
    let header = Header::default()
        .with_number(U256::from(1_000_000u64))
        .with_gas_limit(30_000_000)
        .with_extra(b"bench");
    let json = header.to_json().expect("encoding failed");

    c.bench_function("header_json_encode", |b| b.iter(|| black_box(header.to_json())));
    c.bench_function("header_json_decode", |b| {
        b.iter(|| black_box(Header::from_json(&json).is_ok()))
    });
}

// ============================================================================
// Signer
// ============================================================================

fn bench_signer(c: &mut Criterion) {
    let mut group = c.benchmark_group("signer");
    group.measurement_time(Duration::from_secs(10));

    let key = generate_key();
    let tx = sample_transaction(0);

    for (label, chain_id) in [("legacy", None), ("eip155", Some(U256::one()))] {
        let signed = sign_transaction(&tx, &key, chain_id).expect("signing failed");

        group.bench_function(BenchmarkId::new("sign", label), |b| {
            b.iter(|| black_box(sign_transaction(&tx, &key, chain_id).is_ok()))
        });
        group.bench_function(BenchmarkId::new("recover_sender", label), |b| {
            b.iter(|| black_box(recover_sender(&signed, chain_id).is_ok()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_block_codec, bench_header_json, bench_signer);
criterion_main!(benches);
