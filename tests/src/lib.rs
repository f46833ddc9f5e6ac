//! # Web3 Bindings Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Codec and signer throughput
//! └── src/integration/  # Cross-crate flows
//!     ├── signing_flow.rs
//!     ├── codec_laws.rs
//!     └── malformed_input.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p web3-tests
//! RUST_LOG=web3_signer=debug cargo test -p web3-tests integration::signing_flow
//! cargo bench -p web3-tests
//! ```


/// Install a test-friendly subscriber honouring `RUST_LOG`. Safe to call from
/// every test; only the first call takes effect.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
