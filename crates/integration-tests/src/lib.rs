//! Integration tests for Bramble.
//!
//! # Running Tests
//!
//! ```bash
//! # File-backed persistence tests (run by default)
//! cargo test -p bramble-integration-tests
//!
//! # Live catalog tests (require network access)
//! cargo test -p bramble-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `catalog_api` - Fetches against the real catalog endpoint (ignored by
//!   default; they depend on an external service)
//! - `cart_persistence` - Cart slot round-trips against real files

/// Install a test subscriber so `tracing` output shows up with
/// `--nocapture`. Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
