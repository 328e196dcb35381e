//! Shared fixtures for the Wolfpack integration tests.

pub mod benchmarks;
pub mod settings;

use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to the test harness.
///
/// Filtering follows `RUST_LOG`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
