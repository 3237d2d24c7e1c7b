//! Integration tests module for Text Humanizer
//!
//! Shared helpers for the end-to-end and session/history tests.

pub mod end_to_end_test;
pub mod session_history_test;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Once;
use text_humanizer::{Humanizer, HumanizerConfig};

static INIT: Once = Once::new();

/// Initialize test environment (run once)
///
/// Installs a test logger so `RUST_LOG=debug cargo test` shows the selected
/// operations for each call.
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Humanizer with default configuration and a fixed seed.
pub fn seeded_humanizer(seed: u64) -> Humanizer {
    init_test_env();
    Humanizer::with_config_and_rng(HumanizerConfig::default(), StdRng::seed_from_u64(seed))
        .expect("default configuration is valid")
}
