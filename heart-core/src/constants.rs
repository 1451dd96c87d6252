//! Central Configuration Constants
//!
//! Single source of truth for configuration defaults shared by the trainer
//! and the predictor.

use std::path::PathBuf;

use crate::logic::dataset::{DEFAULT_SEED, DEFAULT_TEST_SIZE};

/// Default training dataset location
pub const DEFAULT_DATASET_PATH: &str = "heart.csv";

/// Default model artifact location
pub const DEFAULT_MODEL_PATH: &str = "model.json";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Heart Disease Risk Predictor";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get dataset path from environment or use default
pub fn get_dataset_path() -> PathBuf {
    std::env::var("HEART_DATASET_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET_PATH))
}

/// Get model artifact path from environment or use default
pub fn get_model_path() -> PathBuf {
    std::env::var("HEART_MODEL_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH))
}

/// Get held-out fraction from environment or use default
pub fn get_test_size() -> f64 {
    std::env::var("HEART_TEST_SIZE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TEST_SIZE)
}

/// Get split seed from environment or use default
pub fn get_seed() -> u64 {
    std::env::var("HEART_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED)
}
