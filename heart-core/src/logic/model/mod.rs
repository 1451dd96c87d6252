//! Model Module - Logistic classifier, artifact persistence, risk banding

pub mod artifact;
pub mod logistic;
pub mod risk;

// Re-export common types
pub use artifact::{TrainedModel, FORMAT_VERSION};
pub use logistic::{FitResult, SolverSettings};
pub use risk::{assess, RiskAssessment, RiskBand, Tone};

use std::path::PathBuf;
use thiserror::Error;

use crate::logic::features::LayoutMismatchError;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization Error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Checksum mismatch: artifact says {expected}, content hashes to {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Unsupported artifact format v{found} (expected v{expected})")]
    UnsupportedFormat { found: u32, expected: u32 },

    #[error(transparent)]
    LayoutMismatch(#[from] LayoutMismatchError),

    #[error("Invalid model: {0}")]
    Invalid(String),

    #[error("Invalid training data: {0}")]
    InvalidTrainingData(String),

    #[error("Fit Error: {0}")]
    Fit(String),
}
