//! Model Artifact - Persisted fitted classifier
//!
//! On disk the artifact is a JSON envelope holding the model and the SHA-256
//! of the model's compact JSON encoding:
//!
//! ```json
//! { "checksum": "9f86d0…", "model": { "format_version": 1, ... } }
//! ```
//!
//! Written whole and read whole. Saving overwrites any previous artifact.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::logistic::{sigmoid, FitResult, SolverSettings};
use super::ModelError;
use crate::logic::features::layout::{
    layout_hash, validate_layout, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION,
};
use crate::logic::features::FeatureRecord;

/// Current artifact format version
pub const FORMAT_VERSION: u32 = 1;

/// Fitted logistic classifier, immutable after training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    pub format_version: u32,
    pub feature_version: u8,
    pub layout_hash: u32,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub solver: SolverSettings,
    pub train_rows: usize,
    pub test_rows: usize,
    pub seed: u64,
    pub trained_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    checksum: String,
    model: TrainedModel,
}

impl TrainedModel {
    /// Wrap a solver result with the current feature layout
    pub fn from_fit(
        fit: FitResult,
        solver: SolverSettings,
        train_rows: usize,
        test_rows: usize,
        seed: u64,
    ) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            feature_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            coefficients: fit.coefficients,
            intercept: fit.intercept,
            solver,
            train_rows,
            test_rows,
            seed,
            trained_at: Utc::now(),
        }
    }

    /// Linear score wᵀx + b
    pub fn decision_function(&self, record: &FeatureRecord) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(record.to_vector().iter())
                .map(|(w, v)| w * v)
                .sum::<f64>()
    }

    /// `[P(no disease), P(disease)]`
    pub fn predict_proba(&self, record: &FeatureRecord) -> [f64; 2] {
        let p = sigmoid(self.decision_function(record));
        [1.0 - p, p]
    }

    /// Most likely class (ties go to 0)
    pub fn predict(&self, record: &FeatureRecord) -> u8 {
        let [p0, p1] = self.predict_proba(record);
        u8::from(p1 > p0)
    }

    /// Check the model is usable with the current feature layout
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.format_version != FORMAT_VERSION {
            return Err(ModelError::UnsupportedFormat {
                found: self.format_version,
                expected: FORMAT_VERSION,
            });
        }

        validate_layout(self.feature_version, self.layout_hash)?;

        if self.coefficients.len() != FEATURE_COUNT || self.feature_names.len() != FEATURE_COUNT {
            return Err(ModelError::Invalid(format!(
                "expected {} coefficients, found {}",
                FEATURE_COUNT,
                self.coefficients.len()
            )));
        }
        if self.feature_names.iter().zip(FEATURE_LAYOUT.iter()).any(|(a, b)| a != b) {
            return Err(ModelError::Invalid("feature names do not match layout".to_string()));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|w| !w.is_finite()) {
            return Err(ModelError::Invalid("non-finite coefficient".to_string()));
        }

        Ok(())
    }
}

/// SHA-256 of the model's compact JSON encoding, hex encoded
pub fn checksum(model: &TrainedModel) -> Result<String, ModelError> {
    let bytes = serde_json::to_vec(model)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

/// Save model to disk, replacing any existing artifact
pub fn save(model: &TrainedModel, path: &Path) -> Result<(), ModelError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let envelope = Envelope {
        checksum: checksum(model)?,
        model: model.clone(),
    };

    let json = serde_json::to_vec_pretty(&envelope)?;
    fs::write(path, json)?;

    log::info!("Model artifact written to {}", path.display());
    Ok(())
}

/// Load model from disk with checksum and layout validation
pub fn load(path: &Path) -> Result<TrainedModel, ModelError> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let envelope: Envelope = serde_json::from_slice(&data)?;

    let actual = checksum(&envelope.model)?;
    if actual != envelope.checksum {
        return Err(ModelError::ChecksumMismatch {
            expected: envelope.checksum,
            actual,
        });
    }

    envelope.model.validate()?;

    log::info!(
        "Model loaded from {} (trained {}, {} train rows)",
        path.display(),
        envelope.model.trained_at.to_rfc3339(),
        envelope.model.train_rows
    );

    Ok(envelope.model)
}
