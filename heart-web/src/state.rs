//! Loaded model state
//!
//! Resolved once at startup. The model is never reloaded or mutated while
//! the process runs; handlers share it through an `Arc`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use heart_core::logic::model::artifact;
use heart_core::{ModelError, TrainedModel};

#[derive(Debug, Clone)]
pub enum ModelState {
    /// Model loaded and validated
    Ready(Arc<TrainedModel>),
    /// No artifact at the configured path; interaction is blocked
    Missing { path: PathBuf },
}

impl ModelState {
    /// Load the artifact at `path`.
    ///
    /// A missing file is not an error here: it yields `Missing` so the
    /// server can explain what to do. Any other failure is returned.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        match artifact::load(path) {
            Ok(model) => Ok(ModelState::Ready(Arc::new(model))),
            Err(ModelError::NotFound(path)) => Ok(ModelState::Missing { path }),
            Err(e) => Err(e),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ModelState::Ready(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_artifact_is_missing_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");

        match ModelState::load(&path).unwrap() {
            ModelState::Missing { path: p } => assert_eq!(p, path),
            other => panic!("expected Missing, got {:?}", other),
        }
    }

    #[test]
    fn test_corrupt_artifact_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, b"{}").unwrap();

        assert!(ModelState::load(&path).is_err());
    }
}
