//! Trainer - Offline batch job
//!
//! load dataset → seeded split → fit on the training part → persist.
//! The held-out part is produced by the split and counted, nothing more;
//! no evaluation metrics are computed.

use std::path::PathBuf;

use thiserror::Error;

use crate::constants;
use crate::logic::dataset::{self, DatasetError};
use crate::logic::model::{artifact, ModelError, SolverSettings, TrainedModel};

#[derive(Debug, Error)]
pub enum TrainerError {
    #[error("Dataset Error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Model Error: {0}")]
    Model(#[from] ModelError),
}

/// Trainer settings
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    pub dataset_path: PathBuf,
    pub model_path: PathBuf,
    pub test_size: f64,
    pub seed: u64,
    pub solver: SolverSettings,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(constants::DEFAULT_DATASET_PATH),
            model_path: PathBuf::from(constants::DEFAULT_MODEL_PATH),
            test_size: dataset::DEFAULT_TEST_SIZE,
            seed: dataset::DEFAULT_SEED,
            solver: SolverSettings::default(),
        }
    }
}

impl TrainerConfig {
    /// Defaults overridden by environment variables
    pub fn from_env() -> Self {
        Self {
            dataset_path: constants::get_dataset_path(),
            model_path: constants::get_model_path(),
            test_size: constants::get_test_size(),
            seed: constants::get_seed(),
            solver: SolverSettings::default(),
        }
    }
}

/// What a training run produced
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub model: TrainedModel,
    pub model_path: PathBuf,
    pub total_rows: usize,
    pub train_rows: usize,
    pub test_rows: usize,
}

/// Fit a model without touching the filesystem
pub fn fit(data: &dataset::Dataset, config: &TrainerConfig) -> Result<(TrainedModel, usize), TrainerError> {
    let split = dataset::train_test_split(data, config.test_size, config.seed)?;

    log::info!(
        "Training on {} rows, holding out {} rows (seed {})",
        split.train.len(),
        split.test.len(),
        config.seed
    );

    let fit = config.solver.fit(&split.train.features, &split.train.labels)?;
    log::info!("Solver finished (C={}, tol={})", config.solver.c, config.solver.tol);

    let model = TrainedModel::from_fit(
        fit,
        config.solver,
        split.train.len(),
        split.test.len(),
        config.seed,
    );

    Ok((model, split.test.len()))
}

/// Run the full training pipeline and write the artifact
pub fn run(config: &TrainerConfig) -> Result<TrainingReport, TrainerError> {
    let data = dataset::load_csv(&config.dataset_path)?;
    let (model, test_rows) = fit(&data, config)?;

    artifact::save(&model, &config.model_path)?;

    Ok(TrainingReport {
        total_rows: data.len(),
        train_rows: model.train_rows,
        test_rows,
        model_path: config.model_path.clone(),
        model,
    })
}
