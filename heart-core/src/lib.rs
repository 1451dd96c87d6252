//! Heart Disease Risk - Core
//!
//! Feature schema, dataset loading, logistic regression training, model
//! artifact persistence and risk banding. Shared by the `heart-train`
//! binary and the web predictor.

pub mod constants;
pub mod logic;

pub use logic::features::{FeatureRecord, FEATURE_COUNT, FEATURE_LAYOUT};
pub use logic::model::{assess, ModelError, RiskAssessment, RiskBand, Tone, TrainedModel};
pub use logic::trainer::{TrainerConfig, TrainerError, TrainingReport};
