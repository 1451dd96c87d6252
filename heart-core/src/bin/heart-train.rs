//! Heart Disease Risk - Trainer
//!
//! Reads the dataset, fits the classifier and writes the model artifact.
//! Paths and split settings come from `HEART_*` environment variables.

use anyhow::Context;

use heart_core::logic::trainer::{self, TrainerConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = TrainerConfig::from_env();
    log::info!(
        "{} trainer v{} (dataset: {}, model: {})",
        heart_core::constants::APP_NAME,
        heart_core::constants::APP_VERSION,
        config.dataset_path.display(),
        config.model_path.display()
    );

    let report = trainer::run(&config)
        .with_context(|| format!("training from {} failed", config.dataset_path.display()))?;

    log::debug!("Held out {} of {} rows", report.test_rows, report.total_rows);
    println!("Model trained and saved as {}", report.model_path.display());

    Ok(())
}
