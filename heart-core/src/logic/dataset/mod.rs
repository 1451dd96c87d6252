//! Dataset Module - Training data loading and partitioning

pub mod loader;
pub mod split;

pub use loader::{load_csv, load_csv_from_reader, Dataset};
pub use split::{train_test_split, Split, DEFAULT_SEED, DEFAULT_TEST_SIZE};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Schema Error: {0}")]
    Schema(String),

    #[error("Parse Error: row {row}, column '{column}': cannot read '{value}' as a number")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Invalid label at row {row}: {value} (expected 0 or 1)")]
    InvalidLabel { row: usize, value: f64 },

    #[error("Dataset contains no rows")]
    Empty,

    #[error("Split Error: {0}")]
    Split(String),
}
