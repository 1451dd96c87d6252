//! Seeded train/test partitioning

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{Dataset, DatasetError};

/// Default held-out fraction
pub const DEFAULT_TEST_SIZE: f64 = 0.2;

/// Default shuffle seed
pub const DEFAULT_SEED: u64 = 42;

/// Disjoint train/test partition of one dataset
#[derive(Debug, Clone)]
pub struct Split {
    pub train: Dataset,
    pub test: Dataset,
    /// Source row indices of `train`
    pub train_indices: Vec<usize>,
    /// Source row indices of `test`
    pub test_indices: Vec<usize>,
}

/// Number of held-out rows for `n` rows (rounded up)
pub fn test_rows_for(n: usize, test_size: f64) -> usize {
    (test_size * n as f64).ceil() as usize
}

/// Shuffle row indices with `seed` and cut off `ceil(test_size * n)` test rows
pub fn train_test_split(dataset: &Dataset, test_size: f64, seed: u64) -> Result<Split, DatasetError> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(DatasetError::Split(format!(
            "test_size must be in (0, 1), got {}",
            test_size
        )));
    }

    let n = dataset.len();
    let n_test = test_rows_for(n, test_size);
    if n_test == 0 || n_test >= n {
        return Err(DatasetError::Split(format!(
            "cannot split {} rows with test_size {}: a partition would be empty",
            n, test_size
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let (test_indices, train_indices) = indices.split_at(n_test);
    let test_indices = test_indices.to_vec();
    let train_indices = train_indices.to_vec();

    log::debug!(
        "Split {} rows into {} train / {} test (seed {})",
        n,
        train_indices.len(),
        test_indices.len(),
        seed
    );

    Ok(Split {
        train: dataset.select(&train_indices),
        test: dataset.select(&test_indices),
        train_indices,
        test_indices,
    })
}
