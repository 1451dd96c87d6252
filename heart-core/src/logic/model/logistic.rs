//! Logistic regression fitting
//!
//! Fitting is delegated to `linfa-logistic` (L-BFGS on the L2-penalised log
//! loss, unpenalised intercept). This module owns the solver settings that
//! get recorded with the artifact, input checks, and the conversion of the
//! fitted parameters into plain coefficients oriented towards label 1.

use linfa::prelude::*;
use linfa_logistic::LogisticRegression;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::ModelError;

/// Inverse regularisation strength
pub const DEFAULT_C: f64 = 1.0;

/// Gradient-norm tolerance
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Maximum solver iterations
pub const DEFAULT_MAX_ITER: u64 = 100;

/// Numerically stable logistic function
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Solver settings (serialised into the artifact)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    pub c: f64,
    pub tol: f64,
    pub max_iter: u64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            c: DEFAULT_C,
            tol: DEFAULT_TOLERANCE,
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

/// Fitted weights, P(y = 1 | x) = σ(wᵀx + b)
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl SolverSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_c(mut self, c: f64) -> Self {
        self.c = c;
        self
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    pub fn with_max_iter(mut self, max_iter: u64) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Fit on `x` (rows × features) and 0/1 labels `y`
    pub fn fit(&self, x: &Array2<f64>, y: &Array1<f64>) -> Result<FitResult, ModelError> {
        self.validate(x, y)?;

        let targets: Array1<usize> = y.mapv(|v| usize::from(v > 0.5));
        let dataset = Dataset::new(x.clone(), targets);

        let fitted = LogisticRegression::default()
            .alpha(1.0 / self.c)
            .gradient_tolerance(self.tol)
            .max_iterations(self.max_iter)
            .with_intercept(true)
            .fit(&dataset)
            .map_err(|e| ModelError::Fit(e.to_string()))?;

        let mut coefficients = fitted.params().to_vec();
        let mut intercept = fitted.intercept();

        // The fitted model scores whichever class it picked as positive;
        // flip the sign when that class is 0.
        let predicted = fitted.predict(x);
        let reference = (0..x.nrows()).find_map(|i| {
            let z = intercept + x.row(i).dot(fitted.params());
            (z != 0.0).then_some((z > 0.0, predicted[i] == 1))
        });
        if let Some((z_positive, predicts_one)) = reference {
            if z_positive != predicts_one {
                coefficients.iter_mut().for_each(|w| *w = -*w);
                intercept = -intercept;
            }
        }

        log::debug!("Fitted intercept {:.6}, |w|₂ {:.6}", intercept, norm(&coefficients));

        Ok(FitResult {
            coefficients,
            intercept,
        })
    }

    fn validate(&self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ModelError> {
        if !(self.c > 0.0) || !(self.tol > 0.0) || self.max_iter == 0 {
            return Err(ModelError::InvalidTrainingData(format!(
                "invalid solver settings: C={}, tol={}, max_iter={}",
                self.c, self.tol, self.max_iter
            )));
        }
        let (n, features) = x.dim();
        if n == 0 || features == 0 {
            return Err(ModelError::InvalidTrainingData("empty design matrix".to_string()));
        }
        if y.len() != n {
            return Err(ModelError::InvalidTrainingData(format!(
                "{} rows but {} labels",
                n,
                y.len()
            )));
        }
        if x.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::InvalidTrainingData("non-finite feature value".to_string()));
        }
        if y.iter().any(|&v| v != 0.0 && v != 1.0) {
            return Err(ModelError::InvalidTrainingData("labels must be 0 or 1".to_string()));
        }
        let positives = y.iter().filter(|&&v| v == 1.0).count();
        if positives == 0 || positives == n {
            return Err(ModelError::InvalidTrainingData(
                "training data contains a single class".to_string(),
            ));
        }
        Ok(())
    }
}

fn norm(w: &[f64]) -> f64 {
    w.iter().map(|v| v * v).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn separable() -> (Array2<f64>, Array1<f64>) {
        let x = array![
            [2.0, 1.5], [1.8, 2.2], [2.5, 1.9], [3.0, 2.8], [2.2, 1.7],
            [7.0, 8.5], [6.8, 7.2], [8.0, 6.5], [7.5, 8.0], [6.2, 7.8],
        ];
        let y = array![0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        (x, y)
    }

    fn proba(fit: &FitResult, x: &[f64]) -> f64 {
        let z = fit.intercept + fit.coefficients.iter().zip(x).map(|(w, v)| w * v).sum::<f64>();
        sigmoid(z)
    }

    #[test]
    fn test_sigmoid_is_stable() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(1000.0) <= 1.0);
        assert!(sigmoid(-1000.0) >= 0.0);
        assert!(sigmoid(-1000.0).is_finite());
        assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fit_separates_classes() {
        let (x, y) = separable();
        let fit = SolverSettings::new().fit(&x, &y).unwrap();

        assert_eq!(fit.coefficients.len(), 2);
        assert!(proba(&fit, &[2.0, 2.0]) < 0.5);
        assert!(proba(&fit, &[7.5, 7.5]) > 0.5);
    }

    #[test]
    fn test_orientation_does_not_depend_on_row_order() {
        let (x, y) = separable();
        // Positive rows first
        let order = [5, 6, 7, 8, 9, 0, 1, 2, 3, 4];
        let x_rev = x.select(ndarray::Axis(0), &order);
        let y_rev = y.select(ndarray::Axis(0), &order);

        let fit = SolverSettings::new().fit(&x_rev, &y_rev).unwrap();
        assert!(proba(&fit, &[2.0, 2.0]) < 0.5);
        assert!(proba(&fit, &[7.5, 7.5]) > 0.5);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let (x, y) = separable();
        let a = SolverSettings::new().fit(&x, &y).unwrap();
        let b = SolverSettings::new().fit(&x, &y).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_stronger_regularisation_shrinks_weights() {
        let (x, y) = separable();
        let loose = SolverSettings::new().with_c(10.0).fit(&x, &y).unwrap();
        let tight = SolverSettings::new().with_c(0.01).fit(&x, &y).unwrap();

        assert!(norm(&tight.coefficients) < norm(&loose.coefficients));
    }

    #[test]
    fn test_rejects_single_class() {
        let (x, _) = separable();
        let y = Array1::zeros(x.nrows());
        assert!(matches!(
            SolverSettings::new().fit(&x, &y),
            Err(ModelError::InvalidTrainingData(_))
        ));
    }

    #[test]
    fn test_rejects_label_mismatch() {
        let (x, _) = separable();
        let y = array![0.0, 1.0];
        assert!(SolverSettings::new().fit(&x, &y).is_err());
    }

    #[test]
    fn test_rejects_bad_settings() {
        let (x, y) = separable();
        assert!(SolverSettings::new().with_c(0.0).fit(&x, &y).is_err());
        assert!(SolverSettings::new().with_max_iter(0).fit(&x, &y).is_err());
    }
}
