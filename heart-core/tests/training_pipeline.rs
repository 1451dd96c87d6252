//! End-to-end tests for the training pipeline and prediction on the
//! resulting artifact, using a small sample of the reference dataset.

use std::collections::HashSet;
use std::path::PathBuf;

use heart_core::logic::dataset::{self, load_csv};
use heart_core::logic::model::{artifact, ModelError, RiskBand};
use heart_core::logic::trainer::{self, TrainerConfig};
use heart_core::{assess, FeatureRecord};
use tempfile::tempdir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("heart_sample.csv")
}

fn reference_row() -> FeatureRecord {
    FeatureRecord {
        age: 63,
        sex: 1,
        cp: 3,
        trestbps: 145,
        chol: 233,
        fbs: 1,
        restecg: 0,
        thalach: 150,
        exang: 0,
        oldpeak: 2.3,
        slope: 0,
        ca: 0,
        thal: 1,
    }
}

fn expected_band(pct: f64) -> RiskBand {
    if pct < 25.0 {
        RiskBand::Low
    } else if pct < 50.0 {
        RiskBand::Moderate
    } else if pct < 75.0 {
        RiskBand::High
    } else {
        RiskBand::VeryHigh
    }
}

#[test]
fn test_fixture_loads() {
    let data = load_csv(&fixture()).unwrap();
    assert_eq!(data.len(), 50);
    assert_eq!(data.positives(), 20);
    assert_eq!(data.row(0).unwrap(), reference_row());
}

#[test]
fn test_split_partitions_fixture() {
    let data = load_csv(&fixture()).unwrap();
    let split = dataset::train_test_split(&data, 0.2, 42).unwrap();

    assert_eq!(split.train.len() + split.test.len(), data.len());
    assert_eq!(split.test.len(), 10);

    let train: HashSet<_> = split.train_indices.iter().collect();
    assert!(split.test_indices.iter().all(|i| !train.contains(i)));
}

#[test]
fn test_training_is_deterministic() {
    let dir = tempdir().unwrap();
    let first = TrainerConfig {
        dataset_path: fixture(),
        model_path: dir.path().join("a.json"),
        ..TrainerConfig::default()
    };
    let second = TrainerConfig {
        model_path: dir.path().join("b.json"),
        ..first.clone()
    };

    let a = trainer::run(&first).unwrap().model;
    let b = trainer::run(&second).unwrap().model;

    assert_eq!(a.coefficients, b.coefficients);
    assert_eq!(a.intercept.to_bits(), b.intercept.to_bits());
    assert_eq!(a.solver, b.solver);
}

#[test]
fn test_reference_row_end_to_end() {
    let dir = tempdir().unwrap();
    let config = TrainerConfig {
        dataset_path: fixture(),
        model_path: dir.path().join("model.json"),
        ..TrainerConfig::default()
    };
    trainer::run(&config).unwrap();

    let model = artifact::load(&config.model_path).unwrap();
    let [p0, p1] = model.predict_proba(&reference_row());

    assert!((0.0..=1.0).contains(&p1));
    assert!((p0 + p1 - 1.0).abs() < 1e-12);

    let assessment = assess(&model, &reference_row());
    assert!((0.0..=100.0).contains(&assessment.risk_percentage));
    assert_eq!(assessment.band, expected_band(assessment.risk_percentage));
}

#[test]
fn test_probabilities_bounded_over_form_ranges() {
    let dir = tempdir().unwrap();
    let config = TrainerConfig {
        dataset_path: fixture(),
        model_path: dir.path().join("model.json"),
        ..TrainerConfig::default()
    };
    let model = trainer::run(&config).unwrap().model;

    for age in [1u16, 50, 120] {
        for chol in [100u16, 600] {
            for oldpeak in [0.0, 7.0] {
                let record = FeatureRecord {
                    age,
                    chol,
                    oldpeak,
                    ..reference_row()
                };
                let a = assess(&model, &record);
                assert!((0.0..=1.0).contains(&a.probability));
                assert!((0.0..=100.0).contains(&a.risk_percentage));
            }
        }
    }
}

#[test]
fn test_predictor_without_training_reports_missing_model() {
    let dir = tempdir().unwrap();
    let result = artifact::load(&dir.path().join("model.json"));
    assert!(matches!(result, Err(ModelError::NotFound(_))));
}
