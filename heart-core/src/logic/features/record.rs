//! Feature Record - The 13-field patient input to the classifier
//!
//! Field order in `to_vector` follows `FEATURE_LAYOUT` exactly. There is no
//! semantic validation here; bounds live in `options` and are enforced by
//! the input surface.

use serde::{Deserialize, Serialize};

use super::layout::FEATURE_COUNT;

/// One patient's medical attributes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub age: u16,
    pub sex: u8,
    pub cp: u8,
    pub trestbps: u16,
    pub chol: u16,
    pub fbs: u8,
    pub restecg: u8,
    pub thalach: u16,
    pub exang: u8,
    pub oldpeak: f64,
    pub slope: u8,
    pub ca: u8,
    pub thal: u8,
}

impl FeatureRecord {
    /// Values in `FEATURE_LAYOUT` order
    pub fn to_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            f64::from(self.age),
            f64::from(self.sex),
            f64::from(self.cp),
            f64::from(self.trestbps),
            f64::from(self.chol),
            f64::from(self.fbs),
            f64::from(self.restecg),
            f64::from(self.thalach),
            f64::from(self.exang),
            self.oldpeak,
            f64::from(self.slope),
            f64::from(self.ca),
            f64::from(self.thal),
        ]
    }

    /// Build from values in `FEATURE_LAYOUT` order.
    ///
    /// Integer fields are rounded and saturate at their type bounds.
    pub fn from_vector(values: &[f64; FEATURE_COUNT]) -> Self {
        let small = |v: f64| v.round().clamp(0.0, f64::from(u8::MAX)) as u8;
        let wide = |v: f64| v.round().clamp(0.0, f64::from(u16::MAX)) as u16;

        Self {
            age: wide(values[0]),
            sex: small(values[1]),
            cp: small(values[2]),
            trestbps: wide(values[3]),
            chol: wide(values[4]),
            fbs: small(values[5]),
            restecg: small(values[6]),
            thalach: wide(values[7]),
            exang: small(values[8]),
            oldpeak: values[9],
            slope: small(values[10]),
            ca: small(values[11]),
            thal: small(values[12]),
        }
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        super::layout::feature_index(name).map(|i| self.to_vector()[i])
    }
}

impl Default for FeatureRecord {
    /// Initial values shown on a fresh form
    fn default() -> Self {
        Self {
            age: 50,
            sex: 0,
            cp: 0,
            trestbps: 120,
            chol: 200,
            fbs: 0,
            restecg: 0,
            thalach: 150,
            exang: 0,
            oldpeak: 1.0,
            slope: 0,
            ca: 0,
            thal: 0,
        }
    }
}
