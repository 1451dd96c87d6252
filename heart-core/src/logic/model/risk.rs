//! Risk Banding
//!
//! Maps P(disease) onto a percentage and one of four ordinal bands.
//! Thresholds are fixed; comparisons are strict less-than, so a value that
//! sits exactly on a boundary belongs to the higher band.

use serde::{Deserialize, Serialize};

use super::artifact::TrainedModel;
use crate::logic::features::FeatureRecord;

/// Upper bound (exclusive) of the Low band, in percent
pub const LOW_UPPER: f64 = 25.0;

/// Upper bound (exclusive) of the Moderate band, in percent
pub const MODERATE_UPPER: f64 = 50.0;

/// Upper bound (exclusive) of the High band, in percent
pub const HIGH_UPPER: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
    VeryHigh,
}

/// Presentation tone of a band's banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Info,
    Warning,
    Error,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Info => "info",
            Tone::Warning => "warning",
            Tone::Error => "error",
        }
    }
}

impl RiskBand {
    pub fn from_percentage(pct: f64) -> Self {
        if pct < LOW_UPPER {
            RiskBand::Low
        } else if pct < MODERATE_UPPER {
            RiskBand::Moderate
        } else if pct < HIGH_UPPER {
            RiskBand::High
        } else {
            RiskBand::VeryHigh
        }
    }

    pub fn from_probability(p: f64) -> Self {
        Self::from_percentage(p * 100.0)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low Risk",
            RiskBand::Moderate => "Moderate Risk",
            RiskBand::High => "High Risk",
            RiskBand::VeryHigh => "Very High Risk",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RiskBand::Low => "The model indicates a Low Risk of heart disease. It's still important to maintain a healthy lifestyle.",
            RiskBand::Moderate => "The model indicates a Moderate Risk of heart disease. Consider consulting a doctor for advice on lifestyle changes.",
            RiskBand::High => "The model indicates a High Risk of heart disease. It is strongly recommended to consult a doctor.",
            RiskBand::VeryHigh => "The model indicates a Very High Risk of heart disease. Please consult a doctor immediately for a full evaluation.",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            RiskBand::Low => Tone::Success,
            RiskBand::Moderate => Tone::Info,
            RiskBand::High => Tone::Warning,
            RiskBand::VeryHigh => Tone::Error,
        }
    }
}

/// Result of one prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// P(disease)
    pub probability: f64,
    /// probability × 100, in [0, 100]
    pub risk_percentage: f64,
    pub band: RiskBand,
    /// Integer part of the percentage (progress bar fill)
    pub progress: u8,
}

impl RiskAssessment {
    pub fn from_probability(probability: f64) -> Self {
        let probability = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
        let risk_percentage = (probability * 100.0).clamp(0.0, 100.0);

        Self {
            probability,
            risk_percentage,
            band: RiskBand::from_percentage(risk_percentage),
            progress: risk_percentage.floor() as u8,
        }
    }

    /// Percentage with two decimals, e.g. `"42.17%"`
    pub fn formatted_percentage(&self) -> String {
        format!("{:.2}%", self.risk_percentage)
    }

    pub fn message(&self) -> &'static str {
        self.band.message()
    }
}

/// Run the model on one record and band the result
pub fn assess(model: &TrainedModel, record: &FeatureRecord) -> RiskAssessment {
    let [_, p_disease] = model.predict_proba(record);
    RiskAssessment::from_probability(p_disease)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(RiskBand::from_percentage(0.0), RiskBand::Low);
        assert_eq!(RiskBand::from_percentage(24.99), RiskBand::Low);
        assert_eq!(RiskBand::from_percentage(25.0), RiskBand::Moderate);
        assert_eq!(RiskBand::from_percentage(49.99), RiskBand::Moderate);
        assert_eq!(RiskBand::from_percentage(50.0), RiskBand::High);
        assert_eq!(RiskBand::from_percentage(74.99), RiskBand::High);
        assert_eq!(RiskBand::from_percentage(75.0), RiskBand::VeryHigh);
        assert_eq!(RiskBand::from_percentage(100.0), RiskBand::VeryHigh);
    }

    #[test]
    fn test_band_is_monotonic() {
        let mut previous = RiskBand::Low;
        for i in 0..=1000 {
            let band = RiskBand::from_probability(i as f64 / 1000.0);
            assert!(band >= previous);
            previous = band;
        }
    }

    #[test]
    fn test_tones_and_messages() {
        assert_eq!(RiskBand::Low.tone(), Tone::Success);
        assert_eq!(RiskBand::Moderate.tone(), Tone::Info);
        assert_eq!(RiskBand::High.tone(), Tone::Warning);
        assert_eq!(RiskBand::VeryHigh.tone(), Tone::Error);
        assert!(RiskBand::VeryHigh.message().contains("Very High Risk"));
    }

    #[test]
    fn test_assessment_from_probability() {
        let a = RiskAssessment::from_probability(0.4217);
        assert_eq!(a.band, RiskBand::Moderate);
        assert_eq!(a.progress, 42);
        assert_eq!(a.formatted_percentage(), "42.17%");

        let full = RiskAssessment::from_probability(1.0);
        assert_eq!(full.progress, 100);
        assert_eq!(full.band, RiskBand::VeryHigh);
    }

    #[test]
    fn test_assessment_clamps_out_of_range() {
        assert_eq!(RiskAssessment::from_probability(1.5).risk_percentage, 100.0);
        assert_eq!(RiskAssessment::from_probability(-0.1).risk_percentage, 0.0);
        assert_eq!(RiskAssessment::from_probability(f64::NAN).band, RiskBand::Low);
    }

    #[test]
    fn test_band_serializes_snake_case() {
        let json = serde_json::to_string(&RiskBand::VeryHigh).unwrap();
        assert_eq!(json, "\"very_high\"");
    }
}
