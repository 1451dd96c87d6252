//! Prediction response payload

use heart_core::{RiskAssessment, RiskBand, Tone};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub probability: f64,
    pub risk_percentage: f64,
    pub formatted_percentage: String,
    pub band: RiskBand,
    pub label: &'static str,
    pub message: &'static str,
    pub tone: Tone,
    pub progress: u8,
}

impl From<RiskAssessment> for AssessmentResponse {
    fn from(a: RiskAssessment) -> Self {
        Self {
            probability: a.probability,
            risk_percentage: a.risk_percentage,
            formatted_percentage: a.formatted_percentage(),
            band: a.band,
            label: a.band.label(),
            message: a.band.message(),
            tone: a.band.tone(),
            progress: a.progress,
        }
    }
}
