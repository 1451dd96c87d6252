//! JSON API handlers

use axum::Json;
use heart_core::logic::features::options::{FormSection, FORM_SECTIONS};
use heart_core::FeatureRecord;
use validator::Validate;

use crate::middleware::model::LoadedModel;
use crate::models::{AssessmentResponse, PatientInput};
use crate::AppResult;

/// POST /api/v1/predict
pub async fn predict(
    LoadedModel(model): LoadedModel,
    Json(input): Json<PatientInput>,
) -> AppResult<Json<AssessmentResponse>> {
    input.validate()?;

    let assessment = heart_core::assess(&model, &FeatureRecord::from(input));
    tracing::debug!("API prediction served");

    Ok(Json(assessment.into()))
}

/// GET /api/v1/schema - field metadata used to build input forms
pub async fn schema() -> Json<&'static [FormSection]> {
    Json(FORM_SECTIONS)
}
