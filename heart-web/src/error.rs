//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use heart_core::FEATURE_LAYOUT;
use serde_json::json;
use validator::ValidationErrors;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No trained model is available to this process
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    // Validation errors
    #[error("Validation error: {}", .0.join("; "))]
    ValidationError(Vec<String>),

    // Generic errors
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::ModelUnavailable(msg) => {
                tracing::error!("Model unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "Model file not found. Please run heart-train to train and save the model.".to_string())
            }
            AppError::ValidationError(msgs) => (StatusCode::BAD_REQUEST, msgs.join("; ")),
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationError(validation_messages(&errors))
    }
}

/// Flatten validator output into one message per field, in feature order
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by_key(|(name, _)| {
        let name = name.to_string();
        FEATURE_LAYOUT
            .iter()
            .position(|f| *f == name)
            .unwrap_or(usize::MAX)
    });

    fields
        .into_iter()
        .flat_map(|(name, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{} is invalid ({})", name, e.code),
            })
        })
        .collect()
}
