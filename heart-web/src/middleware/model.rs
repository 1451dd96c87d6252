//! Model guard middleware
//!
//! Interactive routes need a loaded model. When none is available the
//! request is answered here and never reaches a handler.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use heart_core::TrainedModel;

use crate::state::ModelState;
use crate::views;
use crate::{AppError, AppState};

/// Model handed to handlers behind the guard
#[derive(Debug, Clone)]
pub struct LoadedModel(pub Arc<TrainedModel>);

/// Middleware: page routes, answers 503 with the blocking page
pub async fn require_model_page(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    match &state.model {
        ModelState::Ready(model) => {
            req.extensions_mut().insert(LoadedModel(model.clone()));
            next.run(req).await
        }
        ModelState::Missing { path } => {
            tracing::warn!("Rejecting {} {}: no model at {}", req.method(), req.uri(), path.display());
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Html(views::render_model_missing(path)),
            )
                .into_response()
        }
    }
}

/// Middleware: API routes, answers 503 with a JSON error
pub async fn require_model_api(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    match &state.model {
        ModelState::Ready(model) => {
            req.extensions_mut().insert(LoadedModel(model.clone()));
            Ok(next.run(req).await)
        }
        ModelState::Missing { path } => Err(AppError::ModelUnavailable(format!(
            "no model at {}",
            path.display()
        ))),
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for LoadedModel
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<LoadedModel>()
            .cloned()
            .ok_or_else(|| AppError::InternalError("model guard not applied".to_string()))
    }
}
