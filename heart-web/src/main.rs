//! Heart Disease Risk - Predictor Server
//!
//! Serves the single-page risk predictor and a small JSON API on top of a
//! model artifact produced by `heart-train`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  HEART RISK PREDICTOR                    │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌────────────┐   ┌──────────────┐   ┌────────────────┐  │
//! │  │  Form /    │   │  Model guard │   │  heart-core    │  │
//! │  │  JSON API  │──▶│  (503 when   │──▶│  assess()      │  │
//! │  │  (Axum)    │   │   missing)   │   │                │  │
//! │  └────────────┘   └──────────────┘   └───────┬────────┘  │
//! │                                              ▼           │
//! │                                     ┌────────────────┐   │
//! │                                     │  model.json    │   │
//! │                                     └────────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod state;
mod views;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::{
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::net::SocketAddr;

pub use error::{AppError, AppResult};

use state::ModelState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "heart_web=debug,tower_http=debug".into());
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Heart Risk Predictor starting...");
    tracing::info!("Model: {}", config.model_path.display());

    // Load model once; a missing file blocks interaction, anything else is fatal
    let model = ModelState::load(&config.model_path)
        .with_context(|| format!("failed to load model from {}", config.model_path.display()))?;

    match &model {
        ModelState::Ready(m) => tracing::info!(
            "Model loaded (trained {}, {} training rows)",
            m.trained_at.to_rfc3339(),
            m.train_rows
        ),
        ModelState::Missing { path } => tracing::error!(
            "Model file not found at {}. Please run heart-train to train and save the model.",
            path.display()
        ),
    }

    // Build application state
    let state = AppState {
        model,
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub model: ModelState,
    pub config: config::Config,
}

/// Create the main router with all routes
pub(crate) fn create_router(state: AppState) -> Router {
    // Public routes (no model required)
    let public_routes = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/schema", get(handlers::api::schema));

    // Page routes (HTML, blocked by the model-missing page)
    let page_routes = Router::new()
        .route("/", get(handlers::form::index))
        .route("/predict", post(handlers::form::predict))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::model::require_model_page,
        ));

    // API routes (JSON, blocked with a JSON error)
    let api_routes = Router::new()
        .route("/api/v1/predict", post(handlers::api::predict))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::model::require_model_api,
        ));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .merge(page_routes)
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
