//! Machine Failure Prediction Service
//!
//! Serves failure predictions for industrial machines from two pre-trained
//! ONNX classifiers: a binary failure detector and a multiclass
//! failure-type classifier. The models and the fitted min-max scaler are
//! loaded once at startup into explicit read-only handles; every request
//! runs the same synchronous pipeline over them:
//!
//! ```text
//! observation -> encode -> normalize -> binary inference
//!                                          |
//!                       not failed <-------+-------> failed
//!                           |                           |
//!                  synthetic "No Failure"      multiclass inference
//!                           |                           |
//!                           +----------> result <-------+
//! ```

mod config;
mod error;
mod handlers;
mod logic;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logic::decision::DecisionConfig;
use logic::model::{ClassifierHandle, MinMaxParams, OnnxClassifier, ScalerHandle};
use logic::pipeline::PredictionEngine;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "predictive_maintenance_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Failure prediction service starting...");

    // Load models and the scaler artifact. A failed load is not fatal:
    // the handle records the unavailable state and the health endpoint
    // reports it, while affected prediction calls fail with 503.
    let binary_model = load_classifier("binary", &config.binary_model_path);
    let failure_type_model = load_classifier("failure type", &config.failure_type_model_path);
    let scaler = load_scaler(&config.scaler_path);

    let engine = PredictionEngine::new(
        binary_model,
        failure_type_model,
        scaler,
        DecisionConfig::default(),
    );

    let state = AppState {
        engine: Arc::new(engine),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PredictionEngine>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/failure/health", get(handlers::health::check))
        .route("/api/v1/failure/predict/binary", post(handlers::predict::binary))
        .route("/api/v1/failure/predict/type", post(handlers::predict::failure_type))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

fn load_classifier(name: &'static str, path: &str) -> ClassifierHandle {
    match OnnxClassifier::load(path) {
        Ok(classifier) => ClassifierHandle::loaded(name, Box::new(classifier)),
        Err(e) => {
            tracing::warn!("Could not load {} model: {:#}", name, e);
            ClassifierHandle::unavailable(name)
        }
    }
}

fn load_scaler(path: &str) -> ScalerHandle {
    match MinMaxParams::load(path) {
        Ok(params) => {
            tracing::info!("Scaler loaded successfully from {}", path);
            ScalerHandle::loaded(params)
        }
        Err(e) => {
            tracing::warn!("Could not load scaler: {:#}", e);
            ScalerHandle::unavailable()
        }
    }
}
