pub mod config;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod prompts;
pub mod provider;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::handlers::{generate_handler, health_handler, metrics_handler};
use crate::state::AppState;

// creating the router with routes
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/generate", post(generate_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}
