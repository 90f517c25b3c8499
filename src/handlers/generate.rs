use axum::{Json, extract::State, extract::rejection::JsonRejection};
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

use crate::error::Error;
use crate::metrics::{REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{GenerateRequest, GenerateResponse};
use crate::state::AppState;

pub async fn generate_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, Error> {
    REQUEST_TOTAL.inc();

    let Json(req) = payload.inspect_err(|rejection| {
        warn!(status = rejection.status().as_u16(), "Rejected request body");
    })?;

    let start_time = Instant::now();
    let result = state.generator.generate(&req).await;
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    Ok(Json(GenerateResponse { result: result? }))
}
