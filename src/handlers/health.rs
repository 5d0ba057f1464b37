// src/handlers/health.rs

use axum::{Json, response::IntoResponse};

use crate::{error::AppError, models::health::HealthResponse};

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        checked_at: chrono::Utc::now(),
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
