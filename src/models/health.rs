use serde::Serialize;

/// Liveness report returned by `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub checked_at: chrono::DateTime<chrono::Utc>,
}
