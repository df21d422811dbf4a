use axum::Json;
use serde::Serialize;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "customer-services-agent";

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Endpoint: GET /health
pub async fn health_check() -> Json<HealthData> {
    Json(HealthData {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}
