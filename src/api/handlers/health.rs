//! # Health Check Handler
//!
//! برای بررسی سلامت سرویس

use axum::Json;

use crate::{error::Result, models::HealthResponse};

// =====================================
// Health Check
// =====================================
/// بررسی سلامت سرویس
///
/// # مفاهیم:
/// - Health check برای Kubernetes/Docker
/// - این سرویس state ای نداره که چک بشه - بالا بودن پروسه کافیه
///
/// # Endpoint
/// `GET /health`
///
/// # Response
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse::healthy()))
}
