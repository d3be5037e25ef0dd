//! # Wrapped Handlers
//!
//! Handler‌های مربوط به ساخت گزارش wrapped

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    error::Result,
    models::{ApiResponse, WrappedRequest, WrappedResponse},
    services::AppState,
};

// =====================================
// Generate Wrapped (POST)
// =====================================
/// ساخت گزارش wrapped از بدنه JSON
///
/// # مفاهیم:
/// - `State<AppState>`: استخراج state از request
/// - `Json<T>`: استخراج و deserialize بدنه JSON
///
/// # Endpoint
/// `POST /api/wrapped`
///
/// # Request Body
/// ```json
/// {
///   "username": "sophia"
/// }
/// ```
///
/// # Response
/// ```json
/// {
///   "success": true,
///   "data": {
///     "username": "sophia",
///     "year": 2024,
///     "post_count": 12,
///     "metrics": [
///       {"title": "Total Articles", "value": "12", "description": "Articles published in 2024"},
///       ...
///     ],
///     "share_url": "https://twitter.com/intent/tweet?text=..."
///   }
/// }
/// ```
pub async fn generate_wrapped(
    State(state): State<AppState>,
    Json(request): Json<WrappedRequest>,
) -> Result<Json<ApiResponse<WrappedResponse>>> {
    // اعتبارسنجی DTO
    // `?` خطا رو به بالا منتقل میکنه
    request.validate()?;

    // فراخوانی سرویس
    let wrapped = state
        .wrapped_service
        .generate_wrapped(&request.username)
        .await?;

    Ok(Json(ApiResponse::success(wrapped)))
}

// =====================================
// Get Wrapped (GET)
// =====================================
/// ساخت گزارش wrapped با پارامتر مسیر
///
/// # مفاهیم:
/// - `Path<String>`: استخراج پارامتر از URL
/// - همون سرویس، extractor متفاوت
///
/// # Endpoint
/// `GET /api/wrapped/:username`
pub async fn get_wrapped(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<WrappedResponse>>> {
    let wrapped = state.wrapped_service.generate_wrapped(&username).await?;

    Ok(Json(ApiResponse::success(wrapped)))
}
