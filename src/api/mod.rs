//! # لایه API
//!
//! این ماژول HTTP handlers و routing رو مدیریت میکنه.
//!
//! ## مفاهیم Rust + Axum:
//! - **Router**: تعریف مسیرها
//! - **Handler Functions**: پردازش request‌ها
//! - **State**: اشتراک state بین handlers
//! - **Middleware**: پردازش قبل/بعد از handler
//! - **Tower**: زیرساخت middleware
//!
//! ## ساختار URL‌ها:
//! - `POST /api/wrapped` - ساخت گزارش wrapped (بدنه JSON)
//! - `GET /api/wrapped/:username` - ساخت گزارش wrapped با پارامتر مسیر
//! - `GET /health` - Health check

mod handlers;
mod middleware;

pub use handlers::*;
pub use middleware::*;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::services::AppState;

// =====================================
// Router Builder
// =====================================
/// ساخت Router اصلی برنامه
///
/// # مفاهیم:
/// - `Router::new()`: شروع router خالی
/// - `.nest()`: گروه‌بندی route‌ها
/// - `.layer()`: اضافه کردن middleware
/// - `.with_state()`: تزریق state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // API routes
        .nest("/api", api_routes())

        // Health check
        .route("/health", get(handlers::health::health_check))

        // Middleware‌های تابعی
        .layer(axum_middleware::from_fn(middleware::request_timing))
        .layer(axum_middleware::from_fn(middleware::request_id))
        .layer(axum_middleware::from_fn(middleware::security_headers))

        // Middleware‌های عمومی
        .layer(
            ServiceBuilder::new()
                // Tracing - لاگ کردن request‌ها
                .layer(TraceLayer::new_for_http())

                // Timeout - حداکثر زمان پردازش
                .layer(TimeoutLayer::new(Duration::from_secs(60)))

                // Compression - فشرده‌سازی response
                .layer(CompressionLayer::new())

                // CORS - اجازه دسترسی از دامنه‌های دیگه
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )

        // تزریق state به همه handlers
        .with_state(state)
}

/// Route‌های API
///
/// # مفاهیم:
/// - Nested routing: گروه‌بندی route‌ها
fn api_routes() -> Router<AppState> {
    Router::new().nest("/wrapped", wrapped_routes())
}

/// Route‌های wrapped
fn wrapped_routes() -> Router<AppState> {
    Router::new()
        // ساخت گزارش با بدنه JSON
        .route("/", post(handlers::wrapped::generate_wrapped))

        // ساخت گزارش با پارامتر مسیر
        .route("/:username", get(handlers::wrapped::get_wrapped))
}
