//! # ماژول سرویس‌ها (Business Logic Layer)
//!
//! این ماژول منطق کسب‌وکار برنامه رو پیاده‌سازی میکنه.
//!
//! ## لایه‌بندی معماری
//!
//! ```text
//! ┌─────────────────┐
//! │    API Layer    │  <-- HTTP handlers (axum)
//! ├─────────────────┤
//! │  Service Layer  │  <-- Orchestration + aggregation (اینجا!)
//! ├─────────────────┤
//! │   Fetch Layer   │  <-- کلاینت GraphQL (hashnode)
//! ├─────────────────┤
//! │  External API   │  <-- gql.hashnode.com
//! └─────────────────┘
//! ```
//!
//! ## مفاهیم Rust:
//! - **Dependency Injection**: تزریق وابستگی‌ها
//! - **Traits برای Abstraction**: interface تعریف کردن
//! - **Arc<T>**: اشتراک امن بین threads
//! - **async/await**: عملیات غیرهمزمان

pub mod aggregator;
mod wrapped_service;

pub use wrapped_service::*;

use std::sync::Arc;

use crate::{
    config::Config,
    error::Result,
    hashnode::HashnodeClient,
};

// =====================================
// Application State
// =====================================
/// وضعیت برنامه که بین همه handlers اشتراک‌گذاری میشه
///
/// # مفاهیم:
/// - `Arc<T>`: Reference counting برای thread-safe sharing
/// - `Clone`: کپی کردن (فقط Arc clone میشه، نه داده)
///
/// ## چرا این ساختار؟
/// - هر request به یک handler میره
/// - handlers باید به services دسترسی داشته باشن
/// - هیچ state قابل تغییری بین درخواست‌ها share نمیشه -
///   هر درخواست تماس شبکه‌ای و UserRecord خودش رو داره
#[derive(Clone)]
pub struct AppState {
    /// تنظیمات برنامه
    pub config: Arc<Config>,

    /// سرویس wrapped
    pub wrapped_service: Arc<WrappedService>,
}

impl AppState {
    /// ساخت AppState جدید
    ///
    /// # مفاهیم:
    /// - Factory method: ساخت object پیچیده
    /// - Dependency Injection: همه وابستگی‌ها تزریق میشن
    ///
    /// # Errors
    /// خطا برمیگردونه اگه کلاینت HTTP ساخته نشه
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);

        // کلاینت fetch پشت trait قرار میگیره
        let client = Arc::new(HashnodeClient::new(&config)?);

        let wrapped_service = Arc::new(WrappedService::new(client, config.clone()));

        Ok(Self {
            config,
            wrapped_service,
        })
    }

    /// دسترسی به config
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// =====================================
// Service Trait
// =====================================
/// Trait پایه برای services
///
/// # مفاهیم:
/// - این یک marker trait هست
/// - همه services باید Send + Sync باشن برای thread-safety
pub trait Service: Send + Sync {}
