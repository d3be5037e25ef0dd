//! # سرویس Wrapped
//!
//! منطق کسب‌وکار ساخت گزارش wrapped: اعتبارسنجی ورودی، fetch، aggregation
//! و ساخت لینک اشتراک‌گذاری.
//!
//! ## مفاهیم Rust:
//! - Business Logic: قوانین برنامه اینجا پیاده‌سازی میشن
//! - Separation of Concerns: جداسازی از لایه fetch با trait
//! - Error Handling: مدیریت خطا در سطح business

use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    config::Config,
    error::{AppError, Result},
    hashnode::StatsProvider,
    models::WrappedResponse,
    services::aggregator,
    utils,
};

use super::Service;

// =====================================
// Wrapped Service
// =====================================
/// سرویس ساخت گزارش wrapped
///
/// # مسئولیت‌ها:
/// - اعتبارسنجی یوزرنیم و credential قبل از هر تماس شبکه‌ای
/// - یک fetch در هر submission، بدون retry
/// - aggregation و ساخت پاسخ نهایی
pub struct WrappedService {
    provider: Arc<dyn StatsProvider>,
    config: Arc<Config>,
}

// پیاده‌سازی marker trait
impl Service for WrappedService {}

impl WrappedService {
    /// ساخت سرویس جدید
    #[must_use]
    pub fn new(provider: Arc<dyn StatsProvider>, config: Arc<Config>) -> Self {
        Self { provider, config }
    }

    /// ساخت گزارش wrapped برای یک یوزرنیم
    ///
    /// # مفاهیم:
    /// - `#[instrument]`: macro برای tracing خودکار
    /// - `skip(self)`: از لاگ کردن self صرفنظر کن
    /// - خطاهای ورودی و پیکربندی قبل از تماس شبکه چک میشن
    ///
    /// # Errors
    /// - `Validation`: یوزرنیم خالی
    /// - `BadRequest`: یوزرنیم با فرمت نامعتبر
    /// - `Config`: نبودن credential
    /// - خطاهای fetch (نگاشت شده از `FetchError`)
    #[instrument(skip(self))]
    pub async fn generate_wrapped(&self, username: &str) -> Result<WrappedResponse> {
        // Step 1: اعتبارسنجی ورودی
        let username = username.trim();

        if username.is_empty() {
            return Err(AppError::empty_username());
        }

        if !utils::is_valid_username(username) {
            return Err(AppError::BadRequest("Invalid username format".to_string()));
        }

        // Step 2: چک کردن credential
        // نبودنش خطای پیکربندی هست، نه خطای runtime لایه fetch
        if self.config.access_token.trim().is_empty() {
            return Err(AppError::Config(
                "Access token not configured. Please check your .env file contains ACCESS_TOKEN"
                    .to_string(),
            ));
        }

        // Step 3: یک تماس شبکه‌ای، تا انتها await میشه
        // خطای fetch با `?` و From به AppError تبدیل میشه
        let record = self.provider.fetch_user(username).await?;

        // Step 4: aggregation روی رکورد کامل
        // هیچوقت روی داده ناقص اجرا نمیشه - fetch ناموفق بالاتر برگشته
        let aggregation = aggregator::aggregate(&record, self.config.target_year);

        // Step 5: لینک اشتراک‌گذاری از متریک‌های محاسبه شده
        let share_url = utils::build_share_url(&aggregation.metrics, self.config.target_year);

        info!(
            username = %record.username,
            post_count = aggregation.post_count,
            "Generated wrapped stats"
        );

        Ok(WrappedResponse {
            username: record.username,
            year: self.config.target_year,
            post_count: aggregation.post_count,
            metrics: aggregation.metrics,
            share_url,
        })
    }
}
