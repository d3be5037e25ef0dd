//! # Data Transfer Objects (DTOs)
//!
//! DTO‌های عمومی که در API استفاده میشن
//!
//! ## مفاهیم:
//! - DTO: برای انتقال داده بین لایه‌ها
//! - Request/Response separation: جداسازی ورودی از خروجی

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::DisplayMetric;

// =====================================
// Generic API Responses
// =====================================
/// پاسخ موفق عمومی
///
/// # مفاهیم:
/// - Generic: کار با هر نوع داده
/// - `T: Serialize`: T باید قابل تبدیل به JSON باشه
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// ساخت پاسخ موفق
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    /// اضافه کردن پیام
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

// =====================================
// Wrapped Request/Response
// =====================================
/// درخواست ساخت گزارش wrapped
///
/// # مفاهیم:
/// - `#[derive(Validate)]`: اعتبارسنجی خودکار
/// - `#[validate(...)]`: قوانین اعتبارسنجی
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WrappedRequest {
    /// یوزرنیم Hashnode
    #[validate(length(min = 1, max = 40, message = "Please enter a username"))]
    pub username: String,
}

/// پاسخ گزارش wrapped
///
/// این DTO به کلاینت ارسال میشه
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrappedResponse {
    /// یوزرنیم برگشتی از API (برچسب نمایش)
    pub username: String,

    /// سال گزارش
    pub year: i32,

    /// تعداد پست‌های باقی‌مونده بعد از فیلتر سال
    ///
    /// صفر با لیست متریک خالی یعنی «داده‌ای نیست»، نه خطا
    pub post_count: u64,

    /// شش متریک نمایشی با ترتیب ثابت (یا خالی در حالت degrade)
    pub metrics: Vec<DisplayMetric>,

    /// لینک از قبل پر شده برای اشتراک‌گذاری
    pub share_url: String,
}

// =====================================
// Health Check
// =====================================
/// پاسخ health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_seconds: Option<u64>,
}

impl HealthResponse {
    /// ساخت پاسخ healthy
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: None,
        }
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success(42).with_message("done");

        assert!(response.success);
        assert_eq!(response.data, 42);
        assert_eq!(response.message.as_deref(), Some("done"));
    }

    #[test]
    fn test_wrapped_request_validation() {
        let empty = WrappedRequest {
            username: String::new(),
        };
        assert!(empty.validate().is_err());

        let ok = WrappedRequest {
            username: "sophia".to_string(),
        };
        assert!(ok.validate().is_ok());

        let too_long = WrappedRequest {
            username: "x".repeat(41),
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
        assert!(!health.version.is_empty());
    }
}
