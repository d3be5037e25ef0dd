//! # ماژول توابع کمکی (Utilities)
//!
//! این ماژول توابع و ثابت‌های کمکی رو ارائه میده.
//!
//! ## مفاهیم Rust:
//! - **const**: ثابت‌های compile-time
//! - **once_cell**: مقداردهی اولیه تنبل
//! - **Regex**: عبارات منظم

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::DisplayMetric;

// =====================================
// Constants
// =====================================
/// حداقل طول یوزرنیم
pub const MIN_USERNAME_LENGTH: usize = 1;

/// حداکثر طول یوزرنیم
pub const MAX_USERNAME_LENGTH: usize = 40;

/// آدرس پایه intent توییت
pub const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// عنوان متریک‌هایی که در متن اشتراک‌گذاری میان
pub const SHARED_METRIC_TITLES: [&str; 3] = ["Total Articles", "Total Views", "Total Reactions"];

// =====================================
// Lazy Statics (Regex patterns)
// =====================================
/// الگوی معتبر برای یوزرنیم
///
/// # مفاهیم:
/// - `Lazy`: مقداردهی اولیه در اولین استفاده
/// - این بهینه‌تر از ساخت Regex هر بار هست
pub static VALID_USERNAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]+$").expect("Invalid regex pattern")
});

// =====================================
// Validation Functions
// =====================================
/// اعتبارسنجی یوزرنیم
///
/// # مثال
/// ```rust
/// use hashnode_wrapped::utils::is_valid_username;
///
/// assert!(is_valid_username("sophia"));
/// assert!(!is_valid_username("has space")); // space نامعتبره
/// ```
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    let len = username.len();

    // چک کردن طول
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return false;
    }

    // چک کردن کاراکترها
    VALID_USERNAME.is_match(username)
}

// =====================================
// Timestamp Parsing
// =====================================
/// پارس کردن timestamp انتشار به UTC
///
/// پارسر استاندارد RFC 3339 استفاده میشه که "Z" رو خودش به عنوان
/// offset صفر میفهمه؛ offset‌های غیر UTC به UTC تبدیل میشن.
///
/// # مثال
/// ```rust
/// use hashnode_wrapped::utils::parse_published_at;
///
/// assert!(parse_published_at("2024-03-01T00:00:00Z").is_some());
/// assert!(parse_published_at("not-a-date").is_none());
/// ```
#[must_use]
pub fn parse_published_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

// =====================================
// Number Formatting
// =====================================
/// فرمت عدد با جداکننده هزارگان
///
/// # مثال
/// ```rust
/// use hashnode_wrapped::utils::format_thousands;
///
/// assert_eq!(format_thousands(1234567), "1,234,567");
/// assert_eq!(format_thousands(42), "42");
/// ```
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// فرمت میانگین با یک رقم اعشار
///
/// وقتی شمارنده صفره، دقیقا "0" برمیگرده - نه خطای تقسیم
///
/// # مثال
/// ```rust
/// use hashnode_wrapped::utils::format_average;
///
/// assert_eq!(format_average(12345, 3), "4115.0");
/// assert_eq!(format_average(10, 0), "0");
/// ```
#[must_use]
pub fn format_average(total: u64, count: u64) -> String {
    if count == 0 {
        return "0".to_string();
    }

    format!("{:.1}", total as f64 / count as f64)
}

// =====================================
// Share URL
// =====================================
/// ساخت لینک intent توییت از متریک‌های محاسبه شده
///
/// فقط سه متریک اصلی (مقاله‌ها، بازدیدها، واکنش‌ها) در متن میان،
/// با " | " به هم وصل میشن و percent-encode میشن.
///
/// # مفاهیم:
/// - Pure string templating: بدون تماس شبکه‌ای
/// - `form_urlencoded`: انکود امن query string
#[must_use]
pub fn build_share_url(metrics: &[DisplayMetric], year: i32) -> String {
    let summary: Vec<String> = metrics
        .iter()
        .filter(|metric| SHARED_METRIC_TITLES.contains(&metric.title.as_str()))
        .map(|metric| format!("{}: {}", metric.title, metric.value))
        .collect();

    let text = format!(
        "Check out my @hashnode Wrapped {year}!\n\n{}\n\n#HashnodeWrapped",
        summary.join(" | ")
    );

    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("text", &text)
        .finish();

    format!("{TWEET_INTENT_URL}?{query}")
}

// =====================================
// Security Utilities
// =====================================
/// Mask کردن بخشی از متن (برای لاگ‌ها)
///
/// # مثال
/// ```rust
/// use hashnode_wrapped::utils::mask_string;
///
/// assert_eq!(mask_string("secret123", 3), "sec***");
/// ```
#[must_use]
pub fn mask_string(text: &str, visible_chars: usize) -> String {
    if text.len() <= visible_chars {
        return "*".repeat(text.len());
    }

    let visible: String = text.chars().take(visible_chars).collect();
    format!("{}***", visible)
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert!(is_valid_username("sophia"));
        assert!(is_valid_username("ABC-xyz_123"));
        assert!(!is_valid_username("")); // خالی
        assert!(!is_valid_username("has space")); // space
        assert!(!is_valid_username("user@name")); // کاراکتر خاص
        assert!(!is_valid_username(&"x".repeat(41))); // خیلی طولانی
    }

    #[test]
    fn test_parse_published_at() {
        // "Z" به عنوان UTC
        let parsed = parse_published_at("2024-03-01T00:00:00Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-03-01T00:00:00+00:00");

        // offset صریح
        assert!(parse_published_at("2024-03-01T05:30:00+05:30").is_some());

        // خراب
        assert!(parse_published_at("").is_none());
        assert!(parse_published_at("not-a-date").is_none());
        assert!(parse_published_at("2024-03-01").is_none());
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(42), "42");
        assert_eq!(format_thousands(100), "100");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(1000000000), "1,000,000,000");
    }

    #[test]
    fn test_format_average() {
        // شمارنده صفر: دقیقا "0"
        assert_eq!(format_average(10, 0), "0");
        assert_eq!(format_average(0, 0), "0");

        // یک رقم اعشار
        assert_eq!(format_average(10, 1), "10.0");
        assert_eq!(format_average(12345, 3), "4115.0");
        assert_eq!(format_average(7, 2), "3.5");
    }

    #[test]
    fn test_build_share_url() {
        let metrics = vec![
            DisplayMetric::new("Total Articles", "1", "Articles published in 2024"),
            DisplayMetric::new("Total Views", "1,234", "Content views in 2024"),
            DisplayMetric::new("Total Reactions", "10", "Reactions in 2024"),
            DisplayMetric::new("Followers", "99", "Total followers"),
        ];

        let url = build_share_url(&metrics, 2024);

        assert!(url.starts_with("https://twitter.com/intent/tweet?text="));
        // متن انکود شده شامل سه متریک اصلی هست
        assert!(url.contains("Total+Articles%3A+1"));
        assert!(url.contains("Total+Views%3A+1%2C234"));
        assert!(url.contains("Total+Reactions%3A+10"));
        // Followers در متن اشتراک‌گذاری نمیاد
        assert!(!url.contains("Followers"));
        assert!(url.contains("%23HashnodeWrapped"));
    }

    #[test]
    fn test_build_share_url_empty_metrics() {
        let url = build_share_url(&[], 2024);

        // حالت degrade: لینک ساخته میشه، فقط بدون خلاصه آمار
        assert!(url.starts_with("https://twitter.com/intent/tweet?text="));
    }

    #[test]
    fn test_mask_string() {
        assert_eq!(mask_string("secret123", 3), "sec***");
        assert_eq!(mask_string("ab", 5), "**");
    }
}
