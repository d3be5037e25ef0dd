//! # ماژول تنظیمات (Configuration)
//!
//! این ماژول مسئول خوندن و مدیریت تنظیمات برنامه هست.
//!
//! ## مفاهیم Rust:
//! - **Structs**: ساختار داده‌ای برای نگهداری تنظیمات
//! - **Derive Macros**: تولید خودکار کد با `#[derive(...)]`
//! - **Default Trait**: مقادیر پیش‌فرض
//! - **Serde**: سریالایز/دسریالایز
//! - **Builder Pattern**: ساخت تدریجی آبجکت

use std::env;
use serde::{Deserialize, Serialize};
use crate::error::{AppError, Result};

/// آدرس پیش‌فرض GraphQL API
pub const DEFAULT_HASHNODE_API_URL: &str = "https://gql.hashnode.com";

/// سال پیش‌فرض برای گزارش wrapped
pub const DEFAULT_TARGET_YEAR: i32 = 2024;

/// حداکثر زمان انتظار پیش‌فرض برای درخواست خروجی (ثانیه)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// تنظیمات اصلی برنامه
///
/// # مفاهیم:
/// - `#[derive(...)]`: macro برای تولید خودکار implementation
/// - `Clone`: اجازه کپی کردن (deep copy)
/// - `Serialize/Deserialize`: تبدیل به/از JSON و فرمت‌های دیگه
///
/// # مثال
/// ```rust
/// use hashnode_wrapped::config::Config;
///
/// let config = Config::default();
/// println!("Port: {}", config.port);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// آدرس هاست سرور
    pub host: String,

    /// پورت سرور
    pub port: u16,

    /// آدرس GraphQL API سرویس Hashnode
    pub hashnode_api_url: String,

    /// توکن دسترسی به API (credential)
    ///
    /// این مقدار secret هست - هیچوقت کاملش رو لاگ نکنید
    pub access_token: String,

    /// سال هدف برای فیلتر کردن پست‌ها
    pub target_year: i32,

    /// حداکثر زمان انتظار برای درخواست خروجی (ثانیه)
    pub request_timeout_secs: u64,

    /// محیط اجرا (development, production)
    pub environment: Environment,
}

/// محیط اجرای برنامه
///
/// # مفاهیم:
/// - `enum`: نوع داده شمارشی
/// - `#[serde(rename_all = "lowercase")]`: تغییر نام‌گذاری در سریالایز
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// محیط توسعه - با قابلیت‌های دیباگ
    #[default]
    Development,

    /// محیط تست
    Testing,

    /// محیط تولید - بهینه‌سازی شده
    Production,
}

impl Environment {
    /// آیا در محیط توسعه هستیم؟
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// آیا در محیط تولید هستیم؟
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// تبدیل String به Environment
///
/// # مفاهیم:
/// - `impl From<T>`: پیاده‌سازی trait تبدیل
/// - `_`: wildcard برای بقیه حالت‌ها
impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Development,
        }
    }
}

/// مقادیر پیش‌فرض برای Config
///
/// توکن دسترسی default نداره - خالی یعنی پیکربندی نشده
impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            hashnode_api_url: DEFAULT_HASHNODE_API_URL.to_string(),
            access_token: String::new(),
            target_year: DEFAULT_TARGET_YEAR,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            environment: Environment::Development,
        }
    }
}

impl Config {
    /// ساخت تنظیمات از متغیرهای محیطی
    ///
    /// # مفاهیم:
    /// - `env::var()`: خوندن متغیر محیطی
    /// - `unwrap_or_else`: مقدار پیش‌فرض با closure
    /// - `parse()`: تبدیل String به نوع‌های دیگه
    ///
    /// # Errors
    /// این متد خودش خطا برنمیگردونه؛ اعتبارسنجی جدا با `validate` انجام میشه
    ///
    /// # مثال
    /// ```rust,no_run
    /// use hashnode_wrapped::config::Config;
    ///
    /// let config = Config::from_env().expect("Failed to load config");
    /// ```
    pub fn from_env() -> Result<Self> {
        // helper function برای خوندن متغیر محیطی با default
        let get_env = |key: &str, default: &str| -> String {
            env::var(key).unwrap_or_else(|_| default.to_string())
        };

        // helper برای parse کردن عدد
        let parse_env = |key: &str, default: i64| -> i64 {
            env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        };

        Ok(Self {
            host: get_env("HOST", "127.0.0.1"),
            port: parse_env("PORT", 3000) as u16,
            hashnode_api_url: get_env("HASHNODE_API_URL", DEFAULT_HASHNODE_API_URL),
            access_token: get_env("ACCESS_TOKEN", ""),
            target_year: parse_env("TARGET_YEAR", i64::from(DEFAULT_TARGET_YEAR)) as i32,
            request_timeout_secs: parse_env(
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS as i64,
            ) as u64,
            environment: get_env("ENVIRONMENT", "development").into(),
        })
    }

    /// اعتبارسنجی تنظیمات
    ///
    /// نبودن credential یه خطای پیکربندی هست و باید قبل از هر fetch
    /// گزارش بشه، نه موقع فراخوانی API.
    ///
    /// # مفاهیم:
    /// - Early return: برگشت زودهنگام در صورت خطا
    pub fn validate(&self) -> Result<()> {
        // توکن دسترسی اجباریه
        if self.access_token.trim().is_empty() {
            return Err(AppError::Config(
                "ACCESS_TOKEN must be configured. Please check your .env file contains ACCESS_TOKEN"
                    .to_string(),
            ));
        }

        // چک کردن port
        if self.port == 0 {
            return Err(AppError::Config("PORT cannot be 0".to_string()));
        }

        // بازه منطقی برای سال هدف
        if !(2000..=2100).contains(&self.target_year) {
            return Err(AppError::Config(format!(
                "TARGET_YEAR {} is out of range",
                self.target_year
            )));
        }

        // timeout صفر یعنی هر درخواست فوری timeout میشه
        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "REQUEST_TIMEOUT_SECS cannot be 0".to_string(),
            ));
        }

        // در production فقط آدرس https قبول میکنیم
        if self.environment.is_production() && !self.hashnode_api_url.starts_with("https://") {
            return Err(AppError::Config(
                "HASHNODE_API_URL must use https in production".to_string(),
            ));
        }

        Ok(())
    }

    /// آدرس کامل سرور
    ///
    /// # مفاهیم:
    /// - `format!`: ماکرو برای ساخت String
    #[must_use]
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =====================================
// Builder Pattern
// =====================================
/// ساخت Config با Builder Pattern
///
/// # مفاهیم:
/// - Builder Pattern: ساخت تدریجی یک object
/// - Method Chaining: زنجیره‌ای کردن متدها
/// - Consuming self: گرفتن ownership در هر متد
///
/// # مثال
/// ```rust
/// use hashnode_wrapped::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .port(8080)
///     .host("0.0.0.0")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// ساخت builder جدید
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// تنظیم پورت
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// تنظیم هاست
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// تنظیم آدرس API
    #[must_use]
    pub fn hashnode_api_url(mut self, url: impl Into<String>) -> Self {
        self.config.hashnode_api_url = url.into();
        self
    }

    /// تنظیم توکن دسترسی
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.access_token = token.into();
        self
    }

    /// تنظیم سال هدف
    #[must_use]
    pub fn target_year(mut self, year: i32) -> Self {
        self.config.target_year = year;
        self
    }

    /// تنظیم timeout درخواست خروجی
    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.config.request_timeout_secs = secs;
        self
    }

    /// تنظیم محیط
    #[must_use]
    pub fn environment(mut self, env: Environment) -> Self {
        self.config.environment = env;
        self
    }

    /// ساخت Config نهایی
    ///
    /// این متد ownership رو میگیره و Config رو برمیگردونه
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }

    /// ساخت Config با اعتبارسنجی
    ///
    /// # Errors
    /// خطا برمیگردونه اگه اعتبارسنجی fail بشه
    pub fn build_validated(self) -> Result<Config> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}
