//! # Hashnode Wrapped Library
//!
//! این کتابخانه یک سرویس «Wrapped» برای آمار سالانه Hashnode ارائه میده:
//! یوزرنیم میگیره، از GraphQL API آمار میخونه و شش متریک نمایشی میسازه.
//!
//! ## ساختار پروژه
//!
//! ```text
//! src/
//! ├── lib.rs          # نقطه ورود کتابخانه - اینجا!
//! ├── main.rs         # نقطه ورود باینری
//! ├── config/         # مدیریت تنظیمات
//! ├── error/          # تعریف خطاها
//! ├── models/         # مدل‌های داده
//! ├── hashnode/       # کلاینت GraphQL (لایه fetch)
//! ├── services/       # منطق کسب‌وکار (aggregation و orchestration)
//! ├── api/            # لایه API
//! └── utils/          # توابع کمکی
//! ```
//!
//! ## مفاهیم Rust در این فایل
//!
//! - **Module System**: سیستم ماژول‌ها برای سازماندهی کد
//! - **Public API**: با `pub` مشخص میکنیم چی از بیرون قابل دسترسی باشه
//! - **Re-exports**: با `pub use` آیتم‌ها رو re-export میکنیم
//!
//! ## مثال استفاده
//!
//! ```rust,no_run
//! use hashnode_wrapped::{config::Config, services::AppState};
//!
//! let config = Config::from_env().unwrap();
//! let state = AppState::new(config).unwrap();
//! ```

// =====================================
// Module Declarations
// =====================================
// در Rust، هر ماژول باید در lib.rs یا main.rs declare بشه
// `pub mod` یعنی این ماژول از بیرون کتابخانه قابل دسترسی هست

/// ماژول مدیریت تنظیمات برنامه
pub mod config;

/// ماژول تعریف و مدیریت خطاها
pub mod error;

/// ماژول مدل‌های داده (Domain Models)
pub mod models;

/// ماژول کلاینت Hashnode (فراخوانی GraphQL API)
pub mod hashnode;

/// ماژول سرویس‌ها (Business Logic)
pub mod services;

/// ماژول API و HTTP Handlers
pub mod api;

/// ماژول توابع کمکی
pub mod utils;

// =====================================
// Re-exports
// =====================================
// Re-export کردن آیتم‌های پرکاربرد برای دسترسی راحت‌تر
// کاربر به جای `hashnode_wrapped::error::Result` میتونه بنویسه `hashnode_wrapped::Result`

/// نتیجه عملیات با خطای سفارشی ما
pub use error::Result;

/// خطای اصلی برنامه
pub use error::AppError;

// =====================================
// Prelude Module
// =====================================
/// ماژول prelude برای import راحت‌تر آیتم‌های پرکاربرد
///
/// کاربرد:
/// ```rust
/// use hashnode_wrapped::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{AppError, Result};
    pub use crate::hashnode::{FetchError, HashnodeClient, StatsProvider};
    pub use crate::models::*;
    pub use crate::services::*;
}
