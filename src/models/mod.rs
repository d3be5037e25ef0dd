//! # ماژول مدل‌ها (Domain Models)
//!
//! این ماژول مدل‌های داده برنامه رو تعریف میکنه.
//!
//! ## مفاهیم Rust:
//! - **Structs**: ساختار داده
//! - **Derive Macros**: تولید خودکار کد
//! - **Serialize/Deserialize**: تبدیل JSON
//! - **Validation**: اعتبارسنجی داده
//!
//! ## تفاوت انواع مدل:
//! - **Wire Model**: شکل داده‌ای که از API خارجی میاد (hashnode)
//! - **Domain Model**: متریک نمایشی محاسبه شده (metric)
//! - **DTO (Data Transfer Object)**: برای ارسال/دریافت از API خودمون (dto)

mod hashnode;
mod metric;
mod dto;

// Re-export همه مدل‌ها
pub use hashnode::*;
pub use metric::*;
pub use dto::*;
