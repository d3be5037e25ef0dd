//! # مدل‌های Hashnode
//!
//! شکل داده‌ای که GraphQL API برای یک کاربر برمیگردونه.
//!
//! ## مفاهیم:
//! - `#[serde(rename_all = "camelCase")]`: نام فیلدها در JSON با camelCase میان
//! - `#[serde(default)]`: فیلدهای غایب به جای خطا مقدار پیش‌فرض میگیرن

use serde::{Deserialize, Serialize};

// =====================================
// User Record
// =====================================
/// رکورد خام کاربر که از API میاد
///
/// یک بار در هر fetch ساخته میشه، یک بار توسط aggregator مصرف میشه و
/// بعد از تولید متریک‌ها دور انداخته میشه - هیچ cache ای بین درخواست‌ها نیست.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// یوزرنیم کاربر
    pub username: String,

    /// تعداد دنبال‌کننده‌ها
    #[serde(default)]
    pub followers_count: u64,

    /// لیست نشان‌ها - فقط تعدادش مصرف میشه
    #[serde(default)]
    pub badges: Vec<Badge>,

    /// صفحه اول پست‌ها (حداکثر 20 تا)
    #[serde(default)]
    pub posts: PostConnection,
}

/// نشان (badge) کاربر
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// نام نشان
    pub name: String,
}

/// لیست صفحه‌بندی شده پست‌ها، به شکل GraphQL connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostConnection {
    /// پست‌های این صفحه
    #[serde(default)]
    pub nodes: Vec<Post>,
}

// =====================================
// Post
// =====================================
/// یک پست منتشر شده
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// عنوان پست
    #[serde(default)]
    pub title: String,

    /// زمان انتشار به صورت ISO-8601 (ممکنه با "Z" تموم بشه)
    ///
    /// غایب یا خراب بودنش خطا نیست - پست فقط از فیلتر سال حذف میشه
    #[serde(default)]
    pub published_at: Option<String>,

    /// تعداد بازدید
    #[serde(default)]
    pub views: u64,

    /// تعداد واکنش
    #[serde(default)]
    pub reaction_count: u64,

    /// تعداد پاسخ
    #[serde(default)]
    pub reply_count: u64,
}
