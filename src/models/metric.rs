//! # مدل متریک نمایشی
//!
//! یک آمار برچسب‌دار و از قبل فرمت شده، آماده نمایش.

use serde::{Deserialize, Serialize};

// =====================================
// Display Metric
// =====================================
/// یک متریک نمایشی
///
/// مقدار `value` از قبل به صورت رشته فرمت شده (مثلا با جداکننده هزارگان)
/// تا لایه نمایش هیچ منطق فرمت‌بندی نداشته باشه.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMetric {
    /// عنوان متریک (مثلا "Total Views")
    pub title: String,

    /// مقدار فرمت شده برای نمایش
    pub value: String,

    /// توضیح کوتاه زیر متریک
    pub description: String,
}

impl DisplayMetric {
    /// ساخت متریک جدید
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            description: description.into(),
        }
    }
}
