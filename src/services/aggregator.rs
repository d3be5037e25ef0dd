//! # Aggregator آمار سالانه
//!
//! رکورد خام کاربر رو به شش متریک نمایشی با ترتیب ثابت تبدیل میکنه.
//!
//! ## مفاهیم Rust:
//! - **Pure functions**: هسته محاسبه بدون side effect
//! - **Borrowing**: ورودی فقط قرض گرفته میشه و هیچوقت تغییر نمیکنه
//! - **Checked arithmetic**: جمع‌ها با `checked_add` انجام میشن
//!
//! ## سیاست degrade
//!
//! اگه موقع aggregation خطای غیرمنتظره پیش بیاد، به جای انتشار خطا،
//! نتیجه خالی (صفر متریک، صفر پست) برگردونده میشه و فقط warn لاگ میشه.
//! لایه نمایش «صفر متریک» رو حالت معتبر «داده‌ای نیست» در نظر میگیره.

use chrono::Datelike;
use thiserror::Error;
use tracing::warn;

use crate::{
    models::{DisplayMetric, Post, UserRecord},
    utils,
};

// =====================================
// Aggregation Result
// =====================================
/// نتیجه aggregation
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// تعداد پست‌های باقی‌مونده بعد از فیلتر سال
    pub post_count: u64,

    /// متریک‌های نمایشی (خالی در حالت degrade)
    pub metrics: Vec<DisplayMetric>,
}

/// مقادیر عددی محاسبه شده روی پست‌های فیلتر شده
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearlyStats {
    pub post_count: u64,
    pub total_views: u64,
    pub total_reactions: u64,
    pub followers: u64,
    pub badges: u64,
}

/// خطای داخلی aggregation - هیچوقت به بیرون منتشر نمیشه
#[derive(Debug, Error)]
#[error("aggregation failed: {0}")]
struct AggregationError(String);

// =====================================
// Public Entry Point
// =====================================
/// تبدیل رکورد کاربر به متریک‌های نمایشی سال هدف
///
/// ورودی هیچوقت تغییر نمیکنه. در صورت خطای داخلی، نتیجه خالی
/// برمیگرده (سیاست degrade-to-empty).
#[must_use]
pub fn aggregate(record: &UserRecord, target_year: i32) -> Aggregation {
    match try_aggregate(record, target_year) {
        Ok(aggregation) => aggregation,
        Err(e) => {
            warn!(error = %e, "Error processing stats");
            Aggregation::default()
        }
    }
}

/// مسیر fallible aggregation
fn try_aggregate(record: &UserRecord, target_year: i32) -> Result<Aggregation, AggregationError> {
    let stats = compute_yearly_stats(record, target_year)?;
    let metrics = build_metrics(&stats, target_year);

    Ok(Aggregation {
        post_count: stats.post_count,
        metrics,
    })
}

// =====================================
// Year Filter
// =====================================
/// آیا پست در سال هدف (به وقت UTC) منتشر شده؟
///
/// نبود یا خراب بودن timestamp یعنی «نه» - بدون خطا
fn published_in_year(post: &Post, target_year: i32) -> bool {
    post.published_at
        .as_deref()
        .and_then(utils::parse_published_at)
        .map_or(false, |published| published.year() == target_year)
}

/// فیلتر کردن پست‌ها به سال هدف
///
/// ترتیب ورودی حفظ میشه
#[must_use]
pub fn filter_posts_by_year(posts: &[Post], target_year: i32) -> Vec<&Post> {
    posts
        .iter()
        .filter(|post| published_in_year(post, target_year))
        .collect()
}

// =====================================
// Computation
// =====================================
/// محاسبه آمار عددی روی پست‌های فیلتر شده
fn compute_yearly_stats(
    record: &UserRecord,
    target_year: i32,
) -> Result<YearlyStats, AggregationError> {
    let filtered = filter_posts_by_year(&record.posts.nodes, target_year);

    let mut total_views: u64 = 0;
    let mut total_reactions: u64 = 0;

    for post in &filtered {
        total_views = total_views
            .checked_add(post.views)
            .ok_or_else(|| AggregationError("view count overflow".to_string()))?;

        total_reactions = total_reactions
            .checked_add(post.reaction_count)
            .ok_or_else(|| AggregationError("reaction count overflow".to_string()))?;
    }

    Ok(YearlyStats {
        post_count: filtered.len() as u64,
        total_views,
        total_reactions,
        followers: record.followers_count,
        badges: record.badges.len() as u64,
    })
}

// =====================================
// Metric Construction
// =====================================
/// ساخت شش متریک نمایشی با ترتیب ثابت
///
/// ترتیب و عنوان‌ها بخشی از قرارداد هستن:
/// Total Articles, Total Views, Total Reactions, Followers,
/// Badges Earned, Avg. Reactions
fn build_metrics(stats: &YearlyStats, year: i32) -> Vec<DisplayMetric> {
    vec![
        DisplayMetric::new(
            "Total Articles",
            stats.post_count.to_string(),
            format!("Articles published in {year}"),
        ),
        DisplayMetric::new(
            "Total Views",
            utils::format_thousands(stats.total_views),
            format!("Content views in {year}"),
        ),
        DisplayMetric::new(
            "Total Reactions",
            stats.total_reactions.to_string(),
            format!("Reactions in {year}"),
        ),
        DisplayMetric::new(
            "Followers",
            stats.followers.to_string(),
            "Total followers",
        ),
        DisplayMetric::new(
            "Badges Earned",
            stats.badges.to_string(),
            "Total badges collected",
        ),
        DisplayMetric::new(
            "Avg. Reactions",
            utils::format_average(stats.total_reactions, stats.post_count),
            "Average reactions per post",
        ),
    ]
}
