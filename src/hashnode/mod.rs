//! # کلاینت Hashnode (لایه Fetch)
//!
//! این ماژول تنها تماس شبکه‌ای برنامه رو انجام میده: یک query پارامتری
//! GraphQL برای آمار کاربر، با credential از نوع bearer و timeout محدود.
//!
//! ## مفاهیم Rust:
//! - **Trait در مرز (seam)**: `StatsProvider` برای تست‌پذیری
//! - **async-trait**: پشتیبانی از async در traits
//! - **Pure core**: طبقه‌بندی پاسخ یک تابع خالص هست که بدون شبکه تست میشه
//!
//! ## طبقه‌بندی پاسخ (به ترتیب):
//! 1. خطای transport → `Timeout` یا `Network`
//! 2. وضعیت 401 → `Unauthorized`، 403 → `Forbidden`، بقیه غیر 2xx → `Http`
//! 3. بدنه 2xx غیرقابل parse → `Api` (پاسخ خراب)
//! 4. لیست `errors` در بدنه → `Unauthorized` یا `Api` بر اساس پیام
//! 5. `data.user` تهی → `NotFound`
//! 6. در غیر این صورت → `Ok(UserRecord)`
//!
//! هیچ retry ای وجود نداره - یک تلاش در هر فراخوانی؛ تصمیم retry با کاربره.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    config::Config,
    error::AppError,
    models::UserRecord,
};

// =====================================
// GraphQL Query
// =====================================
/// Query آمار کاربر
///
/// فقط صفحه اول پست‌ها (حداکثر 20 تا) با ترتیب پیش‌فرض API خواسته میشه
pub const USER_STATS_QUERY: &str = r#"
query($username: String!) {
    user(username: $username) {
        username
        followersCount
        badges {
            name
        }
        posts(page: 1, pageSize: 20) {
            nodes {
                title
                publishedAt
                views
                reactionCount
                replyCount
            }
        }
    }
}
"#;

/// حداکثر طول بدنه‌ای که در جزئیات خطای HTTP نگه میداریم
const MAX_ERROR_DETAIL_LEN: usize = 200;

// =====================================
// Fetch Error
// =====================================
/// خطاهای لایه fetch
///
/// # مفاهیم:
/// - هر variant یک کلاس از نتیجه‌های شبکه/API رو نمایندگی میکنه
/// - تبدیل به `AppError` پیام خوانای کاربر رو اضافه میکنه
#[derive(Debug, Error)]
pub enum FetchError {
    /// خطای سطح transport (DNS، اتصال رد شده و غیره)
    #[error("Network error: {0}")]
    Network(String),

    /// درخواست از حد زمانی گذشت
    #[error("Request timed out")]
    Timeout,

    /// وضعیت 401 یا پیام خطای احراز هویت در بدنه
    #[error("Unauthorized")]
    Unauthorized,

    /// وضعیت 403
    #[error("Forbidden")]
    Forbidden,

    /// هر وضعیت غیر 2xx دیگه
    #[error("HTTP error {status}: {detail}")]
    Http { status: u16, detail: String },

    /// خطای گزارش شده در بدنه پاسخ، یا بدنه خراب
    #[error("API error: {0}")]
    Api(String),

    /// پاسخ 2xx بدون خطا ولی بدون کاربر
    #[error("User not found")]
    NotFound,
}

/// نگاشت خطای fetch به خطای برنامه با پیام خوانا برای کاربر
///
/// هر خطای fetch دقیقا به یک پیام نگاشت میشه و submission جاری رو
/// بدون رندر ناقص تموم میکنه
impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Network(detail) => AppError::Network(detail),
            FetchError::Timeout => AppError::Timeout,
            FetchError::Unauthorized => AppError::Unauthorized(
                "Invalid access token. Please check your configuration.".to_string(),
            ),
            FetchError::Forbidden => AppError::Forbidden(
                "Access forbidden. Please check your permissions.".to_string(),
            ),
            FetchError::Http { status, detail } => AppError::Upstream { status, detail },
            FetchError::Api(message) => AppError::Api(message),
            FetchError::NotFound => AppError::user_not_found(),
        }
    }
}

// =====================================
// GraphQL Envelope Types
// =====================================
// این‌ها فقط شکل wire هستن و بیرون این ماژول استفاده نمیشن

/// بدنه درخواست GraphQL
#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: QueryVariables<'a>,
}

/// متغیرهای query
#[derive(Debug, Serialize)]
struct QueryVariables<'a> {
    username: &'a str,
}

/// پاکت پاسخ GraphQL: یا data یا errors
#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<UserData>,

    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

/// یک خطای GraphQL
#[derive(Debug, Deserialize)]
struct GraphQlError {
    #[serde(default)]
    message: String,
}

/// فیلد data با کاربر احتمالا تهی
#[derive(Debug, Deserialize)]
struct UserData {
    #[serde(default)]
    user: Option<UserRecord>,
}

// =====================================
// Stats Provider Trait
// =====================================
/// مرز (seam) لایه fetch
///
/// # مفاهیم:
/// - سرویس به جای کلاینت مشخص به این trait وابسته هست
/// - در تست‌ها با mockall جایگزین میشه
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// گرفتن رکورد خام یک کاربر از API
    async fn fetch_user(&self, username: &str) -> Result<UserRecord, FetchError>;
}

// =====================================
// Hashnode Client
// =====================================
/// کلاینت GraphQL سرویس Hashnode
///
/// # مسئولیت‌ها:
/// - یک درخواست POST در هر فراخوانی، بدون retry
/// - فرستادن credential در header مجوز
/// - اعمال timeout در سطح کلاینت
#[derive(Debug, Clone)]
pub struct HashnodeClient {
    http: reqwest::Client,
    api_url: String,
    access_token: String,
}

impl HashnodeClient {
    /// ساخت کلاینت جدید از روی تنظیمات
    ///
    /// # Errors
    /// خطا برمیگردونه اگه کلاینت HTTP ساخته نشه
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_url: config.hashnode_api_url.clone(),
            access_token: config.access_token.clone(),
        })
    }
}

#[async_trait]
impl StatsProvider for HashnodeClient {
    /// اجرای query و طبقه‌بندی نتیجه
    ///
    /// # مفاهیم:
    /// - `is_timeout()`: تشخیص timeout از بقیه خطاهای transport
    /// - بدنه به صورت متن خونده میشه تا طبقه‌بندی خالص بمونه
    #[instrument(skip(self))]
    async fn fetch_user(&self, username: &str) -> Result<UserRecord, FetchError> {
        let request = GraphQlRequest {
            query: USER_STATS_QUERY,
            variables: QueryVariables { username },
        };

        let response = self
            .http
            .post(&self.api_url)
            .header("Authorization", self.access_token.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else {
                    FetchError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        debug!(status, body_len = body.len(), "Received API response");

        classify_response(status, &body)
    }
}

// =====================================
// Response Classification (pure)
// =====================================
/// طبقه‌بندی وضعیت HTTP و بدنه پاسخ
///
/// تابع خالص - بدون شبکه تست میشه
///
/// # Errors
/// هر نتیجه غیر از «کاربر کامل parse شد» یکی از variant‌های `FetchError` هست
pub fn classify_response(status: u16, body: &str) -> Result<UserRecord, FetchError> {
    // اول وضعیت HTTP
    match status {
        401 => return Err(FetchError::Unauthorized),
        403 => return Err(FetchError::Forbidden),
        s if !(200..300).contains(&s) => {
            return Err(FetchError::Http {
                status: s,
                detail: truncate_detail(body),
            })
        }
        _ => {}
    }

    // بعد بدنه
    let parsed: GraphQlResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::Api(format!("Malformed API response: {e}")))?;

    // لیست خطاهای GraphQL
    if let Some(errors) = &parsed.errors {
        if let Some(first) = errors.first() {
            return Err(classify_graphql_error(&first.message));
        }
    }

    // کاربر تهی یعنی پیدا نشد
    parsed
        .data
        .and_then(|d| d.user)
        .ok_or(FetchError::NotFound)
}

/// طبقه‌بندی پیام خطای GraphQL
///
/// تطبیق substring بدون حساسیت به بزرگی/کوچکی روی "unauthorized" یا
/// "authentication"
fn classify_graphql_error(message: &str) -> FetchError {
    let lower = message.to_lowercase();

    if lower.contains("unauthorized") || lower.contains("authentication") {
        FetchError::Unauthorized
    } else {
        FetchError::Api(message.to_string())
    }
}

/// کوتاه کردن بدنه برای جزئیات خطا
fn truncate_detail(body: &str) -> String {
    body.chars().take(MAX_ERROR_DETAIL_LEN).collect()
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    fn full_body() -> String {
        r#"{
            "data": {
                "user": {
                    "username": "sophia",
                    "followersCount": 10,
                    "badges": [{"name": "a"}],
                    "posts": {
                        "nodes": [
                            {
                                "title": "Post",
                                "publishedAt": "2024-03-01T00:00:00Z",
                                "views": 100,
                                "reactionCount": 10,
                                "replyCount": 2
                            }
                        ]
                    }
                }
            }
        }"#
        .to_string()
    }

    /// پاسخ 2xx کامل باید UserRecord بده
    #[test]
    fn test_classify_success() {
        let user = classify_response(200, &full_body()).unwrap();
        assert_eq!(user.username, "sophia");
        assert_eq!(user.followers_count, 10);
        assert_eq!(user.posts.nodes.len(), 1);
    }

    /// وضعیت 401 باید Unauthorized بده، نه خطای شبکه عمومی
    #[test]
    fn test_classify_http_401() {
        let err = classify_response(401, "").unwrap_err();
        assert!(matches!(err, FetchError::Unauthorized));
    }

    /// وضعیت 403 باید Forbidden بده
    #[test]
    fn test_classify_http_403() {
        let err = classify_response(403, "").unwrap_err();
        assert!(matches!(err, FetchError::Forbidden));
    }

    /// بقیه وضعیت‌های غیر 2xx باید Http بدن
    #[test]
    fn test_classify_http_other() {
        let err = classify_response(500, "boom").unwrap_err();
        assert!(matches!(err, FetchError::Http { status: 500, .. }));

        let err = classify_response(429, "slow down").unwrap_err();
        assert!(matches!(err, FetchError::Http { status: 429, .. }));
    }

    /// پیام خطای احراز هویت در بدنه 2xx باید Unauthorized بده
    #[test]
    fn test_classify_graphql_auth_error() {
        let body = r#"{"errors": [{"message": "User not authenticated"}]}"#;
        let err = classify_response(200, body).unwrap_err();
        assert!(matches!(err, FetchError::Unauthorized));

        let body = r#"{"errors": [{"message": "UNAUTHORIZED request"}]}"#;
        let err = classify_response(200, body).unwrap_err();
        assert!(matches!(err, FetchError::Unauthorized));
    }

    /// بقیه خطاهای GraphQL باید Api بدن
    #[test]
    fn test_classify_graphql_other_error() {
        let body = r#"{"errors": [{"message": "Something exploded"}]}"#;
        let err = classify_response(200, body).unwrap_err();
        assert!(matches!(err, FetchError::Api(m) if m == "Something exploded"));
    }

    /// فقط اولین خطای لیست بررسی میشه
    #[test]
    fn test_classify_uses_first_error() {
        let body = r#"{"errors": [{"message": "first"}, {"message": "authentication"}]}"#;
        let err = classify_response(200, body).unwrap_err();
        assert!(matches!(err, FetchError::Api(m) if m == "first"));
    }

    /// کاربر تهی بدون خطا باید NotFound بده
    #[test]
    fn test_classify_null_user() {
        let body = r#"{"data": {"user": null}}"#;
        let err = classify_response(200, body).unwrap_err();
        assert!(matches!(err, FetchError::NotFound));

        let body = r#"{"data": {}}"#;
        let err = classify_response(200, body).unwrap_err();
        assert!(matches!(err, FetchError::NotFound));
    }

    /// بدنه خراب باید Api بده
    #[test]
    fn test_classify_malformed_body() {
        let err = classify_response(200, "<html>not json</html>").unwrap_err();
        assert!(matches!(err, FetchError::Api(m) if m.starts_with("Malformed API response")));
    }

    /// لیست خطای خالی مثل نبودن خطا رفتار میکنه
    #[test]
    fn test_classify_empty_errors_list() {
        let body = r#"{"errors": [], "data": {"user": null}}"#;
        let err = classify_response(200, body).unwrap_err();
        assert!(matches!(err, FetchError::NotFound));
    }

    /// تست نگاشت FetchError به AppError
    #[test]
    fn test_fetch_error_into_app_error() {
        let app: AppError = FetchError::Unauthorized.into();
        assert!(matches!(app, AppError::Unauthorized(_)));

        let app: AppError = FetchError::Timeout.into();
        assert!(matches!(app, AppError::Timeout));

        let app: AppError = FetchError::NotFound.into();
        assert!(matches!(app, AppError::NotFound(m) if m == "User not found"));

        let app: AppError = FetchError::Http {
            status: 500,
            detail: "x".to_string(),
        }
        .into();
        assert!(matches!(app, AppError::Upstream { status: 500, .. }));
    }

    /// جزئیات خطای HTTP نباید بی‌نهایت طولانی بشه
    #[test]
    fn test_truncate_detail() {
        let long_body = "x".repeat(1000);
        let err = classify_response(500, &long_body).unwrap_err();

        if let FetchError::Http { detail, .. } = err {
            assert_eq!(detail.len(), MAX_ERROR_DETAIL_LEN);
        } else {
            panic!("expected Http variant");
        }
    }
}
