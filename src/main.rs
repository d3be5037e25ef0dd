//! # Hashnode Wrapped - نقطه ورود برنامه
//!
//! این فایل نقطه شروع اجرای برنامه است.
//! در Rust، `main.rs` برای باینری‌ها و `lib.rs` برای کتابخانه‌ها استفاده میشه.
//!
//! ## مفاهیم Rust در این فایل:
//! - `use`: وارد کردن آیتم‌ها از ماژول‌های دیگه
//! - `async fn main()`: تابع اصلی غیرهمزمان با tokio
//! - `Result<T, E>`: مدیریت خطا
//! - `?` operator: انتشار خطا به بالا

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// وارد کردن ماژول‌ها از کتابخانه‌مون
use hashnode_wrapped::{
    api::create_router,
    config::Config,
    error::Result,
    services::AppState,
    utils,
};

/// نقطه ورود اصلی برنامه
///
/// # مفاهیم مهم:
/// - `#[tokio::main]`: این macro تابع async رو به یک runtime تبدیل میکنه
/// - `Result<()>`: برگردوندن Result بدون مقدار موفقیت (unit type)
///
/// # Errors
/// خطا برمیگردونه اگه:
/// - تنظیمات لود یا validate نشن (مثلا ACCESS_TOKEN غایب باشه)
/// - کلاینت HTTP ساخته نشه
/// - سرور استارت نشه
#[tokio::main]
async fn main() -> Result<()> {
    // لود کردن متغیرهای محیطی از فایل .env
    // اگه فایل نباشه اوکیه
    dotenvy::dotenv().ok();

    // راه‌اندازی سیستم لاگینگ
    init_tracing();

    info!("🚀 Starting Hashnode Wrapped Service...");

    // لود کردن تنظیمات
    // `?` یعنی اگه خطا بود، همینجا return کن
    let config = Config::from_env()?;

    // نبودن credential یه خطای پیکربندی هست و همینجا گزارش میشه،
    // قبل از اینکه هیچ fetch ای ممکن باشه
    config.validate()?;
    info!(
        target_year = config.target_year,
        access_token = %utils::mask_string(&config.access_token, 4),
        "✅ Configuration loaded successfully"
    );

    // ساخت state با کلاینت fetch
    let state = AppState::new(config.clone())?;
    info!("✅ Hashnode client ready");

    // ساخت router با تمام route‌ها و middleware‌ها
    let app = create_router(state);

    // آدرس سرور
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("🌐 Server listening on http://{}", addr);

    // ساخت listener و اجرای سرور
    let listener = TcpListener::bind(addr).await?;

    // اجرای سرور - این بلاک تا ابد اجرا میشه
    axum::serve(listener, app)
        .await
        .map_err(|e| hashnode_wrapped::error::AppError::Server(e.to_string()))?;

    Ok(())
}

/// راه‌اندازی سیستم tracing برای لاگینگ
///
/// # مفاهیم:
/// - Structured Logging: لاگ‌ها به صورت ساختاریافته ذخیره میشن
/// - Layers: لایه‌های مختلف برای فرمت و فیلتر کردن
/// - EnvFilter: فیلتر کردن لاگ‌ها بر اساس متغیر محیطی
fn init_tracing() {
    // EnvFilter از متغیر RUST_LOG میخونه
    // اگه نبود، default استفاده میکنه
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hashnode_wrapped=debug,tower_http=debug"));

    // ترکیب لایه‌ها با هم
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)           // نمایش نام ماژول
                .with_thread_ids(true)       // نمایش ID ترد
                .with_file(true)             // نمایش نام فایل
                .with_line_number(true)      // نمایش شماره خط
                .with_level(true)            // نمایش سطح لاگ
                .pretty(),                   // فرمت زیبا
        )
        .init();
}
