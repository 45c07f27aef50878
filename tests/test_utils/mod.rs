//! Test utilities for integration tests
#![allow(dead_code)]

use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::SystemTime;

use axum::{Router, body::Body};
use chrono::NaiveDate;

use homepage::api::{AppState, calendar_client};
use homepage::api::app;
use homepage::calendar::{CalendarService, RiliClient};
use homepage::core::{AppConfig, FixedClock};

static APP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Creates a test application router whose calendar provider is
/// `provider_url` and whose clock is pinned to `today`.
///
/// The content directory is a fresh temporary directory with a
/// `public/announcement.json` file in it.
pub fn test_app(provider_url: &str, today: NaiveDate) -> Router {
    // Unique directory per app so tests can run in parallel
    let ts = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let n = APP_COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir: PathBuf = env::temp_dir().join(format!("homepage-test-{}-{}", ts, n));
    let public_path = dir.join("public");
    fs::create_dir_all(&public_path).expect("Failed to create public directory");
    fs::write(
        public_path.join("announcement.json"),
        r#"{"title": "公告", "content": "欢迎"}"#,
    )
    .expect("Failed to write announcement");

    let app_config = AppConfig {
        content_path: dir.display().to_string(),
        public_path: public_path.display().to_string(),
        calendar_api_url: provider_url.to_string(),
        calendar_timeout_secs: Some(5),
    };
    let client = calendar_client(&app_config).expect("Failed to build HTTP client");
    let calendar = CalendarService::new(
        RiliClient::new(client, provider_url),
        FixedClock(today),
    );
    let app_state = AppState::new(app_config, calendar);
    app(Arc::new(app_state))
}

/// Creates a test application router the same way `serve` does, with
/// the real system clock and the given provider timeout.
pub fn test_app_from_config(provider_url: &str, timeout_secs: u64) -> Router {
    let app_config = AppConfig {
        content_path: env::temp_dir().display().to_string(),
        public_path: env::temp_dir().join("public").display().to_string(),
        calendar_api_url: provider_url.to_string(),
        calendar_timeout_secs: Some(timeout_secs),
    };
    let app_state = AppState::from_config(app_config).expect("Failed to build app state");
    app(Arc::new(app_state))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf8")
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
