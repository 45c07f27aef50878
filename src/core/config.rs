use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub content_path: String,
    pub public_path: String,
    pub calendar_api_url: String,
    // Unset means the HTTP client's own default applies
    pub calendar_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let content_path = env::var("HOMEPAGE_CONTENT_PATH").unwrap_or("./".to_string());
        let public_path = format!("{}/public", content_path.trim_end_matches('/'));
        // Plain HTTP because the provider's certificate doesn't validate
        let calendar_api_url = env::var("HOMEPAGE_CALENDAR_API_URL")
            .unwrap_or_else(|_| "http://rili.com.cn".to_string());
        let calendar_timeout_secs = env::var("HOMEPAGE_CALENDAR_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse().ok());

        Self {
            content_path,
            public_path,
            calendar_api_url,
            calendar_timeout_secs,
        }
    }
}
