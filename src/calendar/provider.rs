//! Client for the rili.com.cn "today" feed

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use reqwest::Client;

use super::CalendarError;

/// Anything that can return the raw provider body for a date.
#[async_trait]
pub trait CalendarSource: Send + Sync {
    async fn fetch_today(&self, date: NaiveDate) -> Result<String, CalendarError>;
}

#[derive(Clone, Debug)]
pub struct RiliClient {
    client: Client,
    base_url: String,
}

impl RiliClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `<base>/rili/json/today/YYYY/MMDD`
    pub fn today_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/rili/json/today/{}/{:02}{:02}",
            self.base_url,
            date.year(),
            date.month(),
            date.day()
        )
    }
}

#[async_trait]
impl CalendarSource for RiliClient {
    async fn fetch_today(&self, date: NaiveDate) -> Result<String, CalendarError> {
        let url = self.today_url(date);
        tracing::debug!("Fetching calendar data from {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CalendarError::Status(status));
        }

        Ok(response.text().await?)
    }
}
