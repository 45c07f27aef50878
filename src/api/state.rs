use std::time::Duration;

use anyhow::Result;

use crate::calendar::{CalendarService, RiliClient};
use crate::core::{AppConfig, SystemClock};

/// HTTP client for the calendar provider, with the configured timeout
/// if there is one
pub fn calendar_client(config: &AppConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = config.calendar_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

pub struct AppState {
    pub config: AppConfig,
    pub calendar: CalendarService,
}

impl AppState {
    pub fn new(config: AppConfig, calendar: CalendarService) -> Self {
        Self { config, calendar }
    }

    /// Wires the calendar lookup to the real provider and system clock
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let client = calendar_client(&config)?;
        let calendar = CalendarService::new(
            RiliClient::new(client, &config.calendar_api_url),
            SystemClock,
        );
        Ok(Self::new(config, calendar))
    }
}
