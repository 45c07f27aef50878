use std::sync::Arc;

use chrono::NaiveDate;

use super::jsonp::extract_payload;
use super::models::{CalendarEnvelope, CalendarResult, ProviderPayload};
use super::provider::CalendarSource;
use super::CalendarError;
use crate::core::Clock;

/// Looks up today's solar and lunar calendar details. Never fails: any
/// problem with the provider produces a locally computed fallback with
/// `success: false`.
#[derive(Clone)]
pub struct CalendarService {
    source: Arc<dyn CalendarSource>,
    clock: Arc<dyn Clock>,
}

impl CalendarService {
    pub fn new(source: impl CalendarSource + 'static, clock: impl Clock + 'static) -> Self {
        Self {
            source: Arc::new(source),
            clock: Arc::new(clock),
        }
    }

    pub async fn today(&self) -> CalendarEnvelope {
        let date = self.clock.today();
        match self.lookup(date).await {
            Ok(data) => CalendarEnvelope::success(data),
            Err(e) => {
                tracing::error!("Calendar API error: {}", e);
                // Read the clock again, the lookup may have crossed midnight
                CalendarEnvelope::fallback(self.clock.today())
            }
        }
    }

    async fn lookup(&self, date: NaiveDate) -> Result<CalendarResult, CalendarError> {
        let body = self.source.fetch_today(date).await?;
        let json = extract_payload(&body)?;
        let payload: ProviderPayload = serde_json::from_str(json)?;
        Ok(payload.into_result(date))
    }
}
