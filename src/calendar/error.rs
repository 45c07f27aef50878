use thiserror::Error;

/// Everything that can go wrong while looking up today's calendar
/// data from the provider. All of these end in the fallback response.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// Connection, DNS, timeout or body read failure
    #[error("Calendar provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status
    #[error("Calendar provider returned status {0}")]
    Status(reqwest::StatusCode),

    /// The body isn't wrapped in the expected callback
    #[error("Failed to parse calendar data")]
    Shape,

    /// The wrapped payload isn't valid JSON for the expected shape
    #[error("Calendar payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
