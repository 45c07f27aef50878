//! Today's solar and lunar calendar details, fetched from rili.com.cn
//! with a locally computed fallback.

mod error;
pub mod jsonp;
pub mod models;
pub mod provider;
mod service;

pub use error::CalendarError;
pub use models::{CalendarEnvelope, CalendarResult};
pub use provider::{CalendarSource, RiliClient};
pub use service::CalendarService;
