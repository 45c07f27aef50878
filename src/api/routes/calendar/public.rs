//! Public types for the calendar API
pub use crate::calendar::{CalendarEnvelope, CalendarResult};
