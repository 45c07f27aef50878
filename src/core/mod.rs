pub mod clock;
mod config;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AppConfig;
