//! Time source used to decide what "today" is.

use chrono::{Local, NaiveDate};

pub trait Clock: Send + Sync {
    /// Today's date in the server's local time zone
    fn today(&self) -> NaiveDate;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date. Used to pin "today" in tests and
/// one-off CLI runs.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_returns_the_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let clock = FixedClock(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.today(), clock.today());
    }

    #[test]
    fn it_reads_the_local_date() {
        let before = Local::now().date_naive();
        let today = SystemClock.today();
        let after = Local::now().date_naive();
        assert!(before <= today && today <= after);
    }
}
