use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

use super::month_key::MonthKey;

/// Source of "now" for id assignment, month keying and plan week bounds.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar month (UTC) of the current instant
    fn month_key(&self) -> MonthKey {
        MonthKey::from_datetime(self.now())
    }
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for tests and replay.
#[derive(Debug)]
pub struct FixedClock {
    instant: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.instant.lock().unwrap_or_else(|e| e.into_inner()) = instant;
    }

    pub fn advance(&self, by: Duration) {
        let mut guard = self.instant.lock().unwrap_or_else(|e| e.into_inner());
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_month_key() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 0).unwrap());
        assert_eq!(clock.month_key().as_str(), "2024-03");

        clock.advance(Duration::minutes(2));
        assert_eq!(clock.month_key().as_str(), "2024-04");
    }
}
