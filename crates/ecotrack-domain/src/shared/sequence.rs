use chrono::{DateTime, Utc};

use super::DomainError;

/// Monotonic id source.
///
/// Ids follow the creation instant in milliseconds but never repeat or go backwards:
/// each new id is `max(now_ms, last + 1)`. Seed it with the largest id already stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn seeded(last: u64) -> Self {
        Self { last }
    }

    pub fn from_existing<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        Self::seeded(ids.into_iter().max().unwrap_or(0))
    }

    /// Fails once the sequence is exhausted, i.e. a stored id is already `u64::MAX`.
    pub fn next(&mut self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let after_last = self.last.checked_add(1).ok_or_else(|| {
            DomainError::DataIntegrity(format!(
                "Id sequence exhausted, last stored id is {}",
                self.last
            ))
        })?;
        let candidate = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        self.last = candidate.max(after_last);
        Ok(self.last)
    }

    pub fn last(&self) -> u64 {
        self.last
    }
}
