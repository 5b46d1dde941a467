use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::emissions::MonthlyAggregate;
use crate::shared::MonthKey;

/// One aggregate per calendar month, in the order months were first recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyHistoryLedger {
    records: Vec<MonthlyAggregate>,
}

/// Month total with the change from the preceding ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendPoint {
    pub month: MonthKey,
    pub total: f64,
    pub change_kg: Option<f64>,
    pub change_percent: Option<f64>,
}

impl MonthlyHistoryLedger {
    pub fn new(records: Vec<MonthlyAggregate>) -> Self {
        Self { records }
    }

    /// Replace the record for the aggregate's month wholesale, or append it.
    pub fn upsert(&mut self, aggregate: MonthlyAggregate) {
        match self
            .records
            .iter_mut()
            .find(|r| r.month() == aggregate.month())
        {
            Some(existing) => {
                debug!(month = %aggregate.month(), total = aggregate.total(), "Replacing monthly aggregate");
                *existing = aggregate;
            }
            None => {
                debug!(month = %aggregate.month(), total = aggregate.total(), "Appending monthly aggregate");
                self.records.push(aggregate);
            }
        }
    }

    pub fn history(&self) -> &[MonthlyAggregate] {
        &self.records
    }

    pub fn for_month(&self, month: MonthKey) -> Option<&MonthlyAggregate> {
        self.records.iter().find(|r| r.month() == month)
    }

    /// Aggregate for `month`, or an empty one when nothing was recorded yet
    pub fn current(&self, month: MonthKey) -> MonthlyAggregate {
        self.for_month(month)
            .cloned()
            .unwrap_or_else(|| MonthlyAggregate::empty(month))
    }

    pub fn trend(&self) -> Vec<MonthlyTrendPoint> {
        let mut previous: Option<f64> = None;

        self.records
            .iter()
            .map(|record| {
                let total = record.total();
                let change_kg = previous.map(|prev| total - prev);
                let change_percent = previous
                    .filter(|prev| *prev > 0.0)
                    .map(|prev| (total - prev) / prev * 100.0);
                previous = Some(total);

                MonthlyTrendPoint {
                    month: record.month(),
                    total,
                    change_kg,
                    change_percent,
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<MonthlyAggregate> {
        self.records
    }
}
