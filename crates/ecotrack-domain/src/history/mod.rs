mod ledger;

pub use ledger::{MonthlyHistoryLedger, MonthlyTrendPoint};
