//! Date sources for new transactions

use crate::core::traits::TimeProvider;
use chrono::{NaiveDate, Utc};

/// Clock reading today's date in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeProvider for SystemClock {
    fn current_date(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a single date
///
/// Used by tests and by the CLI `--as-of` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl TimeProvider for FixedClock {
    fn current_date(&self) -> NaiveDate {
        self.0
    }
}
