//! Source of the "current month" used to resolve ongoing periods.

use crate::model::period::YearMonth;

/// Supplies the month that `present` period ends resolve to.
pub trait Clock {
    fn current_month(&self) -> YearMonth;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_month(&self) -> YearMonth {
        YearMonth::from_date(&chrono::Local::now().date_naive())
    }
}

/// Constant month, for reproducible views and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub YearMonth);

impl Clock for FixedClock {
    fn current_month(&self) -> YearMonth {
        self.0
    }
}
