//! Streak tracking: calendar days, clocks, and the decay rule

use std::cell::Cell;

use chrono::{Days, Local, NaiveDate};

/// Source of "today" as a calendar day
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Local wall-clock calendar day
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone)]
pub struct ManualClock {
    today: Cell<NaiveDate>,
}

impl ManualClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Cell::new(today),
        }
    }

    pub fn set(&self, today: NaiveDate) {
        self.today.set(today);
    }

    pub fn advance_days(&self, days: u64) {
        self.today.set(self.today.get() + Days::new(days));
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}

/// Days elapsed from `last` to `today` (negative if `last` is in the future)
pub fn days_since(last: NaiveDate, today: NaiveDate) -> i64 {
    (today - last).num_days()
}

/// Whether a completion today would be the first one of the day
pub fn is_new_day(last: Option<NaiveDate>, today: NaiveDate) -> bool {
    last != Some(today)
}

/// A streak survives while the last activity was today or yesterday
pub fn is_streak_broken(last: Option<NaiveDate>, today: NaiveDate) -> bool {
    match last {
        Some(last) => days_since(last, today) > 1,
        None => false,
    }
}

/// Format a day as YYYY-MM-DD
pub fn day_string(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}
