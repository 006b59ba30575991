//! Shared helpers for gamification integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use studyquest::gamification::ManualClock;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A clock parked on a fixed Monday
pub fn test_clock() -> ManualClock {
    ManualClock::new(day(2024, 4, 1))
}
