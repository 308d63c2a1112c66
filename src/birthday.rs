//! Birthday proximity math.
//!
//! Everything here is a pure function of a birthday and an explicit
//! reference date; callers pass `today` in rather than reading the clock,
//! so every computation is reproducible in tests.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// How far away a birthday is, for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    Today,
    Tomorrow,
    InDays(i64),
}

impl Proximity {
    pub fn of(days: i64) -> Self {
        match days {
            0 => Proximity::Today,
            1 => Proximity::Tomorrow,
            n => Proximity::InDays(n),
        }
    }
}

impl fmt::Display for Proximity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Proximity::Today => write!(f, "Today"),
            Proximity::Tomorrow => write!(f, "Tomorrow"),
            Proximity::InDays(n) => write!(f, "{} days", n),
        }
    }
}

/// The birthday's month/day in the given year. A Feb 29 birthday rolls
/// forward to Mar 1 in common years.
fn occurrence_in(year: i32, birthday: NaiveDate) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()) {
        Some(d) => d,
        None => NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year"),
    }
}

/// The nearest present-or-future date matching the birthday's month/day.
/// The birthday's own year is ignored.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in(today.year(), birthday);
    if this_year < today {
        occurrence_in(today.year() + 1, birthday)
    } else {
        this_year
    }
}

/// Whole days from `today` until the next occurrence. Always in `0..=366`.
/// Working on `NaiveDate` keeps both ends midnight-aligned, so there is no
/// time-of-day or DST component to strip before differencing.
pub fn days_until(birthday: NaiveDate, today: NaiveDate) -> i64 {
    (next_occurrence(birthday, today) - today).num_days()
}

/// Display classification for the next occurrence.
pub fn classify(birthday: NaiveDate, today: NaiveDate) -> Proximity {
    Proximity::of(days_until(birthday, today))
}

/// Whether the next occurrence falls within the 7-day digest window
/// `[today, today + 7]`, inclusive on both ends.
pub fn is_upcoming(birthday: NaiveDate, today: NaiveDate) -> bool {
    days_until(birthday, today) <= 7
}
