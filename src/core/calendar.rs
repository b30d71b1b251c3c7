//! Calendar arithmetic
//!
//! Pure date helpers over `NaiveDate`: week-start alignment, the
//! weekday-to-Friday expiration offset, and a weekday-only business day count.
//! No holiday calendar is consulted anywhere in this module.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Calendar days in one week
pub const DAYS_PER_WEEK: i64 = 7;

/// Shift a date by a signed number of calendar days
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Shift a date by a signed number of weeks
pub fn add_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    add_days(date, weeks * DAYS_PER_WEEK)
}

pub fn is_monday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The Monday of the week containing `date` (the date itself if it is a Monday).
///
/// Sundays map back six days, to the Monday that opened their week.
pub fn monday_on_or_before(date: NaiveDate) -> NaiveDate {
    add_days(date, -i64::from(date.weekday().num_days_from_monday()))
}

/// Days from `weekday` to the next Friday expiration.
///
/// A Friday maps to the following Friday: same-day expirations are never
/// listed.
pub fn days_to_next_friday(weekday: Weekday) -> i64 {
    match weekday {
        Weekday::Mon => 4,
        Weekday::Tue => 3,
        Weekday::Wed => 2,
        Weekday::Thu => 1,
        Weekday::Fri => 7,
        Weekday::Sat => 6,
        Weekday::Sun => 5,
    }
}

/// Weekdays in the half-open range `(today, date]`.
///
/// Returns 0 when `date` is not after `today`.
pub fn business_days_until(today: NaiveDate, date: NaiveDate) -> u32 {
    today
        .iter_days()
        .skip(1)
        .take_while(|d| *d <= date)
        .filter(|d| is_business_day(*d))
        .count() as u32
}
