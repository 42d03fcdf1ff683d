//! Julian day helpers.
//!
//! Events and segments identify days by julian day number, which keeps all
//! day arithmetic integer and timezone-free.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Julian day number of 1970-01-01.
pub const EPOCH_JULIAN_DAY: i32 = 2_440_588;

/// Julian day number of 0000-12-31, the day before chrono's day 1 of the
/// common era.
const CE_JULIAN_DAY_OFFSET: i32 = 1_721_425;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

/// Julian day number of `date`.
///
/// Every date chrono can represent has a julian day number that fits in an
/// `i32`, so this is total.
pub fn julian_day(date: NaiveDate) -> i32 {
    date.num_days_from_ce() + CE_JULIAN_DAY_OFFSET
}

/// Calendar date of a julian day number.
pub fn date_from_julian_day(julian_day: i32) -> Option<NaiveDate> {
    epoch().checked_add_signed(Duration::days(i64::from(julian_day - EPOCH_JULIAN_DAY)))
}

/// Weeks since the epoch week, where weeks begin on `first_day_of_week`.
///
/// The week containing 1970-01-01 (a Thursday) is week 0. This is a display
/// index only and not an ISO week number.
///
/// Days before the epoch week round towards negative infinity, so the day
/// before week 0 begins is in week -1. Truncating division would fold the
/// six days before week 0 into it.
pub fn weeks_since_epoch(julian_day: i32, first_day_of_week: Weekday) -> i32 {
    let thursday = Weekday::Thu.num_days_from_sunday() as i32;
    let mut diff = thursday - first_day_of_week.num_days_from_sunday() as i32;
    if diff < 0 {
        diff += 7;
    }
    let ref_day = EPOCH_JULIAN_DAY - diff;
    (julian_day - ref_day).div_euclid(7)
}

/// Julian day of the first day of the week that contains `date`.
pub fn week_start(date: NaiveDate, first_day_of_week: Weekday) -> i32 {
    let offset = (7 + date.weekday().num_days_from_sunday()
        - first_day_of_week.num_days_from_sunday())
        % 7;
    julian_day(date) - offset as i32
}
