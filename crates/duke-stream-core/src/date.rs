//! Calendar text to spreadsheet serial numbers
//!
//! Serials count days from the 1900 epoch used by Excel, including its
//! phantom 29 February 1900. Values produced here match the ones Excel
//! itself stores, not the true calendar distance.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use lazy_regex::regex_captures;

/// First year representable in the 1900 date system
const EPOCH_YEAR: i64 = 1900;

/// Last year representable in the 1900 date system
const MAX_YEAR: i64 = 9999;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a date and/or time string to a serial number
///
/// The first `YYYY-MM-DD` and the first `HH:MM:SS` found anywhere in `text`
/// are used; either may be missing. Dates outside 1900-01-01..=9999-12-31 or
/// naming a day the month doesn't have yield `0.0`. A time with no date falls
/// in that case too, unless it is paired with one of the epoch dates
/// (`1899-12-31`, `1900-01-00`).
///
/// # Examples
/// ```
/// use duke_stream_core::date::to_serial;
///
/// assert_eq!(to_serial("2008-01-01"), 39448.0);
/// assert_eq!(to_serial("1900-02-29"), 60.0);
/// assert_eq!(to_serial("2008-01-01 12:00:00"), 39448.5);
/// ```
pub fn to_serial(text: &str) -> f64 {
    let (year, month, day) = match regex_captures!(r"(\d{4})-(\d{2})-(\d{2})", text) {
        Some((_, y, m, d)) => (parse_digits(y), parse_digits(m), parse_digits(d)),
        None => (0, 0, 0),
    };

    let fraction = match regex_captures!(r"(\d{2}):(\d{2}):(\d{2})", text) {
        Some((_, h, m, s)) => {
            let seconds = parse_digits(h) * 3600 + parse_digits(m) * 60 + parse_digits(s);
            seconds as f64 / SECONDS_PER_DAY
        }
        None => 0.0,
    };

    serial(year, month, day, fraction)
}

/// Serial number for a chrono date-time
pub fn serial_from_datetime(value: &NaiveDateTime) -> f64 {
    let seconds = value.num_seconds_from_midnight() as f64;
    serial(
        value.year() as i64,
        value.month() as i64,
        value.day() as i64,
        seconds / SECONDS_PER_DAY,
    )
}

/// Serial number for a chrono date (midnight)
pub fn serial_from_date(value: &NaiveDate) -> f64 {
    serial(
        value.year() as i64,
        value.month() as i64,
        value.day() as i64,
        0.0,
    )
}

fn parse_digits(s: &str) -> i64 {
    // the patterns only capture ASCII digits
    s.bytes().fold(0, |acc, b| acc * 10 + (b - b'0') as i64)
}

fn is_leap_year(year: i64) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

fn serial(year: i64, month: i64, day: i64, fraction: f64) -> f64 {
    // Literal cases Excel's 1900 epoch treats specially
    match (year, month, day) {
        (1899, 12, 31) | (1900, 1, 0) => return fraction,
        (1900, 2, 29) => return 60.0 + fraction,
        _ => {}
    }

    let leap = is_leap_year(year);
    let month_days: [i64; 12] = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];

    if !(EPOCH_YEAR..=MAX_YEAR).contains(&year) {
        return 0.0;
    }
    if !(1..=12).contains(&month) {
        return 0.0;
    }
    if day < 1 || day > month_days[(month - 1) as usize] {
        return 0.0;
    }

    let range = year - EPOCH_YEAR;

    let mut days = day;
    days += month_days[..(month - 1) as usize].iter().sum::<i64>();
    days += range * 365;
    days += range / 4;
    days -= range / 100;
    days += (range + 300) / 400;
    days -= leap as i64;

    // Excel counts 1900-02-29, which never existed
    if days > 59 {
        days += 1;
    }

    days as f64 + fraction
}
