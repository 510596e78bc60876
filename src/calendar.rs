//! Calendar utilities.
//!
//! Pure date helpers used by every roster component: day differences,
//! ISO week numbers, weekday numbering and names, month lengths.
//!
//! # Weekday numbering
//! Monday = 1 ... Sunday = 7 (ISO 8601). Saturday and Sunday are the
//! weekend.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Language used for weekday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Lundi, Mardi, ...
    #[default]
    French,
    /// Monday, Tuesday, ...
    English,
}

const FRENCH_DAYS: [&str; 7] = [
    "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
];

const ENGLISH_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Whole days from `from` to `to` (negative if `to` is earlier).
#[inline]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// ISO 8601 week number (1..=53).
#[inline]
pub fn iso_week(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Weekday index, Monday = 1 ... Sunday = 7.
#[inline]
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

/// Whether the date is a Saturday or a Sunday.
#[inline]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Localised weekday name.
pub fn weekday_name(date: NaiveDate, locale: Locale) -> &'static str {
    let idx = date.weekday().num_days_from_monday() as usize;
    match locale {
        Locale::French => FRENCH_DAYS[idx],
        Locale::English => ENGLISH_DAYS[idx],
    }
}

/// First day of a month, validating month and year.
pub fn first_of_month(month: u32, year: i32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(RosterError::InvalidMonth { month });
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(RosterError::InvalidYear { year })
}

/// Number of days in a month.
pub fn days_in_month(month: u32, year: i32) -> Result<u32> {
    let first = first_of_month(month, year)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => Ok(days_between(first, next) as u32),
        // Last representable December.
        None => Ok(31),
    }
}

/// Every date of a month in ascending order.
pub fn month_days(month: u32, year: i32) -> Result<Vec<NaiveDate>> {
    let first = first_of_month(month, year)?;
    let len = days_in_month(month, year)? as usize;
    Ok(first.iter_days().take(len).collect())
}

/// Every date from `start` to `end` inclusive. Empty if `start > end`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

/// `(month, year)` containing `date`.
///
/// Lets callers derive default month parameters from their own notion
/// of "today".
#[inline]
pub fn month_of(date: NaiveDate) -> (u32, i32) {
    (date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(d(2025, 11, 1), d(2025, 11, 9)), 8);
        assert_eq!(days_between(d(2025, 11, 9), d(2025, 11, 1)), -8);
        assert_eq!(days_between(d(2024, 2, 28), d(2024, 3, 1)), 2); // leap year
    }

    #[test]
    fn test_iso_week() {
        assert_eq!(iso_week(d(2025, 1, 1)), 1);
        assert_eq!(iso_week(d(2025, 11, 3)), 45);
        assert_eq!(iso_week(d(2021, 1, 3)), 53); // belongs to 2020-W53
        assert_eq!(iso_week(d(2024, 12, 30)), 1); // belongs to 2025-W01
    }

    #[test]
    fn test_weekday_index_and_weekend() {
        assert_eq!(weekday_index(d(2025, 11, 3)), 1); // Monday
        assert_eq!(weekday_index(d(2025, 11, 9)), 7); // Sunday
        assert!(is_weekend(d(2025, 11, 8)));
        assert!(is_weekend(d(2025, 11, 9)));
        assert!(!is_weekend(d(2025, 11, 7)));
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(d(2025, 11, 1), Locale::French), "Samedi");
        assert_eq!(weekday_name(d(2025, 11, 1), Locale::English), "Saturday");
        assert_eq!(weekday_name(d(2025, 11, 5), Locale::French), "Mercredi");
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2, 2024).unwrap(), 29);
        assert_eq!(days_in_month(2, 2025).unwrap(), 28);
        assert_eq!(days_in_month(2, 1900).unwrap(), 28);
        assert_eq!(days_in_month(2, 2000).unwrap(), 29);
        assert_eq!(days_in_month(11, 2025).unwrap(), 30);
        assert_eq!(days_in_month(12, 2025).unwrap(), 31);
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(days_in_month(0, 2025), Err(RosterError::InvalidMonth { month: 0 }));
        assert_eq!(days_in_month(13, 2025), Err(RosterError::InvalidMonth { month: 13 }));
    }

    #[test]
    fn test_month_days_ordered() {
        let days = month_days(11, 2025).unwrap();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0], d(2025, 11, 1));
        assert_eq!(days[29], d(2025, 11, 30));
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_date_range() {
        let range: Vec<_> = date_range(d(2025, 12, 30), d(2026, 1, 2)).collect();
        assert_eq!(range.len(), 4);
        assert_eq!(date_range(d(2025, 1, 2), d(2025, 1, 1)).count(), 0);
        assert_eq!(date_range(d(2025, 1, 1), d(2025, 1, 1)).count(), 1);
    }

    #[test]
    fn test_month_of() {
        assert_eq!(month_of(d(2026, 10, 16)), (10, 2026));
    }
}
