// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Year / day-of-year handling.
//!
//! Day of year (DOY) is the 1-based ordinal of a date within its Gregorian
//! year, as used in RINEX file names and headers.

use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

/// A calendar year together with a 1-based day of year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YearDoy {
    pub year: i32,
    pub day_of_year: u32,
}

impl YearDoy {
    #[inline]
    pub const fn new(year: i32, day_of_year: u32) -> Self {
        Self { year, day_of_year }
    }

    /// Year and day of year of `date`.
    #[inline]
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.ordinal())
    }

    /// The date this pair denotes; see [`year_doy_to_date`].
    pub fn to_date(&self) -> Result<NaiveDate> {
        // Anything past i32::MAX days overflows the calendar either way.
        let doy = i32::try_from(self.day_of_year).unwrap_or(i32::MAX);
        year_doy_to_date(self.year, doy)
    }
}

impl fmt::Display for YearDoy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {:03}", self.year, self.day_of_year)
    }
}

impl From<YearDoy> for (i32, u32) {
    #[inline]
    fn from(value: YearDoy) -> Self {
        (value.year, value.day_of_year)
    }
}

/// Expand a two-digit year: `00..=79` → 2000s, `80..=99` → 1900s.
///
/// Years outside `0..100` are returned unchanged.
#[inline]
pub const fn normalize_two_digit_year(year: i32) -> i32 {
    match year {
        0..=79 => year + 2000,
        80..=99 => year + 1900,
        _ => year,
    }
}

/// Day of year of `date`, January 1 being day 1.
///
/// ```
/// use chrono::NaiveDate;
/// use gnsscal::date_to_doy;
///
/// assert_eq!(date_to_doy(NaiveDate::from_ymd_opt(2017, 5, 17).unwrap()), 137);
/// ```
#[inline]
pub fn date_to_doy(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Year and day of year of `date`.
#[inline]
pub fn date_to_year_doy(date: NaiveDate) -> YearDoy {
    YearDoy::from_date(date)
}

/// Date that is `day_of_year - 1` days after January 1 of `year`.
///
/// Two-digit years are expanded with [`normalize_two_digit_year`]. The day
/// of year is not checked against the length of the year: day 366 of a
/// common year is January 1 of the following year.
///
/// Fails with [`CalendarError::InvalidYearDoy`] when `year < 0` or
/// `day_of_year < 1`.
///
/// ```
/// use chrono::NaiveDate;
/// use gnsscal::year_doy_to_date;
///
/// assert_eq!(year_doy_to_date(2017, 137).unwrap(), NaiveDate::from_ymd_opt(2017, 5, 17).unwrap());
/// assert_eq!(year_doy_to_date(17, 1).unwrap(), NaiveDate::from_ymd_opt(2017, 1, 1).unwrap());
/// ```
pub fn year_doy_to_date(year: i32, day_of_year: i32) -> Result<NaiveDate> {
    if year < 0 || day_of_year < 1 {
        return Err(CalendarError::InvalidYearDoy { year, day_of_year });
    }
    let year = normalize_two_digit_year(year);
    let first_day = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or(CalendarError::InvalidYearDoy { year, day_of_year })?;
    add_days(first_day, i64::from(day_of_year) - 1)
}

/// `base + days`, for a non-negative `days`.
pub(crate) fn add_days(base: NaiveDate, days: i64) -> Result<NaiveDate> {
    u64::try_from(days)
        .ok()
        .and_then(|d| base.checked_add_days(Days::new(d)))
        .ok_or(CalendarError::DateOverflow { base, days })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn doy_of_known_dates() {
        assert_eq!(date_to_doy(ymd(2017, 5, 17)), 137);
        assert_eq!(date_to_doy(ymd(2017, 1, 1)), 1);
        assert_eq!(date_to_doy(ymd(2017, 12, 31)), 365);
        assert_eq!(date_to_doy(ymd(2016, 12, 31)), 366);
    }

    #[test]
    fn year_doy_of_date() {
        let ydoy = date_to_year_doy(ymd(2017, 5, 17));
        assert_eq!(ydoy, YearDoy::new(2017, 137));
        assert_eq!(<(i32, u32)>::from(ydoy), (2017, 137));
        assert_eq!(ydoy.to_string(), "2017, 137");
        assert_eq!(YearDoy::new(2020, 5).to_string(), "2020, 005");
    }

    #[test]
    fn year_doy_to_date_known() {
        assert_eq!(year_doy_to_date(2017, 137).unwrap(), ymd(2017, 5, 17));
        assert_eq!(year_doy_to_date(2016, 366).unwrap(), ymd(2016, 12, 31));
    }

    #[test]
    fn two_digit_years_are_expanded() {
        assert_eq!(year_doy_to_date(17, 1).unwrap(), ymd(2017, 1, 1));
        assert_eq!(year_doy_to_date(85, 1).unwrap(), ymd(1985, 1, 1));
        assert_eq!(year_doy_to_date(0, 1).unwrap(), ymd(2000, 1, 1));
        assert_eq!(year_doy_to_date(79, 1).unwrap(), ymd(2079, 1, 1));
        assert_eq!(year_doy_to_date(80, 1).unwrap(), ymd(1980, 1, 1));
        assert_eq!(year_doy_to_date(99, 1).unwrap(), ymd(1999, 1, 1));
        assert_eq!(year_doy_to_date(100, 1).unwrap(), ymd(100, 1, 1));
    }

    #[test]
    fn invalid_year_or_doy_is_rejected() {
        for (year, doy) in [(1991, 0), (-1, 1), (-1, 0), (2017, -5)] {
            assert_eq!(
                year_doy_to_date(year, doy),
                Err(CalendarError::InvalidYearDoy {
                    year,
                    day_of_year: doy
                })
            );
        }
    }

    // Day of year is not bounded by the year length; it rolls over.
    #[test]
    fn day_past_year_end_rolls_into_next_year() {
        assert_eq!(year_doy_to_date(2017, 366).unwrap(), ymd(2018, 1, 1));
        assert_eq!(year_doy_to_date(2017, 400).unwrap(), ymd(2018, 2, 4));
    }

    #[test]
    fn year_doy_roundtrip_over_a_leap_year() {
        for doy in 1..=366 {
            let date = year_doy_to_date(2020, doy).unwrap();
            assert_eq!(date_to_year_doy(date), YearDoy::new(2020, doy as u32));
            assert_eq!(YearDoy::from_date(date).to_date().unwrap(), date);
        }
    }

    #[test]
    fn add_days_overflow() {
        assert!(matches!(
            add_days(NaiveDate::MAX, 1),
            Err(CalendarError::DateOverflow { .. })
        ));
        assert!(add_days(ymd(2000, 1, 1), -1).is_err());
    }
}
