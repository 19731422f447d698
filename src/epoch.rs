// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Epochs and the two primitive week/day-of-week conversions.
//!
//! Every GNSS week number in this crate is measured from an [`Epoch`]: a
//! fixed calendar day on which week 0, day 0 begins. [`date_to_elapsed`]
//! and [`elapsed_to_date`] are exact inverses of each other and every
//! higher-level conversion is composed from them.

use chrono::NaiveDate;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

use crate::calendar::add_days;
use crate::error::{CalendarError, Result};

const DAYS_PER_WEEK: i64 = 7;

/// Builds a `NaiveDate` in const context; the arguments must form a real date.
const fn const_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid epoch date"),
    }
}

/// GPS epoch: 1980-01-06, start of GPS week 0.
pub const GPS_EPOCH: Epoch = Epoch::new("GPS", const_date(1980, 1, 6));

/// BeiDou epoch: 2006-01-01, start of BDS week 0.
pub const BDS_EPOCH: Epoch = Epoch::new("BDS", const_date(2006, 1, 1));

// ═══════════════════════════════════════════════════════════════════════════
// Epoch
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar day on which a week-based time system starts counting.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Epoch {
    label: &'static str,
    date: NaiveDate,
}

impl Epoch {
    /// Create an epoch labelled `label` starting on `date`.
    #[inline]
    pub const fn new(label: &'static str, date: NaiveDate) -> Self {
        Self { label, date }
    }

    /// Short name of the time system (`"GPS"`, `"BDS"`, ...).
    #[inline]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// The first day of week 0.
    #[inline]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// `true` if `date` is on or after this epoch.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.date
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.date)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// WeekDay
// ═══════════════════════════════════════════════════════════════════════════

/// Whole weeks and day of week elapsed since some epoch.
///
/// The invariants `week >= 0` and `0 <= day_of_week <= 6` are enforced by
/// [`WeekDay::new`]; a `WeekDay` value is always valid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekDay {
    week: i64,
    day_of_week: u8,
}

impl WeekDay {
    /// Validate and build a week/day-of-week pair.
    ///
    /// ```
    /// use gnsscal::WeekDay;
    ///
    /// assert!(WeekDay::new(1949, 3).is_ok());
    /// assert!(WeekDay::new(-1, 3).is_err());
    /// assert!(WeekDay::new(1949, 7).is_err());
    /// ```
    pub fn new(week: i64, day_of_week: i64) -> Result<Self> {
        match u8::try_from(day_of_week) {
            Ok(dow) if week >= 0 && dow < DAYS_PER_WEEK as u8 => Ok(Self {
                week,
                day_of_week: dow,
            }),
            _ => Err(CalendarError::InvalidWeekDay { week, day_of_week }),
        }
    }

    /// Split a non-negative day count into weeks and day of week.
    fn from_elapsed_days(days: i64) -> Self {
        debug_assert!(days >= 0);
        Self {
            week: days / DAYS_PER_WEEK,
            day_of_week: (days % DAYS_PER_WEEK) as u8,
        }
    }

    /// Whole weeks elapsed.
    #[inline]
    pub const fn week(&self) -> i64 {
        self.week
    }

    /// Day within the week, 0 = first day.
    #[inline]
    pub const fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    /// Day 0 of the same week.
    #[inline]
    pub const fn first_day(&self) -> Self {
        Self {
            week: self.week,
            day_of_week: 0,
        }
    }

    /// Total days elapsed, saturating at `i64::MAX`.
    #[inline]
    pub fn elapsed_days(&self) -> i64 {
        self.week
            .saturating_mul(DAYS_PER_WEEK)
            .saturating_add(i64::from(self.day_of_week))
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}, {}", self.week, self.day_of_week)
    }
}

impl From<WeekDay> for (i64, u8) {
    #[inline]
    fn from(value: WeekDay) -> Self {
        (value.week, value.day_of_week)
    }
}

#[cfg(feature = "serde")]
impl Serialize for WeekDay {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("WeekDay", 2)?;
        s.serialize_field("week", &self.week)?;
        s.serialize_field("day_of_week", &self.day_of_week)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for WeekDay {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            week: i64,
            day_of_week: i64,
        }

        let raw = Raw::deserialize(deserializer)?;
        WeekDay::new(raw.week, raw.day_of_week).map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Primitives
// ═══════════════════════════════════════════════════════════════════════════

/// Weeks and day of week elapsed from `epoch` to `date`.
///
/// Fails with [`CalendarError::EpochOrdering`] when `date` precedes the epoch.
///
/// ```
/// use chrono::NaiveDate;
/// use gnsscal::{date_to_elapsed, GPS_EPOCH};
///
/// let date = NaiveDate::from_ymd_opt(2017, 5, 17).unwrap();
/// let elapsed = date_to_elapsed(date, GPS_EPOCH).unwrap();
/// assert_eq!((elapsed.week(), elapsed.day_of_week()), (1949, 3));
/// ```
pub fn date_to_elapsed(date: NaiveDate, epoch: Epoch) -> Result<WeekDay> {
    let days = date.signed_duration_since(epoch.date()).num_days();
    if days < 0 {
        return Err(CalendarError::EpochOrdering { date, epoch });
    }
    Ok(WeekDay::from_elapsed_days(days))
}

/// Date reached `weeks` weeks and `day_of_week` days after `epoch`.
///
/// Fails with [`CalendarError::InvalidWeekDay`] when `weeks < 0` or
/// `day_of_week` is outside `[0, 6]`.
pub fn elapsed_to_date(weeks: i64, day_of_week: i64, epoch: Epoch) -> Result<NaiveDate> {
    let elapsed = WeekDay::new(weeks, day_of_week)?;
    weekday_to_date(elapsed, epoch)
}

/// Same as [`elapsed_to_date`] for an already validated pair.
pub(crate) fn weekday_to_date(elapsed: WeekDay, epoch: Epoch) -> Result<NaiveDate> {
    add_days(epoch.date(), elapsed.elapsed_days())
}
