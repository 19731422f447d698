// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-system parameterised week / day-of-week.
//!
//! [`GnssWeek<S>`] stores a validated [`WeekDay`] whose *meaning* is fixed by
//! the compile-time marker `S: TimeSystem`. Conversion to and from calendar
//! dates, cross-system conversion, serialisation and display are implemented
//! once, generically.

use chrono::NaiveDate;
use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::epoch::{date_to_elapsed, weekday_to_date, WeekDay};
use crate::error::Result;
use crate::scales::TimeSystem;

/// A week and day of week on time system `S`.
///
/// `PhantomData` is zero-sized, so `GnssWeek<S>` is layout-identical to
/// [`WeekDay`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GnssWeek<S: TimeSystem> {
    weekday: WeekDay,
    _system: PhantomData<S>,
}

impl<S: TimeSystem> GnssWeek<S> {
    // ── constructors ──────────────────────────────────────────────────

    /// Validate and build from raw week and day-of-week numbers.
    pub fn new(week: i64, day_of_week: i64) -> Result<Self> {
        WeekDay::new(week, day_of_week).map(Self::from_weekday)
    }

    /// Wrap an already validated pair.
    #[inline]
    pub const fn from_weekday(weekday: WeekDay) -> Self {
        Self {
            weekday,
            _system: PhantomData,
        }
    }

    /// Week containing `date`; fails if `date` precedes `S::EPOCH`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use gnsscal::{BdsWeek, GpsWeek};
    ///
    /// let date = NaiveDate::from_ymd_opt(2017, 5, 17).unwrap();
    /// assert_eq!(GpsWeek::from_date(date).unwrap().week(), 1949);
    /// assert_eq!(BdsWeek::from_date(date).unwrap().week(), 593);
    /// ```
    pub fn from_date(date: NaiveDate) -> Result<Self> {
        date_to_elapsed(date, S::EPOCH).map(Self::from_weekday)
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn week(&self) -> i64 {
        self.weekday.week()
    }

    #[inline]
    pub const fn day_of_week(&self) -> u8 {
        self.weekday.day_of_week()
    }

    /// The untyped week / day-of-week pair.
    #[inline]
    pub const fn weekday(&self) -> WeekDay {
        self.weekday
    }

    /// Calendar date of this day.
    pub fn to_date(&self) -> Result<NaiveDate> {
        weekday_to_date(self.weekday, S::EPOCH)
    }

    /// Day 0 of the same week.
    #[inline]
    pub fn start_of_week(&self) -> Self {
        Self::from_weekday(self.weekday.first_day())
    }

    // ── cross-system conversion ───────────────────────────────────────

    /// Express the same calendar day on time system `T`.
    ///
    /// ```text
    /// self → NaiveDate → target
    /// ```
    ///
    /// Fails when the day lies before `T::EPOCH`.
    pub fn to<T: TimeSystem>(&self) -> Result<GnssWeek<T>> {
        GnssWeek::<T>::from_date(self.to_date()?)
    }
}

impl<S: TimeSystem> fmt::Display for GnssWeek<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} week: {}", S::LABEL, self.weekday)
    }
}

impl<S: TimeSystem> From<GnssWeek<S>> for WeekDay {
    #[inline]
    fn from(value: GnssWeek<S>) -> Self {
        value.weekday
    }
}

impl<S: TimeSystem> From<GnssWeek<S>> for (i64, u8) {
    #[inline]
    fn from(value: GnssWeek<S>) -> Self {
        value.weekday.into()
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeSystem> Serialize for GnssWeek<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.weekday.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeSystem> Deserialize<'de> for GnssWeek<S> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        WeekDay::deserialize(deserializer).map(Self::from_weekday)
    }
}
