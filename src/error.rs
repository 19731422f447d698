// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every fallible conversion.

use chrono::NaiveDate;

use crate::epoch::Epoch;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CalendarError>;

/// Coarse classification of a [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A date precedes the epoch it was measured against.
    EpochOrdering,
    /// An argument lies outside its admissible range.
    Range,
}

/// Error type for all fallible operations in the gnsscal crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a date lies before the epoch of the requested time system.
    #[error("invalid date: {date}, too early for the {epoch} epoch")]
    EpochOrdering {
        /// The offending date.
        date: NaiveDate,
        /// The epoch it was compared against.
        epoch: Epoch,
    },

    /// Returned when a week is negative or a day of week is outside `[0, 6]`.
    #[error("invalid week or day: {week}, {day_of_week}")]
    InvalidWeekDay {
        /// The requested week.
        week: i64,
        /// The requested day of week.
        day_of_week: i64,
    },

    /// Returned when a year is negative or a day of year is below 1.
    #[error("invalid year or day of year: {year}, {day_of_year}")]
    InvalidYearDoy {
        /// The requested year.
        year: i32,
        /// The requested day of year.
        day_of_year: i32,
    },

    /// Returned when advancing from `base` lands outside the representable calendar.
    #[error("date overflow: {days} days after {base} is not representable")]
    DateOverflow {
        /// Starting date of the offset.
        base: NaiveDate,
        /// Number of days requested past `base`.
        days: i64,
    },
}

impl CalendarError {
    /// Which of the two error kinds this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EpochOrdering { .. } => ErrorKind::EpochOrdering,
            Self::InvalidWeekDay { .. } | Self::InvalidYearDoy { .. } | Self::DateOverflow { .. } => {
                ErrorKind::Range
            }
        }
    }
}
