// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! GNSS calendar
//!
//! Conversions between Gregorian calendar dates and the day-based
//! representations used by GNSS receivers and data formats such as RINEX.
//!
//! # Core types
//!
//! - [`NaiveDate`] (from `chrono`): a proleptic Gregorian calendar date.
//! - [`Epoch`]: the day on which a week-based time system starts counting.
//! - [`WeekDay`]: whole weeks plus day of week elapsed since an epoch.
//! - [`GnssWeek<S>`]: a [`WeekDay`] parameterised by a [`TimeSystem`] marker.
//! - [`GpsWeek`] / [`BdsWeek`]: type aliases for `GnssWeek<GPS>` / `GnssWeek<BDS>`.
//! - [`YearDoy`]: year plus 1-based day of year.
//!
//! # Time systems
//!
//! | Marker | System | Epoch constant |
//! |--------|--------|----------------|
//! | [`GPS`] | GPS Time | [`GPS_EPOCH`] (1980-01-06) |
//! | [`BDS`] | BeiDou Time | [`BDS_EPOCH`] (2006-01-01) |
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use gnsscal::{date_to_year_doy, BdsWeek, GpsWeek, BDS};
//!
//! let date = NaiveDate::from_ymd_opt(2017, 5, 17).unwrap();
//! let gps = GpsWeek::from_date(date).unwrap();
//! assert_eq!((gps.week(), gps.day_of_week()), (1949, 3));
//! assert_eq!(gps.to::<BDS>().unwrap(), BdsWeek::new(593, 3).unwrap());
//! assert_eq!(date_to_year_doy(date).day_of_year, 137);
//! ```
//!
//! All functions are pure: they read only the two epoch constants and may be
//! called from any thread.

mod calendar;
mod convert;
mod epoch;
mod error;
pub(crate) mod scales;
mod week;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use chrono::NaiveDate;

pub use calendar::{
    date_to_doy, date_to_year_doy, normalize_two_digit_year, year_doy_to_date, YearDoy,
};
pub use convert::{
    bds_week_to_gps_week, bds_weekday_to_date, bds_weekday_to_year_doy, date_to_bds_weekday,
    date_to_gps_weekday, gps_week_to_bds_week, gps_weekday_to_date, gps_weekday_to_year_doy,
    year_doy_to_bds_weekday, year_doy_to_gps_weekday,
};
pub use epoch::{date_to_elapsed, elapsed_to_date, Epoch, WeekDay, BDS_EPOCH, GPS_EPOCH};
pub use error::{CalendarError, ErrorKind, Result};
pub use scales::{TimeSystem, BDS, GPS};
pub use week::GnssWeek;

// ── Type aliases ──────────────────────────────────────────────────────────

/// GPS week and day of week: weeks since 1980-01-06.
///
/// This is a type alias for [`GnssWeek<GPS>`].
pub type GpsWeek = GnssWeek<GPS>;

/// BDS week and day of week: weeks since 2006-01-01.
///
/// This is a type alias for [`GnssWeek<BDS>`].
pub type BdsWeek = GnssWeek<BDS>;
