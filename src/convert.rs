// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Named conversions between calendar dates, day of year, GPS weeks and
//! BDS weeks.
//!
//! These are thin compositions of [`GnssWeek`] and the year / day-of-year
//! helpers, kept as free functions for callers that prefer them.

use chrono::NaiveDate;

use crate::calendar::{date_to_year_doy, year_doy_to_date, YearDoy};
use crate::error::Result;
use crate::week::GnssWeek;
use crate::{BdsWeek, GpsWeek, BDS, GPS};

/// GPS week and day of week of `date`.
///
/// ```
/// use chrono::NaiveDate;
/// use gnsscal::date_to_gps_weekday;
///
/// let gps = date_to_gps_weekday(NaiveDate::from_ymd_opt(2017, 5, 17).unwrap()).unwrap();
/// assert_eq!(<(i64, u8)>::from(gps), (1949, 3));
///
/// assert!(date_to_gps_weekday(NaiveDate::from_ymd_opt(1917, 5, 17).unwrap()).is_err());
/// ```
pub fn date_to_gps_weekday(date: NaiveDate) -> Result<GpsWeek> {
    GpsWeek::from_date(date)
}

/// BDS week and day of week of `date`.
pub fn date_to_bds_weekday(date: NaiveDate) -> Result<BdsWeek> {
    BdsWeek::from_date(date)
}

/// Calendar date of GPS `week`, day `day_of_week`.
pub fn gps_weekday_to_date(week: i64, day_of_week: i64) -> Result<NaiveDate> {
    GpsWeek::new(week, day_of_week)?.to_date()
}

/// Calendar date of BDS `week`, day `day_of_week`.
pub fn bds_weekday_to_date(week: i64, day_of_week: i64) -> Result<NaiveDate> {
    BdsWeek::new(week, day_of_week)?.to_date()
}

/// GPS week and day of week of a year / day-of-year pair.
pub fn year_doy_to_gps_weekday(year: i32, day_of_year: i32) -> Result<GpsWeek> {
    date_to_gps_weekday(year_doy_to_date(year, day_of_year)?)
}

/// BDS week and day of week of a year / day-of-year pair.
pub fn year_doy_to_bds_weekday(year: i32, day_of_year: i32) -> Result<BdsWeek> {
    date_to_bds_weekday(year_doy_to_date(year, day_of_year)?)
}

/// Year and day of year of GPS `week`, day `day_of_week`.
pub fn gps_weekday_to_year_doy(week: i64, day_of_week: i64) -> Result<YearDoy> {
    gps_weekday_to_date(week, day_of_week).map(date_to_year_doy)
}

/// Year and day of year of BDS `week`, day `day_of_week`.
pub fn bds_weekday_to_year_doy(week: i64, day_of_week: i64) -> Result<YearDoy> {
    bds_weekday_to_date(week, day_of_week).map(date_to_year_doy)
}

/// BDS week that contains the first day of GPS week `week`.
///
/// ```
/// assert_eq!(gnsscal::gps_week_to_bds_week(1949).unwrap(), 593);
/// ```
pub fn gps_week_to_bds_week(week: i64) -> Result<i64> {
    week_number_in::<GPS, BDS>(week)
}

/// GPS week that contains the first day of BDS week `week`.
pub fn bds_week_to_gps_week(week: i64) -> Result<i64> {
    week_number_in::<BDS, GPS>(week)
}

fn week_number_in<S: crate::TimeSystem, T: crate::TimeSystem>(week: i64) -> Result<i64> {
    GnssWeek::<S>::new(week, 0)?
        .to::<T>()
        .map(|target| target.week())
}
