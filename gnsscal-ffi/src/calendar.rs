// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for calendar dates and year / day of year.

use chrono::{Datelike, NaiveDate};
use gnsscal::{date_to_doy, date_to_year_doy, year_doy_to_date, YearDoy, BDS_EPOCH, GPS_EPOCH};

use crate::error::GnssCalStatus;
use crate::store;

// ═══════════════════════════════════════════════════════════════════════════
// C-repr types
// ═══════════════════════════════════════════════════════════════════════════

/// Gregorian calendar date for C interop.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GnssCalDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl GnssCalDate {
    /// `None` when the triple is not a real Gregorian date.
    pub(crate) fn into_chrono(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.into(), self.day.into())
    }

    pub(crate) fn from_chrono(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }
}

/// Year and 1-based day of year for C interop.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GnssCalYearDoy {
    pub year: i32,
    pub day_of_year: u32,
}

impl From<YearDoy> for GnssCalYearDoy {
    fn from(value: YearDoy) -> Self {
        Self {
            year: value.year,
            day_of_year: value.day_of_year,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Epochs
// ═══════════════════════════════════════════════════════════════════════════

/// Return the GPS epoch (1980-01-06).
#[no_mangle]
pub extern "C" fn gnsscal_gps_epoch() -> GnssCalDate {
    GnssCalDate::from_chrono(GPS_EPOCH.date())
}

/// Return the BDS epoch (2006-01-01).
#[no_mangle]
pub extern "C" fn gnsscal_bds_epoch() -> GnssCalDate {
    GnssCalDate::from_chrono(BDS_EPOCH.date())
}

// ═══════════════════════════════════════════════════════════════════════════
// Day of year
// ═══════════════════════════════════════════════════════════════════════════

/// Day of year of `date`, January 1 being day 1.
///
/// # Safety
/// `out` must be a valid, writable pointer to `u32`.
#[no_mangle]
pub unsafe extern "C" fn gnsscal_date_to_doy(date: GnssCalDate, out: *mut u32) -> GnssCalStatus {
    catch_panic!(GnssCalStatus::Internal, {
        if out.is_null() {
            return GnssCalStatus::NullPointer;
        }
        match date.into_chrono() {
            Some(d) => unsafe { store(out, Ok(date_to_doy(d))) },
            None => GnssCalStatus::InvalidDate,
        }
    })
}

/// Year and day of year of `date`.
///
/// # Safety
/// `out` must be a valid, writable pointer to `GnssCalYearDoy`.
#[no_mangle]
pub unsafe extern "C" fn gnsscal_date_to_year_doy(
    date: GnssCalDate,
    out: *mut GnssCalYearDoy,
) -> GnssCalStatus {
    catch_panic!(GnssCalStatus::Internal, {
        if out.is_null() {
            return GnssCalStatus::NullPointer;
        }
        match date.into_chrono() {
            Some(d) => unsafe { store(out, Ok(date_to_year_doy(d).into())) },
            None => GnssCalStatus::InvalidDate,
        }
    })
}

/// Date of `day_of_year` in `year`. Two-digit years are expanded
/// (`00..79` → 2000s, `80..99` → 1900s). Returns OutOfRange for a negative
/// year or a day of year below 1.
///
/// # Safety
/// `out` must be a valid, writable pointer to `GnssCalDate`.
#[no_mangle]
pub unsafe extern "C" fn gnsscal_year_doy_to_date(
    year: i32,
    day_of_year: i32,
    out: *mut GnssCalDate,
) -> GnssCalStatus {
    catch_panic!(GnssCalStatus::Internal, {
        let date = year_doy_to_date(year, day_of_year).map(GnssCalDate::from_chrono);
        unsafe { store(out, date) }
    })
}
