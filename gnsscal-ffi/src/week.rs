// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for GPS and BDS week / day of week.

use gnsscal::{
    bds_week_to_gps_week, bds_weekday_to_date, date_to_bds_weekday, date_to_gps_weekday,
    gps_week_to_bds_week, gps_weekday_to_date, WeekDay,
};

use crate::calendar::GnssCalDate;
use crate::error::GnssCalStatus;
use crate::store;

/// Week and day of week (0..=6) for C interop.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GnssCalWeekDay {
    pub week: i64,
    pub day_of_week: u8,
}

impl From<WeekDay> for GnssCalWeekDay {
    fn from(value: WeekDay) -> Self {
        Self {
            week: value.week(),
            day_of_week: value.day_of_week(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Date → week
// ═══════════════════════════════════════════════════════════════════════════

/// GPS week and day of week of `date`. Returns EpochOrdering before 1980-01-06.
///
/// # Safety
/// `out` must be a valid, writable pointer to `GnssCalWeekDay`.
#[no_mangle]
pub unsafe extern "C" fn gnsscal_date_to_gps_weekday(
    date: GnssCalDate,
    out: *mut GnssCalWeekDay,
) -> GnssCalStatus {
    catch_panic!(GnssCalStatus::Internal, {
        if out.is_null() {
            return GnssCalStatus::NullPointer;
        }
        match date.into_chrono() {
            Some(d) => {
                let week =
                    date_to_gps_weekday(d).map(|w| GnssCalWeekDay::from(WeekDay::from(w)));
                unsafe { store(out, week) }
            }
            None => GnssCalStatus::InvalidDate,
        }
    })
}

/// BDS week and day of week of `date`. Returns EpochOrdering before 2006-01-01.
///
/// # Safety
/// `out` must be a valid, writable pointer to `GnssCalWeekDay`.
#[no_mangle]
pub unsafe extern "C" fn gnsscal_date_to_bds_weekday(
    date: GnssCalDate,
    out: *mut GnssCalWeekDay,
) -> GnssCalStatus {
    catch_panic!(GnssCalStatus::Internal, {
        if out.is_null() {
            return GnssCalStatus::NullPointer;
        }
        match date.into_chrono() {
            Some(d) => {
                let week =
                    date_to_bds_weekday(d).map(|w| GnssCalWeekDay::from(WeekDay::from(w)));
                unsafe { store(out, week) }
            }
            None => GnssCalStatus::InvalidDate,
        }
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Week → date
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar date of GPS `week`, day `day_of_week`.
///
/// # Safety
/// `out` must be a valid, writable pointer to `GnssCalDate`.
#[no_mangle]
pub unsafe extern "C" fn gnsscal_gps_weekday_to_date(
    week: i64,
    day_of_week: i64,
    out: *mut GnssCalDate,
) -> GnssCalStatus {
    catch_panic!(GnssCalStatus::Internal, {
        let date = gps_weekday_to_date(week, day_of_week).map(GnssCalDate::from_chrono);
        unsafe { store(out, date) }
    })
}

/// Calendar date of BDS `week`, day `day_of_week`.
///
/// # Safety
/// `out` must be a valid, writable pointer to `GnssCalDate`.
#[no_mangle]
pub unsafe extern "C" fn gnsscal_bds_weekday_to_date(
    week: i64,
    day_of_week: i64,
    out: *mut GnssCalDate,
) -> GnssCalStatus {
    catch_panic!(GnssCalStatus::Internal, {
        let date = bds_weekday_to_date(week, day_of_week).map(GnssCalDate::from_chrono);
        unsafe { store(out, date) }
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Week ↔ week
// ═══════════════════════════════════════════════════════════════════════════

/// BDS week containing day 0 of GPS `week`.
///
/// # Safety
/// `out` must be a valid, writable pointer to `i64`.
#[no_mangle]
pub unsafe extern "C" fn gnsscal_gps_week_to_bds_week(week: i64, out: *mut i64) -> GnssCalStatus {
    catch_panic!(GnssCalStatus::Internal, {
        unsafe { store(out, gps_week_to_bds_week(week)) }
    })
}

/// GPS week containing day 0 of BDS `week`.
///
/// # Safety
/// `out` must be a valid, writable pointer to `i64`.
#[no_mangle]
pub unsafe extern "C" fn gnsscal_bds_week_to_gps_week(week: i64, out: *mut i64) -> GnssCalStatus {
    catch_panic!(GnssCalStatus::Internal, {
        unsafe { store(out, bds_week_to_gps_week(week)) }
    })
}
