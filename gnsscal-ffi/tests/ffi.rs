// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI boundary tests: exercises every exported C function through Rust.

use gnsscal_ffi::*;

const MAY_17_2017: GnssCalDate = GnssCalDate {
    year: 2017,
    month: 5,
    day: 17,
};

// ─── Null-pointer guards ──────────────────────────────────────────────────

#[test]
fn date_to_doy_null_pointer() {
    let status = unsafe { gnsscal_date_to_doy(MAY_17_2017, std::ptr::null_mut()) };
    assert_eq!(status, GnssCalStatus::NullPointer);
}

#[test]
fn date_to_gps_weekday_null_pointer() {
    let status = unsafe { gnsscal_date_to_gps_weekday(MAY_17_2017, std::ptr::null_mut()) };
    assert_eq!(status, GnssCalStatus::NullPointer);
}

#[test]
fn year_doy_to_date_null_pointer() {
    let status = unsafe { gnsscal_year_doy_to_date(2017, 137, std::ptr::null_mut()) };
    assert_eq!(status, GnssCalStatus::NullPointer);
}

#[test]
fn week_to_week_null_pointer() {
    let status = unsafe { gnsscal_gps_week_to_bds_week(1949, std::ptr::null_mut()) };
    assert_eq!(status, GnssCalStatus::NullPointer);
}

// ─── Invalid input ────────────────────────────────────────────────────────

#[test]
fn invalid_calendar_date() {
    let date = GnssCalDate {
        year: 2017,
        month: 2,
        day: 30,
    };
    let mut out = std::mem::MaybeUninit::<GnssCalWeekDay>::uninit();
    let status = unsafe { gnsscal_date_to_gps_weekday(date, out.as_mut_ptr()) };
    assert_eq!(status, GnssCalStatus::InvalidDate);

    let mut doy: u32 = 0;
    let status = unsafe { gnsscal_date_to_doy(date, &mut doy) };
    assert_eq!(status, GnssCalStatus::InvalidDate);
}

#[test]
fn date_before_epoch() {
    let date = GnssCalDate {
        year: 2003,
        month: 1,
        day: 17,
    };
    let mut out = std::mem::MaybeUninit::<GnssCalWeekDay>::uninit();
    let status = unsafe { gnsscal_date_to_bds_weekday(date, out.as_mut_ptr()) };
    assert_eq!(status, GnssCalStatus::EpochOrdering);
}

#[test]
fn out_of_range_arguments() {
    let mut date = std::mem::MaybeUninit::<GnssCalDate>::uninit();
    for (week, dow) in [(-1, 0), (0, -1), (1949, 7)] {
        let status = unsafe { gnsscal_gps_weekday_to_date(week, dow, date.as_mut_ptr()) };
        assert_eq!(status, GnssCalStatus::OutOfRange);
    }
    let status = unsafe { gnsscal_year_doy_to_date(-1, 1, date.as_mut_ptr()) };
    assert_eq!(status, GnssCalStatus::OutOfRange);
    let status = unsafe { gnsscal_year_doy_to_date(2017, 0, date.as_mut_ptr()) };
    assert_eq!(status, GnssCalStatus::OutOfRange);
}

// ─── Conversions ──────────────────────────────────────────────────────────

#[test]
fn epochs() {
    assert_eq!(
        gnsscal_gps_epoch(),
        GnssCalDate {
            year: 1980,
            month: 1,
            day: 6
        }
    );
    assert_eq!(
        gnsscal_bds_epoch(),
        GnssCalDate {
            year: 2006,
            month: 1,
            day: 1
        }
    );
}

#[test]
fn day_of_year() {
    let mut doy: u32 = 0;
    assert_eq!(
        unsafe { gnsscal_date_to_doy(MAY_17_2017, &mut doy) },
        GnssCalStatus::Ok
    );
    assert_eq!(doy, 137);

    let mut ydoy = std::mem::MaybeUninit::<GnssCalYearDoy>::uninit();
    let status = unsafe { gnsscal_date_to_year_doy(MAY_17_2017, ydoy.as_mut_ptr()) };
    assert_eq!(status, GnssCalStatus::Ok);
    let ydoy = unsafe { ydoy.assume_init() };
    assert_eq!((ydoy.year, ydoy.day_of_year), (2017, 137));

    let mut date = std::mem::MaybeUninit::<GnssCalDate>::uninit();
    let status = unsafe { gnsscal_year_doy_to_date(17, 137, date.as_mut_ptr()) };
    assert_eq!(status, GnssCalStatus::Ok);
    assert_eq!(unsafe { date.assume_init() }, MAY_17_2017);
}

#[test]
fn gps_and_bds_weeks_roundtrip() {
    let mut gps = std::mem::MaybeUninit::<GnssCalWeekDay>::uninit();
    let status = unsafe { gnsscal_date_to_gps_weekday(MAY_17_2017, gps.as_mut_ptr()) };
    assert_eq!(status, GnssCalStatus::Ok);
    let gps = unsafe { gps.assume_init() };
    assert_eq!((gps.week, gps.day_of_week), (1949, 3));

    let mut bds = std::mem::MaybeUninit::<GnssCalWeekDay>::uninit();
    let status = unsafe { gnsscal_date_to_bds_weekday(MAY_17_2017, bds.as_mut_ptr()) };
    assert_eq!(status, GnssCalStatus::Ok);
    let bds = unsafe { bds.assume_init() };
    assert_eq!((bds.week, bds.day_of_week), (593, 3));

    let mut date = std::mem::MaybeUninit::<GnssCalDate>::uninit();
    let status = unsafe { gnsscal_gps_weekday_to_date(1949, 3, date.as_mut_ptr()) };
    assert_eq!(status, GnssCalStatus::Ok);
    assert_eq!(unsafe { date.assume_init() }, MAY_17_2017);

    let status = unsafe { gnsscal_bds_weekday_to_date(593, 3, date.as_mut_ptr()) };
    assert_eq!(status, GnssCalStatus::Ok);
    assert_eq!(unsafe { date.assume_init() }, MAY_17_2017);
}

#[test]
fn week_numbers_between_systems() {
    let mut week: i64 = 0;
    assert_eq!(
        unsafe { gnsscal_gps_week_to_bds_week(1949, &mut week) },
        GnssCalStatus::Ok
    );
    assert_eq!(week, 593);
    assert_eq!(
        unsafe { gnsscal_bds_week_to_gps_week(593, &mut week) },
        GnssCalStatus::Ok
    );
    assert_eq!(week, 1949);
    assert_eq!(
        unsafe { gnsscal_gps_week_to_bds_week(100, &mut week) },
        GnssCalStatus::EpochOrdering
    );
}

#[test]
fn version() {
    assert_eq!(gnsscal_ffi_version(), 100);
}
