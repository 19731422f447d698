// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Input resolution and the four-line calendar report.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use gnsscal::{
    bds_weekday_to_date, date_to_year_doy, gps_weekday_to_date, year_doy_to_date, GnssWeek,
    TimeSystem, BDS, GPS,
};
use std::fmt::Write;

use crate::cli::Input;

/// Turn the requested input into a calendar date; `today` backs [`Input::Today`].
pub fn resolve(input: Input, today: NaiveDate) -> Result<NaiveDate> {
    let date = match input {
        Input::Date { year, month, day } => u32::try_from(month)
            .ok()
            .zip(u32::try_from(day).ok())
            .and_then(|(m, d)| NaiveDate::from_ymd_opt(year, m, d))
            .ok_or_else(|| anyhow!("invalid date: {year}-{month}-{day}"))?,
        Input::YearDoy { year, day_of_year } => year_doy_to_date(year, day_of_year)?,
        Input::GpsWeek { week, day_of_week } => gps_weekday_to_date(week, day_of_week)?,
        Input::BdsWeek { week, day_of_week } => bds_weekday_to_date(week, day_of_week)?,
        Input::Today => today,
    };
    Ok(date)
}

/// Gregorian date, year / day of year, GPS week and BDS week of `date`.
pub fn render(date: NaiveDate) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Gregorian date: {}", date.format("%Y-%m-%d"));
    let _ = writeln!(out, "year, doy: {}", date_to_year_doy(date));
    let _ = writeln!(out, "{}", week_line::<GPS>(date));
    let _ = writeln!(out, "{}", week_line::<BDS>(date));
    out
}

fn week_line<S: TimeSystem>(date: NaiveDate) -> String {
    let too_early = || format!("{} week: date too early!", S::LABEL);
    if !S::EPOCH.contains(date) {
        return too_early();
    }
    GnssWeek::<S>::from_date(date)
        .map(|week| week.to_string())
        .unwrap_or_else(|_| too_early())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn report_for_reference_day() {
        assert_eq!(
            render(ymd(2017, 5, 17)),
            "Gregorian date: 2017-05-17\n\
             year, doy: 2017, 137\n\
             GPS week: 1949, 3\n\
             BDS week: 0593, 3\n"
        );
    }

    #[test]
    fn report_before_bds_epoch() {
        let report = render(ymd(1999, 1, 5));
        assert!(report.contains("year, doy: 1999, 005"));
        assert!(report.contains("GPS week: 0991, 2"));
        assert!(report.contains("BDS week: date too early!"));
    }

    #[test]
    fn report_before_gps_epoch() {
        let report = render(ymd(1970, 1, 1));
        assert!(report.contains("GPS week: date too early!"));
        assert!(report.contains("BDS week: date too early!"));
    }

    #[test]
    fn every_input_mode_resolves_to_the_same_day() {
        let today = ymd(2000, 1, 1);
        let expected = ymd(2017, 5, 17);
        let inputs = [
            Input::Date {
                year: 2017,
                month: 5,
                day: 17,
            },
            Input::YearDoy {
                year: 17,
                day_of_year: 137,
            },
            Input::GpsWeek {
                week: 1949,
                day_of_week: 3,
            },
            Input::BdsWeek {
                week: 593,
                day_of_week: 3,
            },
        ];
        for input in inputs {
            assert_eq!(resolve(input, today).unwrap(), expected);
        }
        assert_eq!(resolve(Input::Today, today).unwrap(), today);
    }

    #[test]
    fn invalid_inputs_are_errors() {
        let today = ymd(2000, 1, 1);
        let bad = [
            Input::Date {
                year: 2017,
                month: 2,
                day: 30,
            },
            Input::Date {
                year: 2017,
                month: -1,
                day: 1,
            },
            Input::YearDoy {
                year: 2017,
                day_of_year: 0,
            },
            Input::GpsWeek {
                week: 1949,
                day_of_week: 7,
            },
            Input::BdsWeek {
                week: -1,
                day_of_week: 0,
            },
        ];
        for input in bad {
            assert!(resolve(input, today).is_err(), "{input:?} should fail");
        }
    }
}
