// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use clap::{ArgAction, ArgGroup, Parser};

/// Convert Gregorian date to GNSS calendar, or vice versa.
#[derive(Parser, Debug)]
#[command(
    name = "gnsscal",
    version,
    about = "Convert Gregorian date to GNSS calendar, or vice versa"
)]
#[command(group(
    ArgGroup::new("input")
        .args(["date", "ydoy", "gpswd", "bdswd"])
        .multiple(false)
))]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Year, month, day.
    #[arg(long, num_args = 3, value_names = ["YEAR", "MONTH", "DAY"], allow_negative_numbers = true)]
    pub date: Option<Vec<i32>>,

    /// Year, day of year.
    #[arg(long, num_args = 2, value_names = ["YEAR", "DOY"], allow_negative_numbers = true)]
    pub ydoy: Option<Vec<i32>>,

    /// GPS week, day of week.
    #[arg(long, num_args = 2, value_names = ["WEEK", "DOW"], allow_negative_numbers = true)]
    pub gpswd: Option<Vec<i64>>,

    /// BDS week, day of week.
    #[arg(long, num_args = 2, value_names = ["WEEK", "DOW"], allow_negative_numbers = true)]
    pub bdswd: Option<Vec<i64>>,
}

/// The day the user asked about, before it is resolved to a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Date { year: i32, month: i32, day: i32 },
    YearDoy { year: i32, day_of_year: i32 },
    GpsWeek { week: i64, day_of_week: i64 },
    BdsWeek { week: i64, day_of_week: i64 },
    Today,
}

impl Cli {
    /// The selected input mode; clap guarantees at most one is present.
    pub fn input(&self) -> Input {
        if let Some(&[year, month, day]) = self.date.as_deref() {
            Input::Date { year, month, day }
        } else if let Some(&[year, day_of_year]) = self.ydoy.as_deref() {
            Input::YearDoy { year, day_of_year }
        } else if let Some(&[week, day_of_week]) = self.gpswd.as_deref() {
            Input::GpsWeek { week, day_of_week }
        } else if let Some(&[week, day_of_week]) = self.bdswd.as_deref() {
            Input::BdsWeek { week, day_of_week }
        } else {
            Input::Today
        }
    }
}
