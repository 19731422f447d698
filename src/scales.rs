// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-system marker types.
//!
//! Each zero-sized type identifies a week-counting GNSS time system and
//! carries the [`Epoch`] its weeks are counted from.
//!
//! | Marker | System | Epoch |
//! |--------|--------|-------|
//! | [`GPS`] | GPS Time | 1980-01-06 |
//! | [`BDS`] | BeiDou Time | 2006-01-01 |

use crate::epoch::{Epoch, BDS_EPOCH, GPS_EPOCH};

/// Marker trait for week-counting time systems.
///
/// A **time system** defines a human-readable label and the epoch on which
/// its week 0 starts. Conversions between systems route through the
/// Gregorian calendar date.
pub trait TimeSystem:
    Copy + Clone + std::fmt::Debug + PartialEq + Eq + PartialOrd + Ord + std::hash::Hash + 'static
{
    /// Display label used by [`GnssWeek`](crate::GnssWeek) formatting.
    const LABEL: &'static str;

    /// First day of week 0.
    const EPOCH: Epoch;
}

/// GPS Time: weeks since 1980-01-06.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GPS;

impl TimeSystem for GPS {
    const LABEL: &'static str = "GPS";
    const EPOCH: Epoch = GPS_EPOCH;
}

/// BeiDou Time: weeks since 2006-01-01.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BDS;

impl TimeSystem for BDS {
    const LABEL: &'static str = "BDS";
    const EPOCH: Epoch = BDS_EPOCH;
}
