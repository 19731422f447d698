// SPDX-License-Identifier: AGPL-3.0-or-later

use gnsscal::{CalendarError, ErrorKind};

/// Status codes returned by gnsscal-ffi functions.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GnssCalStatus {
    /// Success.
    Ok = 0,
    /// A required output pointer was null.
    NullPointer = 1,
    /// The year/month/day triple is not a valid Gregorian date.
    InvalidDate = 2,
    /// The date precedes the epoch of the requested time system.
    EpochOrdering = 3,
    /// A week, day of week, year or day of year is out of range.
    OutOfRange = 4,
    /// A panic was caught at the FFI boundary.
    Internal = 5,
}

impl From<&CalendarError> for GnssCalStatus {
    fn from(err: &CalendarError) -> Self {
        match err.kind() {
            ErrorKind::EpochOrdering => Self::EpochOrdering,
            ErrorKind::Range => Self::OutOfRange,
        }
    }
}
