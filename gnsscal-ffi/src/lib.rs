// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! C FFI bindings for **gnsscal**: GNSS calendar conversions.
//!
//! This crate exposes a flat C-compatible API for converting between
//! Gregorian dates, day of year, GPS weeks and BDS weeks.

/// Run `$body`, turning a panic into `$fallback` instead of unwinding into C.
macro_rules! catch_panic {
    ($fallback:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(status) => status,
            Err(_) => $fallback,
        }
    };
}

mod calendar;
mod error;
mod week;

pub use calendar::*;
pub use error::*;
pub use week::*;

/// Returns the gnsscal-ffi ABI version (semver-encoded: major*10000 + minor*100 + patch).
#[allow(clippy::erasing_op, clippy::identity_op)]
#[no_mangle]
pub extern "C" fn gnsscal_ffi_version() -> u32 {
    0 * 10000 + 1 * 100 + 0 // 0.1.0
}

/// Store `result` through `out`, or report why there is nothing to store.
///
/// # Safety
/// `out` must be null or a valid, writable pointer to `T`.
unsafe fn store<T>(out: *mut T, result: gnsscal::Result<T>) -> GnssCalStatus {
    if out.is_null() {
        return GnssCalStatus::NullPointer;
    }
    match result {
        Ok(value) => {
            unsafe { out.write(value) };
            GnssCalStatus::Ok
        }
        Err(err) => GnssCalStatus::from(&err),
    }
}
