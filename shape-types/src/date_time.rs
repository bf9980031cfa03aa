/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Timestamp values for service shapes.
//!
//! Unlike [`std::time::Instant`], this type is not opaque: it holds seconds
//! and sub-second nanos since the Unix epoch, which can be read and compared.
//! Wire formatting belongs to the serializer; [`DateTime`] only renders an
//! RFC-3339 string for diagnostics.

use std::error::Error as StdError;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

const MILLIS_PER_SECOND: i64 = 1000;
const NANOS_PER_MILLI: u32 = 1_000_000;
const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Point in time represented as seconds and sub-second nanos since the Unix
/// epoch (January 1, 1970 at midnight UTC/GMT).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
    seconds: i64,
    subsecond_nanos: u32,
}

impl DateTime {
    /// Creates a `DateTime` from a number of seconds since the Unix epoch.
    pub fn from_secs(epoch_seconds: i64) -> Self {
        DateTime {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates a `DateTime` from a number of milliseconds since the Unix epoch.
    pub fn from_millis(epoch_millis: i64) -> Self {
        let seconds = epoch_millis.div_euclid(MILLIS_PER_SECOND);
        let millis = epoch_millis.rem_euclid(MILLIS_PER_SECOND);
        DateTime::from_secs_and_nanos(seconds, millis as u32 * NANOS_PER_MILLI)
    }

    /// Creates a `DateTime` from a number of seconds and sub-second nanos
    /// since the Unix epoch.
    ///
    /// # Panics
    ///
    /// Panics if `subsecond_nanos` is one whole second or more.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        if subsecond_nanos >= 1_000_000_000 {
            panic!("{} is > 1_000_000_000", subsecond_nanos)
        }
        DateTime {
            seconds,
            subsecond_nanos,
        }
    }

    /// Returns the epoch seconds component, without the sub-second nanos.
    pub fn secs(&self) -> i64 {
        self.seconds
    }

    /// Returns the sub-second nanos component, without the epoch seconds.
    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Returns true if sub-second nanos is greater than zero.
    pub fn has_subsec_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    /// Returns the number of nanoseconds since the Unix epoch.
    pub fn as_nanos(&self) -> i128 {
        self.seconds as i128 * NANOS_PER_SECOND + self.subsecond_nanos as i128
    }

    /// Converts to the number of milliseconds since the Unix epoch.
    ///
    /// This is fallible since `DateTime` holds more range than `i64` epoch
    /// millis can represent.
    pub fn to_millis(self) -> Result<i64, ConversionError> {
        let millis = self.as_nanos().div_euclid(NANOS_PER_MILLI as i128);
        i64::try_from(millis).map_err(|_| {
            ConversionError("DateTime value too large to fit into i64 epoch millis")
        })
    }
}

impl From<SystemTime> for DateTime {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => DateTime::from_secs_and_nanos(
                i64::try_from(elapsed.as_secs())
                    .expect("SystemTime has same precision as DateTime"),
                elapsed.subsec_nanos(),
            ),
            Err(earlier) => {
                let before = earlier.duration();
                let mut seconds = -(before.as_secs() as i64);
                let mut nanos = before.subsec_nanos();
                if nanos != 0 {
                    seconds -= 1;
                    nanos = NANOS_PER_SECOND as u32 - nanos;
                }
                DateTime::from_secs_and_nanos(seconds, nanos)
            }
        }
    }
}

impl From<DateTime> for SystemTime {
    fn from(date_time: DateTime) -> Self {
        if date_time.secs() < 0 {
            let mut secs = date_time.secs().unsigned_abs();
            let mut nanos = date_time.subsec_nanos();
            if date_time.has_subsec_nanos() {
                secs -= 1;
                nanos = NANOS_PER_SECOND as u32 - nanos;
            }
            UNIX_EPOCH - Duration::new(secs, nanos)
        } else {
            UNIX_EPOCH + Duration::new(date_time.secs().unsigned_abs(), date_time.subsec_nanos())
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = OffsetDateTime::from_unix_timestamp_nanos(self.as_nanos())
            .ok()
            .and_then(|odt| odt.format(&Rfc3339).ok());
        match formatted {
            Some(rfc3339) => f.write_str(&rfc3339),
            // Out of RFC-3339 range; fall back to raw epoch seconds.
            None => write!(f, "{}.{:09}s", self.seconds, self.subsecond_nanos),
        }
    }
}

/// Failure to convert a `DateTime` to or from another type.
#[derive(Debug)]
#[non_exhaustive]
pub struct ConversionError(&'static str);

impl StdError for ConversionError {}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
