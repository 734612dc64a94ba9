//! Business timezone conversion
//!
//! Every time rule reads the local wall clock; storage and the clock only
//! deal in `i64` Unix millis.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Unix millis → local wall-clock time (business timezone)
///
/// Out-of-range timestamps map to the epoch.
pub fn local_datetime(millis: i64, tz: Tz) -> NaiveDateTime {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or_default()
        .with_timezone(&tz)
        .naive_local()
}
