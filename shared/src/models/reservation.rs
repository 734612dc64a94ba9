//! Reservation Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dining_table::TableId;

/// Bookable time slots offered by the storefront
pub const TIME_SLOTS: [&str; 10] = [
    "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "18:00", "19:00", "20:00", "21:00",
];

/// Check whether `time` is one of [`TIME_SLOTS`]
pub fn is_time_slot(time: &str) -> bool {
    TIME_SLOTS.contains(&time)
}

/// Table reservation (订台记录)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub table_id: TableId,
    pub date: NaiveDate,
    /// Time slot, "HH:MM"
    pub time: String,
    /// Unix millis
    pub booked_at: i64,
}

/// Booking form as submitted by the guest
///
/// Every field is optional because the form can be submitted half-filled;
/// missing fields are rejected before any throttle bookkeeping.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub table_id: Option<TableId>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
}

impl BookingRequest {
    pub fn new(table_id: TableId, date: NaiveDate, time: impl Into<String>) -> Self {
        Self {
            table_id: Some(table_id),
            date: Some(date),
            time: Some(time.into()),
        }
    }
}
