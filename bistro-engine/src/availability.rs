//! Table availability
//!
//! A simulation: which tables can be reserved, and whether the restaurant is
//! full, are pure functions of the local wall-clock time.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use shared::models::{TABLE_NUMBERS, TableId};
use std::collections::BTreeSet;

/// Tables left on busy hours
pub const BUSY_HOUR_TABLES: [TableId; 3] = [2, 5, 9];

/// Busy when the day of month is a multiple of 5 and the hour is even
pub fn is_busy_hour(now: &NaiveDateTime) -> bool {
    now.day() % 5 == 0 && now.hour() % 2 == 0
}

pub fn available_tables(now: &NaiveDateTime) -> BTreeSet<TableId> {
    if is_busy_hour(now) {
        BUSY_HOUR_TABLES.into_iter().collect()
    } else {
        TABLE_NUMBERS.into_iter().collect()
    }
}

/// Full for the whole minute at :00, :20 and :40
pub fn is_restaurant_full(now: &NaiveDateTime) -> bool {
    now.minute() % 20 == 0
}

/// Availability as of one tick
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TableAvailability {
    pub tables: BTreeSet<TableId>,
    pub is_full: bool,
}

impl TableAvailability {
    pub fn at(now: &NaiveDateTime) -> Self {
        Self {
            tables: available_tables(now),
            is_full: is_restaurant_full(now),
        }
    }

    /// Whether a booking for `table_id` can go through right now
    pub fn accepts(&self, table_id: TableId) -> bool {
        !self.is_full && self.tables.contains(&table_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_busy_day_even_hour_reduces_tables() {
        let tables = available_tables(&at(10, 14, 5));
        assert_eq!(tables, BTreeSet::from([2, 5, 9]));
    }

    #[test]
    fn test_regular_day_has_full_floor() {
        let tables = available_tables(&at(11, 14, 5));
        assert_eq!(tables, BTreeSet::from([1, 2, 3, 5, 6, 7, 8, 9]));
        assert!(!tables.contains(&4));
    }

    #[test]
    fn test_busy_day_odd_hour_has_full_floor() {
        assert_eq!(available_tables(&at(10, 15, 5)).len(), 8);
        assert_eq!(available_tables(&at(20, 0, 5)).len(), 3);
        assert_eq!(available_tables(&at(25, 23, 5)).len(), 8);
    }

    #[test]
    fn test_full_pulse() {
        assert!(is_restaurant_full(&at(11, 14, 0)));
        assert!(is_restaurant_full(&at(11, 14, 20)));
        assert!(is_restaurant_full(&at(11, 14, 40)));
        assert!(!is_restaurant_full(&at(11, 14, 1)));
        assert!(!is_restaurant_full(&at(11, 14, 39)));
    }

    #[test]
    fn test_accepts() {
        let availability = TableAvailability::at(&at(10, 14, 5));
        assert!(availability.accepts(5));
        assert!(!availability.accepts(1));
        assert!(!availability.accepts(4));

        let full = TableAvailability::at(&at(11, 14, 40));
        assert!(full.is_full);
        assert!(!full.accepts(1));
    }

    #[test]
    fn test_deterministic() {
        let now = at(15, 12, 33);
        assert_eq!(TableAvailability::at(&now), TableAvailability::at(&now));
    }
}
