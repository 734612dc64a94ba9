//! Reservation records and booking flow

use shared::models::{BookingRequest, Reservation, is_time_slot};

use super::error::{BookingError, UnavailableReason};
use super::throttle::BookingThrottle;
use crate::availability::TableAvailability;
use crate::storage::{self, SharedStore, keys};

/// Reservations of one session
///
/// Records are appended under `table_bookings`; the current reservation is
/// the last one. The throttle lives in memory only.
pub struct ReservationStore {
    store: SharedStore,
    throttle: BookingThrottle,
}

impl ReservationStore {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            throttle: BookingThrottle::new(),
        }
    }

    /// Try to book a table
    ///
    /// Incomplete requests are rejected before they count as an attempt. A
    /// rejected attempt on an unavailable table still counts.
    pub fn book(
        &mut self,
        request: &BookingRequest,
        availability: &TableAvailability,
        now: i64,
    ) -> Result<Reservation, BookingError> {
        let table_id = request
            .table_id
            .ok_or(BookingError::MissingField { field: "table" })?;
        let date = request
            .date
            .ok_or(BookingError::MissingField { field: "date" })?;
        let time = request
            .time
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(BookingError::MissingField { field: "time" })?;
        if !is_time_slot(time) {
            return Err(BookingError::InvalidTimeSlot(time.to_string()));
        }

        self.throttle.check(now)?;

        if !availability.accepts(table_id) {
            let reason = if availability.is_full {
                UnavailableReason::RestaurantFull
            } else {
                UnavailableReason::NotOffered
            };
            tracing::info!(table_id, reason = reason.as_str(), "Booking rejected");
            return Err(BookingError::Unavailable { table_id, reason });
        }

        let reservation = Reservation {
            table_id,
            date,
            time: time.to_string(),
            booked_at: now,
        };

        let mut records = self.history();
        records.push(reservation.clone());
        storage::save(self.store.as_ref(), keys::TABLE_BOOKINGS, &records);

        tracing::info!(
            table_id,
            date = %date,
            time = %reservation.time,
            "Table booked"
        );
        Ok(reservation)
    }

    pub fn has_active_reservation(&self) -> bool {
        !self.history().is_empty()
    }

    /// The most recently appended reservation
    pub fn current_reservation(&self) -> Option<Reservation> {
        self.history().pop()
    }

    /// Every reservation made this session, oldest first
    pub fn history(&self) -> Vec<Reservation> {
        storage::load_or_default(self.store.as_ref(), keys::TABLE_BOOKINGS)
    }

    /// Drop all reservation records
    pub fn release(&mut self) {
        let released = self.history().len();
        storage::erase(self.store.as_ref(), keys::TABLE_BOOKINGS);
        tracing::info!(released, "Reservations released");
    }

    pub fn is_blocked(&self, now: i64) -> bool {
        self.throttle.is_blocked(now)
    }

    pub fn blocked_remaining_secs(&self, now: i64) -> Option<u64> {
        self.throttle.remaining_secs(now)
    }

    pub fn countdown_tick(&mut self, now: i64) -> Option<u64> {
        self.throttle.countdown_tick(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::storage::testing::FailingStore;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;
    use std::sync::Arc;

    const T0: i64 = 1_710_000_000_000;
    const SEC: i64 = 1000;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn open_floor() -> TableAvailability {
        TableAvailability {
            tables: BTreeSet::from([1, 2, 3, 5, 6, 7, 8, 9]),
            is_full: false,
        }
    }

    fn store() -> ReservationStore {
        ReservationStore::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_book_and_query() {
        let mut reservations = store();
        assert!(!reservations.has_active_reservation());

        let booked = reservations
            .book(&BookingRequest::new(5, date(), "19:00"), &open_floor(), T0)
            .unwrap();
        assert_eq!(booked.table_id, 5);
        assert_eq!(booked.booked_at, T0);

        assert!(reservations.has_active_reservation());
        assert_eq!(reservations.current_reservation(), Some(booked));
    }

    #[test]
    fn test_current_is_last_appended() {
        let mut reservations = store();
        reservations
            .book(&BookingRequest::new(1, date(), "12:00"), &open_floor(), T0)
            .unwrap();
        reservations
            .book(&BookingRequest::new(7, date(), "20:00"), &open_floor(), T0 + 60 * SEC)
            .unwrap();

        assert_eq!(reservations.history().len(), 2);
        assert_eq!(reservations.current_reservation().unwrap().table_id, 7);
    }

    #[test]
    fn test_missing_fields_do_not_count_as_attempts() {
        let mut reservations = store();
        let incomplete = BookingRequest {
            table_id: Some(5),
            date: Some(date()),
            time: None,
        };

        let err = reservations.book(&incomplete, &open_floor(), T0).unwrap_err();
        assert_eq!(err, BookingError::MissingField { field: "time" });

        let err = reservations
            .book(&BookingRequest::default(), &open_floor(), T0 + SEC)
            .unwrap_err();
        assert_eq!(err, BookingError::MissingField { field: "table" });

        let err = reservations
            .book(&BookingRequest::new(5, date(), "16:30"), &open_floor(), T0 + 2 * SEC)
            .unwrap_err();
        assert_eq!(err, BookingError::InvalidTimeSlot("16:30".into()));

        // a valid attempt right after is not throttled
        reservations
            .book(&BookingRequest::new(5, date(), "19:00"), &open_floor(), T0 + 3 * SEC)
            .unwrap();
    }

    #[test]
    fn test_unavailable_table_counts_toward_throttle() {
        let mut reservations = store();
        let busy = TableAvailability {
            tables: BTreeSet::from([2, 5, 9]),
            is_full: false,
        };

        let err = reservations
            .book(&BookingRequest::new(1, date(), "19:00"), &busy, T0)
            .unwrap_err();
        assert_eq!(
            err,
            BookingError::Unavailable {
                table_id: 1,
                reason: UnavailableReason::NotOffered
            }
        );

        let err = reservations
            .book(&BookingRequest::new(2, date(), "19:00"), &busy, T0 + 10 * SEC)
            .unwrap_err();
        assert_eq!(err, BookingError::Throttled { cooldown_secs: 300 });
        assert!(reservations.is_blocked(T0 + 10 * SEC));
        assert!(!reservations.has_active_reservation());
    }

    #[test]
    fn test_full_restaurant_rejects_any_table() {
        let mut reservations = store();
        let full = TableAvailability {
            is_full: true,
            ..open_floor()
        };

        let err = reservations
            .book(&BookingRequest::new(3, date(), "13:00"), &full, T0)
            .unwrap_err();
        assert_eq!(
            err,
            BookingError::Unavailable {
                table_id: 3,
                reason: UnavailableReason::RestaurantFull
            }
        );
    }

    #[test]
    fn test_throttle_then_block_then_recover() {
        let mut reservations = store();
        let request = BookingRequest::new(5, date(), "19:00");

        reservations.book(&request, &open_floor(), T0).unwrap();

        let err = reservations.book(&request, &open_floor(), T0 + 5 * SEC).unwrap_err();
        assert_eq!(err, BookingError::Throttled { cooldown_secs: 300 });

        let tripped = T0 + 5 * SEC;
        let mut last_remaining = u64::MAX;
        for offset in [1, 60, 200, 299] {
            match reservations.book(&request, &open_floor(), tripped + offset * SEC) {
                Err(BookingError::Blocked { remaining_secs }) => {
                    assert!(remaining_secs < last_remaining);
                    last_remaining = remaining_secs;
                }
                other => panic!("expected Blocked, got {:?}", other),
            }
        }

        reservations
            .book(&request, &open_floor(), tripped + 300 * SEC)
            .unwrap();
        assert_eq!(reservations.history().len(), 2);
    }

    #[test]
    fn test_release_clears_history() {
        let mut reservations = store();
        reservations
            .book(&BookingRequest::new(5, date(), "19:00"), &open_floor(), T0)
            .unwrap();

        reservations.release();
        assert!(!reservations.has_active_reservation());
        assert!(reservations.current_reservation().is_none());
        assert!(reservations.history().is_empty());
    }

    #[test]
    fn test_records_survive_new_store_handle() {
        let shared: SharedStore = Arc::new(MemoryStore::new());
        let mut first = ReservationStore::new(shared.clone());
        first
            .book(&BookingRequest::new(8, date(), "21:00"), &open_floor(), T0)
            .unwrap();

        let second = ReservationStore::new(shared);
        assert_eq!(second.current_reservation().unwrap().table_id, 8);
        // throttle state is not carried over
        assert!(!second.is_blocked(T0));
    }

    #[test]
    fn test_failing_store_still_returns_reservation() {
        let mut reservations = ReservationStore::new(Arc::new(FailingStore));
        let booked = reservations
            .book(&BookingRequest::new(5, date(), "19:00"), &open_floor(), T0)
            .unwrap();
        assert_eq!(booked.table_id, 5);
        assert!(!reservations.has_active_reservation());
    }
}
