//! Visit tracking: first visit and refresh bursts

use shared::models::{RefreshBurst, VisitRecord};

use crate::storage::{self, SharedStore, keys};

/// New-user discount grace window after the first visit
pub const NEW_USER_WINDOW_MS: i64 = 10 * 60 * 1000;

/// Refresh burst window; a page load after this much time starts a new window
pub const REFRESH_WINDOW_MS: i64 = 60 * 1000;

#[derive(Clone)]
pub struct VisitTracker {
    store: SharedStore,
}

impl VisitTracker {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Record the first visit. Returns `true` only on the very first call.
    pub fn register_visit(&self, now: i64) -> bool {
        if self.visit_record().is_some() {
            return false;
        }

        let record = VisitRecord {
            first_visit_time: now,
        };
        storage::save(self.store.as_ref(), keys::VISIT_RECORD, &record);
        tracing::info!(first_visit_time = now, "First visit registered");
        true
    }

    pub fn first_visit_time(&self) -> Option<i64> {
        self.visit_record().map(|r| r.first_visit_time)
    }

    /// True until ten minutes have passed since the first visit.
    ///
    /// A session without a visit record is eligible.
    pub fn is_eligible_for_new_user_discount(&self, now: i64) -> bool {
        match self.visit_record() {
            None => true,
            Some(record) => now - record.first_visit_time <= NEW_USER_WINDOW_MS,
        }
    }

    /// Count this page load in the current refresh window and return the new count
    pub fn record_and_count_refresh(&self, now: i64) -> u32 {
        let burst = match storage::load::<RefreshBurst>(self.store.as_ref(), keys::PAGE_REFRESHES) {
            Some(burst) if now - burst.window_start <= REFRESH_WINDOW_MS => RefreshBurst {
                count: burst.count.saturating_add(1),
                window_start: burst.window_start,
            },
            _ => RefreshBurst::start(now),
        };

        storage::save(self.store.as_ref(), keys::PAGE_REFRESHES, &burst);
        tracing::debug!(count = burst.count, "Page refresh counted");
        burst.count
    }

    fn visit_record(&self) -> Option<VisitRecord> {
        storage::load(self.store.as_ref(), keys::VISIT_RECORD)
    }
}
