//! One guest's session
//!
//! Binds the store, a clock, the business timezone and the base catalogs.
//! Every operation reads time from the clock; nothing here spawns tasks.

use chrono::{NaiveDateTime, Timelike};
use chrono_tz::Tz;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{BookingRequest, MenuItem, Preferences, Reservation, Theme};
use std::sync::Arc;

use super::clock::Clock;
use super::snapshot::TickSnapshot;
use crate::availability::TableAvailability;
use crate::catalog;
use crate::pricing::{PricingEngine, PricingPeriod, pricing_notice, rules::ANTI_BOT_REFRESH_THRESHOLD};
use crate::reservation::ReservationStore;
use crate::storage::{self, SharedStore, keys};
use crate::utils::time::local_datetime;
use crate::vip::VipStatus;
use crate::visit::VisitTracker;

/// What the storefront greets the guest with on page load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    /// First visit ever; the new-user discount window opens now
    FirstVisit,
    /// Came back inside the ten minute window
    ReturningEligible,
    /// Came back after the window closed; the discount is gone
    DiscountExpired,
}

impl Greeting {
    pub fn discount_eligible(&self) -> bool {
        !matches!(self, Greeting::DiscountExpired)
    }
}

pub struct Session {
    store: SharedStore,
    clock: Arc<dyn Clock>,
    timezone: Tz,
    visits: VisitTracker,
    menu: PricingEngine,
    vip_menu: PricingEngine,
    vip: VipStatus,
    reservations: ReservationStore,
    refresh_count: u32,
    latest: Option<TickSnapshot>,
}

impl Session {
    /// Session over the standard menus
    pub fn new(store: SharedStore, clock: Arc<dyn Clock>, timezone: Tz) -> Self {
        Self::with_catalogs(
            store,
            clock,
            timezone,
            catalog::default_menu(),
            catalog::vip_menu(),
        )
    }

    pub fn with_catalogs(
        store: SharedStore,
        clock: Arc<dyn Clock>,
        timezone: Tz,
        menu: Vec<MenuItem>,
        vip_menu: Vec<MenuItem>,
    ) -> Self {
        Self {
            visits: VisitTracker::new(store.clone()),
            vip: VipStatus::new(store.clone()),
            reservations: ReservationStore::new(store.clone()),
            menu: PricingEngine::new(menu),
            vip_menu: PricingEngine::new(vip_menu),
            store,
            clock,
            timezone,
            refresh_count: 0,
            latest: None,
        }
    }

    /// Page load: register the visit, count the refresh, price eagerly
    pub fn start(&mut self) -> Greeting {
        let now = self.clock.now_millis();
        let first = self.visits.register_visit(now);
        self.refresh_count = self.visits.record_and_count_refresh(now);

        let greeting = if first {
            Greeting::FirstVisit
        } else if self.visits.is_eligible_for_new_user_discount(now) {
            Greeting::ReturningEligible
        } else {
            Greeting::DiscountExpired
        };

        tracing::info!(
            ?greeting,
            refresh_count = self.refresh_count,
            "Session started"
        );
        self.tick();
        greeting
    }

    /// Recompute prices and availability from the base catalogs
    pub fn tick(&mut self) -> TickSnapshot {
        let now = self.clock.now_millis();
        let local = self.local_now();
        let hour = local.hour();

        let vip_additions = if self.vip.is_vip() {
            self.vip_menu.reprice(self.refresh_count, local)
        } else {
            Vec::new()
        };
        let availability = TableAvailability::at(&local);

        let snapshot = TickSnapshot {
            ticked_at: now,
            priced_catalog: self.menu.reprice(self.refresh_count, local),
            available_tables: availability.tables,
            is_full: availability.is_full,
            vip_additions,
            period: PricingPeriod::from_hour(hour),
            notice: pricing_notice(hour).map(str::to_string),
            refresh_count: self.refresh_count,
            anti_bot_active: self.refresh_count >= ANTI_BOT_REFRESH_THRESHOLD,
        };

        tracing::debug!(
            local = %local,
            tables = snapshot.available_tables.len(),
            is_full = snapshot.is_full,
            "Tick"
        );
        self.latest = Some(snapshot.clone());
        snapshot
    }

    pub fn latest_snapshot(&self) -> Option<&TickSnapshot> {
        self.latest.as_ref()
    }

    /// Book against the availability last shown to the guest
    pub fn book(&mut self, request: &BookingRequest) -> AppResult<Reservation> {
        let now = self.clock.now_millis();
        let availability = match &self.latest {
            Some(snapshot) => snapshot.availability(),
            None => TableAvailability::at(&self.local_now()),
        };

        self.reservations
            .book(request, &availability, now)
            .map_err(|e| {
                if e.is_validation() {
                    tracing::debug!(error = %e, "Booking form incomplete");
                } else {
                    tracing::debug!(code = %e.code(), error = %e, "Booking attempt rejected");
                }
                AppError::from(e)
            })
    }

    pub fn release(&mut self) {
        self.reservations.release();
    }

    pub fn has_active_reservation(&self) -> bool {
        self.reservations.has_active_reservation()
    }

    pub fn current_reservation(&self) -> Option<Reservation> {
        self.reservations.current_reservation()
    }

    pub fn reservation_history(&self) -> Vec<Reservation> {
        self.reservations.history()
    }

    /// Ordering requires a table
    pub fn ensure_can_order(&self) -> AppResult<()> {
        if self.reservations.has_active_reservation() {
            Ok(())
        } else {
            Err(AppError::new(ErrorCode::TableRequired))
        }
    }

    pub fn is_booking_blocked(&self) -> bool {
        self.reservations.is_blocked(self.clock.now_millis())
    }

    pub fn blocked_remaining_secs(&self) -> Option<u64> {
        self.reservations
            .blocked_remaining_secs(self.clock.now_millis())
    }

    pub fn countdown_tick(&mut self) -> Option<u64> {
        let now = self.clock.now_millis();
        self.reservations.countdown_tick(now)
    }

    /// Report cumulative spend; reprices at once when this unlocks VIP
    pub fn record_spend(&mut self, total_spent: f64) -> bool {
        let unlocked = self.vip.record_spend(total_spent);
        if unlocked {
            self.tick();
        }
        unlocked
    }

    pub fn is_vip(&self) -> bool {
        self.vip.is_vip()
    }

    pub fn is_eligible_for_new_user_discount(&self) -> bool {
        self.visits
            .is_eligible_for_new_user_discount(self.clock.now_millis())
    }

    pub fn first_visit_time(&self) -> Option<i64> {
        self.visits.first_visit_time()
    }

    pub fn refresh_count(&self) -> u32 {
        self.refresh_count
    }

    pub fn theme(&self) -> Theme {
        storage::load_or_default::<Preferences>(self.store.as_ref(), keys::PREFERENCES).theme
    }

    pub fn toggle_theme(&self) -> Theme {
        let prefs = Preferences {
            theme: self.theme().toggled(),
        };
        storage::save(self.store.as_ref(), keys::PREFERENCES, &prefs);
        prefs.theme
    }

    pub fn local_now(&self) -> NaiveDateTime {
        local_datetime(self.clock.now_millis(), self.timezone)
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use std::time::Duration;

    // 2024-03-11 13:05 UTC
    const MONDAY_LUNCH: i64 = 1_710_162_300_000;

    fn session_at(millis: i64) -> (Session, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(millis));
        let session = Session::new(Arc::new(MemoryStore::new()), clock.clone(), chrono_tz::UTC);
        (session, clock)
    }

    #[test]
    fn test_start_prices_eagerly() {
        let (mut session, _clock) = session_at(MONDAY_LUNCH);
        assert!(session.latest_snapshot().is_none());

        assert_eq!(session.start(), Greeting::FirstVisit);
        let snapshot = session.latest_snapshot().unwrap();
        assert_eq!(snapshot.period, PricingPeriod::Afternoon);
        assert_eq!(snapshot.item("1").unwrap().price, 343.85);
        assert_eq!(snapshot.refresh_count, 1);
        assert!(!snapshot.anti_bot_active);
        assert!(snapshot.vip_additions.is_empty());
    }

    #[test]
    fn test_greeting_follows_discount_window() {
        let (mut session, clock) = session_at(MONDAY_LUNCH);
        assert_eq!(session.start(), Greeting::FirstVisit);

        clock.advance(Duration::from_secs(9 * 60 + 59));
        assert_eq!(session.start(), Greeting::ReturningEligible);

        clock.advance(Duration::from_secs(2));
        let greeting = session.start();
        assert_eq!(greeting, Greeting::DiscountExpired);
        assert!(!greeting.discount_eligible());
        assert!(!session.is_eligible_for_new_user_discount());
    }

    #[test]
    fn test_fifth_reload_turns_on_surcharge() {
        let (mut session, clock) = session_at(MONDAY_LUNCH);
        for _ in 0..4 {
            session.start();
            clock.advance(Duration::from_secs(5));
        }
        assert!(!session.latest_snapshot().unwrap().anti_bot_active);

        session.start();
        let snapshot = session.latest_snapshot().unwrap();
        assert!(snapshot.anti_bot_active);
        assert_eq!(snapshot.refresh_count, 5);
        // 299 * 1.15 * 1.05
        assert_eq!(snapshot.item("1").unwrap().price, 361.04);
    }

    #[test]
    fn test_order_gating() {
        let (mut session, _clock) = session_at(MONDAY_LUNCH);
        session.start();

        let err = session.ensure_can_order().unwrap_err();
        assert_eq!(err.code, ErrorCode::TableRequired);

        let date = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        session.book(&BookingRequest::new(6, date, "13:00")).unwrap();
        session.ensure_can_order().unwrap();

        session.release();
        assert!(session.ensure_can_order().is_err());
    }

    #[test]
    fn test_book_uses_shown_availability() {
        // 2024-03-10 14:05 UTC: busy day, even hour
        let (mut session, _clock) = session_at(1_710_079_500_000);
        session.start();
        assert_eq!(
            session.latest_snapshot().unwrap().available_tables.len(),
            3
        );

        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let err = session.book(&BookingRequest::new(1, date, "15:00")).unwrap_err();
        assert_eq!(err.code, ErrorCode::TableUnavailable);
        assert_eq!(err.detail("reason").unwrap(), "not_offered");
    }

    #[test]
    fn test_vip_unlock_reprices() {
        let (mut session, _clock) = session_at(MONDAY_LUNCH);
        session.start();

        assert!(!session.record_spend(400.0));
        assert!(session.record_spend(1049.5));
        assert!(session.is_vip());

        let snapshot = session.latest_snapshot().unwrap();
        assert_eq!(snapshot.vip_additions.len(), 3);
        // 899 * 1.15
        assert_eq!(snapshot.item("vip-1").unwrap().price, 1033.85);
    }

    #[test]
    fn test_theme_toggle_persists() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let clock = Arc::new(ManualClock::new(MONDAY_LUNCH));
        let session = Session::new(store.clone(), clock.clone(), chrono_tz::UTC);

        assert_eq!(session.theme(), Theme::Dark);
        assert_eq!(session.toggle_theme(), Theme::Light);

        let reopened = Session::new(store, clock, chrono_tz::UTC);
        assert_eq!(reopened.theme(), Theme::Light);
    }
}
