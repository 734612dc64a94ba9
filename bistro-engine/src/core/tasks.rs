//! Background tick driver
//!
//! One tokio task per session runs two timers:
//!
//! - the price tick (first tick immediate) recomputes prices and
//!   availability and publishes a [`TickSnapshot`]
//! - the countdown tick runs only while booking is blocked and publishes
//!   the remaining seconds, then `None` once the block lifts
//!
//! The session sits behind a `parking_lot::Mutex` that is only locked
//! between awaits. Cancelling the token (or dropping the handle) stops the
//! task, so nothing touches the session after release.

use parking_lot::Mutex;
use shared::error::AppResult;
use shared::models::{BookingRequest, Reservation};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::config::Config;
use super::session::Session;
use super::snapshot::TickSnapshot;

pub struct Scheduler {
    session: Arc<Mutex<Session>>,
    price_tick: Duration,
    countdown_tick: Duration,
}

impl Scheduler {
    pub fn new(session: Session, price_tick: Duration, countdown_tick: Duration) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            price_tick,
            countdown_tick,
        }
    }

    pub fn from_config(session: Session, config: &Config) -> Self {
        Self::new(session, config.price_tick(), config.countdown_tick())
    }

    /// Start the tick task on the current runtime
    pub fn spawn(self) -> SchedulerHandle {
        let shutdown = CancellationToken::new();
        let wake = Arc::new(Notify::new());
        let (snapshot_tx, snapshots) = watch::channel(None);
        let (countdown_tx, countdown) = watch::channel(None);
        let session = self.session.clone();

        let task = tokio::spawn(self.run(
            shutdown.clone(),
            wake.clone(),
            snapshot_tx,
            countdown_tx,
        ));

        SchedulerHandle {
            session,
            snapshots,
            countdown,
            wake,
            shutdown,
            task: Some(task),
        }
    }

    async fn run(
        self,
        shutdown: CancellationToken,
        wake: Arc<Notify>,
        snapshot_tx: watch::Sender<Option<TickSnapshot>>,
        countdown_tx: watch::Sender<Option<u64>>,
    ) {
        tracing::info!(
            price_tick_secs = self.price_tick.as_secs(),
            "Tick scheduler started"
        );

        let mut price_interval = tokio::time::interval(self.price_tick);
        price_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut countdown_interval = tokio::time::interval(self.countdown_tick);
        countdown_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            let counting =
                countdown_tx.borrow().is_some() || self.session.lock().is_booking_blocked();

            tokio::select! {
                _ = shutdown.cancelled() => {
                    tracing::info!("Tick scheduler received shutdown signal");
                    return;
                }
                _ = price_interval.tick() => {
                    let snapshot = self.session.lock().tick();
                    snapshot_tx.send_replace(Some(snapshot));
                }
                _ = countdown_interval.tick(), if counting => {
                    let remaining = self.session.lock().countdown_tick();
                    tracing::debug!(?remaining, "Booking countdown");
                    countdown_tx.send_replace(remaining);
                }
                // booking state changed, restart the countdown from now
                _ = wake.notified() => {
                    countdown_interval.reset_immediately();
                }
            }
        }
    }
}

/// Owner side of a running [`Scheduler`]
///
/// Dropping the handle cancels the task.
pub struct SchedulerHandle {
    session: Arc<Mutex<Session>>,
    snapshots: watch::Receiver<Option<TickSnapshot>>,
    countdown: watch::Receiver<Option<u64>>,
    wake: Arc<Notify>,
    shutdown: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl SchedulerHandle {
    /// Snapshot stream; `None` until the first tick
    pub fn subscribe(&self) -> watch::Receiver<Option<TickSnapshot>> {
        self.snapshots.clone()
    }

    /// Remaining blocked seconds; `None` when booking is open
    pub fn countdown(&self) -> watch::Receiver<Option<u64>> {
        self.countdown.clone()
    }

    pub fn latest(&self) -> Option<TickSnapshot> {
        self.snapshots.borrow().clone()
    }

    pub fn book(&self, request: &BookingRequest) -> AppResult<Reservation> {
        let result = self.session.lock().book(request);
        self.wake.notify_one();
        result
    }

    pub fn release(&self) {
        self.session.lock().release();
    }

    /// Run `f` with the session locked. Do not block inside `f`.
    ///
    /// Wakes the task afterwards, since `f` may have changed booking state.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let result = f(&mut self.session.lock());
        self.wake.notify_one();
        result
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Cancel the task and wait for it to exit
    pub async fn shutdown(mut self) {
        self.shutdown.cancel();
        if let Some(task) = self.task.take() {
            match task.await {
                Ok(()) => tracing::debug!("Tick scheduler stopped"),
                Err(e) if e.is_cancelled() => tracing::debug!("Tick scheduler cancelled"),
                Err(e) => tracing::error!(error = ?e, "Tick scheduler panicked"),
            }
        }
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
