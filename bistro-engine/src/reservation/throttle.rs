//! Booking abuse throttle
//!
//! Two attempts less than 30 seconds apart block booking for 5 minutes. The
//! attempt that trips the block is itself rejected.

use serde::{Deserialize, Serialize};
use shared::util::seconds_until;

use super::error::BookingError;

/// Minimum spacing between two booking attempts
pub const ATTEMPT_WINDOW_MS: i64 = 30 * 1000;

/// Length of the block once tripped
pub const BLOCK_DURATION_MS: i64 = 5 * 60 * 1000;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingThrottle {
    last_attempt_time: Option<i64>,
    blocked_until: Option<i64>,
}

impl BookingThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_attempt_time(&self) -> Option<i64> {
        self.last_attempt_time
    }

    pub fn blocked_until(&self) -> Option<i64> {
        self.blocked_until
    }

    /// Evaluate one booking attempt at `now`
    ///
    /// Rejections while blocked do not move `last_attempt_time`.
    pub fn check(&mut self, now: i64) -> Result<(), BookingError> {
        if let Some(remaining_secs) = self.remaining_secs(now) {
            return Err(BookingError::Blocked { remaining_secs });
        }

        if let Some(last) = self.last_attempt_time
            && now - last < ATTEMPT_WINDOW_MS
        {
            self.blocked_until = Some(now + BLOCK_DURATION_MS);
            self.last_attempt_time = Some(now);
            tracing::warn!(
                since_last_ms = now - last,
                blocked_until = now + BLOCK_DURATION_MS,
                "Booking attempts too close together, blocking"
            );
            return Err(BookingError::Throttled {
                cooldown_secs: (BLOCK_DURATION_MS / 1000) as u64,
            });
        }

        self.last_attempt_time = Some(now);
        Ok(())
    }

    pub fn is_blocked(&self, now: i64) -> bool {
        self.remaining_secs(now).is_some()
    }

    /// Seconds left in the block (rounded up), `None` when not blocked
    pub fn remaining_secs(&self, now: i64) -> Option<u64> {
        match self.blocked_until {
            Some(until) if now < until => Some(seconds_until(until, now)),
            _ => None,
        }
    }

    /// Countdown step: remaining seconds while blocked; clears the block once it runs out
    pub fn countdown_tick(&mut self, now: i64) -> Option<u64> {
        let remaining = self.remaining_secs(now);
        if remaining.is_none() && self.blocked_until.take().is_some() {
            tracing::info!("Booking block expired");
        }
        remaining
    }
}
