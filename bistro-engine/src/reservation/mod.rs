//! Table reservations with booking abuse throttling

mod error;
mod store;
mod throttle;

pub use error::{BookingError, UnavailableReason};
pub use store::ReservationStore;
pub use throttle::{ATTEMPT_WINDOW_MS, BLOCK_DURATION_MS, BookingThrottle};
