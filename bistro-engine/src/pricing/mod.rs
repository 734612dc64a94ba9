//! Pricing Module
//!
//! Menu prices are recomputed from the base catalog on every tick using
//! time-of-day windows, a deterministic evening flash discount and an
//! anti-bot surcharge for bursty refreshes.

mod calculator;
mod engine;
pub mod flash;
pub mod rules;

pub use calculator::*;
pub use engine::*;
pub use flash::FlashSelector;
pub use rules::{PricingPeriod, pricing_notice};
