//! Session runtime: configuration, clock, session state and the tick scheduler
//!
//! - [`Config`] - environment configuration
//! - [`Clock`] - time source ([`SystemClock`], [`ManualClock`])
//! - [`Session`] - one guest's engine state
//! - [`TickSnapshot`] - what one tick produced
//! - [`Scheduler`] - async driver of the price and countdown ticks

pub mod clock;
pub mod config;
pub mod session;
pub mod snapshot;
pub mod tasks;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use session::{Greeting, Session};
pub use snapshot::TickSnapshot;
pub use tasks::{Scheduler, SchedulerHandle};
