//! Utilities: logging setup and business timezone conversion

pub mod logger;
pub mod time;

pub use time::local_datetime;
