//! Smart Bistro engine
//!
//! Time and behavior driven menu pricing plus a simulated table reservation
//! system with booking abuse throttling.
//!
//! # Module layout
//!
//! ```text
//! bistro-engine/src/
//! ├── core/          # config, clock, session, tick scheduler
//! ├── pricing/       # time rules, flash discount, anti-bot surcharge
//! ├── reservation/   # bookings and the booking throttle
//! ├── storage/       # key-value store (memory, redb)
//! ├── visit/         # first visit and refresh bursts
//! ├── availability   # reservable tables, "restaurant full"
//! ├── catalog        # base menus
//! ├── vip            # VIP unlock
//! └── utils/         # logging, timezone helpers
//! ```

pub mod availability;
pub mod catalog;
pub mod core;
pub mod pricing;
pub mod reservation;
pub mod storage;
pub mod utils;
pub mod vip;
pub mod visit;

pub use availability::TableAvailability;
pub use core::{
    Clock, Config, Greeting, ManualClock, Scheduler, SchedulerHandle, Session, SystemClock,
    TickSnapshot,
};
pub use pricing::{PricingEngine, PricingPeriod, compute_prices};
pub use reservation::{BookingError, ReservationStore};
pub use storage::{KeyValueStore, MemoryStore, RedbStore, SharedStore};
pub use vip::VipStatus;
pub use visit::VisitTracker;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the config, prepare the work directory and start logging
///
/// Production logs go to a daily file under `WORK_DIR/logs`; otherwise stdout.
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", log_dir.display(), e))?;

    let file_dir = config.is_production().then_some(log_dir.as_path());
    init_logger_with_file(Some(&config.log_level), file_dir);

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   _____                      __     ____  _      __
  / ___/____ ___  ____ ______/ /_   / __ )(_)____/ /__________
  \__ \/ __ `__ \/ __ `/ ___/ __/  / __  / / ___/ __/ ___/ __ \
 ___/ / / / / / / /_/ / /  / /_   / /_/ / (__  ) /_/ /  / /_/ /
/____/_/ /_/ /_/\__,_/_/   \__/  /_____/_/____/\__/_/   \____/
    "#
    );
}
