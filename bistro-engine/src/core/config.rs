use chrono_tz::Tz;
use std::path::PathBuf;
use std::time::Duration;

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | redb file and logs |
/// | TIMEZONE | Asia/Kolkata | business timezone for every time rule |
/// | PRICE_TICK_SECS | 60 | price / availability recompute interval |
/// | COUNTDOWN_TICK_SECS | 1 | booking block countdown interval |
/// | LOG_LEVEL | info | tracing max level |
/// | ENVIRONMENT | development | development, staging or production |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/tmp/bistro TIMEZONE=Europe/Madrid cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub timezone: Tz,
    pub price_tick_secs: u64,
    pub countdown_tick_secs: u64,
    pub log_level: String,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|tz| parse_timezone(&tz))
                .unwrap_or(chrono_tz::Asia::Kolkata),
            price_tick_secs: std::env::var("PRICE_TICK_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            countdown_tick_secs: std::env::var("COUNTDOWN_TICK_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the work directory and timezone, mostly for tests
    pub fn with_overrides(work_dir: impl Into<String>, timezone: Tz) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.timezone = timezone;
        config
    }

    pub fn price_tick(&self) -> Duration {
        Duration::from_secs(self.price_tick_secs.max(1))
    }

    pub fn countdown_tick(&self) -> Duration {
        Duration::from_secs(self.countdown_tick_secs.max(1))
    }

    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("bistro.redb")
    }

    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_timezone(name: &str) -> Option<Tz> {
    match name.parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(e) => {
            tracing::warn!(timezone = name, error = %e, "Unknown TIMEZONE, using default");
            None
        }
    }
}
