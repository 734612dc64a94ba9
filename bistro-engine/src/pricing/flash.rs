//! Evening flash-discount selector
//!
//! Selection is a deterministic function of the 10-minute bucket: every
//! recomputation inside the same bucket picks the same items at the same
//! percentage.
//!
//! The seed is `year-month-day-hour-bucket` with a zero-based month
//! (January = 0). The hash folds the seed's UTF-16 code units with
//! `acc = acc * 31 + unit` in 32-bit two's-complement arithmetic, wrapping on
//! overflow. Its magnitude is taken as `u32`, so `i32::MIN` is well defined.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Minutes per selection bucket
pub const FLASH_BUCKET_MINUTES: u32 = 10;
/// An item is picked when `(|hash| + first id unit) % FLASH_MODULUS == 0`
pub const FLASH_MODULUS: u64 = 7;
pub const MIN_FLASH_PERCENT: u32 = 5;
/// Number of distinct percentages above the minimum (5..=20)
pub const FLASH_PERCENT_SPREAD: u32 = 16;

/// Seed string for the bucket containing `now`
pub fn flash_seed(now: &NaiveDateTime) -> String {
    format!(
        "{}-{}-{}-{}-{}",
        now.year(),
        now.month0(),
        now.day(),
        now.hour(),
        now.minute() / FLASH_BUCKET_MINUTES
    )
}

/// `acc = acc * 31 + unit` over UTF-16 code units, wrapping at 32 bits
pub fn seed_hash(seed: &str) -> i32 {
    seed.encode_utf16().fold(0i32, |acc, unit| {
        acc.wrapping_shl(5)
            .wrapping_sub(acc)
            .wrapping_add(i32::from(unit))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashSelector {
    hash: i32,
}

impl FlashSelector {
    pub fn for_time(now: &NaiveDateTime) -> Self {
        Self::from_hash(seed_hash(&flash_seed(now)))
    }

    pub fn from_hash(hash: i32) -> Self {
        Self { hash }
    }

    pub fn hash(&self) -> i32 {
        self.hash
    }

    fn magnitude(&self) -> u32 {
        self.hash.unsigned_abs()
    }

    /// Discount applied to every selected item in this bucket (5..=20)
    pub fn discount_percent(&self) -> u32 {
        MIN_FLASH_PERCENT + self.magnitude() % FLASH_PERCENT_SPREAD
    }

    /// Whether the item with this id is discounted. An empty id never is.
    pub fn is_selected(&self, item_id: &str) -> bool {
        let Some(first_unit) = item_id.encode_utf16().next() else {
            return false;
        };
        (u64::from(self.magnitude()) + u64::from(first_unit)) % FLASH_MODULUS == 0
    }

    pub fn discount_for(&self, item_id: &str) -> Option<u32> {
        self.is_selected(item_id).then(|| self.discount_percent())
    }
}
