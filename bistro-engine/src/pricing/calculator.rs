//! Price Calculator
//!
//! Multipliers are composed in `rust_decimal` and only the final price is
//! rounded, so stacking rules never accumulates float error.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub(crate) fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round a monetary amount to 2 decimal places
#[inline]
pub fn round_price(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
fn to_f64(value: Decimal) -> f64 {
    round_price(value).to_f64().unwrap_or_default()
}

/// One factor that went into an item's price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    MorningBeverage,
    AfternoonPeak,
    FlashDiscount { percent: u32 },
    LateNightSurge,
    AntiBot,
}

/// Accumulated multipliers for one item
#[derive(Debug, Clone)]
pub struct PriceAdjustment {
    /// Product of every factor except the flash discount
    multiplier: Decimal,
    flash_discount_percent: Option<u32>,
    /// `multiplier` as it stood when the flash discount was applied
    pre_discount_multiplier: Option<Decimal>,
    applied: Vec<Adjustment>,
}

impl Default for PriceAdjustment {
    fn default() -> Self {
        Self {
            multiplier: Decimal::ONE,
            flash_discount_percent: None,
            pre_discount_multiplier: None,
            applied: Vec::new(),
        }
    }
}

impl PriceAdjustment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Multiply in a fixed factor
    pub fn apply(&mut self, adjustment: Adjustment, factor: Decimal) {
        self.multiplier *= factor;
        self.applied.push(adjustment);
    }

    /// Record a flash discount of `percent` and snapshot the price so far.
    ///
    /// Factors applied after this point move the final price but not the
    /// pre-discount price.
    pub fn apply_flash_discount(&mut self, percent: u32) {
        self.flash_discount_percent = Some(percent);
        self.pre_discount_multiplier = Some(self.multiplier);
        self.applied.push(Adjustment::FlashDiscount { percent });
    }

    pub fn applied(&self) -> &[Adjustment] {
        &self.applied
    }

    pub fn flash_discount_percent(&self) -> Option<u32> {
        self.flash_discount_percent
    }

    fn flash_factor(&self) -> Decimal {
        match self.flash_discount_percent {
            Some(percent) => Decimal::ONE - Decimal::from(percent) / Decimal::ONE_HUNDRED,
            None => Decimal::ONE,
        }
    }

    /// `round(base × every factor)`
    pub fn calculate_final_price(&self, base_price: f64) -> f64 {
        to_f64(to_decimal(base_price) * self.multiplier * self.flash_factor())
    }

    /// The price snapshotted at the flash discount step, if there is one
    pub fn calculate_pre_discount_price(&self, base_price: f64) -> Option<f64> {
        self.pre_discount_multiplier
            .map(|multiplier| to_f64(to_decimal(base_price) * multiplier))
    }
}
