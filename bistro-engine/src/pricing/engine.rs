//! Pricing Engine
//!
//! Derives the displayed price of every menu item from its base price, the
//! wall-clock time and the refresh-burst count. Always prices from
//! `base_price`, so repricing an already-priced list never compounds.

use chrono::{NaiveDateTime, Timelike};
use shared::models::MenuItem;
use std::sync::Arc;

use super::calculator::{Adjustment, PriceAdjustment};
use super::flash::FlashSelector;
use super::rules::{ANTI_BOT_REFRESH_THRESHOLD, TimeRule, anti_bot_factor};

/// Price a whole catalog at `now`
pub fn compute_prices(catalog: &[MenuItem], refresh_count: u32, now: NaiveDateTime) -> Vec<MenuItem> {
    let hour = now.hour();
    let flash = TimeRule::EveningFlash
        .is_active(hour)
        .then(|| FlashSelector::for_time(&now));

    catalog
        .iter()
        .map(|item| price_item(item, refresh_count, hour, flash.as_ref()))
        .collect()
}

/// Collect every factor that applies to `item`
///
/// `flash` is only consulted while the evening window is active.
pub fn calculate_adjustment(
    item: &MenuItem,
    refresh_count: u32,
    hour: u32,
    flash: Option<&FlashSelector>,
) -> PriceAdjustment {
    let mut adjustment = PriceAdjustment::new();

    for rule in TimeRule::ORDERED {
        if !rule.is_active(hour) || !rule.matches_category(item.category) {
            continue;
        }

        match rule.factor() {
            Some((kind, factor)) => adjustment.apply(kind, factor),
            None => {
                if let Some(percent) = flash.and_then(|s| s.discount_for(&item.id)) {
                    adjustment.apply_flash_discount(percent);
                }
            }
        }
    }

    if refresh_count >= ANTI_BOT_REFRESH_THRESHOLD {
        adjustment.apply(Adjustment::AntiBot, anti_bot_factor());
    }

    adjustment
}

fn price_item(
    item: &MenuItem,
    refresh_count: u32,
    hour: u32,
    flash: Option<&FlashSelector>,
) -> MenuItem {
    let adjustment = calculate_adjustment(item, refresh_count, hour, flash);

    MenuItem {
        price: adjustment.calculate_final_price(item.base_price),
        original_price: adjustment.calculate_pre_discount_price(item.base_price),
        ..item.clone()
    }
}

/// Holds the base catalog and reprices it on demand
#[derive(Debug, Clone)]
pub struct PricingEngine {
    base_catalog: Arc<[MenuItem]>,
}

impl PricingEngine {
    pub fn new(catalog: Vec<MenuItem>) -> Self {
        Self {
            base_catalog: catalog.into(),
        }
    }

    pub fn base_catalog(&self) -> &[MenuItem] {
        &self.base_catalog
    }

    pub fn reprice(&self, refresh_count: u32, now: NaiveDateTime) -> Vec<MenuItem> {
        let priced = compute_prices(&self.base_catalog, refresh_count, now);
        tracing::debug!(
            items = priced.len(),
            discounted = priced.iter().filter(|i| i.is_discounted()).count(),
            refresh_count,
            "Catalog repriced"
        );
        priced
    }
}
