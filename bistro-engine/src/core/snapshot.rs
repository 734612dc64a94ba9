//! Render contract produced on every tick

use serde::{Deserialize, Serialize};
use shared::models::{MenuItem, TableId};
use std::collections::BTreeSet;

use crate::availability::TableAvailability;
use crate::pricing::PricingPeriod;

/// Everything the storefront needs to draw one frame
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TickSnapshot {
    /// Unix millis
    pub ticked_at: i64,
    pub priced_catalog: Vec<MenuItem>,
    pub available_tables: BTreeSet<TableId>,
    pub is_full: bool,
    /// Priced VIP menu, empty unless unlocked
    pub vip_additions: Vec<MenuItem>,
    pub period: PricingPeriod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub refresh_count: u32,
    pub anti_bot_active: bool,
}

impl TickSnapshot {
    pub fn availability(&self) -> TableAvailability {
        TableAvailability {
            tables: self.available_tables.clone(),
            is_full: self.is_full,
        }
    }

    /// Look up an item in either menu
    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.priced_catalog
            .iter()
            .chain(&self.vip_additions)
            .find(|item| item.id == id)
    }

    pub fn discounted_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.priced_catalog
            .iter()
            .chain(&self.vip_additions)
            .filter(|item| item.is_discounted())
    }
}
