//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MenuCategory {
    Main,
    Appetizer,
    Dessert,
    Beverage,
}

impl MenuCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "Main",
            Self::Appetizer => "Appetizer",
            Self::Dessert => "Dessert",
            Self::Beverage => "Beverage",
        }
    }
}

/// Menu item entity (菜品)
///
/// `base_price` is the immutable catalog price. `price` and `original_price`
/// are derived by the pricing engine on every tick and are never stored on
/// their own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub base_price: f64,
    /// Current (engine-derived) price
    pub price: f64,
    /// Price before the flash discount, present only while discounted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub category: MenuCategory,
    #[serde(default)]
    pub is_vip_only: bool,
}

impl MenuItem {
    /// Create a catalog record whose current price equals its base price
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        base_price: f64,
        category: MenuCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            base_price,
            price: base_price,
            original_price: None,
            category,
            is_vip_only: false,
        }
    }

    /// Mark the item as VIP-only
    pub fn vip_only(mut self) -> Self {
        self.is_vip_only = true;
        self
    }

    pub fn is_discounted(&self) -> bool {
        self.original_price.is_some()
    }
}
