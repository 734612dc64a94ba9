//! Built-in menu
//!
//! The storefront supplies the catalog at startup; these are the records the
//! demo ships with. Prices are in rupees.

use shared::models::{MenuCategory, MenuItem};

/// Regular menu, in display order
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(
            "1",
            "Classic Margherita Pizza",
            "Fresh mozzarella, tomatoes, and basil on our signature crust.",
            299.0,
            MenuCategory::Main,
        ),
        MenuItem::new(
            "2",
            "Truffle Mushroom Risotto",
            "Creamy risotto with wild mushrooms and truffle oil.",
            399.0,
            MenuCategory::Main,
        ),
        MenuItem::new(
            "3",
            "Grilled Salmon",
            "Norwegian salmon with lemon herb butter and seasonal vegetables.",
            499.0,
            MenuCategory::Main,
        ),
        MenuItem::new(
            "4",
            "Chocolate Lava Cake",
            "Warm chocolate cake with a molten center, served with vanilla ice cream.",
            199.0,
            MenuCategory::Dessert,
        ),
        MenuItem::new(
            "5",
            "Artisanal Cheese Platter",
            "Selection of premium cheeses with crackers, nuts, and honey.",
            349.0,
            MenuCategory::Appetizer,
        ),
        MenuItem::new(
            "6",
            "Signature Cocktail",
            "House special blend of premium spirits with fresh fruit juices.",
            249.0,
            MenuCategory::Beverage,
        ),
        MenuItem::new(
            "7",
            "Crispy Calamari",
            "Tender calamari rings, lightly breaded and fried, served with aioli.",
            279.0,
            MenuCategory::Appetizer,
        ),
        MenuItem::new(
            "8",
            "Craft Beer Selection",
            "Rotating selection of local craft beers. Ask server for current options.",
            199.0,
            MenuCategory::Beverage,
        ),
    ]
}

/// Items unlocked once a guest reaches VIP status
pub fn vip_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(
            "vip-1",
            "Chef's Secret Truffle Pasta",
            "Hand-crafted pasta with black truffle shavings and 24-month aged Parmesan.",
            899.0,
            MenuCategory::Main,
        )
        .vip_only(),
        MenuItem::new(
            "vip-2",
            "Gold Leaf Chocolate Dome",
            "Premium dark chocolate sphere with molten center and 24k edible gold leaf.",
            699.0,
            MenuCategory::Dessert,
        )
        .vip_only(),
        MenuItem::new(
            "vip-3",
            "Aged Whiskey Flight",
            "Collection of rare aged whiskeys from around the world, served with artisanal ice.",
            1499.0,
            MenuCategory::Beverage,
        )
        .vip_only(),
    ]
}
