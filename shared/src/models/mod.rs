//! Data models
//!
//! Shared between the engine and the storefront (via JSON).
//! Timestamps are Unix millis (`i64`).

pub mod dining_table;
pub mod menu_item;
pub mod preferences;
pub mod reservation;
pub mod visit;

// Re-exports
pub use dining_table::*;
pub use menu_item::*;
pub use preferences::*;
pub use reservation::*;
pub use visit::*;
