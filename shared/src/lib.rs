//! Shared types for the Smart Bistro engine
//!
//! Domain models, error codes and small time helpers used by the engine
//! and by whatever presentation layer renders its output.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
