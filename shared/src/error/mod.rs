//! Unified error system for the bistro engine
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Envelope handed to the storefront
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 7xxx: Table / reservation errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::BookingBlocked)
//!     .with_detail("remaining_secs", 240);
//!
//! let response = ApiResponse::<()>::from(err);
//! assert_eq!(response.code, Some(7102));
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
