//! Unified error codes for the bistro engine
//!
//! Error codes are organized by range:
//! - 0xxx: General errors
//! - 7xxx: Table / reservation errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the storefront can match
/// on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Required field missing
    RequiredField = 7,

    // ==================== 7xxx: Table ====================
    /// Table is not in the currently reservable set
    TableUnavailable = 7002,
    /// Two booking attempts too close together
    BookingThrottled = 7101,
    /// Booking is inside a cooldown window
    BookingBlocked = 7102,
    /// Ordering requires a reserved table
    TableRequired = 7103,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default English message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::RequiredField => "Required field is missing",

            ErrorCode::TableUnavailable => "Table is not available",
            ErrorCode::BookingThrottled => "Too many booking attempts",
            ErrorCode::BookingBlocked => "Booking is temporarily blocked",
            ErrorCode::TableRequired => "Please book a table before ordering",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            7 => Ok(ErrorCode::RequiredField),

            7002 => Ok(ErrorCode::TableUnavailable),
            7101 => Ok(ErrorCode::BookingThrottled),
            7102 => Ok(ErrorCode::BookingBlocked),
            7103 => Ok(ErrorCode::TableRequired),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
