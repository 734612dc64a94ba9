use shared::error::{AppError, ErrorCode};
use shared::models::TableId;
use thiserror::Error;

/// Why a table could not be booked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    RestaurantFull,
    NotOffered,
}

impl UnavailableReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RestaurantFull => "restaurant_full",
            Self::NotOffered => "not_offered",
        }
    }
}

/// Booking errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("Unknown time slot: {0}")]
    InvalidTimeSlot(String),

    #[error("Too many booking attempts, blocked for {cooldown_secs}s")]
    Throttled { cooldown_secs: u64 },

    #[error("Booking blocked, try again in {remaining_secs}s")]
    Blocked { remaining_secs: u64 },

    #[error("Table {table_id} is not available")]
    Unavailable {
        table_id: TableId,
        reason: UnavailableReason,
    },
}

impl BookingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingField { .. } => ErrorCode::RequiredField,
            Self::InvalidTimeSlot(_) => ErrorCode::ValidationFailed,
            Self::Throttled { .. } => ErrorCode::BookingThrottled,
            Self::Blocked { .. } => ErrorCode::BookingBlocked,
            Self::Unavailable { .. } => ErrorCode::TableUnavailable,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::InvalidTimeSlot(_))
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        let message = err.to_string();
        match err {
            BookingError::MissingField { field } => AppError::required(field),
            BookingError::InvalidTimeSlot(time) => AppError::validation(message)
                .with_detail("field", "time")
                .with_detail("value", time),
            BookingError::Throttled { cooldown_secs } => {
                AppError::with_message(ErrorCode::BookingThrottled, message)
                    .with_detail("cooldown_secs", cooldown_secs)
            }
            BookingError::Blocked { remaining_secs } => {
                AppError::with_message(ErrorCode::BookingBlocked, message)
                    .with_detail("remaining_secs", remaining_secs)
            }
            BookingError::Unavailable { table_id, reason } => {
                AppError::with_message(ErrorCode::TableUnavailable, message)
                    .with_detail("table_id", table_id)
                    .with_detail("reason", reason.as_str())
            }
        }
    }
}
