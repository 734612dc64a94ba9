//! Visit tracking records

use serde::{Deserialize, Serialize};

/// First visit of this session (首次访问)
///
/// Written once, never updated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VisitRecord {
    /// Unix millis
    pub first_visit_time: i64,
}

/// Page refresh counter over a restart-on-expiry window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshBurst {
    pub count: u32,
    /// Unix millis
    pub window_start: i64,
}

impl RefreshBurst {
    pub fn start(now: i64) -> Self {
        Self {
            count: 1,
            window_start: now,
        }
    }
}
