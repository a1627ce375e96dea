use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use podkit_core::alarm::{AlarmCode, Severity};

/// One status byte as reported by the pod, before decoding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusObservation {
    pub raw: u8,
    pub observed_at: DateTime<Utc>,
}

/// Announcement for one newly raised alarm, ready for a delivery channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmNotice {
    pub code: AlarmCode,
    pub severity: Severity,
    pub message: String,
    pub observed_at: DateTime<Utc>,
}

/// Delivery metadata returned by annunciators.
#[derive(Debug, Clone, Default)]
pub struct NoticeResult {
    pub delivered_id: Option<String>,
}
