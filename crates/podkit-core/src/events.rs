use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::alarm::{AlarmCode, Severity};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PodEvent {
    StatusDecoded(StatusDecoded),
    AlarmRaised(AlarmRaised),
    AlarmCleared(AlarmCleared),
}

impl PodEvent {
    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::StatusDecoded(e) => e.occurred_at,
            Self::AlarmRaised(e) => e.occurred_at,
            Self::AlarmCleared(e) => e.occurred_at,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            Self::StatusDecoded(_) => "status.decoded",
            Self::AlarmRaised(_) => "alarm.raised",
            Self::AlarmCleared(_) => "alarm.cleared",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusDecoded {
    pub raw: u8,
    pub active: usize,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlarmRaised {
    pub code: AlarmCode,
    pub severity: Severity,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlarmCleared {
    pub code: AlarmCode,
    pub occurred_at: DateTime<Utc>,
}
