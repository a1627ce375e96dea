use async_trait::async_trait;

use podkit_core::events::PodEvent;

use crate::error::{NotifyError, PortError};
use crate::types::{AlarmNotice, NoticeResult};

/// Delivery channel for newly raised alarms.
#[async_trait]
pub trait Annunciator: Send + Sync {
    async fn announce(&self, notice: &AlarmNotice) -> Result<NoticeResult, NotifyError>;
}

#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, events: Vec<PodEvent>) -> Result<(), PortError>;
}
