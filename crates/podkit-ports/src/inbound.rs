use async_trait::async_trait;

use podkit_core::alarm::AlarmSet;

use crate::error::PortError;
use crate::types::StatusObservation;

/// Surface the transport layer calls with each observed status byte. The
/// caller holds the previously decoded set; this core keeps no state.
#[async_trait]
pub trait StatusObserver: Send + Sync {
    async fn observe_status(
        &self,
        observation: StatusObservation,
        previous: AlarmSet,
    ) -> Result<AlarmSet, PortError>;
}
