use async_trait::async_trait;

use podkit_core::events::PodEvent;
use podkit_ports::error::PortError;
use podkit_ports::outbound::EventPublisher;

/// Event publisher that logs each event with its type and serialized payload.
/// Replaces a durable store in deployments that keep no alarm history.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventPublisher;

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, events: Vec<PodEvent>) -> Result<(), PortError> {
        for event in &events {
            let event_type = event.event_type();
            let data =
                serde_json::to_string(event).map_err(|e| PortError::Publish(e.to_string()))?;
            tracing::info!(event_type, data = %data, "pod event");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use podkit_core::alarm::AlarmCode;
    use podkit_core::events::AlarmRaised;

    #[tokio::test]
    async fn publish_accepts_a_batch() {
        let events = vec![
            PodEvent::AlarmRaised(AlarmRaised {
                code: AlarmCode::PodExpired,
                severity: AlarmCode::PodExpired.severity(),
                occurred_at: Utc::now(),
            }),
            PodEvent::AlarmRaised(AlarmRaised {
                code: AlarmCode::LowReservoir,
                severity: AlarmCode::LowReservoir.severity(),
                occurred_at: Utc::now(),
            }),
        ];
        TracingEventPublisher.publish(events).await.unwrap();
    }
}
