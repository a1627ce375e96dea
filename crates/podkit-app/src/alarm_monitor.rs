use async_trait::async_trait;

use podkit_core::alarm::{AlarmCode, AlarmSet};
use podkit_core::events::{AlarmCleared, AlarmRaised, PodEvent, StatusDecoded};
use podkit_core::text::Localize;
use podkit_ports::error::PortError;
use podkit_ports::inbound::StatusObserver;
use podkit_ports::outbound::{Annunciator, EventPublisher};
use podkit_ports::types::{AlarmNotice, StatusObservation};

use crate::error::AppError;

/// Decodes each observed status byte, detects raised/cleared edges against the
/// caller-held previous set, and fans out events and announcements.
pub struct AlarmMonitor<L, P, N>
where
    L: Localize + Send + Sync,
    P: EventPublisher,
    N: Annunciator,
{
    localizer: L,
    events: P,
    annunciator: N,
}

impl<L, P, N> AlarmMonitor<L, P, N>
where
    L: Localize + Send + Sync,
    P: EventPublisher,
    N: Annunciator,
{
    pub fn new(localizer: L, events: P, annunciator: N) -> Self {
        Self {
            localizer,
            events,
            annunciator,
        }
    }

    /// Decode one observation. Announces each code absent from `previous`,
    /// publishes a `StatusDecoded` plus one event per edge, and returns the
    /// new set for the caller to carry into the next call.
    pub async fn observe(
        &self,
        observation: StatusObservation,
        previous: AlarmSet,
    ) -> Result<AlarmSet, AppError> {
        let current = AlarmSet::from_raw(observation.raw);
        tracing::debug!(
            raw = observation.raw,
            active = current.len(),
            "decoded pod status byte"
        );

        let mut events = vec![PodEvent::StatusDecoded(StatusDecoded {
            raw: observation.raw,
            active: current.len(),
            occurred_at: observation.observed_at,
        })];

        for code in current {
            if previous.contains(code) {
                continue;
            }
            if matches!(code, AlarmCode::UnknownBit2 | AlarmCode::UnknownBit1) {
                tracing::warn!(bit = code.bit(), "pod reported an unassigned alarm bit");
            }
            events.push(PodEvent::AlarmRaised(AlarmRaised {
                code,
                severity: code.severity(),
                occurred_at: observation.observed_at,
            }));
            let notice = AlarmNotice {
                code,
                severity: code.severity(),
                message: code.display(&self.localizer),
                observed_at: observation.observed_at,
            };
            self.annunciator.announce(&notice).await?;
        }

        for code in previous {
            if !current.contains(code) {
                events.push(PodEvent::AlarmCleared(AlarmCleared {
                    code,
                    occurred_at: observation.observed_at,
                }));
            }
        }

        self.events.publish(events).await?;
        Ok(current)
    }

    /// Localized rendering of a decoded set, for logging callers.
    pub fn render(&self, set: AlarmSet) -> String {
        set.display(&self.localizer)
    }
}

#[async_trait]
impl<L, P, N> StatusObserver for AlarmMonitor<L, P, N>
where
    L: Localize + Send + Sync,
    P: EventPublisher,
    N: Annunciator,
{
    async fn observe_status(
        &self,
        observation: StatusObservation,
        previous: AlarmSet,
    ) -> Result<AlarmSet, PortError> {
        self.observe(observation, previous)
            .await
            .map_err(|e| PortError::Downstream(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use podkit_core::text::EnglishText;
    use podkit_ports::error::NotifyError;
    use podkit_ports::types::NoticeResult;
    use std::sync::Mutex;

    // --- Mock Adapters ---

    #[derive(Default)]
    struct MockPublisher {
        events: Mutex<Vec<PodEvent>>,
    }

    #[async_trait]
    impl EventPublisher for MockPublisher {
        async fn publish(&self, events: Vec<PodEvent>) -> Result<(), PortError> {
            self.events.lock().unwrap().extend(events);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockAnnunciator {
        notices: Mutex<Vec<AlarmNotice>>,
        fail: bool,
    }

    #[async_trait]
    impl Annunciator for MockAnnunciator {
        async fn announce(&self, notice: &AlarmNotice) -> Result<NoticeResult, NotifyError> {
            if self.fail {
                return Err(NotifyError::ChannelUnavailable);
            }
            self.notices.lock().unwrap().push(notice.clone());
            Ok(NoticeResult::default())
        }
    }

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn obs(raw: u8) -> StatusObservation {
        StatusObservation {
            raw,
            observed_at: ts("2025-06-01T08:00:00Z"),
        }
    }

    #[tokio::test]
    async fn announces_each_newly_raised_code_once() {
        let monitor = AlarmMonitor::new(EnglishText, MockPublisher::default(), MockAnnunciator::default());

        let set = monitor.observe(obs(0b1001_0000), AlarmSet::NONE).await.unwrap();
        assert_eq!(set.to_raw(), 0b1001_0000);

        let notices = monitor.annunciator.notices.lock().unwrap();
        let messages: Vec<&str> = notices.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["Pod Expired", "Low Reservoir"]);
    }

    #[tokio::test]
    async fn already_active_codes_are_not_reannounced() {
        let monitor = AlarmMonitor::new(EnglishText, MockPublisher::default(), MockAnnunciator::default());
        let previous = AlarmSet::from_raw(0b0001_0000);

        monitor.observe(obs(0b1001_0000), previous).await.unwrap();

        let notices = monitor.annunciator.notices.lock().unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].code, AlarmCode::PodExpired);
    }

    #[tokio::test]
    async fn publishes_decode_raise_and_clear_events() {
        let monitor = AlarmMonitor::new(EnglishText, MockPublisher::default(), MockAnnunciator::default());
        let previous = AlarmSet::from_raw(0b0010_0000);

        monitor.observe(obs(0b0001_0000), previous).await.unwrap();

        let events = monitor.events.events.lock().unwrap();
        let types: Vec<&str> = events.iter().map(|e| e.event_type()).collect();
        assert_eq!(types, vec!["status.decoded", "alarm.raised", "alarm.cleared"]);
        match &events[2] {
            PodEvent::AlarmCleared(e) => assert_eq!(e.code, AlarmCode::Suspended),
            other => panic!("expected clear event, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn steady_state_publishes_only_the_decode_event() {
        let monitor = AlarmMonitor::new(EnglishText, MockPublisher::default(), MockAnnunciator::default());
        let previous = AlarmSet::from_raw(0x30);

        monitor.observe(obs(0x30), previous).await.unwrap();

        let events = monitor.events.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "status.decoded");
        assert!(monitor.annunciator.notices.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn announce_failure_surfaces_as_notify_error() {
        let annunciator = MockAnnunciator {
            fail: true,
            ..Default::default()
        };
        let monitor = AlarmMonitor::new(EnglishText, MockPublisher::default(), annunciator);

        let err = monitor.observe(obs(0x80), AlarmSet::NONE).await.unwrap_err();
        assert!(matches!(err, AppError::Notify(NotifyError::ChannelUnavailable)));
    }

    #[tokio::test]
    async fn render_uses_the_injected_localizer() {
        let identity =
            podkit_core::text::FnResolver(|key: &podkit_core::text::TextKey| key.id.to_string());
        let monitor = AlarmMonitor::new(identity, MockPublisher::default(), MockAnnunciator::default());

        assert_eq!(monitor.render(AlarmSet::from_raw(0x90)), "pod-expired, low-reservoir");
        assert_eq!(monitor.render(AlarmSet::NONE), "no-alarms");
    }
}
