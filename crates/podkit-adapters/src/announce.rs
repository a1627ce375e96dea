use async_trait::async_trait;

use podkit_core::alarm::Severity;
use podkit_ports::error::NotifyError;
use podkit_ports::outbound::Annunciator;
use podkit_ports::types::{AlarmNotice, NoticeResult};

/// Annunciator that emits alarms to the tracing subscriber, leveled by
/// severity. Stand-in delivery channel for deployments without a real one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnnunciator;

#[async_trait]
impl Annunciator for TracingAnnunciator {
    async fn announce(&self, notice: &AlarmNotice) -> Result<NoticeResult, NotifyError> {
        let code = notice.code;
        let message = notice.message.as_str();
        match notice.severity {
            Severity::Critical => tracing::error!(%code, message, "pod alarm raised"),
            Severity::Warning => tracing::warn!(%code, message, "pod alarm raised"),
            Severity::Advisory => tracing::info!(%code, message, "pod alarm raised"),
        }
        Ok(NoticeResult::default())
    }
}
