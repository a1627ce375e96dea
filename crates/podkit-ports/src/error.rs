use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortError {
    #[error("publish failed: {0}")]
    Publish(String),
    #[error("downstream failure: {0}")]
    Downstream(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("channel unavailable")]
    ChannelUnavailable,
    #[error("rate limited")]
    RateLimited,
    #[error("delivery failed: {0}")]
    DeliveryFailed(String),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
}
