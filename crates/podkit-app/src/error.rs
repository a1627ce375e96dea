use podkit_ports::error::{NotifyError, PortError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("port error: {0}")]
    Port(#[from] PortError),
    #[error("notify error: {0}")]
    Notify(#[from] NotifyError),
}
