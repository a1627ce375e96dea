use serde::{Deserialize, Serialize};

/// Urgency of a single alarm condition. Purely per-code; combinations of bits
/// carry no extra meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Warning,
    Advisory,
}
