use std::fmt;

use serde::{Deserialize, Serialize};

use super::severity::Severity;
use crate::text::{Localize, TextKey};

const POD_EXPIRED: TextKey = TextKey::new("pod-expired", "Pod Expired", "Pod alarm when pod expires");
const SUSPEND_EXPIRED: TextKey = TextKey::new(
    "suspend-expired",
    "Suspend Expired",
    "Pod alarm when suspend has expired",
);
const SUSPENDED: TextKey =
    TextKey::new("suspended", "Suspended", "Pod alarm when pod has suspended");
const LOW_RESERVOIR: TextKey = TextKey::new(
    "low-reservoir",
    "Low Reservoir",
    "Pod alarm when reservoir is low",
);
const ONE_HOUR_EXPIRY: TextKey = TextKey::new(
    "one-hour-expiry",
    "One Hour Expiry",
    "Pod alarm for one hour expiry",
);
// Upstream firmware docs label deactivation with the expiry text. The key is
// kept distinct so a text catalog can correct it without a protocol change.
const POD_DEACTIVATED: TextKey = TextKey::new(
    "pod-deactivated",
    "One Hour Expiry",
    "Pod alarm for deactivated pod",
);
const UNKNOWN_BIT_2: TextKey = TextKey::new(
    "unknown-bit-2",
    "Unknown Alarm 2",
    "Pod alarm for unknown bit2",
);
const UNKNOWN_BIT_1: TextKey = TextKey::new(
    "unknown-bit-1",
    "Unknown Alarm 1",
    "Pod alarm for unknown bit1",
);

/// One alarm condition, tied to a single bit of the pod's status byte.
///
/// Bits 0x02 and 0x01 are unassigned in every firmware revision seen so far;
/// they decode and render like any other bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AlarmCode {
    PodExpired = 0b1000_0000,
    SuspendExpired = 0b0100_0000,
    Suspended = 0b0010_0000,
    LowReservoir = 0b0001_0000,
    OneHourExpiry = 0b0000_1000,
    PodDeactivated = 0b0000_0100,
    UnknownBit2 = 0b0000_0010,
    UnknownBit1 = 0b0000_0001,
}

impl AlarmCode {
    /// Every code in declaration order, highest bit first. This order is the
    /// iteration order of [`AlarmSet`](super::AlarmSet).
    pub const ALL: [AlarmCode; 8] = [
        AlarmCode::PodExpired,
        AlarmCode::SuspendExpired,
        AlarmCode::Suspended,
        AlarmCode::LowReservoir,
        AlarmCode::OneHourExpiry,
        AlarmCode::PodDeactivated,
        AlarmCode::UnknownBit2,
        AlarmCode::UnknownBit1,
    ];

    /// The single status-byte bit owned by this code.
    pub fn bit(self) -> u8 {
        self as u8
    }

    pub fn text_key(self) -> &'static TextKey {
        match self {
            Self::PodExpired => &POD_EXPIRED,
            Self::SuspendExpired => &SUSPEND_EXPIRED,
            Self::Suspended => &SUSPENDED,
            Self::LowReservoir => &LOW_RESERVOIR,
            Self::OneHourExpiry => &ONE_HOUR_EXPIRY,
            Self::PodDeactivated => &POD_DEACTIVATED,
            Self::UnknownBit2 => &UNKNOWN_BIT_2,
            Self::UnknownBit1 => &UNKNOWN_BIT_1,
        }
    }

    /// How urgently this condition should be surfaced to the wearer.
    pub fn severity(self) -> Severity {
        match self {
            Self::PodExpired | Self::SuspendExpired => Severity::Critical,
            Self::LowReservoir | Self::OneHourExpiry => Severity::Warning,
            Self::Suspended | Self::PodDeactivated => Severity::Advisory,
            // Unassigned bits still deserve attention when they show up.
            Self::UnknownBit2 | Self::UnknownBit1 => Severity::Warning,
        }
    }

    pub fn display(self, localizer: &impl Localize) -> String {
        localizer.resolve(self.text_key())
    }
}

impl fmt::Display for AlarmCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text_key().default_text)
    }
}
