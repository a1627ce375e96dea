use std::fmt;

use serde::{Deserialize, Serialize};

use super::code::AlarmCode;
use crate::text::{EnglishText, Localize, TextKey};

const NO_ALARMS: TextKey = TextKey::new(
    "no-alarms",
    "No alarms",
    "Pod alarm state when no alarms are activated",
);

/// The decoded alarm state of one status byte.
///
/// Every byte value is valid; unassigned bits decode like any other. The set
/// is immutable once built, and two sets built from the same byte are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlarmSet {
    raw: u8,
}

impl AlarmSet {
    /// The empty state, equal to `from_raw(0)`.
    pub const NONE: AlarmSet = AlarmSet { raw: 0 };

    /// Decode a status byte. Total over all 256 values; a code is contained
    /// iff its bit is set in `raw`.
    pub fn from_raw(raw: u8) -> Self {
        Self { raw }
    }

    /// Rebuild the status byte by OR-ing the bits of every contained code.
    /// Inverse of [`from_raw`](Self::from_raw) for every input.
    pub fn to_raw(self) -> u8 {
        self.iter().fold(0, |acc, code| acc | code.bit())
    }

    pub fn none() -> Self {
        Self::NONE
    }

    pub fn is_empty(self) -> bool {
        self.raw == 0
    }

    pub fn len(self) -> usize {
        self.raw.count_ones() as usize
    }

    pub fn contains(self, code: AlarmCode) -> bool {
        self.raw & code.bit() != 0
    }

    /// Contained codes in [`AlarmCode::ALL`] order, highest bit first,
    /// independent of which bits are set. Re-iterating yields the same
    /// sequence.
    pub fn iter(self) -> Iter {
        Iter {
            raw: self.raw,
            index: 0,
        }
    }

    /// Localized rendering: the "no alarms" text when empty, otherwise the
    /// contained codes' labels joined with ", " in iteration order.
    pub fn display(self, localizer: &impl Localize) -> String {
        if self.is_empty() {
            localizer.resolve(&NO_ALARMS)
        } else {
            self.iter()
                .map(|code| code.display(localizer))
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

impl fmt::Display for AlarmSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(&EnglishText))
    }
}

impl IntoIterator for AlarmSet {
    type Item = AlarmCode;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

pub struct Iter {
    raw: u8,
    index: usize,
}

impl Iterator for Iter {
    type Item = AlarmCode;

    fn next(&mut self) -> Option<AlarmCode> {
        while self.index < AlarmCode::ALL.len() {
            let code = AlarmCode::ALL[self.index];
            self.index += 1;
            if self.raw & code.bit() != 0 {
                return Some(code);
            }
        }
        None
    }
}
