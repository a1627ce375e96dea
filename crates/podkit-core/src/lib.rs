//! Domain model for decoding the alarm status byte reported by an insulin
//! delivery pod.

pub mod alarm;
pub mod events;
pub mod text;
