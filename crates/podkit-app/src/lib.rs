pub mod alarm_monitor;
pub mod error;

pub use alarm_monitor::AlarmMonitor;
