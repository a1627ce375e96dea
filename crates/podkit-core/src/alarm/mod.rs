pub mod code;
pub mod set;
pub mod severity;

pub use code::AlarmCode;
pub use set::AlarmSet;
pub use severity::Severity;
