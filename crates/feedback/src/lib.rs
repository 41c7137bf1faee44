//! Best-effort feedback for tap counter events, plus the [`TapCounter`] facade
//! that feeds engine events into it.

pub mod capability;
pub mod clock;
pub mod config;
pub mod counter;
pub mod dispatcher;
pub mod host;
pub mod pattern;
pub mod pulse;
pub mod tone;

pub use capability::{AudioCapability, CapabilityError, VibrationCapability};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{load_settings, load_settings_from, Settings, SettingsError};
pub use counter::TapCounter;
pub use dispatcher::{Delivery, DispatchReport, Effect, FeedbackConfig, FeedbackDispatcher};
pub use host::TerminalBell;
pub use pattern::VibrationPattern;
pub use pulse::PulseTimer;
pub use tone::ToneSpec;
