//! Host-provided feedback mechanisms. Each one may be missing or fail at runtime.

use thiserror::Error;

use crate::{pattern::VibrationPattern, tone::ToneSpec};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("capability unavailable on this host")]
    Unavailable,
    #[error("capability failed: {0}")]
    Failure(String),
}

pub trait VibrationCapability: Send + Sync {
    fn vibrate(&self, pattern: &VibrationPattern) -> Result<(), CapabilityError>;
}

pub trait AudioCapability: Send + Sync {
    fn play_tone(&self, tone: &ToneSpec) -> Result<(), CapabilityError>;
}
