use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum TargetRejection {
    #[error("no target has been configured")]
    Missing,
    #[error("target is empty")]
    Empty,
    #[error("target is not a whole number")]
    NotANumber,
    #[error("target must be greater than zero")]
    NotPositive,
    #[error("target exceeds the maximum of {max}")]
    AboveMaximum { max: u32 },
}

/// Rejections surfaced to callers of [`crate::CounterEngine`].
///
/// None of these are fatal: the engine is left exactly as it was before the
/// rejected command, apart from a rejected `configure` clearing the pending target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    #[error("invalid target: {0}")]
    InvalidTarget(#[from] TargetRejection),
}

impl CounterError {
    pub fn rejection(&self) -> TargetRejection {
        match self {
            Self::InvalidTarget(reason) => *reason,
        }
    }
}
