use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::TargetRejection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Idle,
    Active,
    Completed,
}

impl SessionState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

/// A goal tap count. Always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Target(NonZeroU32);

impl Target {
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for Target {
    type Error = TargetRejection;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(TargetRejection::NotPositive)
    }
}

impl From<Target> for u32 {
    fn from(value: Target) -> Self {
        value.get()
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The current counting attempt.
///
/// Only [`crate::CounterEngine`] mutates a session; everyone else reads it
/// through a [`SessionSnapshot`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub(crate) state: SessionState,
    pub(crate) target: Option<Target>,
    pub(crate) count: u32,
}

impl Session {
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Target the session was started with. `None` while idle.
    pub fn target(&self) -> Option<Target> {
        self.target
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn invariants_hold(&self) -> bool {
        match self.state {
            SessionState::Idle => self.count == 0,
            SessionState::Active => self
                .target
                .is_some_and(|target| self.count < target.get()),
            SessionState::Completed => self
                .target
                .is_some_and(|target| self.count == target.get()),
        }
    }
}

/// Read-only view handed to presentation and feedback layers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    pub remaining: u32,
    /// `100 * count / target` while Active and also once Completed, so a
    /// finished session keeps a full bar until it is reset. Zero when Idle.
    pub progress_percent: f32,
}

impl SessionSnapshot {
    pub(crate) fn capture(session: &Session, pending: Option<Target>) -> Self {
        let target = session.target.or(pending).map(Target::get);
        let remaining = target.unwrap_or(0).saturating_sub(session.count);
        // Completed keeps reporting its full bar; idle has nothing to show.
        let progress_percent = match (session.state, session.target) {
            (SessionState::Active | SessionState::Completed, Some(target)) => {
                (f64::from(session.count) * 100.0 / f64::from(target.get())) as f32
            }
            _ => 0.0,
        };

        Self {
            state: session.state,
            count: session.count,
            target,
            remaining,
            progress_percent,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    pub fn headline(&self) -> String {
        match (self.state, self.target) {
            (SessionState::Active, _) => {
                let noun = if self.remaining == 1 { "tap" } else { "taps" };
                format!("{} {noun} to go!", self.remaining)
            }
            (SessionState::Completed, Some(target)) => {
                format!("You reached your goal of {target} taps.")
            }
            _ => "Set your goal and start tapping!".to_string(),
        }
    }

    pub fn reset_label(&self) -> &'static str {
        if self.is_completed() {
            "New Challenge"
        } else {
            "Reset"
        }
    }
}
