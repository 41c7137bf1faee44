use serde::{Deserialize, Serialize};

use crate::target::TargetInput;

/// User commands accepted by [`crate::CounterEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Command {
    Configure { input: TargetInput },
    Start,
    Tap,
    Reset,
}

impl Command {
    pub fn configure(input: impl Into<TargetInput>) -> Self {
        Self::Configure {
            input: input.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Configure { .. } => "configure",
            Self::Start => "start",
            Self::Tap => "tap",
            Self::Reset => "reset",
        }
    }
}

/// Notifications describing a state change that has just been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum CounterEvent {
    TapOccurred { count: u32, target: u32 },
    GoalReached { target: u32 },
    Reset { previous_count: u32 },
}

impl CounterEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TapOccurred { .. } => "tap_occurred",
            Self::GoalReached { .. } => "goal_reached",
            Self::Reset { .. } => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_use_tagged_json() {
        assert_eq!(
            serde_json::to_string(&Command::Tap).expect("serialize"),
            r#"{"type":"tap"}"#
        );
        let cmd: Command =
            serde_json::from_str(r#"{"type":"configure","payload":{"input":"12"}}"#)
                .expect("deserialize");
        assert_eq!(cmd, Command::configure("12"));
        let cmd: Command = serde_json::from_str(r#"{"type":"start"}"#).expect("deserialize");
        assert_eq!(cmd, Command::Start);
    }

    #[test]
    fn events_carry_their_payload() {
        let json = serde_json::to_string(&CounterEvent::TapOccurred {
            count: 2,
            target: 3,
        })
        .expect("serialize");
        assert_eq!(
            json,
            r#"{"type":"tap_occurred","payload":{"count":2,"target":3}}"#
        );
    }
}
