//! Status notices shown above the counter.

use counter_core::{CommandOutcome, CounterEvent, TargetRejection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNotice {
    pub severity: NoticeSeverity,
    pub message: String,
}

impl StatusNotice {
    pub fn new(severity: NoticeSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Notice worth showing for `outcome`, if any. Taps and no-ops stay silent.
pub fn notice_for(outcome: &CommandOutcome) -> Option<StatusNotice> {
    match outcome {
        CommandOutcome::Rejected(err) => Some(StatusNotice::new(
            NoticeSeverity::Warning,
            rejection_hint(err.rejection()),
        )),
        CommandOutcome::Applied(events) => events.iter().find_map(|event| match event {
            CounterEvent::GoalReached { target } => Some(StatusNotice::new(
                NoticeSeverity::Success,
                format!("Well Done! You reached your goal of {target} taps."),
            )),
            _ => None,
        }),
        CommandOutcome::Noop => None,
    }
}

fn rejection_hint(reason: TargetRejection) -> String {
    match reason {
        TargetRejection::Missing | TargetRejection::Empty => "Enter a target first.".to_string(),
        TargetRejection::NotANumber => "The target must be a whole number.".to_string(),
        TargetRejection::NotPositive => "The target must be at least 1.".to_string(),
        TargetRejection::AboveMaximum { max } => format!("The target can be at most {max}."),
    }
}
