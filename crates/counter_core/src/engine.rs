//! The counting state machine.

use tracing::{debug, info};

use crate::{
    domain::{Session, SessionSnapshot, SessionState, Target},
    error::{CounterError, TargetRejection},
    protocol::{Command, CounterEvent},
    target::{TargetInput, TargetPolicy},
};

/// Result of a command that either changes the session or is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Applied(Vec<CounterEvent>),
    Noop,
}

impl Transition {
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::Noop)
    }

    pub fn events(&self) -> &[CounterEvent] {
        match self {
            Self::Applied(events) => events,
            Self::Noop => &[],
        }
    }
}

/// Uniform result for [`CounterEngine::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied(Vec<CounterEvent>),
    Noop,
    Rejected(CounterError),
}

impl CommandOutcome {
    pub fn events(&self) -> &[CounterEvent] {
        match self {
            Self::Applied(events) => events,
            Self::Noop | Self::Rejected(_) => &[],
        }
    }

    pub fn into_events(self) -> Vec<CounterEvent> {
        match self {
            Self::Applied(events) => events,
            Self::Noop | Self::Rejected(_) => Vec::new(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl From<Transition> for CommandOutcome {
    fn from(value: Transition) -> Self {
        match value {
            Transition::Applied(events) => Self::Applied(events),
            Transition::Noop => Self::Noop,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CounterEngine {
    session: Session,
    pending: Option<Target>,
    policy: TargetPolicy,
    history: Vec<Command>,
}

impl CounterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: TargetPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Build a fresh engine and apply `commands` in order.
    pub fn replay<I>(policy: TargetPolicy, commands: I) -> (Self, Vec<CounterEvent>)
    where
        I: IntoIterator<Item = Command>,
    {
        let mut engine = Self::with_policy(policy);
        let mut events = Vec::new();
        for command in commands {
            events.extend(engine.apply(command).into_events());
        }
        (engine, events)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state
    }

    pub fn pending_target(&self) -> Option<Target> {
        self.pending
    }

    pub fn policy(&self) -> TargetPolicy {
        self.policy
    }

    /// Every command received so far, in arrival order.
    pub fn history(&self) -> &[Command] {
        &self.history
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.session, self.pending)
    }

    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::Configure { input } => match self.configure(input) {
                Ok(_) => CommandOutcome::Applied(Vec::new()),
                Err(err) => CommandOutcome::Rejected(err),
            },
            Command::Start => match self.start() {
                Ok(transition) => transition.into(),
                Err(err) => CommandOutcome::Rejected(err),
            },
            Command::Tap => self.tap().into(),
            Command::Reset => self.reset().into(),
        }
    }

    /// Record the target for the next [`start`](Self::start).
    ///
    /// A rejected input clears any previously pending target. A running session
    /// keeps the target it was started with.
    pub fn configure(&mut self, input: impl Into<TargetInput>) -> Result<Target, CounterError> {
        let input = input.into();
        self.history.push(Command::Configure {
            input: input.clone(),
        });

        match self.policy.parse(&input) {
            Ok(target) => {
                debug!(%target, "target configured");
                self.pending = Some(target);
                Ok(target)
            }
            Err(reason) => {
                debug!(%input, %reason, "target rejected");
                self.pending = None;
                Err(reason.into())
            }
        }
    }

    /// Begin a session with the pending target.
    ///
    /// Only an idle session can start. Active and completed sessions ignore the
    /// command until [`reset`](Self::reset) returns them to idle.
    pub fn start(&mut self) -> Result<Transition, CounterError> {
        self.history.push(Command::Start);

        if self.session.state != SessionState::Idle {
            debug!(state = self.session.state.label(), "start ignored");
            return Ok(Transition::Noop);
        }
        let target = self
            .pending
            .ok_or(CounterError::InvalidTarget(TargetRejection::Missing))?;

        self.session = Session {
            state: SessionState::Active,
            target: Some(target),
            count: 0,
        };
        info!(%target, "session started");
        debug_assert!(self.session.invariants_hold());
        Ok(Transition::Applied(Vec::new()))
    }

    pub fn tap(&mut self) -> Transition {
        self.history.push(Command::Tap);

        let Some(target) = self.session.target.filter(|_| self.session.state == SessionState::Active)
        else {
            debug!(state = self.session.state.label(), "tap ignored");
            return Transition::Noop;
        };

        // Active always has count < target, so this cannot overshoot.
        self.session.count += 1;
        let count = self.session.count;
        let mut events = vec![CounterEvent::TapOccurred {
            count,
            target: target.get(),
        }];

        if count == target.get() {
            self.session.state = SessionState::Completed;
            events.push(CounterEvent::GoalReached {
                target: target.get(),
            });
            info!(%target, "goal reached");
        }

        debug_assert!(self.session.invariants_hold());
        Transition::Applied(events)
    }

    pub fn reset(&mut self) -> Transition {
        self.history.push(Command::Reset);

        if self.session.state == SessionState::Idle {
            debug!("reset ignored while idle");
            return Transition::Noop;
        }

        let previous_count = self.session.count;
        self.session = Session::default();
        info!(previous_count, "session reset");
        Transition::Applied(vec![CounterEvent::Reset { previous_count }])
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
