use counter_core::{
    Command, CommandOutcome, CounterEngine, CounterError, CounterEvent, SessionSnapshot, Target,
    TargetInput, Transition,
};
use tracing::trace;

use crate::dispatcher::{DispatchReport, FeedbackDispatcher};

/// One tap counter widget: the engine plus the feedback it drives.
///
/// Commands are applied one at a time; the events each produces are handed to
/// the dispatcher before the call returns.
#[derive(Debug)]
pub struct TapCounter {
    engine: CounterEngine,
    feedback: FeedbackDispatcher,
}

impl TapCounter {
    pub fn new(engine: CounterEngine, feedback: FeedbackDispatcher) -> Self {
        Self { engine, feedback }
    }

    pub fn engine(&self) -> &CounterEngine {
        &self.engine
    }

    pub fn feedback(&self) -> &FeedbackDispatcher {
        &self.feedback
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.engine.snapshot()
    }

    pub fn pulse_active(&self) -> bool {
        self.feedback.pulse_active()
    }

    /// Advance the pulse timer; `true` when a pulse just ended.
    pub fn poll(&mut self) -> bool {
        self.feedback.poll()
    }

    pub fn configure(&mut self, input: impl Into<TargetInput>) -> Result<Target, CounterError> {
        self.engine.configure(input)
    }

    pub fn start(&mut self) -> Result<Transition, CounterError> {
        self.engine.start()
    }

    pub fn tap(&mut self) -> Transition {
        let transition = self.engine.tap();
        self.dispatch(transition.events());
        transition
    }

    pub fn reset(&mut self) -> Transition {
        let transition = self.engine.reset();
        self.dispatch(transition.events());
        transition
    }

    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        let outcome = self.engine.apply(command);
        self.dispatch(outcome.events());
        outcome
    }

    fn dispatch(&mut self, events: &[CounterEvent]) -> DispatchReport {
        let report = self.feedback.handle_all(events);
        if !report.is_empty() {
            trace!(?report, "feedback dispatched");
        }
        report
    }
}
