//! Turns counter events into vibration, audio and pulse feedback.
//!
//! Nothing here can fail the engine: unavailable or failing capabilities are
//! logged at debug level and recorded in the [`DispatchReport`], then dropped.

use std::{sync::Arc, time::Duration};

use counter_core::CounterEvent;
use tracing::debug;

use crate::{
    capability::{AudioCapability, CapabilityError, VibrationCapability},
    clock::{Clock, SystemClock},
    pattern::VibrationPattern,
    pulse::PulseTimer,
    tone::ToneSpec,
};

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackConfig {
    pub pulse_duration: Duration,
    pub tap_vibration: VibrationPattern,
    pub goal_vibration: VibrationPattern,
    /// When off, vibration is skipped even if the host provides it.
    pub vibration_enabled: bool,
    pub tone: ToneSpec,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            pulse_duration: PulseTimer::DEFAULT_DURATION,
            tap_vibration: VibrationPattern::tap(),
            goal_vibration: VibrationPattern::goal(),
            vibration_enabled: true,
            tone: ToneSpec::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    PulseStarted,
    PulseRestarted,
    PulseCancelled,
    TapVibration,
    GoalVibration,
    GoalTone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// No capability was injected for this effect, or it is switched off.
    Skipped,
    Failed(CapabilityError),
}

/// What a dispatch attempted. Diagnostic only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub entries: Vec<(Effect, Delivery)>,
}

impl DispatchReport {
    fn push(&mut self, effect: Effect, delivery: Delivery) {
        self.entries.push((effect, delivery));
    }

    pub fn delivery(&self, effect: Effect) -> Option<&Delivery> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == effect)
            .map(|(_, delivery)| delivery)
    }

    pub fn delivered(&self, effect: Effect) -> bool {
        matches!(self.delivery(effect), Some(Delivery::Delivered))
    }

    pub fn failures(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, delivery)| matches!(delivery, Delivery::Failed(_)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn merge(&mut self, other: DispatchReport) {
        self.entries.extend(other.entries);
    }
}

pub struct FeedbackDispatcher {
    config: FeedbackConfig,
    vibration: Option<Arc<dyn VibrationCapability>>,
    audio: Option<Arc<dyn AudioCapability>>,
    clock: Arc<dyn Clock>,
    pulse: PulseTimer,
}

impl std::fmt::Debug for FeedbackDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackDispatcher")
            .field("config", &self.config)
            .field("vibration", &self.vibration.is_some())
            .field("audio", &self.audio.is_some())
            .field("pulse", &self.pulse)
            .finish()
    }
}

impl FeedbackDispatcher {
    pub fn new(config: FeedbackConfig) -> Self {
        let pulse = PulseTimer::new(config.pulse_duration);
        Self {
            config,
            vibration: None,
            audio: None,
            clock: Arc::new(SystemClock),
            pulse,
        }
    }

    pub fn with_vibration(mut self, vibration: Option<Arc<dyn VibrationCapability>>) -> Self {
        self.vibration = vibration;
        self
    }

    pub fn with_audio(mut self, audio: Option<Arc<dyn AudioCapability>>) -> Self {
        self.audio = audio;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    pub fn pulse_active(&self) -> bool {
        self.pulse.is_active(self.clock.now())
    }

    pub fn pulse_remaining(&self) -> Option<Duration> {
        self.pulse.remaining(self.clock.now())
    }

    pub fn pulse_progress(&self) -> Option<f32> {
        self.pulse.progress(self.clock.now())
    }

    fn vibration(&self) -> Option<&dyn VibrationCapability> {
        self.vibration
            .as_deref()
            .filter(|_| self.config.vibration_enabled)
    }

    /// Clears an expired pulse; `true` when one just ended.
    pub fn poll(&mut self) -> bool {
        self.pulse.poll(self.clock.now())
    }

    pub fn handle_all(&mut self, events: &[CounterEvent]) -> DispatchReport {
        let mut report = DispatchReport::default();
        for event in events {
            report.merge(self.handle(event));
        }
        report
    }

    pub fn handle(&mut self, event: &CounterEvent) -> DispatchReport {
        let mut report = DispatchReport::default();
        match event {
            CounterEvent::TapOccurred { .. } => {
                let effect = if self.pulse.restart(self.clock.now()) {
                    Effect::PulseRestarted
                } else {
                    Effect::PulseStarted
                };
                report.push(effect, Delivery::Delivered);

                let delivery = vibrate(self.vibration(), &self.config.tap_vibration);
                report.push(Effect::TapVibration, delivery);
            }
            CounterEvent::GoalReached { target } => {
                debug!(goal = *target, "dispatching goal feedback");
                let delivery = vibrate(self.vibration(), &self.config.goal_vibration);
                report.push(Effect::GoalVibration, delivery);

                let delivery = play(self.audio.as_deref(), &self.config.tone);
                report.push(Effect::GoalTone, delivery);
            }
            CounterEvent::Reset { .. } => {
                if self.pulse.cancel() {
                    report.push(Effect::PulseCancelled, Delivery::Delivered);
                }
            }
        }
        report
    }
}

fn vibrate(capability: Option<&dyn VibrationCapability>, pattern: &VibrationPattern) -> Delivery {
    match capability {
        None => Delivery::Skipped,
        Some(capability) => settle("vibration", capability.vibrate(pattern)),
    }
}

fn play(capability: Option<&dyn AudioCapability>, tone: &ToneSpec) -> Delivery {
    match capability {
        None => Delivery::Skipped,
        Some(capability) => settle("audio", capability.play_tone(tone)),
    }
}

fn settle(name: &'static str, result: Result<(), CapabilityError>) -> Delivery {
    match result {
        Ok(()) => Delivery::Delivered,
        Err(err) => {
            debug!(capability = name, error = %err, "feedback capability failed; ignoring");
            Delivery::Failed(err)
        }
    }
}

#[cfg(test)]
#[path = "tests/dispatcher_tests.rs"]
mod tests;
