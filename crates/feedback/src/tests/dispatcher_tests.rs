use std::sync::Mutex;

use super::*;
use crate::clock::ManualClock;

#[derive(Default)]
struct RecordingVibration {
    patterns: Mutex<Vec<Vec<u32>>>,
}

impl RecordingVibration {
    fn recorded(&self) -> Vec<Vec<u32>> {
        self.patterns.lock().expect("patterns").clone()
    }
}

impl VibrationCapability for RecordingVibration {
    fn vibrate(&self, pattern: &VibrationPattern) -> Result<(), CapabilityError> {
        self.patterns
            .lock()
            .expect("patterns")
            .push(pattern.durations().to_vec());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingAudio {
    tones: Mutex<Vec<ToneSpec>>,
}

impl AudioCapability for RecordingAudio {
    fn play_tone(&self, tone: &ToneSpec) -> Result<(), CapabilityError> {
        self.tones.lock().expect("tones").push(*tone);
        Ok(())
    }
}

struct FailingAudio;

impl AudioCapability for FailingAudio {
    fn play_tone(&self, _tone: &ToneSpec) -> Result<(), CapabilityError> {
        Err(CapabilityError::Failure("audio context refused to start".to_string()))
    }
}

struct MissingVibration;

impl VibrationCapability for MissingVibration {
    fn vibrate(&self, _pattern: &VibrationPattern) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unavailable)
    }
}

const TAP: CounterEvent = CounterEvent::TapOccurred {
    count: 1,
    target: 3,
};
const GOAL: CounterEvent = CounterEvent::GoalReached { target: 3 };
const RESET: CounterEvent = CounterEvent::Reset { previous_count: 1 };

fn dispatcher_with_clock() -> (FeedbackDispatcher, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let dispatcher = FeedbackDispatcher::new(FeedbackConfig::default()).with_clock(clock.clone());
    (dispatcher, clock)
}

#[test]
fn tap_starts_pulse_and_short_vibration() {
    let vibration = Arc::new(RecordingVibration::default());
    let (dispatcher, _clock) = dispatcher_with_clock();
    let mut dispatcher = dispatcher.with_vibration(Some(vibration.clone()));

    let report = dispatcher.handle(&TAP);
    assert!(report.delivered(Effect::PulseStarted));
    assert!(report.delivered(Effect::TapVibration));
    assert!(dispatcher.pulse_active());
    assert_eq!(vibration.recorded(), vec![vec![VibrationPattern::TAP_PULSE_MS]]);
}

#[test]
fn pulse_clears_after_its_duration() {
    let (mut dispatcher, clock) = dispatcher_with_clock();
    dispatcher.handle(&TAP);

    clock.advance(Duration::from_millis(179));
    assert!(dispatcher.pulse_active());
    assert!(!dispatcher.poll());

    clock.advance(Duration::from_millis(1));
    assert!(!dispatcher.pulse_active());
    assert!(dispatcher.poll());
    assert!(!dispatcher.poll());
}

#[test]
fn rapid_taps_restart_a_single_pulse() {
    let (mut dispatcher, clock) = dispatcher_with_clock();
    dispatcher.handle(&TAP);
    clock.advance(Duration::from_millis(120));

    let report = dispatcher.handle(&TAP);
    assert!(report.delivered(Effect::PulseRestarted));

    clock.advance(Duration::from_millis(120));
    assert!(dispatcher.pulse_active(), "restart must extend the pulse");
    assert_eq!(
        dispatcher.pulse_remaining(),
        Some(Duration::from_millis(60))
    );

    clock.advance(Duration::from_millis(60));
    assert!(dispatcher.poll());
    assert!(!dispatcher.poll(), "only one pulse is ever pending");
}

#[test]
fn goal_plays_burst_pattern_and_tone() {
    let vibration = Arc::new(RecordingVibration::default());
    let audio = Arc::new(RecordingAudio::default());
    let mut dispatcher = FeedbackDispatcher::new(FeedbackConfig::default())
        .with_vibration(Some(vibration.clone()))
        .with_audio(Some(audio.clone()));

    let report = dispatcher.handle_all(&[
        CounterEvent::TapOccurred {
            count: 3,
            target: 3,
        },
        GOAL,
    ]);
    assert!(report.delivered(Effect::TapVibration));
    assert!(report.delivered(Effect::GoalVibration));
    assert!(report.delivered(Effect::GoalTone));
    assert_eq!(
        vibration.recorded(),
        vec![vec![VibrationPattern::TAP_PULSE_MS], vec![200, 100, 200]]
    );
    let tones = audio.tones.lock().expect("tones");
    assert_eq!(tones.len(), 1);
    assert_eq!(tones[0].frequency_hz, 800.0);
}

#[test]
fn missing_capabilities_are_skipped() {
    let mut dispatcher = FeedbackDispatcher::new(FeedbackConfig::default());
    let report = dispatcher.handle(&GOAL);
    assert_eq!(report.delivery(Effect::GoalVibration), Some(&Delivery::Skipped));
    assert_eq!(report.delivery(Effect::GoalTone), Some(&Delivery::Skipped));
    assert_eq!(report.failures(), 0);
}

#[test]
fn disabled_vibration_is_skipped_but_pulse_and_tone_still_run() {
    let vibration = Arc::new(RecordingVibration::default());
    let audio = Arc::new(RecordingAudio::default());
    let config = FeedbackConfig {
        vibration_enabled: false,
        ..FeedbackConfig::default()
    };
    let mut dispatcher = FeedbackDispatcher::new(config)
        .with_vibration(Some(vibration.clone()))
        .with_audio(Some(audio.clone()));

    let report = dispatcher.handle_all(&[TAP, GOAL]);
    assert!(report.delivered(Effect::PulseStarted));
    assert_eq!(report.delivery(Effect::TapVibration), Some(&Delivery::Skipped));
    assert_eq!(report.delivery(Effect::GoalVibration), Some(&Delivery::Skipped));
    assert!(report.delivered(Effect::GoalTone));
    assert!(vibration.recorded().is_empty());
}

#[test]
fn failing_capabilities_are_swallowed() {
    let mut dispatcher = FeedbackDispatcher::new(FeedbackConfig::default())
        .with_vibration(Some(Arc::new(MissingVibration)))
        .with_audio(Some(Arc::new(FailingAudio)));

    let report = dispatcher.handle_all(&[TAP, GOAL]);
    assert_eq!(report.failures(), 3);
    assert_eq!(
        report.delivery(Effect::GoalVibration),
        Some(&Delivery::Failed(CapabilityError::Unavailable))
    );
    assert!(dispatcher.pulse_active(), "pulse does not depend on capabilities");
}

#[test]
fn reset_cancels_running_pulse_only() {
    let vibration = Arc::new(RecordingVibration::default());
    let (dispatcher, clock) = dispatcher_with_clock();
    let mut dispatcher = dispatcher.with_vibration(Some(vibration.clone()));
    dispatcher.handle(&TAP);

    let report = dispatcher.handle(&RESET);
    assert_eq!(
        report.entries,
        vec![(Effect::PulseCancelled, Delivery::Delivered)]
    );
    assert!(!dispatcher.pulse_active());
    clock.advance(Duration::from_secs(1));
    assert!(!dispatcher.poll());
    assert_eq!(vibration.recorded().len(), 1);

    assert!(dispatcher.handle(&RESET).is_empty());
}
