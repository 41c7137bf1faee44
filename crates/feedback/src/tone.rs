use std::time::Duration;

/// The goal cue handed to the host's audio capability: a sine tone that fades
/// exponentially from `start_gain` to `end_gain` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub frequency_hz: f32,
    pub duration: Duration,
    pub start_gain: f32,
    pub end_gain: f32,
}

impl Default for ToneSpec {
    fn default() -> Self {
        Self {
            frequency_hz: 800.0,
            duration: Duration::from_millis(500),
            start_gain: 0.3,
            end_gain: 0.01,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_a_short_fading_beep() {
        let tone = ToneSpec::default();
        assert_eq!(tone.frequency_hz, 800.0);
        assert_eq!(tone.duration, Duration::from_millis(500));
        assert!(tone.start_gain > tone.end_gain);
    }
}
