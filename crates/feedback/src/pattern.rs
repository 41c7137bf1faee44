use serde::Serialize;

/// Alternating buzz/pause durations in milliseconds, starting with a buzz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VibrationPattern(Vec<u32>);

impl VibrationPattern {
    pub const TAP_PULSE_MS: u32 = 35;
    pub const GOAL_BURST_MS: [u32; 3] = [200, 100, 200];

    /// `None` for an empty pattern.
    pub fn new(durations: Vec<u32>) -> Option<Self> {
        (!durations.is_empty()).then_some(Self(durations))
    }

    pub fn single(duration_ms: u32) -> Self {
        Self(vec![duration_ms])
    }

    pub fn tap() -> Self {
        Self::single(Self::TAP_PULSE_MS)
    }

    pub fn goal() -> Self {
        Self(Self::GOAL_BURST_MS.to_vec())
    }

    pub fn durations(&self) -> &[u32] {
        &self.0
    }

    pub fn buzz_count(&self) -> usize {
        self.0.len().div_ceil(2)
    }

    pub fn total_ms(&self) -> u64 {
        self.0.iter().map(|ms| u64::from(*ms)).sum()
    }
}
