use std::time::{Duration, Instant};

/// Single-slot visual pulse. Restarting replaces the running pulse instead of
/// queueing another one.
#[derive(Debug, Clone)]
pub struct PulseTimer {
    duration: Duration,
    deadline: Option<Instant>,
}

impl PulseTimer {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(180);

    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            deadline: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns `true` when a still-running pulse was replaced.
    pub fn restart(&mut self, now: Instant) -> bool {
        let replaced = self.is_active(now);
        self.deadline = Some(now + self.duration);
        replaced
    }

    /// Returns `true` when a scheduled pulse was dropped.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Clears an expired pulse. Returns `true` exactly once per expiry.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .filter(|deadline| now < *deadline)
            .map(|deadline| deadline - now)
    }

    /// Fraction of the running pulse already elapsed, in `[0.0, 1.0)`.
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let remaining = self.remaining(now)?;
        if self.duration.is_zero() {
            return None;
        }
        Some(1.0 - remaining.as_secs_f32() / self.duration.as_secs_f32())
    }
}

impl Default for PulseTimer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn pulse_expires_after_duration() {
        let start = Instant::now();
        let mut pulse = PulseTimer::default();
        assert!(!pulse.restart(start));
        assert!(pulse.is_active(start + 179 * MS));
        assert!(!pulse.is_active(start + 180 * MS));

        assert!(!pulse.poll(start + 100 * MS));
        assert!(pulse.poll(start + 180 * MS));
        assert!(!pulse.poll(start + 200 * MS));
    }

    #[test]
    fn restart_extends_instead_of_stacking() {
        let start = Instant::now();
        let mut pulse = PulseTimer::default();
        pulse.restart(start);
        assert!(pulse.restart(start + 100 * MS));

        assert!(pulse.is_active(start + 250 * MS));
        assert!(!pulse.poll(start + 250 * MS));
        assert!(pulse.poll(start + 280 * MS));
        assert!(!pulse.is_active(start + 280 * MS));
    }

    #[test]
    fn cancel_clears_pending_pulse() {
        let start = Instant::now();
        let mut pulse = PulseTimer::default();
        assert!(!pulse.cancel());
        pulse.restart(start);
        assert!(pulse.cancel());
        assert!(!pulse.is_active(start));
        assert!(!pulse.poll(start + 500 * MS));
    }

    #[test]
    fn progress_tracks_elapsed_fraction() {
        let start = Instant::now();
        let mut pulse = PulseTimer::new(200 * MS);
        assert_eq!(pulse.progress(start), None);
        pulse.restart(start);
        let half = pulse.progress(start + 100 * MS).expect("running");
        assert!((half - 0.5).abs() < 1e-3);
        assert_eq!(pulse.remaining(start + 50 * MS), Some(150 * MS));
        assert_eq!(pulse.progress(start + 200 * MS), None);
    }
}
