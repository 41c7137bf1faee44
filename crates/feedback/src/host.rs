//! Capabilities available on desktop hosts.

use std::{
    io::{self, Write},
    sync::Mutex,
};

use tracing::debug;

use crate::{
    capability::{AudioCapability, CapabilityError},
    tone::ToneSpec,
};

/// Audio cue through the terminal bell. Terminals cannot play an arbitrary
/// tone, so only its occurrence is signalled.
pub struct TerminalBell {
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalBell {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stderr() -> Self {
        Self::new(Box::new(io::stderr()))
    }
}

impl AudioCapability for TerminalBell {
    fn play_tone(&self, tone: &ToneSpec) -> Result<(), CapabilityError> {
        debug!(
            frequency_hz = tone.frequency_hz,
            duration_ms = tone.duration.as_millis() as u64,
            "ringing terminal bell in place of tone"
        );
        let mut out = self
            .out
            .lock()
            .map_err(|_| CapabilityError::Failure("bell writer poisoned".to_string()))?;
        out.write_all(b"\x07")
            .and_then(|()| out.flush())
            .map_err(|err| CapabilityError::Failure(err.to_string()))
    }
}
