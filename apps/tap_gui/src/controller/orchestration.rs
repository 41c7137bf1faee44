//! UI actions are queued and applied in arrival order at the start of a frame.

use counter_core::Command;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use feedback::TapCounter;

use crate::controller::events::{notice_for, NoticeSeverity, StatusNotice};

pub fn queue_command(cmd_tx: &Sender<Command>, cmd: Command, status: &mut Option<StatusNotice>) {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui command"),
        Err(TrySendError::Full(_)) => {
            *status = Some(StatusNotice::new(
                NoticeSeverity::Warning,
                "Too many taps queued; slow down a little",
            ));
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(command = cmd_name, "ui command queue disconnected");
        }
    }
}

/// Applies every queued command; returns the last notice produced, if any.
pub fn drain_commands(cmd_rx: &Receiver<Command>, counter: &mut TapCounter) -> Option<StatusNotice> {
    let mut notice = None;
    for cmd in cmd_rx.try_iter() {
        let outcome = counter.apply(cmd);
        if let Some(next) = notice_for(&outcome) {
            notice = Some(next);
        }
    }
    notice
}
