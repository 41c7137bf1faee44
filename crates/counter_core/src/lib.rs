//! Counting state machine for the tap counter.
//!
//! [`CounterEngine`] owns the single [`Session`] and is the only way to change it.
//! Every command is applied synchronously and reports the [`CounterEvent`]s it
//! produced so downstream feedback can react without touching the session.

pub mod domain;
pub mod engine;
pub mod error;
pub mod protocol;
pub mod target;

pub use domain::{Session, SessionSnapshot, SessionState, Target};
pub use engine::{CommandOutcome, CounterEngine, Transition};
pub use error::{CounterError, TargetRejection};
pub use protocol::{Command, CounterEvent};
pub use target::{TargetInput, TargetPolicy};
