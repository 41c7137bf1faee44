//! Controller layer: queued UI commands and the notices they produce.

pub mod events;
pub mod orchestration;
