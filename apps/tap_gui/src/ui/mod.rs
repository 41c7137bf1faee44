//! UI layer: the single tap counter card.

pub mod app;

pub use app::TapCounterApp;
