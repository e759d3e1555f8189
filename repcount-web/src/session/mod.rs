//! Session module - per-session state, gating and event delivery
//!
//! Re-exports only. All logic in submodules.

mod controller;
mod events;
mod state;

pub use controller::{Gate, SessionController, SharedController};
pub use events::{EndReason, EngineEvent, FeedbackSink, SessionSummary};
pub use state::SessionState;
