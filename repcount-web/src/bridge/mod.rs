//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod session;


pub use landmarks::{set_orientation, update_landmarks};
pub use session::{
    configure, rep_count, set_countdown_visible, set_paused, set_summary_visible,
    set_tutorial_visible, start_session, stop_session, take_events,
};
