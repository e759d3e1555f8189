//! Repcount Web - rep counting and form checking from pose landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The engine itself (`pose`, `geometry`, `exercise`, `session`) is plain
//! Rust with no JS dependency and can be driven directly.

mod bridge;
pub mod config;
pub mod error;
pub mod exercise;
pub mod geometry;
mod logging;
pub mod pose;
pub mod session;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    configure, rep_count, set_countdown_visible, set_orientation, set_paused,
    set_summary_visible, set_tutorial_visible, start_session, stop_session, take_events,
    update_landmarks,
};

pub use config::EngineConfig;
pub use error::EngineError;
pub use exercise::ExerciseId;
pub use pose::{Joint, JointFrame, JointId, Orientation};
pub use session::{EngineEvent, SessionController, SharedController};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

/// Switch console logging to per-frame detail
#[wasm_bindgen]
pub fn set_verbose_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logging::init(level);
}
