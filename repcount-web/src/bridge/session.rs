//! Session lifecycle and UI gate signals from JavaScript
//!
//! One controller lives in thread-local storage (WASM is single-threaded).
//! Events are queued as they happen and drained by JS via `take_events`.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::exercise::ExerciseId;
use crate::session::{EngineEvent, FeedbackSink, SessionController};

thread_local! {
    static CONTROLLER: RefCell<SessionController> = RefCell::new(new_controller(EngineConfig::default()));
    static PENDING_EVENTS: RefCell<Vec<EngineEvent>> = const { RefCell::new(Vec::new()) };
}

/// Sink that queues events until JS drains them
struct EventQueue;

impl FeedbackSink for EventQueue {
    fn on_event(&mut self, event: &EngineEvent) {
        PENDING_EVENTS.with(|queue| queue.borrow_mut().push(event.clone()));
    }
}

fn new_controller(config: EngineConfig) -> SessionController {
    let mut controller = SessionController::new(config);
    controller.add_sink(Box::new(EventQueue));
    controller
}

/// Run `f` against the thread-local controller
pub(crate) fn with_controller<R>(f: impl FnOnce(&mut SessionController) -> R) -> R {
    CONTROLLER.with(|cell| f(&mut *cell.borrow_mut()))
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Start a session for the named exercise
///
/// Unknown names still start a session that accepts frames without
/// counting. Returns false in that case.
#[wasm_bindgen]
pub fn start_session(exercise: &str) -> bool {
    let (id, known) = match exercise.parse::<ExerciseId>() {
        Ok(id) => (id, true),
        Err(err) => {
            log::warn!("{}; tracking without a counting rule", err);
            (ExerciseId::Freestyle, false)
        }
    };
    PENDING_EVENTS.with(|queue| queue.borrow_mut().clear());
    with_controller(|controller| controller.start(id));
    known
}

/// Stop the session and return its summary as JSON (`null` without one)
#[wasm_bindgen]
pub fn stop_session() -> String {
    let summary = with_controller(|controller| controller.stop());
    serde_json::to_string(&summary).unwrap_or_else(|err| {
        log::warn!("Failed to encode session summary: {}", err);
        "null".to_string()
    })
}

/// Apply a JSON configuration; keeps the old one when invalid
#[wasm_bindgen]
pub fn configure(json: &str) -> bool {
    match EngineConfig::from_json(json) {
        Ok(config) => {
            with_controller(|controller| controller.set_config(config));
            true
        }
        Err(err) => {
            log::warn!("{}", err);
            false
        }
    }
}

#[wasm_bindgen]
pub fn set_paused(paused: bool) {
    with_controller(|controller| controller.set_paused(paused));
}

#[wasm_bindgen]
pub fn set_tutorial_visible(visible: bool) {
    with_controller(|controller| controller.set_tutorial_visible(visible));
}

#[wasm_bindgen]
pub fn set_countdown_visible(visible: bool) {
    with_controller(|controller| controller.set_countdown_visible(visible));
}

#[wasm_bindgen]
pub fn set_summary_visible(visible: bool) {
    with_controller(|controller| controller.set_summary_visible(visible));
}

/// Reps counted in the active session
#[wasm_bindgen]
pub fn rep_count() -> u32 {
    with_controller(|controller| controller.reps())
}

/// Drain queued events as a JSON array
#[wasm_bindgen]
pub fn take_events() -> String {
    let events = PENDING_EVENTS.with(|queue| std::mem::take(&mut *queue.borrow_mut()));
    serde_json::to_string(&events).unwrap_or_else(|err| {
        log::warn!("Failed to encode events: {}", err);
        "[]".to_string()
    })
}
