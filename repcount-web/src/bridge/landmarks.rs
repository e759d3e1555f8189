//! Landmark ingestion from JavaScript
//!
//! Receives the pose estimator output once per video frame and feeds it
//! through orientation correction into the active session.

use wasm_bindgen::prelude::*;

use super::session::with_controller;
use crate::pose::Orientation;

/// Called from JavaScript with a flat Float32Array of 57 values
/// (19 joints × 3: normalized x, normalized y, confidence)
///
/// Returns the number of events the frame produced; read them with
/// `take_events`. Malformed buffers are logged and dropped.
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) -> u32 {
    match with_controller(|controller| controller.submit_raw(data)) {
        Ok(events) => events.len() as u32,
        Err(err) => {
            log::warn!("{}", err);
            0
        }
    }
}

/// Set device orientation (0 portrait, 1 upside down, 2 landscape-left, 3 landscape-right)
#[wasm_bindgen]
pub fn set_orientation(code: u8) -> bool {
    match Orientation::from_code(code) {
        Some(orientation) => {
            with_controller(|controller| controller.set_orientation(orientation));
            true
        }
        None => {
            log::warn!("{}", crate::error::EngineError::UnknownOrientation(code));
            false
        }
    }
}
