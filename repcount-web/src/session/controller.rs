//! Session controller - input gating and event forwarding
//!
//! Frames are dropped while any overlay is visible or the session is
//! paused, so UI transitions never count phantom reps.

use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::events::{EndReason, EngineEvent, FeedbackSink, SessionSummary};
use super::state::SessionState;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::exercise::ExerciseId;
use crate::pose::{decode_landmarks, JointFrame, Orientation};

/// UI signals that block frame evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gate {
    pub paused: bool,
    pub tutorial_visible: bool,
    pub countdown_visible: bool,
    pub summary_visible: bool,
}

impl Gate {
    /// True when frames may reach the session
    pub fn is_open(&self) -> bool {
        !(self.paused || self.tutorial_visible || self.countdown_visible || self.summary_visible)
    }
}

/// Owns at most one active session and everything that feeds it
pub struct SessionController {
    config: EngineConfig,
    gate: Gate,
    orientation: Orientation,
    session: Option<SessionState>,
    sinks: Vec<Box<dyn FeedbackSink>>,
}

impl SessionController {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            gate: Gate::default(),
            orientation: Orientation::default(),
            session: None,
            sinks: Vec::new(),
        }
    }

    pub fn add_sink(&mut self, sink: Box<dyn FeedbackSink>) {
        self.sinks.push(sink);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the configuration
    ///
    /// A running session keeps the configuration it started with. The new
    /// one applies from the next `start`, except `viewport` and
    /// `min_confidence`, which decode raw input and apply to the next frame.
    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    /// Start a new session, discarding any current one
    pub fn start(&mut self, exercise: ExerciseId) {
        if let Some(previous) = self.session.take() {
            debug!("discarding session for {}", previous.exercise());
        }
        self.session = Some(SessionState::new(exercise, &self.config));
    }

    /// End the current session
    ///
    /// Sinks hear `SessionEnded(UserStopped)` unless the session already
    /// ended on its own.
    pub fn stop(&mut self) -> Option<SessionSummary> {
        let session = self.session.take()?;
        let already_ended = session.is_ended();
        let summary = session.finish();
        if !already_ended {
            self.forward(&[EngineEvent::SessionEnded {
                reason: EndReason::UserStopped,
            }]);
        }
        Some(summary)
    }

    /// Evaluate one corrected frame against the active session
    pub fn submit(&mut self, frame: &JointFrame) -> Vec<EngineEvent> {
        if !self.gate.is_open() {
            debug!("gate closed, dropping frame ({:?})", self.gate);
            return Vec::new();
        }
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };

        let events = session.evaluate(frame);
        self.forward(&events);
        events
    }

    /// Decode a raw landmark buffer with the current orientation, then submit it
    pub fn submit_raw(&mut self, data: &[f32]) -> Result<Vec<EngineEvent>> {
        // Skip decoding work while gated
        if !self.gate.is_open() {
            return Ok(Vec::new());
        }
        let frame = decode_landmarks(
            data,
            self.orientation,
            self.config.viewport,
            self.config.min_confidence,
        )?;
        Ok(self.submit(&frame))
    }

    fn forward(&mut self, events: &[EngineEvent]) {
        for event in events {
            if let EngineEvent::SessionEnded { reason } = event {
                info!("session ended: {:?}", reason);
            }
            for sink in self.sinks.iter_mut() {
                sink.on_event(event);
            }
        }
    }

    pub fn gate(&self) -> Gate {
        self.gate
    }

    pub fn set_gate(&mut self, gate: Gate) {
        self.gate = gate;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.gate.paused = paused;
    }

    pub fn set_tutorial_visible(&mut self, visible: bool) {
        self.gate.tutorial_visible = visible;
    }

    pub fn set_countdown_visible(&mut self, visible: bool) {
        self.gate.countdown_visible = visible;
    }

    pub fn set_summary_visible(&mut self, visible: bool) {
        self.gate.summary_visible = visible;
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if orientation != self.orientation {
            debug!("orientation {:?} -> {:?}", self.orientation, orientation);
        }
        self.orientation = orientation;
    }

    pub fn session(&self) -> Option<&SessionState> {
        self.session.as_ref()
    }

    /// Reps in the active session, 0 without one
    pub fn reps(&self) -> u32 {
        self.session.as_ref().map_or(0, SessionState::reps)
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Clonable handle that serializes evaluation across producer threads
///
/// Only one frame is evaluated at a time; stopping a session waits for any
/// in-flight frame to finish, so no partial state is ever observed.
#[derive(Clone, Default)]
pub struct SharedController {
    inner: Arc<Mutex<SessionController>>,
}

impl SharedController {
    pub fn new(controller: SessionController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Run `f` with exclusive access to the controller
    pub fn with<R>(&self, f: impl FnOnce(&mut SessionController) -> R) -> R {
        // Sinks run after session state is committed, so a poisoned lock
        // still guards a consistent controller.
        let mut guard = self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("controller lock poisoned, recovering");
            PoisonError::into_inner(poisoned)
        });
        f(&mut *guard)
    }

    pub fn submit(&self, frame: &JointFrame) -> Vec<EngineEvent> {
        self.with(|controller| controller.submit(frame))
    }

    pub fn start(&self, exercise: ExerciseId) {
        self.with(|controller| controller.start(exercise));
    }

    pub fn stop(&self) -> Option<SessionSummary> {
        self.with(SessionController::stop)
    }

    pub fn reps(&self) -> u32 {
        self.with(|controller| controller.reps())
    }
}
