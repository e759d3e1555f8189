//! Per-session exercise state
//!
//! Owns everything one session mutates: the exercise, its tracker (rep
//! counter or plank monitor), and the last evaluated pose. Each consumed
//! frame mutates it exactly once. The configuration is fixed when the
//! session starts.

use log::info;

use super::events::{EndReason, EngineEvent, SessionSummary};
use crate::config::EngineConfig;
use crate::exercise::{rule_for, ExerciseId, Phase, PlankMonitor, PlankSignal, PlankStatus, RepCounter};
use crate::pose::JointFrame;

/// What a session feeds frames into
enum Tracker {
    Reps(RepCounter),
    Plank(PlankMonitor),
    /// No rule for this exercise; frames are accepted and ignored
    Passive,
}

pub struct SessionState {
    exercise: ExerciseId,
    tracker: Tracker,
    config: EngineConfig,
    ended: Option<EndReason>,
    /// Kept for rules that compare against the previous pose
    last_pose: Option<JointFrame>,
    frames: u64,
}

impl SessionState {
    pub fn new(exercise: ExerciseId, config: &EngineConfig) -> Self {
        let tracker = match (exercise, rule_for(exercise)) {
            (_, Some(rule)) => Tracker::Reps(RepCounter::new(rule)),
            (ExerciseId::Planks, None) => Tracker::Plank(PlankMonitor::new(config.plank)),
            (_, None) => Tracker::Passive,
        };
        info!("session started: {}", exercise);

        Self {
            exercise,
            tracker,
            config: config.clone(),
            ended: None,
            last_pose: None,
            frames: 0,
        }
    }

    /// Evaluate one frame and return the events it produced
    ///
    /// An ended session accepts no further frames.
    pub fn evaluate(&mut self, frame: &JointFrame) -> Vec<EngineEvent> {
        if self.ended.is_some() {
            return Vec::new();
        }

        let mut events = Vec::new();
        match &mut self.tracker {
            Tracker::Reps(counter) => {
                if let Some(new_count) = counter.update(frame, &self.config) {
                    events.push(EngineEvent::RepIncremented {
                        new_count,
                        announce: self.config.announce_reps,
                    });
                }
            }
            Tracker::Plank(monitor) => match monitor.update(frame) {
                Some(PlankSignal::Warning) => events.push(EngineEvent::FormWarning {
                    message: self.config.plank_warning_message.clone(),
                }),
                Some(PlankSignal::Failure) => {
                    self.ended = Some(EndReason::FormFailure);
                    events.push(EngineEvent::SessionEnded {
                        reason: EndReason::FormFailure,
                    });
                }
                None => {}
            },
            Tracker::Passive => {}
        }

        self.last_pose = Some(frame.clone());
        self.frames += 1;
        events
    }

    /// Close the session and report its totals
    pub fn finish(self) -> SessionSummary {
        let ended_by = self.ended.unwrap_or(EndReason::UserStopped);
        info!(
            "session finished: {} with {} reps after {} frames ({:?})",
            self.exercise,
            self.reps(),
            self.frames,
            ended_by
        );
        SessionSummary {
            exercise: self.exercise,
            reps: self.reps(),
            ended_by,
        }
    }

    pub fn exercise(&self) -> ExerciseId {
        self.exercise
    }

    pub fn reps(&self) -> u32 {
        match &self.tracker {
            Tracker::Reps(counter) => counter.reps(),
            _ => 0,
        }
    }

    /// Current rep phase; `None` for exercises that are not counted
    pub fn phase(&self) -> Option<Phase> {
        match &self.tracker {
            Tracker::Reps(counter) => Some(counter.phase()),
            _ => None,
        }
    }

    pub fn plank_status(&self) -> Option<PlankStatus> {
        match &self.tracker {
            Tracker::Plank(monitor) => Some(monitor.status()),
            _ => None,
        }
    }

    /// Configuration captured when the session started
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.ended
    }

    pub fn is_ended(&self) -> bool {
        self.ended.is_some()
    }

    pub fn last_pose(&self) -> Option<&JointFrame> {
        self.last_pose.as_ref()
    }

    /// Frames evaluated so far (gated frames are not counted)
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
