//! Events emitted by the engine and the sinks that receive them

use serde::{Deserialize, Serialize};

use crate::exercise::ExerciseId;

/// Why a session ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EndReason {
    FormFailure,
    UserStopped,
}

/// Discrete output of one evaluated frame
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EngineEvent {
    RepIncremented {
        new_count: u32,
        /// Speak the number aloud
        announce: bool,
    },
    FormWarning {
        message: String,
    },
    SessionEnded {
        reason: EndReason,
    },
}

impl EngineEvent {
    /// Phrase for the text-to-speech collaborator, if this event has one
    pub fn spoken_text(&self) -> Option<String> {
        match self {
            EngineEvent::RepIncremented {
                new_count,
                announce: true,
            } => Some(new_count.to_string()),
            EngineEvent::FormWarning { message } => Some(message.clone()),
            _ => None,
        }
    }
}

/// Final numbers for the summary screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub exercise: ExerciseId,
    pub reps: u32,
    pub ended_by: EndReason,
}

/// Receiver for engine events (UI binding, speech, session-end trigger)
pub trait FeedbackSink: Send {
    fn on_event(&mut self, event: &EngineEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spoken_text() {
        let rep = EngineEvent::RepIncremented {
            new_count: 7,
            announce: true,
        };
        assert_eq!(rep.spoken_text().as_deref(), Some("7"));

        let silent = EngineEvent::RepIncremented {
            new_count: 7,
            announce: false,
        };
        assert_eq!(silent.spoken_text(), None);

        let ended = EngineEvent::SessionEnded {
            reason: EndReason::FormFailure,
        };
        assert_eq!(ended.spoken_text(), None);
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_string(&EngineEvent::RepIncremented {
            new_count: 3,
            announce: true,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"repIncremented","newCount":3,"announce":true}"#);

        let json = serde_json::to_string(&EngineEvent::SessionEnded {
            reason: EndReason::FormFailure,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"sessionEnded","reason":"formFailure"}"#);
    }
}
