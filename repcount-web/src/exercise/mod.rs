//! Exercise module - rule table, rep counting and form monitoring
//!
//! Re-exports only. All logic in submodules.

mod counter;
mod features;
mod kind;
mod plank;
mod rules;

pub use counter::{step, Phase, RepCounter};
pub use features::{AngleSpec, Composite, Feature, Reading};
pub use kind::ExerciseId;
pub use plank::{hip_drop, PlankMonitor, PlankSignal, PlankStatus, PLANK_JOINTS};
pub use rules::{rule_for, Criterion, ExerciseRule};

#[cfg(test)]
pub(crate) use counter::tests::elbow_frame;
#[cfg(test)]
pub(crate) use plank::tests::plank_frame;
