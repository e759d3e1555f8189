//! Geometry module - pure functions over screen-space points
//!
//! Re-exports only. All logic in submodules.

mod angles;

pub use angles::{angle, distance, midpoint};
