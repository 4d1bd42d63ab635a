//! Scene controller: owns the scene and drives it one frame at a time.
//!
//! # Invariants
//! - One camera, one mesh and one controller per surface.
//! - `uTime` never decreases while playing and is frozen while paused.
//! - A paused loop does not re-arm itself; only [`SceneController::play`] does.

mod container;
mod controller;

pub use container::{Container, FixedContainer};
pub use controller::{FrameOutcome, SceneController, SceneError};
