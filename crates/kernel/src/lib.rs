//! Scene kernel: the state the sketch animates and the rules it animates by.
//!
//! # Invariants
//! - Exactly one camera and at most one mesh per [`Scene`].
//! - Nothing here issues GPU work; renderers read a `&Scene`.
//! - Time comes from a [`Clock`], never from the system directly.

pub mod camera;
pub mod clock;
pub mod config;
pub mod controls;
pub mod mesh;
pub mod params;
pub mod scene;

pub use camera::PerspectiveCamera;
pub use clock::{Clock, ManualClock, PlaybackClock, SystemClock};
pub use config::{ConfigError, DampingConfig, SceneConfig, ScenePreset};
pub use controls::{MIN_CAMERA_DISTANCE, OrbitControls};
pub use mesh::{CubeGeometry, Mesh, ShaderMaterial, Side, Uniforms, Vertex};
pub use params::SceneParams;
pub use scene::Scene;
