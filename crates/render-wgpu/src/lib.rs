//! wgpu render backend for the cube sketch.
//!
//! Draws the scene's single cube with the sketch shader, multisampled when the
//! scene asks for antialiasing, into a caller-provided surface.
//!
//! # Invariants
//! - The renderer owns the surface, device and queue for its whole lifetime.
//! - The renderer never mutates scene state.

mod gpu;
mod shaders;

pub use gpu::{SurfaceFrame, WgpuRenderer};
