//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers read the scene; they never mutate it.
//! - Surface size changes reach the renderer through [`Renderer::resize`].
//!
//! The GPU backend lives in `sketch-render-wgpu`; [`DebugTextRenderer`] stands
//! in for it in tests and the headless CLI.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderError, Renderer};
