//! Developer tooling: the live parameter panel and a scene inspector.
//!
//! # Invariants
//! - The panel is the only place `progress` is clamped.
//! - Tools read the controller; edits go through its public operations.

mod inspector;
mod panel;

pub use inspector::{SceneInspector, SceneSummary};
pub use panel::{Control, PanelEdit, ParameterPanel};
