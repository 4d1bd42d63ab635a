//! Input mapping: raw pointer and key events become [`Action`]s.
//!
//! # Invariants
//! - The controller consumes actions, never windowing-system events.
//! - Mapping is stateless except for the pressed button and last cursor position.

pub mod action;
pub mod pointer;

pub use action::Action;
pub use pointer::{Key, PointerButton, PointerMapper};
