//! Shared value types used by every sketch crate.
//!
//! Nothing in here touches the GPU or the windowing system.

mod color;
mod surface;
mod types;

pub use color::Rgb;
pub use surface::{DEFAULT_PIXEL_RATIO_CAP, SurfaceMetrics, SurfaceSize, capped_pixel_ratio};
pub use types::Transform;
