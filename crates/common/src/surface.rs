use serde::{Deserialize, Serialize};

/// Upper bound applied to the device pixel ratio unless configured otherwise.
pub const DEFAULT_PIXEL_RATIO_CAP: f64 = 2.0;

/// Size of a container in logical (CSS-like) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width over height. Callers must check [`SurfaceSize::is_empty`] first.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// `min(device_ratio, cap)`, never below a minimal positive ratio.
pub fn capped_pixel_ratio(device_ratio: f64, cap: f64) -> f64 {
    device_ratio.min(cap).max(f64::EPSILON)
}

/// Logical size plus the effective (capped) pixel ratio of the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMetrics {
    pub logical: SurfaceSize,
    pub pixel_ratio: f64,
}

impl SurfaceMetrics {
    pub fn new(logical: SurfaceSize, device_ratio: f64, cap: f64) -> Self {
        Self {
            logical,
            pixel_ratio: capped_pixel_ratio(device_ratio, cap),
        }
    }

    /// Drawable size in device pixels. Each side is at least 1.
    pub fn physical(&self) -> SurfaceSize {
        let scale = |v: u32| ((v as f64 * self.pixel_ratio).round() as u32).max(1);
        SurfaceSize {
            width: scale(self.logical.width),
            height: scale(self.logical.height),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.logical.aspect()
    }
}
