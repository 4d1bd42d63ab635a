use sketch_common::SurfaceSize;

/// Something a render surface is sized to: a window, or a fixed size in tests.
pub trait Container {
    /// Current size in logical pixels.
    fn size(&self) -> SurfaceSize;

    /// Device pixels per logical pixel, before any cap is applied.
    fn device_pixel_ratio(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedContainer {
    pub size: SurfaceSize,
    pub device_pixel_ratio: f64,
}

impl FixedContainer {
    pub fn new(width: u32, height: u32, device_pixel_ratio: f64) -> Self {
        Self {
            size: SurfaceSize::new(width, height),
            device_pixel_ratio,
        }
    }
}

impl Container for FixedContainer {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }
}
