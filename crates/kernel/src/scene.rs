use crate::camera::PerspectiveCamera;
use crate::mesh::Mesh;
use sketch_common::{Rgb, SurfaceMetrics};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: PerspectiveCamera,
    pub mesh: Option<Mesh>,
    pub clear_color: Rgb,
    pub surface: SurfaceMetrics,
    pub antialias: bool,
}

impl Scene {
    pub fn new(camera: PerspectiveCamera, surface: SurfaceMetrics, clear_color: Rgb) -> Self {
        Self {
            camera,
            mesh: None,
            clear_color,
            surface,
            antialias: true,
        }
    }
}
