use sketch_common::SurfaceMetrics;
use sketch_kernel::Scene;

/// Errors a renderer can report for a single frame.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The surface must be reconfigured; the frame was skipped.
    #[error("render surface lost or outdated")]
    SurfaceLost,
    #[error("timed out acquiring the next surface texture")]
    Timeout,
    #[error("out of GPU memory")]
    OutOfMemory,
    #[error("render backend error: {0}")]
    Backend(String),
}

/// Renderer-agnostic interface. All renderers implement this trait.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Draw one frame of `scene`.
    fn render(&mut self, scene: &Scene) -> Result<Self::Output, RenderError>;

    /// Match the drawable to new surface metrics.
    fn resize(&mut self, surface: &SurfaceMetrics);
}

/// Debug text renderer: a human-readable description of each frame.
///
/// Keeps a frame counter so tests can tell how many draw calls were issued.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    frames: u64,
    surface: Option<SurfaceMetrics>,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Metrics from the most recent resize.
    pub fn surface(&self) -> Option<SurfaceMetrics> {
        self.surface
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, scene: &Scene) -> Result<String, RenderError> {
        self.frames += 1;
        let physical = scene.surface.physical();
        let cam = &scene.camera;

        let mut out = format!(
            "=== Frame {} ({}x{} @ {:.2}x, clear #{:06x}) ===\n",
            self.frames,
            physical.width,
            physical.height,
            scene.surface.pixel_ratio,
            scene.clear_color.0
        );
        out.push_str(&format!(
            "Camera: eye=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2}) fov={:.0} aspect={:.3}\n",
            cam.position.x,
            cam.position.y,
            cam.position.z,
            cam.target.x,
            cam.target.y,
            cam.target.z,
            cam.fov,
            cam.aspect
        ));

        match &scene.mesh {
            Some(mesh) => {
                let r = mesh.transform.rotation;
                let u = mesh.material.uniforms;
                out.push_str(&format!(
                    "Cube: size={:.2} rot=({:.3}, {:.3}, {:.3})\n",
                    mesh.geometry.size, r.x, r.y, r.z
                ));
                out.push_str(&format!(
                    "Uniforms: uTime={:.3} uSize={:.1} progress={:.2}\n",
                    u.u_time, u.u_size, u.progress
                ));
            }
            None => out.push_str("Cube: <none>\n"),
        }

        Ok(out)
    }

    fn resize(&mut self, surface: &SurfaceMetrics) {
        tracing::debug!(
            "debug renderer resized to {}x{}",
            surface.physical().width,
            surface.physical().height
        );
        self.surface = Some(*surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use sketch_common::{Rgb, SurfaceSize};
    use sketch_kernel::{CubeGeometry, Mesh, PerspectiveCamera, ShaderMaterial, Uniforms};

    fn scene() -> Scene {
        let mut camera = PerspectiveCamera::new(70.0, 4.0 / 3.0, 0.1, 1000.0);
        camera.position = Vec3::new(0.0, 0.0, 2.0);
        camera.look_at(Vec3::ZERO);
        let surface = SurfaceMetrics::new(SurfaceSize::new(800, 600), 1.0, 2.0);
        Scene::new(camera, surface, Rgb(0xeeeeee))
    }

    #[test]
    fn renders_scene_without_mesh() {
        let mut renderer = DebugTextRenderer::new();
        let out = renderer.render(&scene()).unwrap();
        assert!(out.contains("800x600"));
        assert!(out.contains("aspect=1.333"));
        assert!(out.contains("Cube: <none>"));
        assert_eq!(renderer.frames(), 1);
    }

    #[test]
    fn renders_uniforms() {
        let mut s = scene();
        let mut mesh = Mesh::new(
            CubeGeometry::new(0.2),
            ShaderMaterial::new(Uniforms {
                u_time: 2.0,
                u_size: 30.0,
                progress: 0.5,
            }),
        );
        mesh.transform.rotation = Vec3::new(2.0, 2.0, 0.0);
        s.mesh = Some(mesh);

        let mut renderer = DebugTextRenderer::new();
        let out = renderer.render(&s).unwrap();
        assert!(out.contains("rot=(2.000, 2.000, 0.000)"));
        assert!(out.contains("uTime=2.000"));
        assert!(out.contains("progress=0.50"));
    }

    #[test]
    fn resize_records_metrics() {
        let mut renderer = DebugTextRenderer::new();
        let m = SurfaceMetrics::new(SurfaceSize::new(640, 480), 2.0, 2.0);
        renderer.resize(&m);
        assert_eq!(renderer.surface(), Some(m));
    }
}
