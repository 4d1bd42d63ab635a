use serde::Serialize;
use sketch_common::SurfaceSize;
use sketch_controller::SceneController;
use sketch_kernel::Clock;

/// Read-only view of a running scene for the panel readout and the CLI.
pub struct SceneInspector;

impl SceneInspector {
    pub fn summary<C: Clock>(controller: &SceneController<C>) -> SceneSummary {
        let scene = controller.scene();
        let (rotation, u_time, u_size) = scene
            .mesh
            .as_ref()
            .map(|m| {
                let r = m.transform.rotation;
                let u = m.material.uniforms;
                ([r.x, r.y, r.z], u.u_time, u.u_size)
            })
            .unwrap_or_default();
        let eye = scene.camera.position;

        SceneSummary {
            elapsed: controller.elapsed(),
            playing: controller.is_playing(),
            progress: controller.params().progress,
            rotation,
            u_time,
            u_size,
            aspect: scene.camera.aspect,
            camera: [eye.x, eye.y, eye.z],
            logical: scene.surface.logical,
            physical: scene.surface.physical(),
            pixel_ratio: scene.surface.pixel_ratio,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SceneSummary {
    pub elapsed: f64,
    pub playing: bool,
    pub progress: f32,
    pub rotation: [f32; 3],
    pub u_time: f32,
    pub u_size: f32,
    pub aspect: f32,
    pub camera: [f32; 3],
    pub logical: SurfaceSize,
    pub physical: SurfaceSize,
    pub pixel_ratio: f64,
}

impl std::fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "t={:.3}s {} progress={:.2} rot=({:.3}, {:.3}) aspect={:.3} surface={}x{}@{:.2}x",
            self.elapsed,
            if self.playing { "playing" } else { "paused" },
            self.progress,
            self.rotation[0],
            self.rotation[1],
            self.aspect,
            self.physical.width,
            self.physical.height,
            self.pixel_ratio,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketch_controller::FixedContainer;
    use sketch_kernel::{ManualClock, SceneConfig};
    use sketch_render::DebugTextRenderer;

    fn running() -> (SceneController<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let container = FixedContainer::new(800, 600, 2.0);
        let mut c =
            SceneController::with_clock(&container, SceneConfig::default(), clock.clone()).unwrap();
        c.build_scene();
        (c, clock)
    }

    #[test]
    fn summary_before_first_frame() {
        let (c, _) = running();
        let s = SceneInspector::summary(&c);
        assert_eq!(s.elapsed, 0.0);
        assert!(s.playing);
        assert_eq!(s.u_size, 60.0);
        assert_eq!(s.physical, SurfaceSize::new(1600, 1200));
    }

    #[test]
    fn summary_tracks_frames() {
        let (mut c, clock) = running();
        let mut r = DebugTextRenderer::new();
        clock.advance(2.0);
        c.frame_update(&mut r).unwrap();
        c.stop();

        let s = SceneInspector::summary(&c);
        assert_eq!(s.rotation, [2.0, 2.0, 0.0]);
        assert_eq!(s.u_time, 2.0);
        let text = s.to_string();
        assert!(text.contains("t=2.000s paused"));
        assert!(text.contains("aspect=1.333"));
    }

    #[test]
    fn summary_serializes() {
        let (c, _) = running();
        let json = serde_json::to_value(SceneInspector::summary(&c)).unwrap();
        assert_eq!(json["playing"], true);
        assert_eq!(json["logical"]["width"], 800);
    }
}
