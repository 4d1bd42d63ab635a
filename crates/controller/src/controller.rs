use crate::container::Container;
use sketch_common::SurfaceMetrics;
use sketch_input::Action;
use sketch_kernel::{
    Clock, ConfigError, CubeGeometry, Mesh, OrbitControls, PerspectiveCamera, PlaybackClock,
    Scene, SceneConfig, SceneParams, ShaderMaterial, SystemClock, Uniforms,
};
use sketch_render::{RenderError, Renderer};

/// Errors that abort controller setup.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("container has zero area ({width}x{height})")]
    EmptyContainer { width: u32, height: u32 },
    #[error("invalid scene config: {0}")]
    Config(#[from] ConfigError),
}

/// Result of one call to [`SceneController::frame_update`].
#[derive(Debug, PartialEq)]
pub enum FrameOutcome<T> {
    /// A frame was drawn and the next one requested.
    Drawn(T),
    /// Playback is stopped; nothing was drawn and nothing was requested.
    Paused,
}

/// Owns the scene, camera controls, clock and live parameters.
///
/// The host event loop calls [`SceneController::frame_update`] whenever a
/// frame was requested, and asks [`SceneController::take_frame_request`]
/// afterwards whether to schedule another.
pub struct SceneController<C: Clock = SystemClock> {
    config: SceneConfig,
    scene: Scene,
    controls: OrbitControls,
    clock: PlaybackClock<C>,
    params: SceneParams,
    elapsed: f64,
    frame_requested: bool,
}

impl SceneController<SystemClock> {
    /// Size a surface to `container`, set up the camera and controls.
    pub fn initialize(container: &impl Container, config: SceneConfig) -> Result<Self, SceneError> {
        Self::with_clock(container, config, SystemClock::new())
    }
}

impl<C: Clock> SceneController<C> {
    pub fn with_clock(
        container: &impl Container,
        config: SceneConfig,
        clock: C,
    ) -> Result<Self, SceneError> {
        config.validate()?;

        let size = container.size();
        if size.is_empty() {
            return Err(SceneError::EmptyContainer {
                width: size.width,
                height: size.height,
            });
        }
        let surface = SurfaceMetrics::new(
            size,
            container.device_pixel_ratio(),
            config.pixel_ratio_cap,
        );

        let mut camera =
            PerspectiveCamera::new(config.fov, surface.aspect(), config.near, config.far);
        camera.position = config.camera_position;

        let mut controls = OrbitControls::new(glam::Vec3::ZERO);
        if config.damping.enabled {
            controls = controls.with_damping(config.damping.factor);
        }
        camera.look_at(controls.target);

        let mut scene = Scene::new(camera, surface, config.clear_color);
        scene.antialias = config.antialias;

        let mut clock = PlaybackClock::new(clock, config.freeze_clock_while_paused);
        let params = SceneParams {
            is_playing: config.start_playing,
            ..SceneParams::default()
        };
        if !params.is_playing {
            clock.pause();
        }

        let physical = surface.physical();
        tracing::info!(
            "scene initialized: {}x{} logical, {}x{} physical (ratio {:.2}), fov {}",
            size.width,
            size.height,
            physical.width,
            physical.height,
            surface.pixel_ratio,
            config.fov
        );

        Ok(Self {
            config,
            scene,
            controls,
            clock,
            frame_requested: params.is_playing,
            params,
            elapsed: 0.0,
        })
    }

    /// Create the cube and its shader material. Calling again replaces the
    /// existing mesh rather than adding a second one.
    pub fn build_scene(&mut self) {
        let uniforms = Uniforms {
            u_time: 0.0,
            u_size: self.config.point_size * self.scene.surface.pixel_ratio as f32,
            progress: self.params.progress,
        };
        let mesh = Mesh::new(
            CubeGeometry::new(self.config.cube_size),
            ShaderMaterial::new(uniforms),
        );
        if self.scene.mesh.replace(mesh).is_some() {
            tracing::debug!("rebuilt scene mesh");
        }
    }

    /// Advance and draw one frame while playing; do nothing while paused.
    ///
    /// The next frame is requested even when drawing fails, so a lost surface
    /// recovers on the following refresh.
    pub fn frame_update<R: Renderer>(
        &mut self,
        renderer: &mut R,
    ) -> Result<FrameOutcome<R::Output>, RenderError> {
        if !self.params.is_playing {
            self.frame_requested = false;
            return Ok(FrameOutcome::Paused);
        }

        self.elapsed = self.clock.elapsed();
        let t = self.elapsed as f32;
        if let Some(mesh) = &mut self.scene.mesh {
            mesh.material.uniforms.u_time = t;
            mesh.material.uniforms.progress = self.params.progress;
            mesh.transform.rotation.x = t;
            mesh.transform.rotation.y = t;
        }

        self.controls.update(&mut self.scene.camera);

        self.frame_requested = true;
        let output = renderer.render(&self.scene)?;
        Ok(FrameOutcome::Drawn(output))
    }

    /// Draw the current state without advancing anything.
    pub fn redraw<R: Renderer>(&self, renderer: &mut R) -> Result<R::Output, RenderError> {
        renderer.render(&self.scene)
    }

    /// Re-read the container size and update surface, camera and renderer.
    /// A zero-area container (a minimized window) is ignored.
    pub fn resize<R: Renderer>(&mut self, container: &impl Container, renderer: &mut R) {
        let size = container.size();
        if size.is_empty() {
            tracing::debug!("ignoring resize to {}x{}", size.width, size.height);
            return;
        }

        self.scene.surface = SurfaceMetrics::new(
            size,
            container.device_pixel_ratio(),
            self.config.pixel_ratio_cap,
        );
        self.scene.camera.aspect = self.scene.surface.aspect();
        self.scene.camera.update_projection_matrix();
        renderer.resize(&self.scene.surface);

        let physical = self.scene.surface.physical();
        tracing::debug!(
            "resized to {}x{} ({}x{} physical)",
            size.width,
            size.height,
            physical.width,
            physical.height
        );
    }

    /// Resume playback and request a frame; a stopped loop never restarts itself.
    pub fn play(&mut self) {
        if !self.params.is_playing {
            tracing::debug!("play at {:.3}s", self.clock.elapsed());
        }
        self.params.is_playing = true;
        self.clock.resume();
        self.frame_requested = true;
    }

    pub fn stop(&mut self) {
        if self.params.is_playing {
            tracing::debug!("stop at {:.3}s", self.elapsed);
        }
        self.params.is_playing = false;
        self.clock.pause();
    }

    pub fn set_playing(&mut self, playing: bool) {
        if playing {
            self.play();
        } else {
            self.stop();
        }
    }

    /// Takes effect on the next drawn frame.
    pub fn set_progress(&mut self, progress: f32) {
        self.params.progress = progress;
    }

    /// Whether the host should schedule another frame. Clears the request.
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }

    /// Apply an input action. While playing, camera motion is picked up by
    /// the next frame. While stopped it is applied immediately, and the
    /// return value says whether the host should repaint.
    pub fn handle_action(&mut self, action: Action) -> bool {
        let viewport_height = self.scene.surface.logical.height as f32;
        match action {
            Action::Orbit(delta) => self.controls.rotate(delta, viewport_height),
            Action::Pan(delta) => self.controls.pan(delta, viewport_height, &self.scene.camera),
            Action::Dolly(steps) => self.controls.dolly(steps),
            Action::TogglePlayback => {
                self.set_playing(!self.params.is_playing);
                return true;
            }
            Action::Noop => return false,
        }
        if self.params.is_playing {
            return false;
        }
        self.controls.settle(&mut self.scene.camera)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn is_playing(&self) -> bool {
        self.params.is_playing
    }

    /// Elapsed seconds as of the last drawn frame.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
