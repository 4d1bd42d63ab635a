use crate::panel;
use anyhow::{Result, anyhow};
use egui::Context as EguiContext;
use glam::Vec2;
use sketch_common::SurfaceSize;
use sketch_controller::{Container, FrameOutcome, SceneController};
use sketch_input::{Key, PointerButton, PointerMapper};
use sketch_kernel::SceneConfig;
use sketch_render::RenderError;
use sketch_render_wgpu::{SurfaceFrame, WgpuRenderer};
use sketch_tools::ParameterPanel;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Pixel scroll distance treated as one wheel line.
const PIXELS_PER_LINE: f32 = 100.0;

/// The window is the container the render surface is sized to.
struct WindowContainer<'a>(&'a Window);

impl Container for WindowContainer<'_> {
    fn size(&self) -> SurfaceSize {
        let size: LogicalSize<u32> = self.0.inner_size().to_logical(self.0.scale_factor());
        SurfaceSize::new(size.width, size.height)
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.0.scale_factor()
    }
}

/// Everything that exists once the window and GPU are up.
struct Running {
    window: Arc<Window>,
    controller: SceneController,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

pub struct GpuApp {
    config: SceneConfig,
    size: LogicalSize<u32>,
    egui_ctx: EguiContext,
    pointer: PointerMapper,
    panel: ParameterPanel,
    show_panel: bool,
    running: Option<Running>,
    fatal: Option<anyhow::Error>,
}

impl GpuApp {
    pub fn new(config: SceneConfig, size: LogicalSize<u32>) -> Self {
        Self {
            config,
            size,
            egui_ctx: EguiContext::default(),
            pointer: PointerMapper::new(),
            panel: ParameterPanel::new(),
            show_panel: true,
            running: None,
            fatal: None,
        }
    }

    /// The error that stopped the event loop, if any.
    pub fn into_result(self) -> Result<()> {
        match self.fatal {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn start(&self, event_loop: &ActiveEventLoop) -> Result<Running> {
        let attrs = Window::default_attributes()
            .with_title("Cube Sketch")
            .with_inner_size(self.size);
        let window = Arc::new(event_loop.create_window(attrs)?);

        let mut controller =
            SceneController::initialize(&WindowContainer(&window), self.config.clone())?;
        controller.build_scene();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| anyhow!("no GPU adapter compatible with the window surface"))?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("sketch_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))?;

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        let renderer = WgpuRenderer::new(surface, &adapter, device, queue, controller.scene());

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            renderer.device(),
            renderer.surface_format(),
            None,
            1,
            false,
        );

        // Paint once even when starting paused so the panel shows up.
        controller.take_frame_request();
        window.request_redraw();

        Ok(Running {
            window,
            controller,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn handle_key(&mut self, key: KeyCode) {
        let Some(running) = &mut self.running else {
            return;
        };
        match key {
            KeyCode::Space => {
                let action = self.pointer.key(Key::Space);
                running.controller.handle_action(action);
                running.window.request_redraw();
            }
            KeyCode::F1 => {
                self.show_panel = !self.show_panel;
                running.window.request_redraw();
            }
            _ => {}
        }
    }

    fn redraw(&mut self) {
        let Some(running) = &mut self.running else {
            return;
        };

        let drawn = match running.controller.frame_update(&mut running.renderer) {
            Ok(FrameOutcome::Drawn(frame)) => Ok(frame),
            // Stopped: repaint the frozen scene so the panel stays live.
            Ok(FrameOutcome::Paused) => running.controller.redraw(&mut running.renderer),
            Err(e) => Err(e),
        };

        let frame = match drawn {
            Ok(frame) => frame,
            Err(RenderError::SurfaceLost) => {
                tracing::debug!("surface reconfigured, skipping frame");
                running.window.request_redraw();
                return;
            }
            Err(e) => {
                tracing::error!("render error: {e}");
                if running.controller.take_frame_request() {
                    running.window.request_redraw();
                }
                return;
            }
        };

        let repaint_ui = Self::draw_overlay(
            running,
            &self.egui_ctx,
            &self.panel,
            self.show_panel,
            frame,
        );

        if running.controller.take_frame_request() || repaint_ui {
            running.window.request_redraw();
        }
    }

    /// Run the panel, apply its edits, draw it over `frame` and present.
    /// Returns whether egui asked for an immediate repaint.
    fn draw_overlay(
        running: &mut Running,
        egui_ctx: &EguiContext,
        panel: &ParameterPanel,
        show_panel: bool,
        frame: SurfaceFrame,
    ) -> bool {
        let raw_input = running.egui_winit.take_egui_input(&running.window);
        let mut edits = Vec::new();
        let full_output = egui_ctx.run(raw_input, |ctx| {
            if show_panel {
                edits = panel::draw(ctx, panel, &running.controller);
            }
        });
        for edit in edits {
            panel.apply(edit, &mut running.controller);
        }

        running
            .egui_winit
            .handle_platform_output(&running.window, full_output.platform_output);

        // The surface may be smaller than the window when the pixel ratio is
        // capped, so egui is drawn at the surface's ratio.
        let pixels_per_point = running.controller.scene().surface.pixel_ratio as f32;
        let paint_jobs = egui_ctx.tessellate(full_output.shapes, pixels_per_point);
        let size = running.renderer.surface_size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point,
        };

        let device = running.renderer.device();
        let queue = running.renderer.queue();
        for (id, image_delta) in &full_output.textures_delta.set {
            running
                .egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("egui_encoder"),
        });
        running.egui_renderer.update_buffers(
            device,
            queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &frame.view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            running
                .egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            running.egui_renderer.free_texture(id);
        }

        frame.present();

        full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|v| v.repaint_delay.is_zero())
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(running) => self.running = Some(running),
            Err(e) => {
                tracing::error!("startup failed: {e:#}");
                self.fatal = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(running) = &mut self.running else {
            return;
        };

        let response = running.egui_winit.on_window_event(&running.window, &event);
        if response.repaint {
            running.window.request_redraw();
        }
        if response.consumed {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                running
                    .controller
                    .resize(&WindowContainer(&running.window), &mut running.renderer);
                running.window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(running.window.scale_factor());
                let action = self.pointer.moved(Vec2::new(logical.x, logical.y));
                if !action.is_noop() && running.controller.handle_action(action) {
                    running.window.request_redraw();
                }
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer.left();
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    MouseButton::Left => PointerButton::Primary,
                    MouseButton::Right => PointerButton::Secondary,
                    MouseButton::Middle => PointerButton::Middle,
                    _ => return,
                };
                match state {
                    ElementState::Pressed => self.pointer.press(button),
                    ElementState::Released => self.pointer.release(button),
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_LINE,
                };
                if running.controller.handle_action(self.pointer.wheel(lines)) {
                    running.window.request_redraw();
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                self.handle_key(key);
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }
}
