use crate::shaders;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use sketch_common::{SurfaceMetrics, SurfaceSize};
use sketch_kernel::{CubeGeometry, Scene, Side};
use sketch_render::{RenderError, Renderer};
use wgpu::util::DeviceExt;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
const MSAA_SAMPLES: u32 = 4;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    u_time: f32,
    u_size: f32,
    progress: f32,
    _pad: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

struct MeshBuffers {
    geometry: CubeGeometry,
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
    index_count: u32,
}

/// A drawn frame waiting for overlays and presentation.
pub struct SurfaceFrame {
    pub texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
}

impl SurfaceFrame {
    pub fn present(self) {
        self.texture.present();
    }
}

/// wgpu-based scene renderer.
pub struct WgpuRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    mesh: Option<MeshBuffers>,
    depth_texture: wgpu::TextureView,
    msaa_texture: Option<wgpu::TextureView>,
    sample_count: u32,
}

impl WgpuRenderer {
    /// Configure `surface` for the scene's drawable size and build the cube
    /// pipeline. Geometry is uploaded from the scene's mesh, if it has one.
    ///
    /// Culling and wireframe are baked into the pipeline from the material
    /// seen here; later material changes need a new renderer. Geometry is
    /// re-uploaded by [`Renderer::render`] whenever the scene's cube changes.
    pub fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        device: wgpu::Device,
        queue: wgpu::Queue,
        scene: &Scene,
    ) -> Self {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let physical = scene.surface.physical();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: physical.width,
            height: physical.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let msaa_supported = adapter
            .get_texture_format_features(surface_format)
            .flags
            .sample_count_supported(MSAA_SAMPLES);
        let sample_count = if scene.antialias && msaa_supported {
            MSAA_SAMPLES
        } else {
            if scene.antialias {
                tracing::warn!("{MSAA_SAMPLES}x MSAA unsupported for {surface_format:?}, drawing aliased");
            }
            1
        };

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniform_buffer"),
            contents: bytemuck::bytes_of(&Uniforms::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cube_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::CUBE_SHADER.into()),
        });

        let cull_mode = match scene.mesh.as_ref().map(|m| m.material.side) {
            Some(Side::Front) => Some(wgpu::Face::Back),
            Some(Side::Double) | None => None,
        };
        let polygon_mode = match scene.mesh.as_ref().map(|m| m.material.wireframe) {
            Some(true) if device.features().contains(wgpu::Features::POLYGON_MODE_LINE) => {
                wgpu::PolygonMode::Line
            }
            _ => wgpu::PolygonMode::Fill,
        };

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("cube_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x3,
                        1 => Float32x3,
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode,
                polygon_mode,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: sample_count,
                ..Default::default()
            },
            multiview: None,
            cache: None,
        });

        let mesh = scene
            .mesh
            .as_ref()
            .map(|m| Self::upload_mesh(&device, m.geometry));

        let depth_texture = Self::create_depth_texture(&device, physical, sample_count);
        let msaa_texture =
            Self::create_msaa_texture(&device, surface_format, physical, sample_count);

        tracing::info!(
            "surface configured: {}x{} {surface_format:?}, {sample_count}x samples",
            physical.width,
            physical.height
        );

        Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            mesh,
            depth_texture,
            msaa_texture,
            sample_count,
        }
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Drawable size in device pixels.
    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.config.width, self.config.height)
    }

    fn upload_mesh(device: &wgpu::Device, geometry: CubeGeometry) -> MeshBuffers {
        let (verts, indices) = geometry.build();
        let verts: Vec<Vertex> = verts
            .iter()
            .map(|v| Vertex {
                position: v.position,
                normal: v.normal,
            })
            .collect();
        MeshBuffers {
            geometry,
            vertex: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("cube_vertex_buffer"),
                contents: bytemuck::cast_slice(&verts),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            index: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("cube_index_buffer"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            }),
            index_count: indices.len() as u32,
        }
    }

    /// Bring the uploaded buffers in line with the scene's mesh.
    fn sync_mesh(&mut self, scene: &Scene) {
        let wanted = scene.mesh.as_ref().map(|m| m.geometry);
        if !geometry_changed(self.mesh.as_ref().map(|m| m.geometry), wanted) {
            return;
        }
        tracing::debug!("re-uploading cube geometry: {wanted:?}");
        self.mesh = wanted.map(|g| Self::upload_mesh(&self.device, g));
    }

    fn acquire(&self) -> Result<wgpu::SurfaceTexture, RenderError> {
        match self.surface.get_current_texture() {
            Ok(t) => Ok(t),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::Timeout) => Err(RenderError::Timeout),
            Err(wgpu::SurfaceError::OutOfMemory) => Err(RenderError::OutOfMemory),
            Err(e) => Err(RenderError::Backend(e.to_string())),
        }
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        size: SurfaceSize,
        sample_count: u32,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }

    fn create_msaa_texture(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        size: SurfaceSize,
        sample_count: u32,
    ) -> Option<wgpu::TextureView> {
        if sample_count <= 1 {
            return None;
        }
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("msaa_texture"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        Some(texture.create_view(&Default::default()))
    }
}

fn geometry_changed(uploaded: Option<CubeGeometry>, wanted: Option<CubeGeometry>) -> bool {
    uploaded != wanted
}

impl Renderer for WgpuRenderer {
    type Output = SurfaceFrame;

    /// Draw the cube into the next surface texture. The frame is returned
    /// unpresented so overlays can be drawn on top.
    fn render(&mut self, scene: &Scene) -> Result<SurfaceFrame, RenderError> {
        self.sync_mesh(scene);
        let texture = self.acquire()?;
        let view = texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let (model, uniforms) = scene
            .mesh
            .as_ref()
            .map(|m| (m.transform.matrix(), m.material.uniforms))
            .unwrap_or((Mat4::IDENTITY, Default::default()));
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: scene.camera.view_projection().to_cols_array_2d(),
                model: model.to_cols_array_2d(),
                u_time: uniforms.u_time,
                u_size: uniforms.u_size,
                progress: uniforms.progress,
                _pad: 0.0,
            }),
        );

        let [r, g, b] = if self.config.format.is_srgb() {
            scene.clear_color.linear()
        } else {
            scene.clear_color.channels()
        };

        let (target, resolve_target) = match &self.msaa_texture {
            Some(msaa) => (msaa, Some(&view)),
            None => (&view, None),
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            if let Some(mesh) = &self.mesh {
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                pass.set_vertex_buffer(0, mesh.vertex.slice(..));
                pass.set_index_buffer(mesh.index.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        Ok(SurfaceFrame { texture, view })
    }

    fn resize(&mut self, surface: &SurfaceMetrics) {
        let physical = surface.physical();
        self.config.width = physical.width;
        self.config.height = physical.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture = Self::create_depth_texture(&self.device, physical, self.sample_count);
        self.msaa_texture = Self::create_msaa_texture(
            &self.device,
            self.config.format,
            physical,
            self.sample_count,
        );
    }
}
