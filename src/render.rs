use crate::core::constants::POINT_SCALE;
use crate::core::{Camera, SpriteInstance, Viewport};
use glam::Mat4;
use web_sys as web;

mod sprites;
use sprites::{create_sprite_resources, SpriteResources, SpriteUniforms};

const CLEAR: wgpu::Color = wgpu::Color::TRANSPARENT;

/// WebGPU resources for one mounted field.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    sprites: SpriteResources,
    camera: Camera,
    viewport: Viewport,
    max_dimension: u32,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        viewport: Viewport,
        capacity: usize,
    ) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: Some("water_particles_device"),
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let max_dimension = device.limits().max_texture_dimension_2d;
        let (width, height) = viewport.surface_size(max_dimension);
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Composited beneath page content, so keep the canvas transparent
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sprites = create_sprite_resources(&device, format, capacity);
        let mut camera = Camera::default();
        camera.set_viewport(&viewport);

        log::info!(
            "[gpu] ready {}x{} format={:?} alpha={:?} capacity={}",
            width,
            height,
            format,
            alpha_mode,
            sprites.capacity
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            sprites,
            camera,
            viewport,
            max_dimension,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Largest surface edge the device accepts.
    pub fn max_dimension(&self) -> u32 {
        self.max_dimension
    }

    /// Match the surface and projection to a new container size. Particle
    /// buffers are left untouched.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.set_viewport(&viewport);
        let (width, height) = viewport.surface_size(self.max_dimension);
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(
        &mut self,
        sprites: &[SpriteInstance],
        model: Mat4,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let count = sprites.len().min(self.sprites.capacity);
        if count > 0 {
            self.queue.write_buffer(
                &self.sprites.instance_vb,
                0,
                bytemuck::cast_slice(&sprites[..count]),
            );
        }
        let uniforms = SpriteUniforms {
            proj: self.camera.projection_matrix().to_cols_array_2d(),
            view: self.camera.view_matrix().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            resolution: [self.config.width as f32, self.config.height as f32],
            pixel_ratio: self.viewport.surface_pixel_ratio(self.max_dimension) as f32,
            point_scale: POINT_SCALE,
        };
        self.queue
            .write_buffer(&self.sprites.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("particles_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("particles_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if count > 0 {
                rpass.set_pipeline(&self.sprites.pipeline);
                rpass.set_bind_group(0, &self.sprites.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.sprites.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.sprites.instance_vb.slice(..));
                rpass.draw(0..4, 0..count as u32);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Release GPU buffers and the device now rather than whenever the
    /// browser collects them.
    pub fn dispose(self) {
        self.sprites.destroy();
        self.device.destroy();
        log::debug!("[gpu] disposed");
    }
}
