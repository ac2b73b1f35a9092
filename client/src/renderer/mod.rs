pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::error::RenderError;
use crate::mesh::Mesh;
use crate::scene::Quad;
use resources::FrameBuffers;
use std::sync::Arc;
use wgpu::*;
use winit::window::Window;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub quad_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,
    pub buffers: FrameBuffers,
    pub quad: Mesh,
}

impl Renderer {
    /// Set up the GPU for a playfield of `world_width` x `world_height` units.
    /// The playfield is stretched over the whole window.
    pub async fn new(window: Arc<Window>, world_width: f32, world_height: f32) -> Result<Self, RenderError> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::orthographic(world_width, world_height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);
        let quad = Mesh::rectangle(&ctx.device, &ctx.queue);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        tracing::debug!(width = ctx.size.0, height = ctx.size.1, format = ?ctx.config.format, "renderer ready");

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            quad_pipeline: pipes.quad_pipeline,
            camera_bind_group,
            buffers,
            quad,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.reconfigure();
    }

    /// Reapply the surface configuration after the surface was lost or outdated
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, quads: &[Quad]) -> Result<(), RenderError> {
        draw::draw_frame(self, quads)
    }
}
