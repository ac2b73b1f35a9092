use super::resources::instance_data;
use super::Renderer;
use crate::error::RenderError;
use crate::scene::Quad;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, quads: &[Quad]) -> Result<(), RenderError> {
    let output = renderer.surface.get_current_texture()?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer.device.create_command_encoder(&CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });

    let instances = instance_data(quads);
    if !instances.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.instances, 0, bytemuck::cast_slice(&instances));
    }

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations { load: LoadOp::Clear(Color::BLACK), store: StoreOp::Store },
            })],
            depth_stencil_attachment: None, timestamp_writes: None, occlusion_query_set: None,
        });
        draw_quads(renderer, &mut pass, instances.len() as u32);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn draw_quads(renderer: &Renderer, pass: &mut RenderPass<'_>, count: u32) {
    if count == 0 {
        return;
    }

    pass.set_pipeline(&renderer.quad_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    pass.set_vertex_buffer(0, renderer.quad.vertex_buffer.slice(..));
    pass.set_index_buffer(renderer.quad.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
    pass.draw_indexed(0..renderer.quad.index_count, 0, 0..count);
}
