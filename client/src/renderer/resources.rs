use crate::camera::{Camera, CameraUniform};
use crate::scene::Quad;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Upper bound on rectangles per frame. The busiest screen (home text) needs a few hundred.
pub const MAX_INSTANCES: usize = 4096;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, width, height
    pub tint: [f32; 4],      // rgba
}

impl From<&Quad> for InstanceData {
    fn from(quad: &Quad) -> Self {
        let r = quad.rect;
        Self {
            transform: [r.x, r.y, r.w, r.h],
            tint: quad.color,
        }
    }
}

pub struct FrameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> FrameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let instances = device.create_buffer(&BufferDescriptor {
        label: Some("Quad Instance Buffer"),
        size: (std::mem::size_of::<InstanceData>() * MAX_INSTANCES) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    FrameBuffers {
        camera: camera_buffer,
        instances,
    }
}

/// Instance data for one frame, capped at `MAX_INSTANCES`
pub fn instance_data(quads: &[Quad]) -> Vec<InstanceData> {
    if quads.len() > MAX_INSTANCES {
        tracing::warn!(count = quads.len(), max = MAX_INSTANCES, "too many quads, dropping the rest");
    }
    quads.iter().take(MAX_INSTANCES).map(InstanceData::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::WHITE;
    use game_core::Rect;

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 32);

        let quad = Quad {
            rect: Rect { x: 50.0, y: 250.0, w: 20.0, h: 100.0 },
            color: WHITE,
        };
        let data = InstanceData::from(&quad);
        assert_eq!(data.transform, [50.0, 250.0, 20.0, 100.0]);
        assert_eq!(data.tint, WHITE);
    }

    #[test]
    fn test_instance_data_is_capped() {
        let quad = Quad { rect: Rect::default(), color: WHITE };
        let quads = vec![quad; MAX_INSTANCES + 10];
        assert_eq!(instance_data(&quads).len(), MAX_INSTANCES);
        assert!(instance_data(&[]).is_empty());
    }
}
