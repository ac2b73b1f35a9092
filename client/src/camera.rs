//! Camera for Pong game
//!
//! Simple 2D orthographic camera with screen-style coordinates

use glam::{Mat4, Vec3};

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Orthographic camera over a `width` x `height` playfield.
    /// Origin is the top-left corner and y grows downward.
    pub fn orthographic(width: f32, height: f32) -> Self {
        let eye = Vec3::new(0.0, 0.0, 10.0);
        let target = Vec3::ZERO;
        let view = Mat4::look_at_rh(eye, target, Vec3::Y);

        // bottom = height, top = 0 flips y into screen space
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, 0.1, 100.0);

        Self { view, projection }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).abs().max_element() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_corners_map_to_clip_space() {
        let camera = Camera::orthographic(800.0, 600.0);
        let vp = camera.view_proj();

        let top_left = vp.project_point3(Vec3::new(0.0, 0.0, 0.0));
        let bottom_right = vp.project_point3(Vec3::new(800.0, 600.0, 0.0));
        let center = vp.project_point3(Vec3::new(400.0, 300.0, 0.0));

        assert_close(top_left.truncate().extend(0.0), Vec3::new(-1.0, 1.0, 0.0));
        assert_close(bottom_right.truncate().extend(0.0), Vec3::new(1.0, -1.0, 0.0));
        assert_close(center.truncate().extend(0.0), Vec3::ZERO);
        assert!((0.0..=1.0).contains(&center.z), "inside the depth range");
    }

    #[test]
    fn test_uniform_is_256_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
