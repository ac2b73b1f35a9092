use crate::error::RenderError;
use std::sync::Arc;
use wgpu::*;
use winit::window::Window;

pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
    pub size: (u32, u32),
}

pub async fn init_wgpu(window: Arc<Window>) -> Result<WgpuContext, RenderError> {
    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::all(),
        ..Default::default()
    });

    let inner = window.inner_size();
    let surface = instance.create_surface(window)?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or(RenderError::NoAdapter)?;

    let info = adapter.get_info();
    tracing::info!(adapter = %info.name, backend = ?info.backend, "graphics adapter selected");

    let (device, queue) = adapter
        .request_device(
            &DeviceDescriptor {
                label: Some("Device"),
                required_features: Features::empty(),
                required_limits: Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: MemoryHints::default(),
            },
            None,
        )
        .await?;

    // A minimized window reports 0x0, which the surface rejects
    let width = inner.width.max(1);
    let height = inner.height.max(1);
    let size = (width, height);

    let surface_caps = surface.get_capabilities(&adapter);
    let surface_format = surface_caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| surface_caps.formats.first().copied())
        .ok_or(RenderError::NoSurfaceFormat)?;

    let present_mode = pick_present_mode(&surface_caps.present_modes);
    tracing::debug!(?present_mode, "surface present mode");

    let config = SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format: surface_format,
        width,
        height,
        present_mode,
        alpha_mode: CompositeAlphaMode::Auto,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
        size,
    })
}

/// Speeds are per tick and the game ticks once per frame, so frames must not
/// wait on vsync. Prefers `Immediate`, otherwise lets wgpu pick the fastest
/// non-vsync mode (falling back to `Fifo` if that is all there is).
pub fn pick_present_mode(supported: &[PresentMode]) -> PresentMode {
    if supported.contains(&PresentMode::Immediate) {
        PresentMode::Immediate
    } else {
        PresentMode::AutoNoVsync
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_mode_avoids_vsync() {
        let all = [PresentMode::Fifo, PresentMode::Mailbox, PresentMode::Immediate];
        assert_eq!(pick_present_mode(&all), PresentMode::Immediate);

        let no_immediate = [PresentMode::Fifo, PresentMode::Mailbox];
        assert_eq!(pick_present_mode(&no_immediate), PresentMode::AutoNoVsync);

        assert_eq!(pick_present_mode(&[PresentMode::Fifo]), PresentMode::AutoNoVsync);
        assert_ne!(pick_present_mode(&[]), PresentMode::Fifo);
    }
}
