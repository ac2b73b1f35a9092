//! Window and event loop glue

use crate::error::RenderError;
use crate::input::{is_quit, key_press, KeyboardState};
use crate::renderer::Renderer;
use crate::scene::build_scene;
use anyhow::Context;
use game_core::Game;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

pub struct App {
    game: Game,
    keyboard: KeyboardState,
    scale: f32,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    fatal: Option<anyhow::Error>,
}

impl App {
    pub fn new(game: Game, scale: f32) -> Self {
        Self {
            game,
            keyboard: KeyboardState::default(),
            scale,
            window: None,
            renderer: None,
            fatal: None,
        }
    }

    /// Error that stopped the event loop, if any
    pub fn finish(self) -> anyhow::Result<()> {
        match self.fatal {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let width = self.game.config.screen_width;
        let height = self.game.config.screen_height;

        let attributes = Window::default_attributes()
            .with_title("Pong")
            .with_inner_size(LogicalSize::new(width * self.scale, height * self.scale))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );

        let renderer = pollster::block_on(Renderer::new(window.clone(), width, height))
            .context("failed to initialize renderer")?;

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn stop(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        tracing::error!("{:#}", err);
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let pressed = event.state == ElementState::Pressed;
        self.keyboard.handle_key(code, pressed);

        if !pressed || event.repeat {
            return;
        }
        if is_quit(code) {
            tracing::info!("quit requested");
            event_loop.exit();
            return;
        }
        if let Some(result) = self.game.key_pressed(key_press(code)) {
            tracing::info!(from = ?result.from_state, to = ?result.to_state, "match state changed");
        }
    }

    /// One tick of the simulation followed by one rendered frame
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let events = self.game.tick(self.keyboard.tick_input());
        if events.ball_hit_paddle {
            tracing::trace!("paddle hit");
        }

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        let quads = build_scene(&self.game.snapshot(), &self.game.config);

        match renderer.draw(&quads) {
            Ok(()) => {}
            Err(RenderError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                tracing::debug!("surface lost, reconfiguring");
                renderer.reconfigure();
            }
            Err(RenderError::Surface(wgpu::SurfaceError::Timeout)) => {
                tracing::warn!("frame acquire timed out, skipping frame");
            }
            Err(err) => self.stop(event_loop, anyhow::Error::new(err).context("rendering failed")),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init_graphics(event_loop) {
            self.stop(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.keyboard.release_all(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, event),
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
