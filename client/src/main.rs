mod app;
mod camera;
mod error;
mod input;
mod mesh;
mod renderer;
mod scene;
mod text;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use game_core::Game;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::filter::Builder;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser, Debug)]
#[command(name = "pong", version, about = "Play Pong against the computer")]
struct Args {
    /// Seed for serve directions; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,

    /// Window scale factor relative to the 800x600 playfield
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter().from_env_lossy())
        .init();

    let args = Args::parse();
    ensure!(
        args.scale.is_finite() && args.scale > 0.0,
        "--scale must be a positive number, got {}",
        args.scale
    );

    let seed = args.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, scale = args.scale, "starting pong");

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = app::App::new(Game::new(seed), args.scale);
    event_loop.run_app(&mut app).context("event loop failed")?;
    app.finish()
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// `RUST_LOG` wins when set; INFO otherwise
fn log_filter() -> Builder {
    EnvFilter::builder().with_default_directive(LevelFilter::INFO.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter().parse_lossy("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_honours_global_level() {
        assert_eq!(log_filter().parse_lossy("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter().parse_lossy("warn").max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_keeps_targeted_directives() {
        let filter = log_filter().parse_lossy("game_core=trace");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}
