pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod math;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use math::*;
pub use params::*;
pub use resources::*;
pub use systems::*;

use hecs::World;

/// Run one tick of the Pong simulation.
///
/// One tick is one rendered frame; there is no fixed timestep, so game speed
/// follows the display rate.
pub fn step(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    // Clear events at start of tick
    events.clear();

    // 1. Move the human paddle from its intent
    move_paddles(world, config);

    // 2. Move ball and resolve walls/paddles
    advance_ball(world, config, events);

    // 3. AI reacts to where the ball ended up
    drive_ai_paddles(world, config);

    // 4. Check scoring (ball exited playfield)
    check_score(world, config, score, events);
}

/// Helper to create a paddle entity. Only human paddles carry an intent.
pub fn create_paddle(
    world: &mut World,
    side: Side,
    controller: Controller,
    config: &Config,
) -> hecs::Entity {
    let paddle = Paddle::new(side, config);
    match controller {
        Controller::Human => world.spawn((paddle, controller, PaddleIntent::new())),
        Controller::Ai => world.spawn((paddle, controller)),
    }
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
