use crate::{Ball, Config, GameRng, Paddle, PaddleIntent};
use hecs::World;

/// Put both paddles back at their start and serve a fresh ball
pub fn reset_round(world: &mut World, config: &Config, rng: &mut GameRng) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.reset(config);
    }

    for (_entity, intent) in world.query_mut::<&mut PaddleIntent>() {
        *intent = PaddleIntent::new();
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.serve(config, rng);
    }
}
