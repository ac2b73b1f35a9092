use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Keep the paddle between the top and bottom boundaries
pub fn clamp_paddle(paddle: &mut Paddle, config: &Config) {
    paddle.y = config.clamp_paddle_y(paddle.y, paddle.height);
}

pub fn move_paddle_up(paddle: &mut Paddle, config: &Config) {
    paddle.y -= paddle.speed;
    clamp_paddle(paddle, config);
}

pub fn move_paddle_down(paddle: &mut Paddle, config: &Config) {
    paddle.y += paddle.speed;
    clamp_paddle(paddle, config);
}

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        match intent.dir {
            d if d < 0 => move_paddle_up(paddle, config),
            d if d > 0 => move_paddle_down(paddle, config),
            _ => {}
        }
    }
}

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
