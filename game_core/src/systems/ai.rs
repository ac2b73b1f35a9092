use crate::{move_paddle_down, move_paddle_up, Ball, Config, Controller, Paddle, Side};
use hecs::World;

/// Steer one AI paddle for this tick.
///
/// Strategy:
/// 1. While the ball is heading toward our side, drift one step toward the
///    vertical center of the screen.
/// 2. Always take one step toward the ball's vertical center.
///
/// The two steps can add up or cancel out, which keeps the opponent beatable.
pub fn update_ai_paddle(paddle: &mut Paddle, ball: &Ball, config: &Config) {
    let approaching = match paddle.side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };

    if approaching {
        let center = config.paddle_center_y();
        if paddle.y < center {
            move_paddle_down(paddle, config);
        } else if paddle.y > center {
            move_paddle_up(paddle, config);
        }
    }

    let ball_y = ball.center_y();
    let paddle_y = paddle.center_y();
    if ball_y > paddle_y {
        move_paddle_down(paddle, config);
    } else if ball_y < paddle_y {
        move_paddle_up(paddle, config);
    }
}

/// Run the heuristic for every AI-controlled paddle
pub fn drive_ai_paddles(world: &mut World, config: &Config) {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball);

    let Some(ball) = ball else {
        return;
    };

    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if *controller == Controller::Ai {
            update_ai_paddle(paddle, &ball, config);
        }
    }
}
