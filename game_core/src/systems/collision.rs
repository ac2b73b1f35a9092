use crate::{bounce_vector, move_ball, Ball, Config, Events, Paddle, Params, Side};
use glam::Vec2;
use hecs::World;

/// Which third of the paddle face the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceZone {
    Top,
    UpperMiddle,
    LowerMiddle,
    Bottom,
}

impl BounceZone {
    /// Select a zone from the hit offset as a fraction of paddle height.
    /// Offsets outside `[0, 1]` fall into the nearest end zone.
    pub fn from_offset(offset_percent: f32) -> Self {
        if offset_percent < Params::ZONE_TOP {
            BounceZone::Top
        } else if offset_percent < Params::ZONE_BOTTOM {
            if offset_percent < Params::ZONE_SPLIT {
                BounceZone::UpperMiddle
            } else {
                BounceZone::LowerMiddle
            }
        } else {
            BounceZone::Bottom
        }
    }

    /// Rebound velocity before the horizontal direction is applied.
    /// `x` is always positive; `y` carries the zone's vertical sign.
    pub fn rebound(self) -> Vec2 {
        match self {
            BounceZone::Top => {
                let v = bounce_vector(Params::STEEP_ANGLE, Params::STEEP_SPEED);
                Vec2::new(v.x, -v.y)
            }
            BounceZone::UpperMiddle => {
                let v = bounce_vector(Params::SHALLOW_ANGLE, Params::SHALLOW_SPEED);
                Vec2::new(v.x, -v.y)
            }
            BounceZone::LowerMiddle => bounce_vector(Params::SHALLOW_ANGLE, Params::SHALLOW_SPEED),
            BounceZone::Bottom => bounce_vector(Params::STEEP_ANGLE, Params::STEEP_SPEED),
        }
    }
}

/// Integrate the ball one tick, then resolve walls and paddles
pub fn advance_ball(world: &mut World, config: &Config, events: &mut Events) {
    move_ball(world);
    check_collisions(world, config, events);
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Paddles are read first so the ball query can borrow mutably.
    // Always resolved left then right.
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side == Side::Right);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, config) {
            events.ball_hit_wall = true;
        }

        // Both paddles are tested every tick, not just the one the ball is
        // heading for. A ball snapped out of one paddle can still register
        // against the other within the same tick.
        for paddle in &paddles {
            if bounce_off_paddle(ball, paddle) {
                tracing::trace!(side = ?paddle.side, vel = ?ball.vel, "ball hit paddle");
                events.ball_hit_paddle = true;
            }
        }
    }
}

/// Reverse vertical velocity when the ball crosses into a boundary band.
/// Position is left untouched.
pub fn bounce_off_walls(ball: &mut Ball, config: &Config) -> bool {
    let top = config.boundary_size;
    let bottom = config.screen_height - config.boundary_size;

    if ball.pos.y < top || ball.pos.y + ball.size > bottom {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// True when the ball's square overlaps the paddle rectangle (edges inclusive)
pub fn overlaps_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let horizontal = ball.pos.x <= paddle.x + paddle.width && ball.pos.x + ball.size >= paddle.x;
    let vertical = ball.pos.y + ball.size >= paddle.y && ball.pos.y <= paddle.y + paddle.height;
    horizontal && vertical
}

/// Rebound the ball off `paddle` using the zone table and push it clear of the face
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !overlaps_paddle(ball, paddle) {
        return false;
    }

    let dir = if ball.vel.x < 0.0 { 1.0 } else { -1.0 };
    let offset_percent = (ball.pos.y - paddle.y) / paddle.height;
    let rebound = BounceZone::from_offset(offset_percent).rebound();

    ball.vel = Vec2::new(dir * rebound.x, rebound.y);

    // Snap flush against the paddle so the next tick does not hit it again
    if ball.vel.x > 0.0 {
        ball.pos.x = paddle.x + paddle.width;
    } else {
        ball.pos.x = paddle.x - ball.size;
    }

    true
}
