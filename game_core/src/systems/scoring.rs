use crate::{Ball, Config, Events, Score};
use hecs::World;

/// Check if ball left the playfield; returns true when a point was scored.
///
/// The AI defends the left edge, so a ball past it is the human's point.
/// The ball is left where it is; resetting the round is the caller's job.
pub fn check_score(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) -> bool {
    let mut scored = false;

    for (_entity, ball) in world.query_mut::<&Ball>() {
        if ball.pos.x < 0.0 {
            score.increment_human();
            events.human_scored = true;
            scored = true;
        } else if ball.pos.x > config.screen_width {
            score.increment_opponent();
            events.opponent_scored = true;
            scored = true;
        }
    }

    if scored {
        tracing::debug!(human = score.human, opponent = score.opponent, "point scored");
    }

    scored
}
