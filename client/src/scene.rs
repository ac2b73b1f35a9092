//! Turns a game snapshot into the rectangles drawn this frame

use crate::text::{layout_text, Align};
use game_core::{Config, MatchState, Rect, Side, Snapshot};

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

const TITLE_SIZE: f32 = 48.0;
const PROMPT_SIZE: f32 = 24.0;
const SCORE_SIZE: f32 = 48.0;
const WINNER_SIZE: f32 = 32.0;
const RESTART_SIZE: f32 = 16.0;
/// Horizontal distance from the net to each score
const SCORE_GAP: f32 = 50.0;
/// Vertical distance between net dashes, top to top
const NET_STRIDE: f32 = 40.0;

/// One solid rectangle to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub rect: Rect,
    pub color: [f32; 4],
}

impl Quad {
    fn white(rect: Rect) -> Self {
        Self { rect, color: WHITE }
    }
}

pub fn build_scene(snapshot: &Snapshot, config: &Config) -> Vec<Quad> {
    let mut quads = Vec::new();
    match snapshot.state {
        MatchState::Home => home_screen(&mut quads, config),
        MatchState::Playing => {
            court(&mut quads, snapshot, config);
            quads.push(Quad::white(snapshot.ball));
        }
        MatchState::GameOver => {
            court(&mut quads, snapshot, config);
            if let Some(winner) = snapshot.winner {
                winner_banner(&mut quads, winner, config);
            }
        }
    }
    quads
}

fn push_text(quads: &mut Vec<Quad>, text: &str, x: f32, y: f32, size: f32, align: Align) {
    quads.extend(layout_text(text, x, y, size, align).into_iter().map(Quad::white));
}

fn home_screen(quads: &mut Vec<Quad>, config: &Config) {
    let center_x = config.screen_width / 2.0;
    let center_y = config.screen_height / 2.0;
    push_text(quads, "PONG", center_x, center_y - TITLE_SIZE, TITLE_SIZE, Align::Center);
    push_text(quads, "PRESS ANY KEY TO START", center_x, center_y, PROMPT_SIZE, Align::Center);
}

/// Boundaries, net, paddles and scores
fn court(quads: &mut Vec<Quad>, snapshot: &Snapshot, config: &Config) {
    let width = config.screen_width;
    let height = config.screen_height;
    let boundary = config.boundary_size;

    quads.push(Quad::white(Rect { x: 0.0, y: 0.0, w: width, h: boundary }));
    quads.push(Quad::white(Rect { x: 0.0, y: height - boundary, w: width, h: boundary }));

    let dash = config.ball_size;
    let mut y = boundary + dash;
    while y + dash <= height - boundary {
        quads.push(Quad::white(Rect { x: (width - dash) / 2.0, y, w: dash, h: dash }));
        y += NET_STRIDE;
    }

    quads.push(Quad::white(snapshot.left_paddle));
    quads.push(Quad::white(snapshot.right_paddle));

    let score_y = boundary + 20.0;
    let opponent = snapshot.score.opponent.to_string();
    let human = snapshot.score.human.to_string();
    push_text(quads, &opponent, width / 2.0 - SCORE_GAP, score_y, SCORE_SIZE, Align::Right);
    push_text(quads, &human, width / 2.0 + SCORE_GAP, score_y, SCORE_SIZE, Align::Left);
}

/// Anchor of the winner banner: centered on the winner's half
pub fn banner_anchor(winner: Side, config: &Config) -> (f32, f32) {
    let x = match winner {
        Side::Left => config.screen_width / 4.0,
        Side::Right => config.screen_width * 3.0 / 4.0,
    };
    (x, config.screen_height / 2.0 - WINNER_SIZE)
}

fn winner_banner(quads: &mut Vec<Quad>, winner: Side, config: &Config) {
    let (x, y) = banner_anchor(winner, config);
    push_text(quads, "WINNER!", x, y, WINNER_SIZE, Align::Center);
    push_text(quads, "PRESS R TO RESTART", x, y + WINNER_SIZE * 1.5, RESTART_SIZE, Align::Center);
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Game, KeyPress, Score};

    fn rects(quads: &[Quad]) -> Vec<Rect> {
        quads.iter().map(|q| q.rect).collect()
    }

    fn playing_snapshot() -> (Snapshot, Config) {
        let mut game = Game::new(3);
        game.key_pressed(KeyPress::Other);
        (game.snapshot(), game.config.clone())
    }

    #[test]
    fn test_home_screen_shows_only_text() {
        let game = Game::new(3);
        let snapshot = game.snapshot();
        let drawn = rects(&build_scene(&snapshot, &game.config));

        assert!(!drawn.is_empty());
        assert!(!drawn.contains(&snapshot.ball));
        assert!(!drawn.contains(&snapshot.left_paddle));
        assert!(!drawn.contains(&snapshot.right_paddle));
        assert!(drawn.iter().all(|r| r.x >= 0.0 && r.x + r.w <= game.config.screen_width));
    }

    #[test]
    fn test_playing_draws_court_and_ball() {
        let (snapshot, config) = playing_snapshot();
        let drawn = rects(&build_scene(&snapshot, &config));

        assert!(drawn.contains(&snapshot.ball));
        assert!(drawn.contains(&snapshot.left_paddle));
        assert!(drawn.contains(&snapshot.right_paddle));
        assert!(drawn.contains(&Rect { x: 0.0, y: 0.0, w: 800.0, h: 15.0 }));
        assert!(drawn.contains(&Rect { x: 0.0, y: 585.0, w: 800.0, h: 15.0 }));

        let net: Vec<_> = drawn.iter().filter(|r| r.x == 392.5 && r.w == 15.0).collect();
        assert!(!net.is_empty());
        assert!(net.iter().all(|r| r.y >= 15.0 && r.y + r.h <= 585.0));
    }

    #[test]
    fn test_scores_sit_either_side_of_the_net() {
        let (mut snapshot, config) = playing_snapshot();
        snapshot.score = Score { human: 0, opponent: 0 };
        let blank = build_scene(&snapshot, &config).len();

        // Score digits are the only text on the court
        let text: Vec<_> = rects(&build_scene(&snapshot, &config))
            .into_iter()
            .filter(|r| r.y >= 35.0 && r.y < 35.0 + SCORE_SIZE && r.h == SCORE_SIZE / 8.0)
            .collect();
        assert!(text.iter().any(|r| r.x + r.w <= 350.0), "opponent score left of net");
        assert!(text.iter().any(|r| r.x >= 450.0), "human score right of net");

        snapshot.score = Score { human: 10, opponent: 10 };
        assert!(build_scene(&snapshot, &config).len() > blank);
    }

    #[test]
    fn test_game_over_hides_ball_and_crowns_winner() {
        let (mut snapshot, config) = playing_snapshot();
        snapshot.state = MatchState::GameOver;
        snapshot.score = Score { human: 10, opponent: 4 };
        snapshot.winner = Some(Side::Right);

        let drawn = rects(&build_scene(&snapshot, &config));
        assert!(!drawn.contains(&snapshot.ball));
        assert!(drawn.contains(&snapshot.right_paddle));

        let (x, y) = banner_anchor(Side::Right, &config);
        let banner = layout_text("WINNER!", x, y, WINNER_SIZE, Align::Center);
        assert!(banner.iter().all(|r| drawn.contains(r)));
        assert!(banner.iter().all(|r| r.x >= config.screen_width / 2.0));

        snapshot.winner = Some(Side::Left);
        let drawn = rects(&build_scene(&snapshot, &config));
        let (x, y) = banner_anchor(Side::Left, &config);
        let banner = layout_text("WINNER!", x, y, WINNER_SIZE, Align::Center);
        assert!(banner.iter().all(|r| drawn.contains(r)));
        assert!(banner.iter().all(|r| r.x + r.w <= config.screen_width / 2.0));
    }
}
