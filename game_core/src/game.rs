use crate::{
    create_ball, create_paddle, reset_round, step, Ball, Config, Controller, Events, GameRng,
    MatchAction, MatchFsm, MatchState, Paddle, PaddleIntent, Score, Side, TransitionResult,
};
use glam::Vec2;
use hecs::World;

/// Held movement keys sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
}

impl TickInput {
    /// Paddle direction; up wins when both keys are held
    pub fn dir(&self) -> i8 {
        if self.up {
            -1
        } else if self.down {
            1
        } else {
            0
        }
    }
}

/// Discrete key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Restart,
    Other,
}

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl From<&Ball> for Rect {
    fn from(ball: &Ball) -> Self {
        Self {
            x: ball.pos.x,
            y: ball.pos.y,
            w: ball.size,
            h: ball.size,
        }
    }
}

impl From<&Paddle> for Rect {
    fn from(paddle: &Paddle) -> Self {
        Self {
            x: paddle.x,
            y: paddle.y,
            w: paddle.width,
            h: paddle.height,
        }
    }
}

/// Read-only view of one tick, everything the renderer needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub state: MatchState,
    pub ball: Rect,
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub score: Score,
    pub winner: Option<Side>,
}

/// A local match against the AI
pub struct Game {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub fsm: MatchFsm,
}

impl Game {
    /// Build a match with paddles and a served ball, waiting on the home screen
    pub fn new(seed: u64) -> Self {
        let config = Config::new();
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, Side::Left, Controller::Ai, &config);
        create_paddle(&mut world, Side::Right, Controller::Human, &config);

        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, config.ball_size);
        ball.serve(&config, &mut rng);
        create_ball(&mut world, ball);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            fsm: MatchFsm::new(),
        }
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    /// Handle a key press. Returns the transition it caused, if the key
    /// means anything in the current state.
    pub fn key_pressed(&mut self, key: KeyPress) -> Option<TransitionResult> {
        let action = match (self.fsm.state(), key) {
            (MatchState::Home, _) => MatchAction::Start,
            (MatchState::GameOver, KeyPress::Restart) => MatchAction::Restart,
            _ => return None,
        };

        let result = self.fsm.transition(action);
        if result.success && action == MatchAction::Restart {
            self.restart_match();
        }
        Some(result)
    }

    /// Advance one tick. Nothing moves unless the match is being played.
    pub fn tick(&mut self, input: TickInput) -> &Events {
        if !self.fsm.is_playing() {
            self.events.clear();
            return &self.events;
        }

        for (_entity, intent) in self.world.query_mut::<&mut PaddleIntent>() {
            intent.dir = input.dir();
        }

        step(&mut self.world, &self.config, &mut self.score, &mut self.events);

        if self.events.scored() {
            match self.score.winner(self.config.win_score) {
                Some(winner) => {
                    tracing::info!(?winner, human = self.score.human, opponent = self.score.opponent, "match over");
                    self.fsm.transition(MatchAction::ScoreLimitReached);
                }
                None => reset_round(&mut self.world, &self.config, &mut self.rng),
            }
        }

        &self.events
    }

    /// Zero the score and start a new round
    pub fn restart_match(&mut self) {
        self.score.reset();
        reset_round(&mut self.world, &self.config, &mut self.rng);
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    pub fn snapshot(&self) -> Snapshot {
        let rect_of = |side| self.paddle(side).as_ref().map(Rect::from).unwrap_or_default();

        Snapshot {
            state: self.fsm.state(),
            ball: self.ball().as_ref().map(Rect::from).unwrap_or_default(),
            left_paddle: rect_of(Side::Left),
            right_paddle: rect_of(Side::Right),
            score: self.score,
            winner: self.score.winner(self.config.win_score),
        }
    }
}
