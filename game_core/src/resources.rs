use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub human: u8,    // Right paddle
    pub opponent: u8, // Left (AI) paddle
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_human(&mut self) {
        self.human += 1;
    }

    pub fn increment_opponent(&mut self) {
        self.opponent += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Side of the player that reached `win_score`, if any
    pub fn winner(&self, win_score: u8) -> Option<Side> {
        if self.opponent >= win_score {
            Some(Side::Left)
        } else if self.human >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub human_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.human_scored = false;
        self.opponent_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn scored(&self) -> bool {
        self.human_scored || self.opponent_scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_human() {
        let mut score = Score::new();
        assert_eq!(score.human, 0);
        score.increment_human();
        assert_eq!(score.human, 1);
        score.increment_human();
        assert_eq!(score.human, 2);
        assert_eq!(score.opponent, 0);
    }

    #[test]
    fn test_score_increment_opponent() {
        let mut score = Score::new();
        score.increment_opponent();
        assert_eq!(score.opponent, 1);
        assert_eq!(score.human, 0);
    }

    #[test]
    fn test_score_winner() {
        let mut score = Score::new();
        for _ in 0..9 {
            score.increment_human();
        }
        assert_eq!(score.winner(10), None, "No winner below threshold");

        score.increment_human();
        assert_eq!(score.winner(10), Some(Side::Right));

        let mut score = Score::new();
        for _ in 0..10 {
            score.increment_opponent();
        }
        assert_eq!(score.winner(10), Some(Side::Left));
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score { human: 4, opponent: 7 };
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.human_scored = true;
        events.opponent_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;
        assert!(events.scored());

        events.clear();

        assert!(!events.human_scored);
        assert!(!events.opponent_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert!(!events.scored());
    }
}
