use crate::Side;

/// Time resource, sampled once per frame from the host clock
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub frame: u64, // Frames simulated so far
    pub now: f64,   // Monotonic seconds
}

impl Time {
    pub fn new(frame: u64, now: f64) -> Self {
        Self { frame, now }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Player 1
    pub right: u8, // Player 2
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Observable phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Ball in play
    Rallying,
    /// Ball parked at center after a point
    BallMissedCooldown,
    /// Simulation suspended
    Paused,
    /// A side reached the winning score
    GameOver,
}

/// Scores, miss cooldown, pause and game-over flags for one match
#[derive(Debug, Clone)]
pub struct MatchState {
    pub score: Score,
    pub winning_score: u8,
    missed_at: Option<f64>,
    game_over: bool,
    paused: bool,
}

impl MatchState {
    pub fn new(winning_score: u8) -> Self {
        Self {
            score: Score::new(),
            winning_score,
            missed_at: None,
            game_over: false,
            paused: false,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        if self.paused {
            MatchPhase::Paused
        } else if self.game_over {
            MatchPhase::GameOver
        } else if self.missed_at.is_some() {
            MatchPhase::BallMissedCooldown
        } else {
            MatchPhase::Rallying
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn ball_missed(&self) -> bool {
        self.missed_at.is_some()
    }

    /// Timestamp of the last miss, while the cooldown is running
    pub fn missed_at(&self) -> Option<f64> {
        self.missed_at
    }

    /// Award a point and start the miss cooldown.
    ///
    /// Ignored once the match is over.
    pub fn record_point(&mut self, scorer: Side, now: f64) -> bool {
        if self.game_over {
            return false;
        }
        self.score.increment(scorer);
        self.missed_at = Some(now);
        true
    }

    /// End the cooldown once more than `delay` seconds have passed
    pub fn try_release_ball(&mut self, now: f64, delay: f64) -> bool {
        match self.missed_at {
            Some(at) if now - at > delay => {
                self.missed_at = None;
                true
            }
            _ => false,
        }
    }

    /// Latch game over when a side reached the winning score.
    ///
    /// Returns the winner only on the frame the match ends.
    pub fn check_winner(&mut self) -> Option<Side> {
        if self.game_over {
            return None;
        }
        let winner = self.score.has_winner(self.winning_score)?;
        self.game_over = true;
        Some(winner)
    }

    pub fn winner(&self) -> Option<Side> {
        if self.game_over {
            self.score.has_winner(self.winning_score)
        } else {
            None
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Zero the scores and clear every flag
    pub fn reset(&mut self) {
        *self = Self::new(self.winning_score);
    }
}

/// Source of the random bits used to relaunch the ball
pub trait RandomSource {
    /// `true` or `false` with equal probability
    fn coin_flip(&mut self) -> bool;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for GameRng {
    fn coin_flip(&mut self) -> bool {
        use rand::Rng;
        self.0.gen_bool(0.5)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: Option<Side>,
    pub ball_hit_wall: bool,
    pub ball_released: bool,
    pub winner: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Left);
        score.increment(Side::Left);
        score.increment(Side::Right);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 1);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..4 {
            score.increment(Side::Right);
        }
        assert_eq!(score.has_winner(5), None, "No winner below threshold");
        score.increment(Side::Right);
        assert_eq!(
            score.has_winner(5),
            Some(Side::Right),
            "Right player should win at 5"
        );
    }

    #[test]
    fn test_phase_progression() {
        let mut state = MatchState::new(5);
        assert_eq!(state.phase(), MatchPhase::Rallying);

        assert!(state.record_point(Side::Left, 10.0));
        assert_eq!(state.phase(), MatchPhase::BallMissedCooldown);
        assert_eq!(state.missed_at(), Some(10.0));

        assert!(
            !state.try_release_ball(12.0, 2.0),
            "Exactly 2s is not enough"
        );
        assert!(state.try_release_ball(12.01, 2.0));
        assert_eq!(state.phase(), MatchPhase::Rallying);
    }

    #[test]
    fn test_pause_returns_to_prior_phase() {
        let mut state = MatchState::new(5);
        state.record_point(Side::Right, 1.0);
        assert!(state.toggle_pause());
        assert_eq!(state.phase(), MatchPhase::Paused);
        assert!(!state.toggle_pause());
        assert_eq!(state.phase(), MatchPhase::BallMissedCooldown);
    }

    #[test]
    fn test_game_over_latches_and_blocks_points() {
        let mut state = MatchState::new(5);
        for i in 0..5 {
            state.record_point(Side::Left, i as f64);
        }
        assert_eq!(state.check_winner(), Some(Side::Left));
        assert_eq!(state.check_winner(), None, "Reported only once");
        assert!(state.is_game_over());
        assert_eq!(state.winner(), Some(Side::Left));

        assert!(!state.record_point(Side::Right, 9.0));
        assert_eq!(state.score.right, 0);
        assert_eq!(state.phase(), MatchPhase::GameOver);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = MatchState::new(5);
        for _ in 0..5 {
            state.record_point(Side::Right, 0.0);
        }
        state.check_winner();
        state.set_paused(true);

        state.reset();
        assert_eq!(state.score, Score::new());
        assert_eq!(state.phase(), MatchPhase::Rallying);
        assert_eq!(state.winning_score, 5);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.scored(Side::Left);
        events.ball_hit_paddle = Some(Side::Right);
        events.ball_hit_wall = true;
        events.winner = Some(Side::Left);

        events.clear();

        assert_eq!(events, Events::default());
    }

    #[test]
    fn test_game_rng_is_deterministic_per_seed() {
        let mut a = GameRng::new(99);
        let mut b = GameRng::new(99);
        let flips_a: Vec<bool> = (0..16).map(|_| a.coin_flip()).collect();
        let flips_b: Vec<bool> = (0..16).map(|_| b.coin_flip()).collect();
        assert_eq!(flips_a, flips_b);
    }
}
