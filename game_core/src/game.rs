//! A single match: the world, its match state and the per-frame entry point.

use glam::Vec2;
use hecs::{Entity, World};
use tracing::info;

use crate::{
    create_ball, create_paddle, step, Ball, Config, Controller, Events, GameMap, KeyPair,
    MatchPhase, MatchState, Paddle, PaddleKeys, RandomSource, Score, Side, Time,
};

/// Who plays the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    /// Second human on the arrow keys
    Human,
    /// Ball-tracking AI; the human paddle then takes either key pair
    Cpu,
}

impl Opponent {
    fn controllers(self) -> (Controller, Controller) {
        match self {
            Opponent::Human => (
                Controller::Single(KeyPair::Ws),
                Controller::Single(KeyPair::Arrows),
            ),
            Opponent::Cpu => (Controller::Dual, Controller::Cpu),
        }
    }
}

/// Owns everything a match mutates
pub struct Game {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub state: MatchState,
    pub events: Events,
    rng: Box<dyn RandomSource>,
    opponent: Opponent,
    ball: Entity,
}

impl Game {
    pub fn new(opponent: Opponent, rng: Box<dyn RandomSource>) -> Self {
        Self::with_config(opponent, Config::new(), rng)
    }

    pub fn with_config(opponent: Opponent, config: Config, rng: Box<dyn RandomSource>) -> Self {
        let map = GameMap::new();
        let mut world = World::new();

        let (left, right) = opponent.controllers();
        create_paddle(&mut world, &map, &config, Side::Left, left);
        create_paddle(&mut world, &map, &config, Side::Right, right);
        let ball = create_ball(
            &mut world,
            map.ball_spawn(),
            Vec2::splat(config.ball_speed),
            config.ball_radius,
        );

        let mut game = Self {
            world,
            time: Time::default(),
            map,
            state: MatchState::new(config.win_score),
            config,
            events: Events::new(),
            rng,
            opponent,
            ball,
        };
        game.reset();
        game
    }

    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    /// Simulate one frame at wall-clock time `now` (seconds)
    pub fn tick(&mut self, now: f64, keys: PaddleKeys) -> &Events {
        self.time = Time::new(self.time.frame + 1, now);
        step(
            &mut self.world,
            &self.time,
            &self.map,
            &self.config,
            &mut self.state,
            &mut self.events,
            keys,
            self.rng.as_mut(),
        );
        &self.events
    }

    /// Full match reset: scores zeroed, ball relaunched, paddles home
    pub fn reset(&mut self) {
        self.state.reset();
        self.events.clear();

        let spawn = self.map.ball_spawn();
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.reset_to_center(spawn, self.config.ball_speed, self.rng.as_mut());
        }

        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            let home = self.map.paddle_spawn(paddle.side, &self.config);
            paddle.reset(home.x, home.y);
        }

        info!(opponent = ?self.opponent, "match reset");
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase()
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    pub fn winner(&self) -> Option<Side> {
        self.state.winner()
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.state.set_paused(paused);
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.state.toggle_pause()
    }
}
