use glam::Vec2;

use crate::{Aabb, RandomSource};

/// Which end of the playfield an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// 1-based player number shown to humans
    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// Ball component - the rally ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Move one frame and reflect off the top/bottom bounds.
    ///
    /// The step is fixed per frame. A ball whose edge reaches or crosses a
    /// bound gets its vertical speed flipped; it is not pushed back inside,
    /// so a fast ball may sit past the bound for one frame.
    /// Returns `true` when a wall bounce happened.
    pub fn advance(&mut self, arena_height: f32) -> bool {
        self.pos += self.vel;

        let hit_wall = self.pos.y + self.radius >= arena_height || self.pos.y - self.radius <= 0.0;
        if hit_wall {
            self.vel.y = -self.vel.y;
        }
        hit_wall
    }

    /// Reverse horizontal direction
    pub fn bounce(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn reposition(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    /// Reset ball to center with random diagonal direction
    pub fn reset_to_center<R>(&mut self, center: Vec2, speed: f32, rng: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        self.pos = center;
        let sx = if rng.coin_flip() { 1.0 } else { -1.0 };
        let sy = if rng.coin_flip() { 1.0 } else { -1.0 };
        self.vel = Vec2::new(sx * speed, sy * speed);
    }
}

/// Key pair a human paddle listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPair {
    /// W = up, S = down
    Ws,
    /// Arrow up / arrow down
    Arrows,
}

/// Snapshot of the held paddle keys for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleKeys {
    pub w: bool,
    pub s: bool,
    pub up: bool,
    pub down: bool,
}

impl PaddleKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// (up held, down held) for one key pair
    pub fn pair(&self, pair: KeyPair) -> (bool, bool) {
        match pair {
            KeyPair::Ws => (self.w, self.s),
            KeyPair::Arrows => (self.up, self.down),
        }
    }
}

/// Who drives a paddle for the whole match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Either key pair moves the paddle
    Dual,
    Single(KeyPair),
    Cpu,
}

/// How a paddle moves this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlPolicy {
    ManualDual(PaddleKeys),
    ManualSingle(KeyPair, PaddleKeys),
    AiTrack(f32),
}

/// Paddle component - a player's bat.
///
/// `pos` is the top-left corner. Only `y` changes after construction and it
/// always stays inside `[0, arena_height - height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub controller: Controller,
    pos: Vec2,
    size: Vec2,
    speed: f32,
}

impl Paddle {
    pub fn new(side: Side, controller: Controller, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            side,
            controller,
            pos,
            size,
            speed,
        }
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Build this frame's policy from the controller
    pub fn policy(&self, keys: PaddleKeys, ball_y: f32) -> ControlPolicy {
        match self.controller {
            Controller::Dual => ControlPolicy::ManualDual(keys),
            Controller::Single(pair) => ControlPolicy::ManualSingle(pair, keys),
            Controller::Cpu => ControlPolicy::AiTrack(ball_y),
        }
    }

    /// Move one frame under `policy`, then clamp into the arena
    pub fn update(&mut self, policy: ControlPolicy, arena_height: f32) {
        let (up, down) = match policy {
            ControlPolicy::ManualDual(keys) => (keys.w || keys.up, keys.s || keys.down),
            ControlPolicy::ManualSingle(pair, keys) => keys.pair(pair),
            ControlPolicy::AiTrack(ball_y) => {
                let center = self.center_y();
                (ball_y < center, ball_y > center)
            }
        };

        if up {
            self.pos.y -= self.speed;
        }
        if down {
            self.pos.y += self.speed;
        }

        let max_y = (arena_height - self.size.y).max(0.0);
        self.pos.y = self.pos.y.clamp(0.0, max_y);
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_corner_size(self.pos, self.size)
    }

    pub fn reset(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    const HEIGHT: f32 = 600.0;

    fn paddle(controller: Controller, y: f32) -> Paddle {
        Paddle::new(
            Side::Left,
            controller,
            Vec2::new(15.0, y),
            Vec2::new(25.0, 120.0),
            8.0,
        )
    }

    fn ws(w: bool, s: bool) -> PaddleKeys {
        PaddleKeys {
            w,
            s,
            ..PaddleKeys::default()
        }
    }

    #[test]
    fn test_ball_advance_from_center() {
        let mut ball = Ball::new(Vec2::new(540.0, 300.0), Vec2::new(7.0, 7.0), 15.0);
        let bounced = ball.advance(HEIGHT);
        assert_eq!(ball.pos, Vec2::new(547.0, 307.0));
        assert_eq!(ball.vel, Vec2::new(7.0, 7.0));
        assert!(!bounced, "No wall near the center");
    }

    #[test]
    fn test_ball_flips_at_top() {
        let mut ball = Ball::new(Vec2::new(300.0, 20.0), Vec2::new(7.0, -7.0), 15.0);
        assert!(ball.advance(HEIGHT), "Edge reaches y <= 0");
        assert_eq!(ball.vel.y, 7.0);
        // Not pushed back inside
        assert_eq!(ball.pos.y, 13.0);

        ball.advance(HEIGHT);
        assert_eq!(ball.pos.y, 20.0, "Ball heads back down after the flip");
    }

    #[test]
    fn test_ball_flips_at_bottom_when_edge_touches() {
        let mut ball = Ball::new(Vec2::new(300.0, 578.0), Vec2::new(-7.0, 7.0), 15.0);
        assert!(ball.advance(HEIGHT), "585 + 15 == 600 counts as a hit");
        assert_eq!(ball.vel, Vec2::new(-7.0, -7.0));
    }

    #[test]
    fn test_bounce_flips_only_horizontal() {
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), Vec2::new(-7.0, 7.0), 15.0);
        ball.bounce();
        assert_eq!(ball.vel, Vec2::new(7.0, 7.0));
        assert_eq!(ball.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_reposition_keeps_velocity() {
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), Vec2::new(-7.0, 7.0), 15.0);
        ball.reposition(55.0, 100.0);
        assert_eq!(ball.pos, Vec2::new(55.0, 100.0));
        assert_eq!(ball.vel, Vec2::new(-7.0, 7.0));
    }

    #[test]
    fn test_reset_to_center_uses_base_speed() {
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(2.0, 2.0), Vec2::new(-7.0, -7.0), 15.0);
        for _ in 0..20 {
            ball.reset_to_center(Vec2::new(540.0, 300.0), 7.0, &mut rng);
            assert_eq!(ball.pos, Vec2::new(540.0, 300.0));
            assert_eq!(ball.vel.x.abs(), 7.0);
            assert_eq!(ball.vel.y.abs(), 7.0);
        }
        assert_eq!(ball.radius(), 15.0, "Radius never changes");
    }

    #[test]
    fn test_manual_single_moves_with_held_keys() {
        let mut p = paddle(Controller::Single(KeyPair::Ws), 240.0);
        p.update(
            ControlPolicy::ManualSingle(KeyPair::Ws, ws(true, false)),
            HEIGHT,
        );
        assert_eq!(p.y(), 232.0);
        p.update(
            ControlPolicy::ManualSingle(KeyPair::Ws, ws(false, true)),
            HEIGHT,
        );
        assert_eq!(p.y(), 240.0);
    }

    #[test]
    fn test_manual_single_ignores_other_pair() {
        let mut p = paddle(Controller::Single(KeyPair::Arrows), 240.0);
        p.update(
            ControlPolicy::ManualSingle(KeyPair::Arrows, ws(true, false)),
            HEIGHT,
        );
        assert_eq!(p.y(), 240.0, "W does not drive an arrow-key paddle");
    }

    #[test]
    fn test_both_keys_cancel_out() {
        let mut p = paddle(Controller::Single(KeyPair::Ws), 240.0);
        p.update(
            ControlPolicy::ManualSingle(KeyPair::Ws, ws(true, true)),
            HEIGHT,
        );
        assert_eq!(p.y(), 240.0);
    }

    #[test]
    fn test_manual_dual_accepts_either_pair() {
        let mut p = paddle(Controller::Dual, 240.0);
        let arrows_down = PaddleKeys {
            down: true,
            ..PaddleKeys::default()
        };
        p.update(ControlPolicy::ManualDual(arrows_down), HEIGHT);
        assert_eq!(p.y(), 248.0);
        p.update(ControlPolicy::ManualDual(ws(true, false)), HEIGHT);
        assert_eq!(p.y(), 240.0);
    }

    #[test]
    fn test_ai_tracks_ball() {
        let mut p = paddle(Controller::Cpu, 240.0); // center at 300
        p.update(ControlPolicy::AiTrack(100.0), HEIGHT);
        assert_eq!(p.y(), 232.0, "Ball above center moves up");

        let mut p = paddle(Controller::Cpu, 240.0);
        p.update(ControlPolicy::AiTrack(500.0), HEIGHT);
        assert_eq!(p.y(), 248.0, "Ball below center moves down");

        let mut p = paddle(Controller::Cpu, 240.0);
        p.update(ControlPolicy::AiTrack(300.0), HEIGHT);
        assert_eq!(p.y(), 240.0, "Centered ball keeps paddle still");
    }

    #[test]
    fn test_paddle_clamped_at_edges() {
        let mut p = paddle(Controller::Single(KeyPair::Ws), 3.0);
        p.update(
            ControlPolicy::ManualSingle(KeyPair::Ws, ws(true, false)),
            HEIGHT,
        );
        assert_eq!(p.y(), 0.0);

        let mut p = paddle(Controller::Single(KeyPair::Ws), 476.0);
        p.update(
            ControlPolicy::ManualSingle(KeyPair::Ws, ws(false, true)),
            HEIGHT,
        );
        assert_eq!(p.y(), 480.0);
    }

    #[test]
    fn test_policy_from_controller() {
        let keys = ws(true, false);
        assert_eq!(
            paddle(Controller::Cpu, 0.0).policy(keys, 42.0),
            ControlPolicy::AiTrack(42.0)
        );
        assert_eq!(
            paddle(Controller::Dual, 0.0).policy(keys, 42.0),
            ControlPolicy::ManualDual(keys)
        );
        assert_eq!(
            paddle(Controller::Single(KeyPair::Arrows), 0.0).policy(keys, 42.0),
            ControlPolicy::ManualSingle(KeyPair::Arrows, keys)
        );
    }

    #[test]
    fn test_rect_and_reset() {
        let mut p = paddle(Controller::Cpu, 100.0);
        assert_eq!(
            p.rect(),
            Aabb::new(Vec2::new(15.0, 100.0), Vec2::new(40.0, 220.0))
        );
        p.reset(15.0, 240.0);
        assert_eq!(p.y(), 240.0);
        assert_eq!(p.x(), 15.0);
    }
}
