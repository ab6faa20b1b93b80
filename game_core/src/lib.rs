pub mod components;
pub mod config;
pub mod game;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;
use tracing::info;

/// Run one frame of the deterministic rally simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    map: &GameMap,
    config: &Config,
    state: &mut MatchState,
    events: &mut Events,
    keys: PaddleKeys,
    rng: &mut dyn RandomSource,
) {
    // Clear events at start of frame
    events.clear();

    // Nothing moves while paused or once the match is decided
    if state.is_paused() || state.is_game_over() {
        return;
    }

    // 1. Move paddles (keys or AI)
    move_paddles(world, keys, map);

    // 2. Move ball, or keep it parked until the miss cooldown ends
    if state.ball_missed() {
        release_ball(state, time, config, events);
    } else {
        move_ball(world, map, events);
    }

    // 3. Check collisions (ball vs paddles)
    check_collisions(world, events);

    // 4. Check scoring (ball exited arena)
    check_scoring(world, map, config, state, time, rng, events);

    // 5. Check for a winner
    if let Some(winner) = state.check_winner() {
        events.winner = Some(winner);
        info!(
            winner = winner.player_number(),
            left = state.score.left,
            right = state.score.right,
            "match over"
        );
    }
}

/// Helper to create a paddle entity at its match-start position
pub fn create_paddle(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    side: Side,
    controller: Controller,
) -> hecs::Entity {
    let pos = map.paddle_spawn(side, config);
    let size = glam::Vec2::new(config.paddle_width, config.paddle_height);
    let paddle = Paddle::new(side, controller, pos, size, config.paddle_speed);
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    radius: f32,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}
