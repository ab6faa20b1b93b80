use crate::{Ball, Config, Events, GameMap, MatchState, RandomSource, Side, Time};
use hecs::World;
use tracing::debug;

/// Check if ball left the arena (scoring)
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    state: &mut MatchState,
    time: &Time,
    rng: &mut dyn RandomSource,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x - ball.radius() < 0.0 {
            Side::Right
        } else if ball.pos.x + ball.radius() > map.width {
            Side::Left
        } else {
            continue;
        };

        if state.record_point(scorer, time.now) {
            events.scored(scorer);
            debug!(
                player = scorer.player_number(),
                left = state.score.left,
                right = state.score.right,
                "point scored"
            );
        }
        ball.reset_to_center(map.ball_spawn(), config.ball_speed, &mut *rng);
    }
}
