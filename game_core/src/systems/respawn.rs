use crate::{Config, Events, MatchState, Time};
use tracing::debug;

/// Put the ball back in play once the miss cooldown has run out
pub fn release_ball(state: &mut MatchState, time: &Time, config: &Config, events: &mut Events) {
    if state.try_release_ball(time.now, config.miss_cooldown) {
        events.ball_released = true;
        debug!(now = time.now, "ball back in play");
    }
}
