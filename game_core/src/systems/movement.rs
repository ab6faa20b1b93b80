use crate::{Ball, Events, GameMap};
use hecs::World;

/// Move ball one frame, reflecting off the top and bottom walls
pub fn move_ball(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(map.height) {
            events.ball_hit_wall = true;
        }
    }
}
