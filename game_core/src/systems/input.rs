use hecs::World;

use crate::components::*;
use crate::map::GameMap;

/// Apply each paddle's control policy for this frame
pub fn move_paddles(world: &mut World, keys: PaddleKeys, map: &GameMap) {
    // The AI tracks where the ball is before it moves this frame
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y)
        .unwrap_or(map.height / 2.0);

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let policy = paddle.policy(keys, ball_y);
        paddle.update(policy, map.height);
    }
}
