use crate::{Aabb, Ball, Events, Paddle, Side};
use hecs::World;

/// Bounce the ball off whichever paddle it overlaps.
///
/// The left paddle is tested first; when it hits, the right paddle is not
/// tested this frame. After a hit the ball is snapped flush against the
/// paddle face so the same contact cannot fire again next frame.
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle rectangles without holding borrows
    let mut left: Option<Aabb> = None;
    let mut right: Option<Aabb> = None;
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => left = Some(paddle.rect()),
            Side::Right => right = Some(paddle.rect()),
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let radius = ball.radius();

        if let Some(rect) = left.filter(|r| r.intersects_circle(ball.pos, radius)) {
            ball.bounce();
            ball.reposition(rect.max.x + radius, ball.pos.y);
            events.ball_hit_paddle = Some(Side::Left);
        } else if let Some(rect) = right.filter(|r| r.intersects_circle(ball.pos, radius)) {
            ball.bounce();
            ball.reposition(rect.min.x - radius, ball.pos.y);
            events.ball_hit_paddle = Some(Side::Right);
        }
    }
}
