use game_core::{Aabb, Ball, Game, GameMap, MatchPhase, Paddle, Side};
use glam::Vec2;

use super::{Surface, AMBER, LIGHT_BLUE, LIME, ROSE, WHITE};
use crate::input::InputProvider;
use crate::widgets::Button;

const SCORE_SIZE: f32 = 80.0;
const MESSAGE_SIZE: f32 = 40.0;
const PADDLE_ROUNDNESS: f32 = 0.5;

pub fn draw_buttons(surface: &mut dyn Surface, buttons: &[&Button], input: &dyn InputProvider) {
    surface.clear(LIGHT_BLUE);
    for button in buttons {
        button.draw(surface, input);
    }
}

/// Playfield, winner banner or pause overlay, depending on the match phase
pub fn draw_match(surface: &mut dyn Surface, game: &Game) {
    surface.clear(LIGHT_BLUE);

    match game.phase() {
        MatchPhase::Paused => draw_centered_text(surface, &game.map, "Game Paused"),
        MatchPhase::GameOver => {
            if let Some(winner) = game.winner() {
                draw_victory(surface, &game.map, &winner_message(winner));
            }
        }
        phase => draw_playfield(surface, game, phase == MatchPhase::Rallying),
    }
}

pub fn winner_message(winner: Side) -> String {
    format!("Player {} Wins!", winner.player_number())
}

fn draw_playfield(surface: &mut dyn Surface, game: &Game, show_ball: bool) {
    let map = &game.map;

    if show_ball {
        for (_e, ball) in game.world.query::<&Ball>().iter() {
            surface.fill_circle(ball.pos, ball.radius(), AMBER);
        }
    }
    for (_e, paddle) in game.world.query::<&Paddle>().iter() {
        surface.fill_rounded_rect(paddle.rect(), PADDLE_ROUNDNESS, WHITE);
    }

    let half_width = map.width / 2.0;
    surface.line(
        Vec2::new(half_width, 0.0),
        Vec2::new(half_width, map.height),
        WHITE,
    );

    let score = game.score();
    surface.text(
        &score.left.to_string(),
        Vec2::new(map.width / 4.0 - 20.0, 20.0),
        SCORE_SIZE,
        WHITE,
    );
    surface.text(
        &score.right.to_string(),
        Vec2::new(3.0 * map.width / 4.0 - 20.0, 20.0),
        SCORE_SIZE,
        WHITE,
    );
}

fn draw_victory(surface: &mut dyn Surface, map: &GameMap, message: &str) {
    let center = map.ball_spawn();
    let banner = Aabb::from_corner_size(center - Vec2::new(200.0, 50.0), Vec2::new(400.0, 100.0));
    surface.fill_gradient_rect(banner, [ROSE, LIME, LIGHT_BLUE, AMBER]);
    draw_centered_text(surface, map, message);
}

fn draw_centered_text(surface: &mut dyn Surface, map: &GameMap, message: &str) {
    let width = surface.measure_text(message, MESSAGE_SIZE);
    let pos = Vec2::new(map.width / 2.0 - width / 2.0, map.height / 2.0 - 20.0);
    surface.text(message, pos, MESSAGE_SIZE, WHITE);
}
