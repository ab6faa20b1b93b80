#![allow(dead_code)]

use game_core::*;
use std::collections::VecDeque;

/// Replays a fixed coin sequence, repeating it when exhausted
pub struct ScriptedCoins {
    script: Vec<bool>,
    queue: VecDeque<bool>,
}

impl ScriptedCoins {
    pub fn new(script: &[bool]) -> Self {
        Self {
            script: script.to_vec(),
            queue: script.iter().copied().collect(),
        }
    }

    /// Every relaunch heads down-right
    pub fn always_positive() -> Self {
        Self::new(&[true])
    }
}

impl RandomSource for ScriptedCoins {
    fn coin_flip(&mut self) -> bool {
        if self.queue.is_empty() {
            self.queue.extend(self.script.iter().copied());
        }
        self.queue.pop_front().unwrap_or(true)
    }
}

pub fn ball_mut(game: &mut Game) -> hecs::RefMut<'_, Ball> {
    let entity = game
        .world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(e, _)| e)
        .expect("match has a ball");
    game.world.get::<&mut Ball>(entity).expect("ball entity")
}

pub fn human_game() -> Game {
    Game::new(Opponent::Human, Box::new(ScriptedCoins::always_positive()))
}
