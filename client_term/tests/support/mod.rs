#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashSet;
use std::io;
use std::path::PathBuf;

use client_term::assets::{AssetLoader, TextureId};
use client_term::input::{Clock, InputProvider, Key};
use client_term::renderer::{Color, Surface};
use client_term::widgets::MenuButtons;
use client_term::AssetError;
use game_core::{Aabb, Params};
use glam::Vec2;

/// One frame's worth of keyboard and pointer state
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    down: HashSet<Key>,
    pressed: HashSet<Key>,
    pointer: Option<Vec2>,
    clicked: bool,
}

impl ScriptedInput {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Key went down this frame (and is held)
    pub fn press(mut self, key: Key) -> Self {
        self.pressed.insert(key);
        self.down.insert(key);
        self
    }

    pub fn hold(mut self, key: Key) -> Self {
        self.down.insert(key);
        self
    }

    pub fn hover(mut self, at: Vec2) -> Self {
        self.pointer = Some(at);
        self
    }

    pub fn click(mut self, at: Vec2) -> Self {
        self.pointer = Some(at);
        self.clicked = true;
        self
    }
}

impl InputProvider for ScriptedInput {
    fn is_key_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    fn pointer_position(&self) -> Option<Vec2> {
        self.pointer
    }

    fn is_pointer_pressed(&self) -> bool {
        self.clicked
    }
}

/// Clock that advances one frame per `now()` call
pub struct ManualClock {
    now: Cell<f64>,
    step: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(0.0),
            step: 1.0 / Params::TARGET_FPS as f64,
        }
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        let now = self.now.get() + self.step;
        self.now.set(now);
        now
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Circle { center: Vec2, radius: f32 },
    RoundedRect(Aabb),
    Gradient(Aabb),
    Line { from: Vec2, to: Vec2 },
    Text(String),
    Texture {
        id: TextureId,
        pos: Vec2,
        tint: Color,
    },
}

/// Surface that records what was drawn
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Circle { .. }))
            .count()
    }

    pub fn textures(&self) -> Vec<(TextureId, Color)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Texture { id, tint, .. } => Some((*id, *tint)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, _color: Color) {
        self.calls.push(DrawCall::Circle { center, radius });
    }

    fn fill_rounded_rect(&mut self, rect: Aabb, _roundness: f32, _color: Color) {
        self.calls.push(DrawCall::RoundedRect(rect));
    }

    fn fill_gradient_rect(&mut self, rect: Aabb, _corners: [Color; 4]) {
        self.calls.push(DrawCall::Gradient(rect));
    }

    fn line(&mut self, from: Vec2, to: Vec2, _color: Color) {
        self.calls.push(DrawCall::Line { from, to });
    }

    fn text(&mut self, text: &str, _pos: Vec2, _size: f32, _color: Color) {
        self.calls.push(DrawCall::Text(text.to_string()));
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size / 2.0
    }

    fn texture(&mut self, id: TextureId, pos: Vec2, tint: Color) {
        self.calls.push(DrawCall::Texture { id, pos, tint });
    }
}

/// Hands out texture ids; optionally fails on one name
#[derive(Debug, Default)]
pub struct FakeLoader {
    pub requested: Vec<String>,
    fail_on: Option<&'static str>,
}

impl FakeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(name: &'static str) -> Self {
        Self {
            requested: Vec::new(),
            fail_on: Some(name),
        }
    }
}

impl AssetLoader for FakeLoader {
    fn load_texture(&mut self, name: &str, _size: Vec2) -> Result<TextureId, AssetError> {
        if self.fail_on == Some(name) {
            return Err(AssetError::Unreadable {
                path: PathBuf::from(format!("assets/{name}.toml")),
                source: io::Error::new(io::ErrorKind::NotFound, "missing"),
            });
        }
        self.requested.push(name.to_string());
        Ok(TextureId(self.requested.len() - 1))
    }
}

pub fn buttons() -> MenuButtons {
    MenuButtons::load(&mut FakeLoader::new(), Params::PLAYFIELD_WIDTH).expect("fake textures")
}
