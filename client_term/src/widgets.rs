//! Textured menu buttons

use game_core::Aabb;
use glam::Vec2;
use tracing::debug;

use crate::assets::{AssetLoader, TextureId};
use crate::error::AssetError;
use crate::input::{InputProvider, Key};
use crate::renderer::{Surface, DARK_GRAY, GRAY, WHITE};

pub const BUTTON_SIZE: Vec2 = Vec2::new(300.0, 70.0);
const LABEL_SIZE: f32 = 20.0;

/// A clickable, textured button with a centred label
#[derive(Debug, Clone)]
pub struct Button {
    texture: TextureId,
    position: Vec2,
    size: Vec2,
    label: &'static str,
    hotkey: Option<Key>,
}

impl Button {
    pub fn new(texture: TextureId, position: Vec2, label: &'static str) -> Self {
        Self {
            texture,
            position,
            size: BUTTON_SIZE,
            label,
            hotkey: None,
        }
    }

    pub fn with_hotkey(mut self, key: Key) -> Self {
        self.hotkey = Some(key);
        self
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_corner_size(self.position, self.size)
    }

    pub fn is_hovered(&self, input: &dyn InputProvider) -> bool {
        input
            .pointer_position()
            .is_some_and(|pointer| self.rect().contains(pointer))
    }

    /// Pressed this frame, by pointer or hotkey
    pub fn is_clicked(&self, input: &dyn InputProvider) -> bool {
        let by_pointer = input.is_pointer_pressed() && self.is_hovered(input);
        let by_key = self.hotkey.is_some_and(|key| input.is_key_pressed(key));
        by_pointer || by_key
    }

    pub fn draw(&self, surface: &mut dyn Surface, input: &dyn InputProvider) {
        let (tint, text_color) = if self.is_hovered(input) {
            (GRAY, DARK_GRAY)
        } else {
            (WHITE, WHITE)
        };

        surface.texture(self.texture, self.position, tint);

        let text_width = surface.measure_text(self.label, LABEL_SIZE);
        let text_pos = Vec2::new(
            self.position.x + (self.size.x - text_width) / 2.0,
            self.position.y + (self.size.y - LABEL_SIZE) / 2.0,
        );
        surface.text(self.label, text_pos, LABEL_SIZE, text_color);
    }
}

/// The six buttons of the menu and settings screens
#[derive(Debug, Clone)]
pub struct MenuButtons {
    pub start: Button,
    pub settings: Button,
    pub exit: Button,
    pub user: Button,
    pub cpu: Button,
    pub back: Button,
}

impl MenuButtons {
    /// Load every button texture up front; any failure aborts startup
    pub fn load(loader: &mut dyn AssetLoader, arena_width: f32) -> Result<Self, AssetError> {
        let x = arena_width / 2.0 - BUTTON_SIZE.x / 2.0;
        let mut button = |texture: &str, y: f32, label: &'static str, key: Key| {
            let id = loader.load_texture(texture, BUTTON_SIZE)?;
            debug!(texture, label, "button texture loaded");
            Ok::<_, AssetError>(Button::new(id, Vec2::new(x, y), label).with_hotkey(key))
        };

        Ok(Self {
            start: button("bar1", 150.0, "Start", Key::Num1)?,
            settings: button("bar2", 250.0, "Settings", Key::Num2)?,
            exit: button("bar5", 350.0, "Exit", Key::Num3)?,
            user: button("bar4", 200.0, "User", Key::Num1)?,
            cpu: button("bar5", 300.0, "CPU", Key::Num2)?,
            back: button("bar5", 400.0, "Back", Key::Num3)?,
        })
    }

    pub fn menu(&self) -> [&Button; 3] {
        [&self.start, &self.settings, &self.exit]
    }

    pub fn settings_screen(&self) -> [&Button; 3] {
        [&self.user, &self.cpu, &self.back]
    }
}
