pub mod draw;

use game_core::Aabb;
use glam::Vec2;

use crate::assets::TextureId;

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Linear blend, `t` in 0..=1
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Channel-wise multiply, used for texture tints
    pub fn modulate(self, tint: Color) -> Color {
        let mul = |a: u8, b: u8| ((a as u16 * b as u16) / 255) as u8;
        Color {
            r: mul(self.r, tint.r),
            g: mul(self.g, tint.g),
            b: mul(self.b, tint.b),
            a: mul(self.a, tint.a),
        }
    }
}

pub const ROSE: Color = Color::rgb(251, 12, 103);
pub const LIME: Color = Color::rgb(100, 255, 40);
pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
pub const AMBER: Color = Color::rgb(255, 202, 49);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const GRAY: Color = Color::rgb(130, 130, 130);
pub const DARK_GRAY: Color = Color::rgb(80, 80, 80);

/// Drawing sink the shell renders into
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_rounded_rect(&mut self, rect: Aabb, roundness: f32, color: Color);
    /// Corners in order: top-left, bottom-left, top-right, bottom-right
    fn fill_gradient_rect(&mut self, rect: Aabb, corners: [Color; 4]);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    /// `pos` is the top-left of the text box
    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
    /// Width of `text` in playfield units
    fn measure_text(&self, text: &str, size: f32) -> f32;
    fn texture(&mut self, texture: TextureId, pos: Vec2, tint: Color);
}
