use glam::Vec2;

use crate::error::AssetError;

/// Handle to a texture owned by the drawing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// Loads named textures for UI widgets
pub trait AssetLoader {
    /// Load `name`, scaled to `size` playfield units
    fn load_texture(&mut self, name: &str, size: Vec2) -> Result<TextureId, AssetError>;
}
