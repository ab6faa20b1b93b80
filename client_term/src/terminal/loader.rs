//! Button textures as `<name>.toml` files: an RGB fill and an optional border

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::Deserialize;
use tracing::debug;

use crate::assets::{AssetLoader, TextureId};
use crate::error::AssetError;
use crate::renderer::Color;

const SKIN_EXTENSION: &str = "toml";

/// On-disk skin description
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SkinFile {
    fill: [u8; 3],
    border: Option<[u8; 3]>,
}

/// A flat texture the terminal can draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skin {
    pub fill: Color,
    pub border: Option<Color>,
    pub size: Vec2,
}

/// Reads `<dir>/<name>.toml` skins
pub struct SkinLoader {
    dir: PathBuf,
    skins: Vec<Skin>,
}

impl SkinLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            skins: Vec::new(),
        }
    }

    /// Loaded skins, indexed by `TextureId`
    pub fn into_skins(self) -> Vec<Skin> {
        self.skins
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name).with_extension(SKIN_EXTENSION)
    }
}

impl AssetLoader for SkinLoader {
    fn load_texture(&mut self, name: &str, size: Vec2) -> Result<TextureId, AssetError> {
        let path = self.path_for(name);
        let source = fs::read_to_string(&path).map_err(|source| AssetError::Unreadable {
            path: path.clone(),
            source,
        })?;
        let skin = parse_skin(&path, &source, size)?;

        let id = TextureId(self.skins.len());
        self.skins.push(skin);
        debug!(path = %path.display(), id = id.0, "skin loaded");
        Ok(id)
    }
}

pub fn parse_skin(path: &Path, source: &str, size: Vec2) -> Result<Skin, AssetError> {
    let file: SkinFile = toml::from_str(source).map_err(|source| AssetError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    let rgb = |[r, g, b]: [u8; 3]| Color::rgb(r, g, b);
    Ok(Skin {
        fill: rgb(file.fill),
        border: file.border.map(rgb),
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> PathBuf {
        PathBuf::from("assets/bar1.toml")
    }

    #[test]
    fn test_parse_fill_and_border() {
        let source = "# start button\nfill = [251, 12, 103]\nborder = [255, 255, 255]\n";
        let skin = parse_skin(&path(), source, Vec2::ONE).unwrap();
        assert_eq!(skin.fill, Color::rgb(251, 12, 103));
        assert_eq!(skin.border, Some(Color::rgb(255, 255, 255)));
    }

    #[test]
    fn test_comments_need_no_space() {
        let skin = parse_skin(&path(), "#start\nfill = [100, 255, 40]\n", Vec2::ONE).unwrap();
        assert_eq!(skin.fill, Color::rgb(100, 255, 40));
        assert_eq!(skin.border, None, "Border is optional");
    }

    #[test]
    fn test_missing_fill_is_rejected() {
        let err = parse_skin(&path(), "border = [1, 2, 3]\n", Vec2::ONE).unwrap_err();
        assert!(matches!(err, AssetError::Malformed { .. }));
    }

    #[test]
    fn test_out_of_range_channel_names_the_file() {
        let err = parse_skin(&path(), "fill = [256, 0, 0]\n", Vec2::ONE).unwrap_err();
        assert!(matches!(err, AssetError::Malformed { .. }));
        assert!(err.to_string().contains("bar1.toml"));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let mut loader = SkinLoader::new("definitely/not/here");
        let err = loader.load_texture("bar1", Vec2::ONE).unwrap_err();
        assert!(matches!(err, AssetError::Unreadable { .. }));
    }

    #[test]
    fn test_shipped_skins_parse() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../assets");
        let mut loader = SkinLoader::new(dir);
        for name in ["bar1", "bar2", "bar4", "bar5"] {
            loader.load_texture(name, Vec2::ONE).unwrap();
        }
        assert_eq!(loader.into_skins().len(), 4);
    }
}
