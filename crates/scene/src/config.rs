use deskscene_render::DEFAULT_MISSING_TEXTURE_COLOR;
use glam::Vec4;
use std::path::PathBuf;

/// Runtime knobs for a [`crate::SceneManager`].
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Directory that relative texture paths are resolved against.
    pub texture_root: PathBuf,
    /// Flat color drawn in place of a texture whose tag is not registered.
    pub missing_texture_color: Vec4,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            texture_root: PathBuf::from("."),
            missing_texture_color: DEFAULT_MISSING_TEXTURE_COLOR,
        }
    }
}

impl SceneConfig {
    pub fn with_texture_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.texture_root = root.into();
        self
    }
}
