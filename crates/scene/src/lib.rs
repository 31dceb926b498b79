//! Scene facade: owns the texture registry, material catalog, and scene
//! description, and drives the shader broadcaster once per object per frame.
//!
//! # Invariants
//! - `render` issues no draw before `prepare` has succeeded.
//! - Each mesh kind is loaded at most once per preparation.
//! - Rendering the same prepared scene twice yields identical uniform writes
//!   and draw calls.

mod config;
mod desk;
mod error;
mod manager;
mod scene;

pub use config::SceneConfig;
pub use error::SceneError;
pub use manager::{
    DrawRecord, FrameReport, PrepareReport, RenderWarning, SceneManager, TextureFailure,
};
pub use scene::{Scene, SceneObject, Surface, TextureSource};

pub fn crate_info() -> &'static str {
    "deskscene-scene v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("scene"));
    }
}
