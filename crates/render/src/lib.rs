//! Rendering adapter: turns per-draw intent into shader uniform writes.
//!
//! # Invariants
//! - The broadcaster keeps no copy of uniform state; the program holds
//!   whatever was written last.
//! - Callers write transform, then texture or color, then UV scale, then
//!   material, and only then ask the geometry provider to draw.
//! - A tag that fails to resolve never aborts a draw.
//!
//! The shader program and geometry provider are traits. [`RecordingProgram`]
//! and [`RecordingGeometry`] stand in for a GPU; [`UniformBlock`] is the
//! CPU-side image of the uniform buffer a GPU backend uploads.

mod broadcaster;
mod error;
mod geometry;
mod light;
pub mod names;
mod program;
mod uniforms;

pub use broadcaster::{DEFAULT_MISSING_TEXTURE_COLOR, MISSING_TEXTURE_SLOT, ShaderBroadcaster};
pub use error::RenderError;
pub use geometry::{GeometryProvider, RecordingGeometry};
pub use light::{LightField, LightSource, MAX_LIGHTS};
pub use program::{RecordingProgram, ShaderProgram, UniformValue};
pub use uniforms::{LightUniform, MaterialUniform, UniformBlock};

pub fn crate_info() -> &'static str {
    "deskscene-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
