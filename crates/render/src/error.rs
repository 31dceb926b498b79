use serde::Serialize;

/// Draw-time and setup failures in the broadcaster. None of them are fatal
/// to a frame.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
pub enum RenderError {
    #[error("texture tag not registered: {0}")]
    TextureNotFound(String),
    #[error("material tag not defined: {0}")]
    MaterialNotFound(String),
    #[error("{given} lights given; the shader holds at most {capacity}")]
    TooManyLights { given: usize, capacity: usize },
}
