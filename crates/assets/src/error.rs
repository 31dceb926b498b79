use std::path::PathBuf;

/// Failures while turning an image file into raw pixels.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("could not load image {}: {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },
    #[error("image {} has {channels} channel(s); only 3 or 4 are supported", path.display())]
    UnsupportedChannels { path: PathBuf, channels: u8 },
    #[error("image {} is empty ({width}x{height})", path.display())]
    Empty {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    #[error("image {} carries {actual} pixel bytes; {expected} expected", path.display())]
    PixelCountMismatch {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

/// A graphics context refused to create a texture object.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("{width}x{height} texture exceeds the {max} px limit")]
    TooLarge { width: u32, height: u32, max: u32 },
    #[error("texture upload rejected: {0}")]
    Rejected(String),
}

/// Errors from texture registry and material catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error("texture registry is full ({capacity} slots)")]
    CapacityExceeded { capacity: usize },
    #[error("texture tag already registered: {0}")]
    DuplicateTag(String),
    #[error("tag not found: {0}")]
    NotFound(String),
}
