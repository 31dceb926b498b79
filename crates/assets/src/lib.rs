//! Asset side of the desk scene: tagged textures and named materials.
//!
//! Textures are decoded through an [`ImageDecoder`], uploaded through a
//! [`GraphicsContext`], and indexed by a human-readable tag. Each registered
//! texture owns one texture unit; the registration index is the unit number
//! the shader samples from.
//!
//! # Invariants
//! - At most [`TEXTURE_UNIT_CAPACITY`] textures are registered at once.
//! - A failed load, including one the graphics context rejects, leaves the
//!   registry and the context's texture count exactly as they were.
//! - Lookups are first-match in registration order.

mod context;
mod decode;
mod error;
mod material;
mod texture;

pub use context::{GraphicsContext, HeadlessContext, HeadlessTexture, TextureId};
pub use decode::{DecodedImage, FileDecoder, ImageDecoder, PixelFormat, PlaceholderDecoder};
pub use error::{AssetError, DecodeError, UploadError};
pub use material::{Material, MaterialCatalog};
pub use texture::{TEXTURE_UNIT_CAPACITY, TextureEntry, TextureRegistry, TextureSlot};

pub fn crate_info() -> &'static str {
    "deskscene-assets v0.1.0"
}
