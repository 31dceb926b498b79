use crate::decode::{DecodedImage, PixelFormat};
use crate::error::UploadError;
use std::collections::BTreeMap;
use std::fmt;

/// Opaque handle to a texture object owned by the graphics context.
///
/// Handles are never zero; zero is reserved as "no texture" by GL-style APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tex#{}", self.0)
    }
}

/// The slice of a graphics API the texture registry needs.
///
/// Implementations create textures with repeat wrapping and linear
/// filtering and leave no texture bound afterwards.
pub trait GraphicsContext {
    /// Upload pixels into a fresh texture object and return its handle.
    ///
    /// On error no texture object exists afterwards.
    fn create_texture(
        &mut self,
        image: &DecodedImage,
        format: PixelFormat,
    ) -> Result<TextureId, UploadError>;
    /// Build the full mip chain for a texture.
    fn generate_mipmaps(&mut self, id: TextureId);
    /// Make `id` the texture sampled through texture unit `unit`.
    fn bind_texture_unit(&mut self, unit: u32, id: TextureId);
    /// Release a texture object. Units that pointed at it become empty.
    fn delete_texture(&mut self, id: TextureId);
}

/// Bookkeeping for one texture held by [`HeadlessContext`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessTexture {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub mipmapped: bool,
}

/// Graphics context without a GPU.
///
/// Tracks texture objects and unit bindings in memory. Used by tests and the
/// command-line driver. Textures wider or taller than `max_dimension` are
/// refused, as a device with that limit would.
#[derive(Debug)]
pub struct HeadlessContext {
    next_id: u32,
    max_dimension: u32,
    textures: BTreeMap<TextureId, HeadlessTexture>,
    units: BTreeMap<u32, TextureId>,
}

impl Default for HeadlessContext {
    fn default() -> Self {
        Self {
            next_id: 0,
            max_dimension: u32::MAX,
            textures: BTreeMap::new(),
            units: BTreeMap::new(),
        }
    }
}

impl HeadlessContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_dimension(max_dimension: u32) -> Self {
        Self {
            max_dimension,
            ..Self::default()
        }
    }

    /// Number of texture objects currently alive.
    pub fn live_count(&self) -> usize {
        self.textures.len()
    }

    pub fn texture(&self, id: TextureId) -> Option<&HeadlessTexture> {
        self.textures.get(&id)
    }

    /// Texture currently bound to `unit`, if any.
    pub fn bound(&self, unit: u32) -> Option<TextureId> {
        self.units.get(&unit).copied()
    }
}

impl GraphicsContext for HeadlessContext {
    fn create_texture(
        &mut self,
        image: &DecodedImage,
        format: PixelFormat,
    ) -> Result<TextureId, UploadError> {
        if image.width > self.max_dimension || image.height > self.max_dimension {
            return Err(UploadError::TooLarge {
                width: image.width,
                height: image.height,
                max: self.max_dimension,
            });
        }
        self.next_id += 1;
        let id = TextureId(self.next_id);
        self.textures.insert(
            id,
            HeadlessTexture {
                width: image.width,
                height: image.height,
                format,
                mipmapped: false,
            },
        );
        Ok(id)
    }

    fn generate_mipmaps(&mut self, id: TextureId) {
        if let Some(tex) = self.textures.get_mut(&id) {
            tex.mipmapped = true;
        }
    }

    fn bind_texture_unit(&mut self, unit: u32, id: TextureId) {
        self.units.insert(unit, id);
    }

    fn delete_texture(&mut self, id: TextureId) {
        self.textures.remove(&id);
        self.units.retain(|_, bound| *bound != id);
    }
}
