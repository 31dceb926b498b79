use crate::context::{GraphicsContext, TextureId};
use crate::decode::{ImageDecoder, PixelFormat};
use crate::error::{AssetError, DecodeError};
use std::fmt;
use std::path::Path;

/// One registry slot per hardware texture unit.
pub const TEXTURE_UNIT_CAPACITY: usize = 16;

/// Index of a registered texture, equal to the texture unit it is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureSlot(pub u32);

impl TextureSlot {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Value written to a sampler uniform to sample from this slot.
    pub fn sampler_unit(self) -> i32 {
        self.0 as i32
    }
}

impl fmt::Display for TextureSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit {}", self.0)
    }
}

/// A loaded texture and the tag it is looked up by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureEntry {
    pub tag: String,
    pub id: TextureId,
}

/// Bounded, ordered registry of tagged textures.
///
/// Registration order is slot order. Entries are only removed all at once by
/// [`TextureRegistry::teardown`].
#[derive(Debug, Default)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capacity(&self) -> usize {
        TEXTURE_UNIT_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered entries in slot order.
    pub fn entries(&self) -> &[TextureEntry] {
        &self.entries
    }

    /// Decode `path`, upload it, and register it under `tag`.
    ///
    /// Nothing is registered and no texture object is created unless every
    /// step succeeds.
    pub fn load_texture<C, D>(
        &mut self,
        ctx: &mut C,
        decoder: &D,
        path: impl AsRef<Path>,
        tag: impl Into<String>,
    ) -> Result<TextureSlot, AssetError>
    where
        C: GraphicsContext + ?Sized,
        D: ImageDecoder + ?Sized,
    {
        let path = path.as_ref();
        let tag = tag.into();

        if self.find_slot(&tag).is_some() {
            return Err(AssetError::DuplicateTag(tag));
        }
        if self.entries.len() >= TEXTURE_UNIT_CAPACITY {
            return Err(AssetError::CapacityExceeded {
                capacity: TEXTURE_UNIT_CAPACITY,
            });
        }

        let image = decoder.decode(path)?;
        let Some(format) = PixelFormat::from_channels(image.channels) else {
            return Err(DecodeError::UnsupportedChannels {
                path: path.to_path_buf(),
                channels: image.channels,
            }
            .into());
        };
        if image.width == 0 || image.height == 0 {
            return Err(DecodeError::Empty {
                path: path.to_path_buf(),
                width: image.width,
                height: image.height,
            }
            .into());
        }
        let expected = image.width as usize * image.height as usize * format.channels() as usize;
        if image.pixels.len() != expected {
            return Err(DecodeError::PixelCountMismatch {
                path: path.to_path_buf(),
                expected,
                actual: image.pixels.len(),
            }
            .into());
        }

        tracing::info!(
            "loaded image {}: {}x{}, {} channels",
            path.display(),
            image.width,
            image.height,
            image.channels
        );

        let id = ctx.create_texture(&image, format)?;
        ctx.generate_mipmaps(id);

        let slot = TextureSlot(self.entries.len() as u32);
        self.entries.push(TextureEntry { tag, id });
        Ok(slot)
    }

    /// Bind every entry to the texture unit matching its slot.
    ///
    /// Call once after all loads and before the first draw.
    pub fn bind_all<C: GraphicsContext + ?Sized>(&self, ctx: &mut C) {
        for (unit, entry) in self.entries.iter().enumerate() {
            ctx.bind_texture_unit(unit as u32, entry.id);
        }
    }

    /// Slot of the first entry tagged `tag`.
    pub fn find_slot(&self, tag: &str) -> Option<TextureSlot> {
        self.entries
            .iter()
            .position(|e| e.tag == tag)
            .map(|i| TextureSlot(i as u32))
    }

    /// Texture object of the first entry tagged `tag`. Diagnostics only;
    /// shaders sample by slot.
    pub fn find_id(&self, tag: &str) -> Option<TextureId> {
        self.entries.iter().find(|e| e.tag == tag).map(|e| e.id)
    }

    /// Like [`find_slot`](Self::find_slot) but a miss is an error.
    pub fn require(&self, tag: &str) -> Result<(TextureSlot, &TextureEntry), AssetError> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, e)| e.tag == tag)
            .map(|(i, e)| (TextureSlot(i as u32), e))
            .ok_or_else(|| AssetError::NotFound(tag.to_string()))
    }

    /// Delete every texture object and empty the registry.
    pub fn teardown<C: GraphicsContext + ?Sized>(&mut self, ctx: &mut C) {
        let count = self.entries.len();
        for entry in self.entries.drain(..) {
            ctx.delete_texture(entry.id);
        }
        tracing::info!("released {count} textures");
    }
}
