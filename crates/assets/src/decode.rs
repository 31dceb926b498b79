use crate::error::DecodeError;
use image::{DynamicImage, GenericImageView};
use std::path::Path;

/// Pixel layouts the registry accepts for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    Rgb8,
    Rgba8,
}

impl PixelFormat {
    /// Map a decoded channel count to an uploadable format.
    pub fn from_channels(channels: u8) -> Option<Self> {
        match channels {
            3 => Some(Self::Rgb8),
            4 => Some(Self::Rgba8),
            _ => None,
        }
    }

    pub fn channels(self) -> u8 {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }
}

/// Raw decoded image: row-major, 8 bits per channel, bottom row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

impl DecodedImage {
    pub fn format(&self) -> Option<PixelFormat> {
        PixelFormat::from_channels(self.channels)
    }
}

/// Turns a file path into raw pixels.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage, DecodeError>;
}

/// Decodes image files from disk with the `image` crate.
///
/// Images are flipped vertically so the first row in memory is the bottom
/// of the picture, which is what texture coordinates expect. The native
/// channel count is preserved so callers can reject layouts they do not
/// support.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileDecoder;

impl FileDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl ImageDecoder for FileDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage, DecodeError> {
        let img = image::open(path).map_err(|e| DecodeError::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(into_decoded(img.flipv()))
    }
}

fn into_decoded(img: DynamicImage) -> DecodedImage {
    let (width, height) = img.dimensions();
    let channels = img.color().channel_count();
    let pixels = match channels {
        1 => img.into_luma8().into_raw(),
        2 => img.into_luma_alpha8().into_raw(),
        3 => img.into_rgb8().into_raw(),
        _ => img.into_rgba8().into_raw(),
    };
    DecodedImage {
        pixels,
        width,
        height,
        channels,
    }
}

/// Decoder that ignores the path and returns a small RGBA checkerboard.
///
/// Lets the scene be prepared and rendered without any texture files on disk.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderDecoder {
    pub size: u32,
}

impl Default for PlaceholderDecoder {
    fn default() -> Self {
        Self { size: 4 }
    }
}

impl ImageDecoder for PlaceholderDecoder {
    fn decode(&self, _path: &Path) -> Result<DecodedImage, DecodeError> {
        let size = self.size.max(1);
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let v = if (x + y) % 2 == 0 { 255 } else { 64 };
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        Ok(DecodedImage {
            pixels,
            width: size,
            height: size,
            channels: 4,
        })
    }
}
