use crate::mips::{self, MipLevel};
use deskscene_assets::{
    DecodedImage, GraphicsContext, PixelFormat, TEXTURE_UNIT_CAPACITY, TextureId, UploadError,
};
use std::collections::BTreeMap;
use std::sync::Arc;

struct GpuTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    /// Level 0 pixels, kept until the mip chain has been generated.
    base: Option<MipLevel>,
}

/// wgpu-backed graphics context: one texture object per registry entry and
/// a fixed bank of texture units.
///
/// Textures are linear RGBA8 with a full mip chain, matching the 8-bit
/// unsigned-normalized formats the pixels were authored for. RGB input is
/// widened to RGBA on upload.
pub struct WgpuTextureBank {
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    sampler: wgpu::Sampler,
    layout: wgpu::BindGroupLayout,
    textures: BTreeMap<TextureId, GpuTexture>,
    units: [Option<TextureId>; TEXTURE_UNIT_CAPACITY],
    next_id: u32,
}

impl WgpuTextureBank {
    pub fn new(device: Arc<wgpu::Device>, queue: Arc<wgpu::Queue>) -> Self {
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("scene_texture_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_texture_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        Self {
            device,
            queue,
            sampler,
            layout,
            textures: BTreeMap::new(),
            units: [None; TEXTURE_UNIT_CAPACITY],
            next_id: 0,
        }
    }

    /// View of the texture bound to `unit`.
    pub fn view(&self, unit: u32) -> Option<&wgpu::TextureView> {
        let id = (*self.units.get(unit as usize)?)?;
        self.textures.get(&id).map(|t| &t.view)
    }

    /// Layout of [`bind_group`](Self::bind_group): texture at binding 0,
    /// the shared repeat/linear sampler at binding 1.
    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    /// Bind group sampling the texture bound to `unit`, or `None` for an
    /// empty unit.
    pub fn bind_group(&self, unit: u32) -> Option<wgpu::BindGroup> {
        let view = self.view(unit)?;
        Some(self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_texture_bind_group"),
            layout: &self.layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        }))
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    fn write_level(&self, texture: &wgpu::Texture, mip_level: u32, level: &MipLevel) {
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture,
                mip_level,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &level.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * level.width),
                rows_per_image: Some(level.height),
            },
            wgpu::Extent3d {
                width: level.width,
                height: level.height,
                depth_or_array_layers: 1,
            },
        );
    }
}

impl GraphicsContext for WgpuTextureBank {
    fn create_texture(
        &mut self,
        image: &DecodedImage,
        format: PixelFormat,
    ) -> Result<TextureId, UploadError> {
        let max = self.device.limits().max_texture_dimension_2d;
        if image.width > max || image.height > max {
            return Err(UploadError::TooLarge {
                width: image.width,
                height: image.height,
                max,
            });
        }
        let expected = image.width as usize * image.height as usize * format.channels() as usize;
        if image.width == 0 || image.height == 0 || image.pixels.len() != expected {
            return Err(UploadError::Rejected(format!(
                "{}x{} image with {} pixel bytes",
                image.width,
                image.height,
                image.pixels.len()
            )));
        }

        let base = MipLevel {
            pixels: mips::expand_to_rgba(&image.pixels, format),
            width: image.width,
            height: image.height,
        };

        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("scene_texture"),
            size: wgpu::Extent3d {
                width: base.width,
                height: base.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: mips::mip_level_count(base.width, base.height),
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        self.write_level(&texture, 0, &base);
        if let Some(error) = pollster::block_on(self.device.pop_error_scope()) {
            texture.destroy();
            return Err(UploadError::Rejected(error.to_string()));
        }
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        self.next_id += 1;
        let id = TextureId(self.next_id);
        self.textures.insert(
            id,
            GpuTexture {
                texture,
                view,
                base: Some(base),
            },
        );
        Ok(id)
    }

    fn generate_mipmaps(&mut self, id: TextureId) {
        let Some(base) = self.textures.get_mut(&id).and_then(|t| t.base.take()) else {
            return;
        };
        let Some(gpu) = self.textures.get(&id) else {
            return;
        };
        for (i, level) in mips::mip_chain(&base).iter().enumerate() {
            self.write_level(&gpu.texture, i as u32 + 1, level);
        }
    }

    fn bind_texture_unit(&mut self, unit: u32, id: TextureId) {
        match self.units.get_mut(unit as usize) {
            Some(slot) => *slot = Some(id),
            None => tracing::warn!("texture unit {unit} out of range; {id} not bound"),
        }
    }

    fn delete_texture(&mut self, id: TextureId) {
        if let Some(gpu) = self.textures.remove(&id) {
            gpu.texture.destroy();
        }
        for slot in self.units.iter_mut() {
            if *slot == Some(id) {
                *slot = None;
            }
        }
    }
}
