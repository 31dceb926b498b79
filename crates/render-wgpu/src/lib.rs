//! wgpu backend for the desk scene's graphics-context contract.
//!
//! [`WgpuTextureBank`] owns real GPU textures for the texture registry and
//! maps texture units to views. [`WgpuUniformBuffer`] uploads the CPU-side
//! [`UniformBlock`](deskscene_render::UniformBlock) the broadcaster writes.
//!
//! # Invariants
//! - Every texture is linear RGBA8 with a complete mip chain once
//!   `generate_mipmaps` has run.
//! - At most 16 texture units exist; binding beyond that is ignored.
//! - A texture the device cannot hold is refused with an error, never a
//!   device panic.

mod headless;
mod mips;
mod texture_bank;
mod uniform_buffer;

pub use headless::{GpuInitError, request_headless_device};
pub use mips::{MipLevel, downsample, expand_to_rgba, mip_chain, mip_level_count};
pub use texture_bank::WgpuTextureBank;
pub use uniform_buffer::WgpuUniformBuffer;
