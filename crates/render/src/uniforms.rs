use crate::light::{LightField, MAX_LIGHTS};
use crate::names;
use crate::program::{ShaderProgram, UniformValue};
use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// `material` struct as laid out in the uniform buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MaterialUniform {
    pub ambient_color: [f32; 3],
    pub ambient_strength: f32,
    pub diffuse_color: [f32; 3],
    pub shininess: f32,
    pub specular_color: [f32; 3],
    _pad: f32,
}

/// One `lightSources[i]` entry as laid out in the uniform buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    pub focal_strength: f32,
    pub ambient_color: [f32; 3],
    pub specular_intensity: f32,
    pub diffuse_color: [f32; 3],
    _pad0: f32,
    pub specular_color: [f32; 3],
    _pad1: f32,
}

impl LightUniform {
    fn apply(&mut self, field: LightField, value: UniformValue) -> bool {
        match (field, value) {
            (LightField::Position, UniformValue::Vec3(v)) => self.position = v.to_array(),
            (LightField::AmbientColor, UniformValue::Vec3(v)) => self.ambient_color = v.to_array(),
            (LightField::DiffuseColor, UniformValue::Vec3(v)) => self.diffuse_color = v.to_array(),
            (LightField::SpecularColor, UniformValue::Vec3(v)) => {
                self.specular_color = v.to_array()
            }
            (LightField::FocalStrength, UniformValue::Float(f)) => self.focal_strength = f,
            (LightField::SpecularIntensity, UniformValue::Float(f)) => {
                self.specular_intensity = f
            }
            _ => return false,
        }
        true
    }
}

/// CPU-side image of the scene shader's uniform buffer.
///
/// Every field is 4-byte scalar data with explicit padding so the block can
/// be uploaded with `bytemuck::bytes_of`. Vec3 members are padded to 16
/// bytes by packing a scalar after them.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct UniformBlock {
    pub model: [[f32; 4]; 4],
    pub object_color: [f32; 4],
    pub uv_scale: [f32; 2],
    pub object_texture: i32,
    pub use_texture: u32,
    pub use_lighting: u32,
    _pad: [u32; 3],
    pub material: MaterialUniform,
    pub lights: [LightUniform; MAX_LIGHTS],
}

impl Default for UniformBlock {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            object_color: [1.0; 4],
            uv_scale: [1.0, 1.0],
            ..<Self as Zeroable>::zeroed()
        }
    }
}

impl UniformBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    fn apply(&mut self, name: &str, value: UniformValue) -> bool {
        use UniformValue as U;

        match (name, value) {
            (names::MODEL, U::Mat4(m)) => self.model = m.to_cols_array_2d(),
            (names::OBJECT_COLOR, U::Vec4(c)) => self.object_color = c.to_array(),
            (names::OBJECT_TEXTURE, U::Sampler(unit) | U::Int(unit)) => {
                self.object_texture = unit
            }
            (names::USE_TEXTURE, U::Bool(b)) => self.use_texture = b as u32,
            (names::USE_TEXTURE, U::Int(i)) => self.use_texture = (i != 0) as u32,
            (names::USE_LIGHTING, U::Bool(b)) => self.use_lighting = b as u32,
            (names::USE_LIGHTING, U::Int(i)) => self.use_lighting = (i != 0) as u32,
            (names::UV_SCALE, U::Vec2(uv)) => self.uv_scale = uv.to_array(),
            (names::MATERIAL_AMBIENT_COLOR, U::Vec3(c)) => {
                self.material.ambient_color = c.to_array()
            }
            (names::MATERIAL_AMBIENT_STRENGTH, U::Float(f)) => self.material.ambient_strength = f,
            (names::MATERIAL_DIFFUSE_COLOR, U::Vec3(c)) => {
                self.material.diffuse_color = c.to_array()
            }
            (names::MATERIAL_SPECULAR_COLOR, U::Vec3(c)) => {
                self.material.specular_color = c.to_array()
            }
            (names::MATERIAL_SHININESS, U::Float(f)) => self.material.shininess = f,
            _ => {
                return match names::parse_light(name) {
                    Some((index, field)) if index < MAX_LIGHTS => {
                        self.lights[index].apply(field, value)
                    }
                    _ => false,
                };
            }
        }
        true
    }
}

impl ShaderProgram for UniformBlock {
    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        if !self.apply(name, value) {
            tracing::debug!("uniform block ignored {name} = {value:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3, Vec4};

    #[test]
    fn layout_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<MaterialUniform>(), 48);
        assert_eq!(std::mem::size_of::<LightUniform>(), 64);
        assert_eq!(std::mem::size_of::<UniformBlock>(), 416);
        assert_eq!(UniformBlock::new().as_bytes().len() % 16, 0);
    }

    #[test]
    fn default_block() {
        let block = UniformBlock::default();
        assert_eq!(block.model, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(block.uv_scale, [1.0, 1.0]);
        assert_eq!(block.use_texture, 0);
        assert_eq!(block.use_lighting, 0);
    }

    #[test]
    fn routes_named_writes() {
        let mut block = UniformBlock::new();
        let model = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        block.set_uniform(names::MODEL, UniformValue::Mat4(model));
        block.set_uniform(names::OBJECT_TEXTURE, UniformValue::Sampler(5));
        block.set_uniform(names::USE_TEXTURE, UniformValue::Bool(true));
        block.set_uniform(names::UV_SCALE, UniformValue::Vec2(Vec2::new(2.0, 0.5)));
        block.set_uniform(names::MATERIAL_SHININESS, UniformValue::Float(85.0));
        block.set_uniform(
            names::OBJECT_COLOR,
            UniformValue::Vec4(Vec4::new(0.1, 0.2, 0.3, 1.0)),
        );

        assert_eq!(block.model, model.to_cols_array_2d());
        assert_eq!(block.object_texture, 5);
        assert_eq!(block.use_texture, 1);
        assert_eq!(block.uv_scale, [2.0, 0.5]);
        assert_eq!(block.material.shininess, 85.0);
        assert_eq!(block.object_color, [0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn routes_light_fields() {
        let mut block = UniformBlock::new();
        block.set_uniform(
            &names::light(2, LightField::Position),
            UniformValue::Vec3(Vec3::new(16.0, 5.0, -10.0)),
        );
        block.set_uniform(
            &names::light(2, LightField::SpecularIntensity),
            UniformValue::Float(0.2),
        );

        assert_eq!(block.lights[2].position, [16.0, 5.0, -10.0]);
        assert_eq!(block.lights[2].specular_intensity, 0.2);
        assert_eq!(block.lights[0], LightUniform::zeroed());
    }

    #[test]
    fn ignores_unknown_and_mistyped() {
        let mut block = UniformBlock::new();
        let before = block;
        block.set_uniform("notAUniform", UniformValue::Float(1.0));
        block.set_uniform(names::MODEL, UniformValue::Float(1.0));
        block.set_uniform(
            &names::light(MAX_LIGHTS, LightField::Position),
            UniformValue::Vec3(Vec3::ONE),
        );
        assert_eq!(block, before);
    }
}
