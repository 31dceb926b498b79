use crate::error::RenderError;
use crate::light::{LightField, LightSource, MAX_LIGHTS};
use crate::names;
use crate::program::{ShaderProgram, UniformValue};
use deskscene_assets::{MaterialCatalog, TextureRegistry, TextureSlot};
use deskscene_common::DrawTransform;
use glam::{Mat4, Vec2, Vec4};

/// Sampler value written when a texture tag does not resolve.
pub const MISSING_TEXTURE_SLOT: i32 = -1;

/// Flat color shown in place of a texture that failed to resolve.
pub const DEFAULT_MISSING_TEXTURE_COLOR: Vec4 = Vec4::new(1.0, 0.0, 1.0, 1.0);

/// Write-through session onto a shader program for one rendering pass.
///
/// Holds no uniform state of its own. Each call writes straight into the
/// program, so the state seen by a draw is whatever was written last.
pub struct ShaderBroadcaster<'a, P: ShaderProgram + ?Sized> {
    program: &'a mut P,
    textures: &'a TextureRegistry,
    materials: &'a MaterialCatalog,
    missing_texture_color: Vec4,
}

impl<'a, P: ShaderProgram + ?Sized> ShaderBroadcaster<'a, P> {
    pub fn new(
        program: &'a mut P,
        textures: &'a TextureRegistry,
        materials: &'a MaterialCatalog,
    ) -> Self {
        Self {
            program,
            textures,
            materials,
            missing_texture_color: DEFAULT_MISSING_TEXTURE_COLOR,
        }
    }

    pub fn with_missing_texture_color(mut self, color: Vec4) -> Self {
        self.missing_texture_color = color;
        self
    }

    /// Write the model matrix for `transform` and return it.
    pub fn set_transform(&mut self, transform: &DrawTransform) -> Mat4 {
        let model = transform.model_matrix();
        self.program
            .set_uniform(names::MODEL, UniformValue::Mat4(model));
        model
    }

    /// Turn texture sampling off and draw with a uniform color.
    pub fn set_flat_color(&mut self, color: Vec4) {
        self.program
            .set_uniform(names::USE_TEXTURE, UniformValue::Bool(false));
        self.program
            .set_uniform(names::OBJECT_COLOR, UniformValue::Vec4(color));
    }

    /// Sample from the texture registered under `tag`.
    ///
    /// On a miss the program is put into flat-color mode with the
    /// missing-texture color and an invalid sampler unit, and the miss is
    /// returned so the caller can report it. The draw can still proceed.
    pub fn set_texture(&mut self, tag: &str) -> Result<TextureSlot, RenderError> {
        match self.textures.find_slot(tag) {
            Some(slot) => {
                self.program
                    .set_uniform(names::USE_TEXTURE, UniformValue::Bool(true));
                self.program.set_uniform(
                    names::OBJECT_TEXTURE,
                    UniformValue::Sampler(slot.sampler_unit()),
                );
                Ok(slot)
            }
            None => {
                tracing::warn!("texture {tag:?} not registered; drawing fallback color");
                self.set_flat_color(self.missing_texture_color);
                self.program.set_uniform(
                    names::OBJECT_TEXTURE,
                    UniformValue::Sampler(MISSING_TEXTURE_SLOT),
                );
                Err(RenderError::TextureNotFound(tag.to_string()))
            }
        }
    }

    pub fn set_uv_scale(&mut self, scale: Vec2) {
        self.program
            .set_uniform(names::UV_SCALE, UniformValue::Vec2(scale));
    }

    /// Write the five coefficients of the material tagged `tag`.
    ///
    /// On a miss nothing is written; the previous material stays in effect.
    pub fn set_material(&mut self, tag: &str) -> Result<(), RenderError> {
        let Some(material) = self.materials.find(tag) else {
            tracing::warn!("material {tag:?} not defined; keeping previous material");
            return Err(RenderError::MaterialNotFound(tag.to_string()));
        };

        let p = &mut *self.program;
        p.set_uniform(
            names::MATERIAL_AMBIENT_COLOR,
            UniformValue::Vec3(material.ambient_color),
        );
        p.set_uniform(
            names::MATERIAL_AMBIENT_STRENGTH,
            UniformValue::Float(material.ambient_strength),
        );
        p.set_uniform(
            names::MATERIAL_DIFFUSE_COLOR,
            UniformValue::Vec3(material.diffuse_color),
        );
        p.set_uniform(
            names::MATERIAL_SPECULAR_COLOR,
            UniformValue::Vec3(material.specular_color),
        );
        p.set_uniform(
            names::MATERIAL_SHININESS,
            UniformValue::Float(material.shininess),
        );
        Ok(())
    }

    /// Enable lighting and write every light into `lightSources[i]`.
    pub fn configure_lights(&mut self, lights: &[LightSource]) -> Result<(), RenderError> {
        if lights.len() > MAX_LIGHTS {
            return Err(RenderError::TooManyLights {
                given: lights.len(),
                capacity: MAX_LIGHTS,
            });
        }

        self.program
            .set_uniform(names::USE_LIGHTING, UniformValue::Bool(true));
        for (i, light) in lights.iter().enumerate() {
            for field in LightField::ALL {
                let value = match field {
                    LightField::Position => UniformValue::Vec3(light.position),
                    LightField::AmbientColor => UniformValue::Vec3(light.ambient),
                    LightField::DiffuseColor => UniformValue::Vec3(light.diffuse),
                    LightField::SpecularColor => UniformValue::Vec3(light.specular),
                    LightField::FocalStrength => UniformValue::Float(light.focal_strength),
                    LightField::SpecularIntensity => {
                        UniformValue::Float(light.specular_intensity)
                    }
                };
                self.program.set_uniform(&names::light(i, field), value);
            }
        }
        tracing::debug!("configured {} lights", lights.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::RecordingProgram;
    use crate::uniforms::UniformBlock;
    use deskscene_assets::{HeadlessContext, Material, PlaceholderDecoder};
    use glam::Vec3;

    fn registry(tags: &[&str]) -> TextureRegistry {
        let mut ctx = HeadlessContext::new();
        let mut registry = TextureRegistry::new();
        for tag in tags {
            registry
                .load_texture(&mut ctx, &PlaceholderDecoder::default(), "unused.png", *tag)
                .unwrap();
        }
        registry
    }

    fn catalog() -> MaterialCatalog {
        let mut catalog = MaterialCatalog::new();
        catalog.define(Material {
            tag: "glass".into(),
            ambient_color: Vec3::splat(0.4),
            ambient_strength: 0.3,
            diffuse_color: Vec3::splat(0.3),
            specular_color: Vec3::splat(0.6),
            shininess: 85.0,
        });
        catalog
    }

    fn light(x: f32) -> LightSource {
        LightSource {
            position: Vec3::new(x, 6.0, -4.0),
            ambient: Vec3::splat(0.05),
            diffuse: Vec3::splat(0.3),
            specular: Vec3::splat(0.15),
            focal_strength: 48.0,
            specular_intensity: 0.3,
        }
    }

    #[test]
    fn identity_transform() {
        let textures = TextureRegistry::new();
        let materials = MaterialCatalog::new();
        let mut program = RecordingProgram::new();
        let mut b = ShaderBroadcaster::new(&mut program, &textures, &materials);

        let model = b.set_transform(&DrawTransform::default());
        assert_eq!(model, Mat4::IDENTITY);
        assert_eq!(
            program.get(names::MODEL),
            Some(UniformValue::Mat4(Mat4::IDENTITY))
        );
    }

    #[test]
    fn texture_hit_writes_slot() {
        let textures = registry(&["black", "metal", "wood"]);
        let materials = MaterialCatalog::new();
        let mut program = RecordingProgram::new();
        let mut b = ShaderBroadcaster::new(&mut program, &textures, &materials);

        assert_eq!(b.set_texture("wood"), Ok(TextureSlot(2)));
        assert_eq!(program.get(names::USE_TEXTURE), Some(UniformValue::Bool(true)));
        assert_eq!(
            program.get(names::OBJECT_TEXTURE),
            Some(UniformValue::Sampler(2))
        );
    }

    #[test]
    fn texture_miss_writes_fallback_and_reports() {
        let textures = registry(&["wood"]);
        let materials = MaterialCatalog::new();
        let mut program = RecordingProgram::new();
        let fallback = Vec4::new(0.5, 0.5, 0.5, 1.0);
        let mut b = ShaderBroadcaster::new(&mut program, &textures, &materials)
            .with_missing_texture_color(fallback);

        let err = b.set_texture("missing").unwrap_err();
        assert_eq!(err, RenderError::TextureNotFound("missing".into()));
        assert_eq!(
            program.get(names::OBJECT_TEXTURE),
            Some(UniformValue::Sampler(MISSING_TEXTURE_SLOT))
        );
        assert_eq!(program.get(names::USE_TEXTURE), Some(UniformValue::Bool(false)));
        assert_eq!(program.get(names::OBJECT_COLOR), Some(UniformValue::Vec4(fallback)));
    }

    #[test]
    fn flat_color_disables_sampling() {
        let textures = registry(&["wood"]);
        let materials = MaterialCatalog::new();
        let mut program = RecordingProgram::new();
        let mut b = ShaderBroadcaster::new(&mut program, &textures, &materials);

        b.set_texture("wood").unwrap();
        b.set_flat_color(Vec4::ONE);
        assert_eq!(program.get(names::USE_TEXTURE), Some(UniformValue::Bool(false)));
        assert_eq!(program.get(names::OBJECT_COLOR), Some(UniformValue::Vec4(Vec4::ONE)));
    }

    #[test]
    fn uv_scale_independent_of_texture_mode() {
        let textures = TextureRegistry::new();
        let materials = MaterialCatalog::new();
        let mut program = RecordingProgram::new();
        let mut b = ShaderBroadcaster::new(&mut program, &textures, &materials);

        b.set_uv_scale(Vec2::new(2.0, 3.0));
        let writes: Vec<&str> = program.writes().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(writes, vec![names::UV_SCALE]);
    }

    #[test]
    fn material_hit_writes_five_fields() {
        let textures = TextureRegistry::new();
        let materials = catalog();
        let mut program = RecordingProgram::new();
        let mut b = ShaderBroadcaster::new(&mut program, &textures, &materials);

        b.set_material("glass").unwrap();
        assert_eq!(program.writes().len(), 5);
        assert_eq!(
            program.get(names::MATERIAL_SHININESS),
            Some(UniformValue::Float(85.0))
        );
        assert_eq!(
            program.get(names::MATERIAL_SPECULAR_COLOR),
            Some(UniformValue::Vec3(Vec3::splat(0.6)))
        );
    }

    #[test]
    fn material_miss_keeps_previous() {
        let textures = TextureRegistry::new();
        let materials = catalog();
        let mut program = RecordingProgram::new();
        let mut b = ShaderBroadcaster::new(&mut program, &textures, &materials);

        b.set_material("glass").unwrap();
        let err = b.set_material("velvet").unwrap_err();
        assert_eq!(err, RenderError::MaterialNotFound("velvet".into()));
        assert_eq!(program.writes().len(), 5);
        assert_eq!(
            program.get(names::MATERIAL_SHININESS),
            Some(UniformValue::Float(85.0))
        );
    }

    #[test]
    fn lights_fill_indexed_uniforms() {
        let textures = TextureRegistry::new();
        let materials = MaterialCatalog::new();
        let mut program = RecordingProgram::new();
        let mut b = ShaderBroadcaster::new(&mut program, &textures, &materials);

        b.configure_lights(&[light(-16.0), light(16.0)]).unwrap();
        assert_eq!(program.get(names::USE_LIGHTING), Some(UniformValue::Bool(true)));
        assert_eq!(program.writes().len(), 1 + 2 * 6);
        assert_eq!(
            program.get("lightSources[1].position"),
            Some(UniformValue::Vec3(Vec3::new(16.0, 6.0, -4.0)))
        );
        assert_eq!(
            program.get("lightSources[0].focalStrength"),
            Some(UniformValue::Float(48.0))
        );
        assert_eq!(program.get("lightSources[2].position"), None);
    }

    #[test]
    fn too_many_lights_writes_nothing() {
        let textures = TextureRegistry::new();
        let materials = MaterialCatalog::new();
        let mut program = RecordingProgram::new();
        let mut b = ShaderBroadcaster::new(&mut program, &textures, &materials);

        let lights = vec![light(0.0); MAX_LIGHTS + 1];
        let err = b.configure_lights(&lights).unwrap_err();
        assert_eq!(
            err,
            RenderError::TooManyLights {
                given: 5,
                capacity: MAX_LIGHTS
            }
        );
        assert!(program.writes().is_empty());
    }

    #[test]
    fn drives_uniform_block() {
        let textures = registry(&["black", "metal"]);
        let materials = catalog();
        let mut block = UniformBlock::new();
        let mut b = ShaderBroadcaster::new(&mut block, &textures, &materials);

        let transform = DrawTransform::new(
            Vec3::new(10.0, 1.0, 10.0),
            Vec3::new(20.0, 0.0, 0.0),
            Vec3::new(-1.5, 0.0, 0.0),
        );
        let model = b.set_transform(&transform);
        b.set_texture("metal").unwrap();
        b.set_uv_scale(Vec2::ONE);
        b.set_material("glass").unwrap();
        b.configure_lights(&[light(42.0)]).unwrap();

        assert_eq!(block.model, model.to_cols_array_2d());
        assert_eq!(block.object_texture, 1);
        assert_eq!(block.use_texture, 1);
        assert_eq!(block.use_lighting, 1);
        assert_eq!(block.material.shininess, 85.0);
        assert_eq!(block.lights[0].position, [42.0, 6.0, -4.0]);
    }
}
