use deskscene_assets::Material;
use deskscene_common::{DrawTransform, MeshKind};
use deskscene_render::LightSource;
use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An image file registered under `tag` during preparation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureSource {
    /// Relative to [`crate::SceneConfig::texture_root`] unless absolute.
    pub path: PathBuf,
    pub tag: String,
}

impl TextureSource {
    pub fn new(path: impl Into<PathBuf>, tag: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            tag: tag.into(),
        }
    }
}

/// How an object's base color is chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    /// Sample the texture registered under `tag`, with UV coordinates scaled.
    Textured { tag: String, uv_scale: Vec2 },
    /// Solid RGBA color.
    Flat(Vec4),
}

/// One draw in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub label: String,
    pub mesh: MeshKind,
    pub transform: DrawTransform,
    pub surface: Surface,
    /// Without a material the previous object's material stays in effect.
    pub material: Option<String>,
}

impl SceneObject {
    pub fn textured(
        label: impl Into<String>,
        mesh: MeshKind,
        transform: DrawTransform,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            mesh,
            transform,
            surface: Surface::Textured {
                tag: tag.into(),
                uv_scale: Vec2::ONE,
            },
            material: None,
        }
    }

    pub fn flat(
        label: impl Into<String>,
        mesh: MeshKind,
        transform: DrawTransform,
        color: Vec4,
    ) -> Self {
        Self {
            label: label.into(),
            mesh,
            transform,
            surface: Surface::Flat(color),
            material: None,
        }
    }

    pub fn with_material(mut self, tag: impl Into<String>) -> Self {
        self.material = Some(tag.into());
        self
    }

    /// Only meaningful for textured surfaces; flat surfaces ignore it.
    pub fn with_uv_scale(mut self, scale: Vec2) -> Self {
        if let Surface::Textured { uv_scale, .. } = &mut self.surface {
            *uv_scale = scale;
        }
        self
    }

    /// Texture tag sampled by this object, if any.
    pub fn texture_tag(&self) -> Option<&str> {
        match &self.surface {
            Surface::Textured { tag, .. } => Some(tag),
            Surface::Flat(_) => None,
        }
    }
}

/// Everything the facade needs to prepare and draw a scene.
///
/// Objects are drawn in list order every frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub textures: Vec<TextureSource>,
    pub materials: Vec<Material>,
    pub lights: Vec<LightSource>,
    pub objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct mesh kinds in order of first use.
    pub fn mesh_kinds(&self) -> Vec<MeshKind> {
        let mut kinds = Vec::new();
        for object in &self.objects {
            if !kinds.contains(&object.mesh) {
                kinds.push(object.mesh);
            }
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32) -> DrawTransform {
        DrawTransform {
            translation: glam::Vec3::new(x, 0.0, 0.0),
            ..Default::default()
        }
    }

    #[test]
    fn mesh_kinds_in_first_use_order() {
        let mut scene = Scene::new();
        scene.objects = vec![
            SceneObject::flat("a", MeshKind::Box, at(0.0), Vec4::ONE),
            SceneObject::flat("b", MeshKind::Torus, at(1.0), Vec4::ONE),
            SceneObject::flat("c", MeshKind::Box, at(2.0), Vec4::ONE),
        ];
        assert_eq!(scene.mesh_kinds(), vec![MeshKind::Box, MeshKind::Torus]);
    }

    #[test]
    fn uv_scale_only_applies_to_textures() {
        let textured = SceneObject::textured("t", MeshKind::Plane, at(0.0), "wood")
            .with_uv_scale(Vec2::new(2.0, 3.0));
        assert_eq!(
            textured.surface,
            Surface::Textured {
                tag: "wood".into(),
                uv_scale: Vec2::new(2.0, 3.0)
            }
        );
        assert_eq!(textured.texture_tag(), Some("wood"));

        let flat = SceneObject::flat("f", MeshKind::Plane, at(0.0), Vec4::ONE)
            .with_uv_scale(Vec2::new(2.0, 3.0));
        assert_eq!(flat.surface, Surface::Flat(Vec4::ONE));
        assert_eq!(flat.texture_tag(), None);
    }

    #[test]
    fn serializes_as_json() {
        let object = SceneObject::textured("desk", MeshKind::Plane, at(-1.5), "black")
            .with_material("glass");
        let json = serde_json::to_value(&object).unwrap();
        assert_eq!(json["mesh"], "plane");
        assert_eq!(json["material"], "glass");
        assert_eq!(json["surface"]["textured"]["tag"], "black");

        let back: SceneObject = serde_json::from_value(json).unwrap();
        assert_eq!(back, object);
    }
}
