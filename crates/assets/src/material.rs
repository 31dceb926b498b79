use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Named lighting-response coefficients for a surface.
///
/// Colors are per-channel reflectance in `[0, 1]`. `shininess` is the
/// specular exponent; larger values give tighter highlights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub tag: String,
    pub ambient_color: Vec3,
    pub ambient_strength: f32,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    pub shininess: f32,
}

/// Append-only list of materials looked up by tag.
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material. A repeated tag is kept but can never be found, since
    /// lookups return the first match.
    pub fn define(&mut self, material: Material) {
        if self.find(&material.tag).is_some() {
            tracing::warn!(
                "material tag {:?} already defined; the new definition is unreachable",
                material.tag
            );
        }
        self.materials.push(material);
    }

    pub fn find(&self, tag: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.tag == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn clear(&mut self) {
        self.materials.clear();
    }
}
