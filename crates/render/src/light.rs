use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Number of light slots the shader declares.
pub const MAX_LIGHTS: usize = 4;

/// A fixed-position light configured once at scene preparation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightSource {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    /// Specular exponent of the light's highlight.
    pub focal_strength: f32,
    pub specular_intensity: f32,
}

/// Fields of one `lightSources[i]` struct in the shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightField {
    Position,
    AmbientColor,
    DiffuseColor,
    SpecularColor,
    FocalStrength,
    SpecularIntensity,
}

impl LightField {
    pub const ALL: [LightField; 6] = [
        LightField::Position,
        LightField::AmbientColor,
        LightField::DiffuseColor,
        LightField::SpecularColor,
        LightField::FocalStrength,
        LightField::SpecularIntensity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LightField::Position => "position",
            LightField::AmbientColor => "ambientColor",
            LightField::DiffuseColor => "diffuseColor",
            LightField::SpecularColor => "specularColor",
            LightField::FocalStrength => "focalStrength",
            LightField::SpecularIntensity => "specularIntensity",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}
