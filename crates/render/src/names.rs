//! Uniform names shared by the broadcaster and every shader program.

use crate::light::LightField;

pub const MODEL: &str = "model";
pub const OBJECT_COLOR: &str = "objectColor";
pub const OBJECT_TEXTURE: &str = "objectTexture";
pub const USE_TEXTURE: &str = "bUseTexture";
pub const USE_LIGHTING: &str = "bUseLighting";
pub const UV_SCALE: &str = "UVscale";

pub const MATERIAL_AMBIENT_COLOR: &str = "material.ambientColor";
pub const MATERIAL_AMBIENT_STRENGTH: &str = "material.ambientStrength";
pub const MATERIAL_DIFFUSE_COLOR: &str = "material.diffuseColor";
pub const MATERIAL_SPECULAR_COLOR: &str = "material.specularColor";
pub const MATERIAL_SHININESS: &str = "material.shininess";

const LIGHT_ARRAY: &str = "lightSources";

/// `lightSources[index].field`
pub fn light(index: usize, field: LightField) -> String {
    format!("{LIGHT_ARRAY}[{index}].{}", field.name())
}

/// Inverse of [`light`].
pub fn parse_light(name: &str) -> Option<(usize, LightField)> {
    let rest = name.strip_prefix(LIGHT_ARRAY)?.strip_prefix('[')?;
    let (index, rest) = rest.split_once(']')?;
    let field = rest.strip_prefix('.')?;
    Some((index.parse().ok()?, LightField::from_name(field)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_names_round_trip() {
        let name = light(2, LightField::FocalStrength);
        assert_eq!(name, "lightSources[2].focalStrength");
        assert_eq!(parse_light(&name), Some((2, LightField::FocalStrength)));
    }

    #[test]
    fn malformed_light_names() {
        assert_eq!(parse_light("lightSources[x].position"), None);
        assert_eq!(parse_light("lightSources[0]position"), None);
        assert_eq!(parse_light("lightSources[0].colour"), None);
        assert_eq!(parse_light("material.shininess"), None);
    }
}
