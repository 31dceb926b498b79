use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive mesh kinds the geometry provider knows how to load and draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshKind {
    Plane,
    Box,
    Cylinder,
    Torus,
}

impl MeshKind {
    pub const ALL: [MeshKind; 4] = [
        MeshKind::Plane,
        MeshKind::Box,
        MeshKind::Cylinder,
        MeshKind::Torus,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MeshKind::Plane => "plane",
            MeshKind::Box => "box",
            MeshKind::Cylinder => "cylinder",
            MeshKind::Torus => "torus",
        }
    }
}

impl fmt::Display for MeshKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-draw transform intent: scale, Euler rotation in degrees, translation.
///
/// Never stored by the renderer. It is turned into a model matrix right
/// before a draw and then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawTransform {
    pub scale: Vec3,
    /// Rotation about X, Y and Z in degrees, applied in that order.
    pub rotation_degrees: Vec3,
    pub translation: Vec3,
}

impl Default for DrawTransform {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            rotation_degrees: Vec3::ZERO,
            translation: Vec3::ZERO,
        }
    }
}

impl DrawTransform {
    pub fn new(scale: Vec3, rotation_degrees: Vec3, translation: Vec3) -> Self {
        Self {
            scale,
            rotation_degrees,
            translation,
        }
    }

    /// Compose `Translation * RotX * RotY * RotZ * Scale`.
    pub fn model_matrix(&self) -> Mat4 {
        let r = self.rotation_degrees;
        Mat4::from_translation(self.translation)
            * Mat4::from_rotation_x(r.x.to_radians())
            * Mat4::from_rotation_y(r.y.to_radians())
            * Mat4::from_rotation_z(r.z.to_radians())
            * Mat4::from_scale(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn default_transform_is_identity() {
        let m = DrawTransform::default().model_matrix();
        assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn explicit_identity_parameters() {
        let t = DrawTransform::new(Vec3::ONE, Vec3::ZERO, Vec3::ZERO);
        assert_eq!(t.model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn scale_then_yaw_then_translate() {
        let t = DrawTransform::new(
            Vec3::new(2.0, 1.0, 1.0),
            Vec3::new(0.0, 90.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        );
        // Hand-expanded T * RotY(90) * S.
        let expected = Mat4::from_cols(
            Vec4::new(0.0, 0.0, -2.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(1.0, 0.0, 0.0, 1.0),
        );
        assert!(t.model_matrix().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn rotation_order_is_x_then_y_then_z() {
        let t = DrawTransform::new(
            Vec3::ONE,
            Vec3::new(30.0, 45.0, 60.0),
            Vec3::ZERO,
        );
        let expected = Mat4::from_rotation_x(30f32.to_radians())
            * Mat4::from_rotation_y(45f32.to_radians())
            * Mat4::from_rotation_z(60f32.to_radians());
        assert!(t.model_matrix().abs_diff_eq(expected, 1e-5));

        let reversed = Mat4::from_rotation_z(60f32.to_radians())
            * Mat4::from_rotation_y(45f32.to_radians())
            * Mat4::from_rotation_x(30f32.to_radians());
        assert!(!t.model_matrix().abs_diff_eq(reversed, 1e-3));
    }

    #[test]
    fn translation_lands_in_last_column() {
        let t = DrawTransform::new(
            Vec3::splat(3.0),
            Vec3::new(20.0, 80.0, 0.0),
            Vec3::new(-4.65, -1.65, 5.0),
        );
        let m = t.model_matrix();
        assert!(m.w_axis.abs_diff_eq(Vec4::new(-4.65, -1.65, 5.0, 1.0), 1e-6));
    }

    #[test]
    fn mesh_kind_names() {
        assert_eq!(MeshKind::Torus.to_string(), "torus");
        assert_eq!(MeshKind::ALL.len(), 4);
    }
}
