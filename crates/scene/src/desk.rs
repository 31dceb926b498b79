use crate::scene::{Scene, SceneObject, TextureSource};
use deskscene_assets::Material;
use deskscene_common::{DrawTransform, MeshKind};
use deskscene_render::LightSource;
use glam::{Vec3, Vec4};

const WHITE: Vec4 = Vec4::ONE;

fn place(scale: [f32; 3], rotation_degrees: [f32; 3], position: [f32; 3]) -> DrawTransform {
    DrawTransform::new(
        Vec3::from(scale),
        Vec3::from(rotation_degrees),
        Vec3::from(position),
    )
}

fn material(
    tag: &str,
    ambient: f32,
    strength: f32,
    diffuse: f32,
    specular: f32,
    shininess: f32,
) -> Material {
    Material {
        tag: tag.into(),
        ambient_color: Vec3::splat(ambient),
        ambient_strength: strength,
        diffuse_color: Vec3::splat(diffuse),
        specular_color: Vec3::splat(specular),
        shininess,
    }
}

fn light(
    position: [f32; 3],
    ambient: f32,
    diffuse: f32,
    specular: f32,
    focal: f32,
    intensity: f32,
) -> LightSource {
    LightSource {
        position: Vec3::from(position),
        ambient: Vec3::splat(ambient),
        diffuse: Vec3::splat(diffuse),
        specular: Vec3::splat(specular),
        focal_strength: focal,
        specular_intensity: intensity,
    }
}

/// Spiral binding ring on a notepad.
fn ring(label: &str, scale: [f32; 3], rotation: [f32; 3], position: [f32; 3]) -> SceneObject {
    SceneObject::textured(label, MeshKind::Torus, place(scale, rotation, position), "metal")
        .with_material("metal")
}

impl Scene {
    /// The study desk: clipboard, notepads, mugs, keyboard, laptop and pens
    /// on a black table top, lit by three fixed lights.
    pub fn desk() -> Self {
        let textures = vec![
            TextureSource::new("texture/Blacktable.jpg", "black"),
            TextureSource::new("texture/Metalclip.jpg", "metal"),
            TextureSource::new("texture/wood.jpg", "wood"),
            TextureSource::new("texture/keyboard.jpeg", "keyboard"),
            TextureSource::new("texture/Screen.jpeg", "Screen"),
            TextureSource::new("texture/MugBLACK.jpg", "Mug"),
            TextureSource::new("texture/Coffee.jpeg", "Coffee"),
            TextureSource::new("texture/PEN.jpg", "Pen"),
            TextureSource::new("texture/Screen2.jpg", "Screen2"),
        ];

        let materials = vec![
            material("metal", 0.2, 0.3, 0.2, 0.5, 22.0),
            material("wood", 0.1, 0.2, 0.3, 0.1, 0.3),
            material("glass", 0.4, 0.3, 0.3, 0.6, 85.0),
        ];

        let lights = vec![
            // above the table
            light([42.0, 25.0, 3.0], 0.1, 0.4, 0.2, 64.0, 0.4),
            // side fill
            light([-16.0, 6.0, -4.0], 0.05, 0.3, 0.15, 48.0, 0.3),
            // front
            light([16.0, 5.0, -10.0], 0.1, 0.3, 0.1, 32.0, 0.2),
        ];

        let small_ring = [0.15, 0.1, 0.15];
        let big_ring = [0.12, 0.1, 0.15];
        let laptop_scale = [2.5, 0.13, 4.01];
        let laptop_rotation = [-144.0, 97.5, 50.0];

        let objects = vec![
            SceneObject::textured(
                "desk",
                MeshKind::Plane,
                place([10.0, 1.0, 10.0], [20.0, 0.0, 0.0], [-1.5, 0.0, 0.0]),
                "black",
            )
            .with_material("glass"),
            // clipboard and its pad
            SceneObject::textured(
                "clipboard",
                MeshKind::Box,
                place([4.0, 0.2, 3.0], [20.0, 80.0, 0.0], [-4.65, -1.65, 5.0]),
                "wood",
            )
            .with_material("wood"),
            SceneObject::flat(
                "note pad",
                MeshKind::Box,
                place([3.5, 0.1, 2.75], [20.0, 80.0, 0.0], [-4.65, -1.5, 5.0]),
                WHITE,
            ),
            SceneObject::textured(
                "clipboard clip",
                MeshKind::Torus,
                place([1.0, 1.0, 0.5], [0.0, 170.0, 0.0], [-4.35, -1.75, 3.35]),
                "metal",
            )
            .with_material("metal"),
            ring("note pad ring 1", small_ring, [180.0, 0.0, 0.0], [-5.65, -0.95, 3.5]),
            ring("note pad ring 2", small_ring, [180.0, 0.0, 0.0], [-5.8, -1.22, 4.25]),
            ring("note pad ring 3", small_ring, [180.0, 0.0, 0.0], [-5.96, -1.53, 5.1]),
            ring("note pad ring 4", small_ring, [180.0, 0.0, 0.0], [-6.11, -1.8, 5.8]),
            ring("note pad ring 5", small_ring, [180.0, 0.0, 0.0], [-6.19, -1.98, 6.3]),
            // tall mug
            SceneObject::textured(
                "tall mug",
                MeshKind::Torus,
                place([0.45, 0.45, 7.0], [110.0, 0.0, 0.0], [-4.0, -0.52, 2.0]),
                "Mug",
            )
            .with_material("glass"),
            SceneObject::textured(
                "tall mug handle",
                MeshKind::Torus,
                place([0.45, 0.45, 0.3], [20.0, -30.0, 0.0], [-4.45, 0.15, 2.15]),
                "Mug",
            )
            .with_material("glass"),
            SceneObject::textured(
                "tall mug coffee",
                MeshKind::Cylinder,
                place([0.45, 1.0, 0.4], [20.0, 140.0, 0.0], [-4.0, -0.22, 2.15]),
                "Coffee",
            )
            .with_material("glass"),
            // small mug
            SceneObject::textured(
                "small mug",
                MeshKind::Torus,
                place([0.4, 0.4, 2.5], [110.0, 0.0, 0.0], [3.0, -0.52, 3.5]),
                "Mug",
            )
            .with_material("glass"),
            SceneObject::textured(
                "small mug coffee",
                MeshKind::Cylinder,
                place([0.3, 0.35, 0.45], [30.0, 0.0, 0.0], [3.0, -0.52, 3.5]),
                "Coffee",
            )
            .with_material("glass"),
            // big notepad
            SceneObject::flat(
                "big note pad",
                MeshKind::Box,
                place([4.0, 0.2, 3.25], [20.0, 80.0, 0.0], [0.5, -2.0, 5.8]),
                WHITE,
            ),
            SceneObject::textured(
                "big note pad backing",
                MeshKind::Box,
                place([4.01, 0.13, 3.4], [20.0, 80.0, 0.0], [0.5, -2.08, 5.8]),
                "wood",
            )
            .with_material("wood"),
            ring("big note pad ring 3", big_ring, [180.0, 100.0, 0.0], [0.8, -1.32, 4.0]),
            ring("big note pad ring 2", big_ring, [180.0, 100.0, 0.0], [0.15, -1.25, 3.9]),
            ring("big note pad ring 1", big_ring, [180.0, 94.0, 0.0], [-0.45, -1.23, 3.8]),
            ring("big note pad ring 4", big_ring, [180.0, 94.0, 0.0], [1.45, -1.33, 4.15]),
            ring("big note pad ring 5", big_ring, [180.0, 95.0, 0.0], [2.1, -1.33, 4.27]),
            SceneObject::textured(
                "keyboard",
                MeshKind::Box,
                place([4.01, 0.13, 2.1], [21.0, -9.0, 0.0], [-0.15, -0.65, 2.0]),
                "keyboard",
            )
            .with_material("glass"),
            // laptop lid: screen face, then a white back a hair behind it
            SceneObject::textured(
                "laptop screen",
                MeshKind::Box,
                place(laptop_scale, laptop_rotation, [0.1, 0.98, 1.2]),
                "Screen2",
            )
            .with_material("glass"),
            SceneObject::flat(
                "laptop back",
                MeshKind::Box,
                place(laptop_scale, laptop_rotation, [0.1, 0.98, 1.15]),
                WHITE,
            ),
            SceneObject::textured(
                "pen 1",
                MeshKind::Cylinder,
                place([1.5, 0.1, 0.1], [20.0, 120.0, 0.0], [0.6, -1.9, 5.7]),
                "Pen",
            )
            .with_material("glass"),
            SceneObject::textured(
                "pen 2",
                MeshKind::Cylinder,
                place([1.5, 0.1, 0.1], [20.0, 80.0, 0.0], [-2.6, -1.9, 5.7]),
                "Pen",
            )
            .with_material("glass"),
        ];

        Self {
            textures,
            materials,
            lights,
            objects,
        }
    }
}
