use crate::config::SceneConfig;
use crate::error::SceneError;
use crate::scene::{Scene, Surface};
use deskscene_assets::{GraphicsContext, ImageDecoder, MaterialCatalog, TextureRegistry};
use deskscene_common::MeshKind;
use deskscene_render::{
    GeometryProvider, MAX_LIGHTS, RenderError, ShaderBroadcaster, ShaderProgram,
};
use glam::Mat4;
use serde::Serialize;

/// A texture that could not be registered during preparation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextureFailure {
    pub tag: String,
    pub reason: String,
}

/// Outcome of [`SceneManager::prepare`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PrepareReport {
    pub textures_loaded: usize,
    pub failed_textures: Vec<TextureFailure>,
    pub materials: usize,
    pub lights: usize,
    /// Mesh kinds loaded, in load order.
    pub meshes: Vec<MeshKind>,
}

/// One draw call and the state it was issued with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawRecord {
    pub label: String,
    pub mesh: MeshKind,
    pub model: Mat4,
    pub texture: Option<String>,
    pub material: Option<String>,
}

/// A lookup miss while drawing `object`. The object is still drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderWarning {
    pub object: String,
    pub error: RenderError,
}

/// Everything one [`SceneManager::render`] call did, in issue order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrameReport {
    pub draws: Vec<DrawRecord>,
    pub warnings: Vec<RenderWarning>,
}

/// Owns the scene's resources and turns the scene description into shader
/// writes and draw calls.
///
/// Lifecycle: `prepare` once, `render` any number of times, `teardown` to
/// release textures. A torn-down manager can be prepared again.
pub struct SceneManager<C, G> {
    config: SceneConfig,
    scene: Scene,
    textures: TextureRegistry,
    materials: MaterialCatalog,
    context: C,
    geometry: G,
    prepared: bool,
}

impl<C: GraphicsContext, G: GeometryProvider> SceneManager<C, G> {
    pub fn new(scene: Scene, config: SceneConfig, context: C, geometry: G) -> Self {
        Self {
            config,
            scene,
            textures: TextureRegistry::new(),
            materials: MaterialCatalog::new(),
            context,
            geometry,
            prepared: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialCatalog {
        &self.materials
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Load textures, define materials, configure lights, and load meshes.
    ///
    /// A texture that fails to load is reported and skipped; objects that
    /// sample it fall back to the missing-texture color at draw time. Too
    /// many lights is rejected before any resource is created.
    pub fn prepare<P, D>(
        &mut self,
        program: &mut P,
        decoder: &D,
    ) -> Result<PrepareReport, SceneError>
    where
        P: ShaderProgram + ?Sized,
        D: ImageDecoder + ?Sized,
    {
        if self.prepared {
            return Err(SceneError::AlreadyPrepared);
        }
        if self.scene.lights.len() > MAX_LIGHTS {
            return Err(RenderError::TooManyLights {
                given: self.scene.lights.len(),
                capacity: MAX_LIGHTS,
            }
            .into());
        }

        let mut report = PrepareReport::default();

        for source in &self.scene.textures {
            let path = self.config.texture_root.join(&source.path);
            match self
                .textures
                .load_texture(&mut self.context, decoder, &path, source.tag.as_str())
            {
                Ok(_) => report.textures_loaded += 1,
                Err(e) => {
                    tracing::warn!("texture {:?} not loaded: {e}", source.tag);
                    report.failed_textures.push(TextureFailure {
                        tag: source.tag.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        self.textures.bind_all(&mut self.context);

        for material in &self.scene.materials {
            self.materials.define(material.clone());
        }
        report.materials = self.materials.len();

        ShaderBroadcaster::new(program, &self.textures, &self.materials)
            .configure_lights(&self.scene.lights)?;
        report.lights = self.scene.lights.len();

        for kind in self.scene.mesh_kinds() {
            self.geometry.load(kind);
            report.meshes.push(kind);
        }

        self.prepared = true;
        tracing::info!(
            "scene prepared: {} textures ({} failed), {} materials, {} lights, {} meshes",
            report.textures_loaded,
            report.failed_textures.len(),
            report.materials,
            report.lights,
            report.meshes.len()
        );
        Ok(report)
    }

    /// Draw every object once, in scene order.
    ///
    /// Per object: model matrix, then texture or flat color, then UV scale,
    /// then material, then the draw. Missing textures and materials become
    /// warnings in the report.
    pub fn render<P>(&mut self, program: &mut P) -> Result<FrameReport, SceneError>
    where
        P: ShaderProgram + ?Sized,
    {
        if !self.prepared {
            return Err(SceneError::NotPrepared);
        }

        let mut frame = FrameReport::default();
        let mut broadcaster = ShaderBroadcaster::new(program, &self.textures, &self.materials)
            .with_missing_texture_color(self.config.missing_texture_color);

        for object in &self.scene.objects {
            let model = broadcaster.set_transform(&object.transform);

            match &object.surface {
                Surface::Textured { tag, uv_scale } => {
                    if let Err(error) = broadcaster.set_texture(tag) {
                        frame.warnings.push(RenderWarning {
                            object: object.label.clone(),
                            error,
                        });
                    }
                    broadcaster.set_uv_scale(*uv_scale);
                }
                // UV scale keeps whatever the previous textured object wrote.
                Surface::Flat(color) => broadcaster.set_flat_color(*color),
            }

            if let Some(tag) = &object.material {
                if let Err(error) = broadcaster.set_material(tag) {
                    frame.warnings.push(RenderWarning {
                        object: object.label.clone(),
                        error,
                    });
                }
            }

            self.geometry.draw(object.mesh);
            frame.draws.push(DrawRecord {
                label: object.label.clone(),
                mesh: object.mesh,
                model,
                texture: object.texture_tag().map(str::to_owned),
                material: object.material.clone(),
            });
        }

        if !frame.warnings.is_empty() {
            tracing::debug!("frame drawn with {} warnings", frame.warnings.len());
        }
        Ok(frame)
    }

    /// Delete every texture and forget materials. Meshes stay loaded.
    pub fn teardown(&mut self) {
        self.textures.teardown(&mut self.context);
        self.materials.clear();
        self.prepared = false;
    }
}
