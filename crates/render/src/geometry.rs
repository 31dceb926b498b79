use deskscene_common::MeshKind;
use std::collections::BTreeSet;

/// Owner of primitive mesh buffers.
///
/// `draw` emits whatever the shader program currently holds; the caller is
/// responsible for writing uniforms first.
pub trait GeometryProvider {
    /// Prepare buffers for `kind`. Loading a kind twice is a no-op.
    fn load(&mut self, kind: MeshKind);
    fn draw(&mut self, kind: MeshKind);
}

/// Geometry provider without a GPU: remembers what was loaded and drawn.
#[derive(Debug, Default)]
pub struct RecordingGeometry {
    loaded: BTreeSet<MeshKind>,
    draws: Vec<MeshKind>,
}

impl RecordingGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self, kind: MeshKind) -> bool {
        self.loaded.contains(&kind)
    }

    pub fn loaded(&self) -> impl Iterator<Item = MeshKind> + '_ {
        self.loaded.iter().copied()
    }

    /// Draws issued so far, oldest first.
    pub fn draws(&self) -> &[MeshKind] {
        &self.draws
    }

    pub fn clear_draws(&mut self) {
        self.draws.clear();
    }
}

impl GeometryProvider for RecordingGeometry {
    fn load(&mut self, kind: MeshKind) {
        if self.loaded.insert(kind) {
            tracing::debug!("loaded {kind} mesh");
        }
    }

    fn draw(&mut self, kind: MeshKind) {
        if !self.loaded.contains(&kind) {
            tracing::warn!("skipping draw of {kind}: mesh not loaded");
            return;
        }
        self.draws.push(kind);
    }
}
