//! Shared value types used by the asset, render, and scene crates.

mod types;

pub use types::{DrawTransform, MeshKind};

pub fn crate_info() -> &'static str {
    "deskscene-common v0.1.0"
}
