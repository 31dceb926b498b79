use deskscene_assets::AssetError;
use deskscene_render::RenderError;

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("scene is already prepared; tear it down first")]
    AlreadyPrepared,
    #[error("scene has not been prepared")]
    NotPrepared,
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
