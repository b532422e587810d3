//! Error types for the showcase scene
//!
//! Setup and the render loop fail fast: a missing asset stops scene
//! activation and a failed draw stops the loop. Nothing here is retried.

use thiserror::Error;

/// Renderer-side failures surfaced by [`SceneRenderer`] implementations.
///
/// [`SceneRenderer`]: crate::gfx::rendering::SceneRenderer
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create rendering surface: {0}")]
    Surface(String),

    #[error("no compatible graphics adapter: {0}")]
    Adapter(String),

    #[error("failed to acquire graphics device: {0}")]
    Device(String),

    #[error("failed to acquire next frame: {0}")]
    Frame(String),

    #[error("draw submission failed: {0}")]
    Submission(String),
}

/// Errors raised while building or driving the scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The loader could not produce a requested asset.
    #[error("asset `{name}` is unavailable: {reason}")]
    AssetUnavailable { name: String, reason: String },

    /// Setup asked for an asset that was never loaded.
    #[error("asset `{name}` was not loaded")]
    MissingAsset { name: String },

    /// The asset exists but holds a different kind of resource.
    #[error("asset `{name}` is not a {expected}")]
    WrongAssetKind { name: String, expected: &'static str },

    /// Surface dimensions must both be non-zero.
    #[error("invalid viewport size {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid shape: {0}")]
    InvalidShape(String),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, SceneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_errors_convert_into_scene_errors() {
        let err: SceneError = RenderError::Submission("device lost".into()).into();
        assert!(matches!(err, SceneError::Render(_)));
        assert_eq!(err.to_string(), "draw submission failed: device lost");
    }

    #[test]
    fn asset_errors_name_the_asset() {
        let err = SceneError::WrongAssetKind {
            name: "matcap".into(),
            expected: "texture",
        };
        assert_eq!(err.to_string(), "asset `matcap` is not a texture");
    }
}
