// src/lib.rs
//! Floating Shapes
//!
//! An interactive 3D showcase scene built on wgpu and winit: a container of
//! gently bobbing shapes that tilts with the pointer, an extruded title, and a
//! small parameter panel.
//!
//! [`composer::SceneComposer`] holds the scene state and runs one frame per
//! call; [`app::ShowcaseApp`] drives it from a window.

pub mod animation;
pub mod app;
pub mod assets;
pub mod composer;
pub mod config;
pub mod error;
pub mod gfx;
pub mod input;
pub mod performance;
pub mod prelude;
pub mod shape;
pub mod ui;
pub mod viewport;

// Re-export main types for convenience
pub use app::ShowcaseApp;
pub use composer::SceneComposer;
pub use config::SceneConfig;
pub use error::{Result, SceneError};

/// Creates the showcase app with the default scene, loading assets from the
/// current directory.
pub fn default() -> anyhow::Result<ShowcaseApp> {
    ShowcaseApp::new(SceneConfig::default(), ".")
}
