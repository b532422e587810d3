//! Core rendering functionality
//!
//! [`SceneRenderer`] is the seam between the scene composer and a drawing
//! backend. [`RenderEngine`] draws on a window surface through wgpu,
//! [`HeadlessRenderer`] records frames without a GPU.

pub mod render_engine;
pub mod renderer;

// Re-export main types
pub use render_engine::RenderEngine;
pub use renderer::{FrameRecord, HeadlessRenderer, RenderTarget, SceneRenderer};
