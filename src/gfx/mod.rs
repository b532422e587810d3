//! # Graphics Module
//!
//! Graphics functionality for the floating shapes scene: camera, procedural
//! geometry, the scene graph, and rendering backends.
//!
//! ## Architecture Overview
//!
//! - **Camera System** ([`camera`]) - Perspective camera and optional orbit controls
//! - **Geometry** ([`geometry`]) - Sphere, torus, icosahedron, boxes, and text meshes
//! - **Scene Management** ([`scene`]) - Node hierarchy, meshes, and materials
//! - **Rendering** ([`rendering`]) - Renderer interface, wgpu engine, headless recorder
//!
//! ## Usage
//!
//! The scene composer drives these types; most callers only construct a
//! [`RenderEngine`] for their window and hand it over:
//!
//! ```no_run
//! use floating_shapes::gfx::RenderEngine;
//!
//! // let engine = pollster::block_on(RenderEngine::new(window, width, height))?;
//! ```

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod scene;

// Re-export commonly used types
pub use camera::{OrbitControls, PerspectiveCamera};
pub use rendering::{HeadlessRenderer, RenderEngine, SceneRenderer};
