//! # Scene Management Module
//!
//! Scene graph, meshes, and materials for the showcase scene.
//!
//! ## Key Components
//!
//! - [`Scene`] - Background color, scene graph, and the mesh/material registries
//! - [`SceneGraph`] - Arena of nodes with fixed parent/child relations
//! - [`Transform`] - Local position, Euler rotation, and scale of a node
//! - [`Vertex3D`] - GPU vertex layout with position and normal
//!
//! ## Usage
//!
//! ```rust
//! use floating_shapes::gfx::geometry::generate_cube;
//! use floating_shapes::gfx::scene::{Color, Material, Renderable, Scene, Transform};
//!
//! let mut scene = Scene::new(Color::WHITE);
//! let mesh = scene.add_mesh(generate_cube());
//! let material = scene.add_material(Material::Basic { color: Color::from_hex(0xf8c291) });
//!
//! let container = scene.graph.add_group(None, "container");
//! scene.graph.add_node(Some(container), "cube", Transform::default(), Some(Renderable { mesh, material }));
//!
//! assert_eq!(scene.get_statistics().visible_renderables, 1);
//! ```

pub mod graph;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use graph::{Node, NodeId, Renderable, SceneGraph, Transform};
pub use scene::{Color, Material, MaterialId, MeshId, Scene, SceneStatistics};
pub use vertex::Vertex3D;
