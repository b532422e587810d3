//! # Procedural Geometry Generation
//!
//! Generates the primitive shapes and text meshes used by the showcase scene,
//! so the scene needs no model files for its basic shapes.
//!
//! ## Supported Primitives
//!
//! - **Sphere**: UV sphere with configurable radius and resolution
//! - **Torus**: ring with configurable tube and segment counts
//! - **Icosahedron**: flat-shaded, optionally subdivided
//! - **Box**: axis-aligned boxes, used by the axes helper and block glyphs
//!
//! ## Usage
//!
//! ```rust
//! use floating_shapes::gfx::geometry::{generate_icosahedron, generate_sphere, generate_torus};
//!
//! let sphere = generate_sphere(1.0, 32, 32);
//! let torus = generate_torus(2.0, 0.5, 16, 100);
//! let gem = generate_icosahedron(0.8, 0);
//!
//! assert_eq!(gem.triangle_count(), 20);
//! assert!(sphere.bounding_box().is_some());
//! assert!(torus.vertex_count() > 0);
//! ```

pub mod primitives;
pub mod text;

pub use primitives::*;
pub use text::{BlockFont, Font, TextStyle};

use cgmath::Vector3;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl Aabb {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn depth(&self) -> f32 {
        self.max.z - self.min.z
    }
}

/// Represents generated geometry data ready for GPU upload
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Bounds of all vertex positions, `None` for empty geometry.
    pub fn bounding_box(&self) -> Option<Aabb> {
        let first = *self.vertices.first()?;
        let mut min = Vector3::from(first);
        let mut max = min;

        for &[x, y, z] in &self.vertices[1..] {
            min.x = min.x.min(x);
            min.y = min.y.min(y);
            min.z = min.z.min(z);
            max.x = max.x.max(x);
            max.y = max.y.max(y);
            max.z = max.z.max(z);
        }

        Some(Aabb::new(min, max))
    }

    /// Appends `other`, rebasing its indices onto this geometry's vertices.
    pub fn merge(&mut self, other: &GeometryData) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.tex_coords.extend_from_slice(&other.tex_coords);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: Vector3<f32>) {
        for vertex in &mut self.vertices {
            vertex[0] += offset.x;
            vertex[1] += offset.y;
            vertex[2] += offset.z;
        }
    }

    /// Convert to the interleaved vertex format used by the renderer
    pub fn to_vertices(&self) -> Vec<crate::gfx::scene::vertex::Vertex3D> {
        use crate::gfx::scene::vertex::Vertex3D;

        (0..self.vertices.len())
            .map(|i| Vertex3D {
                position: self.vertices[i],
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect()
    }

    /// Computes smooth per-vertex normals from triangle faces.
    ///
    /// Used for loaded models that ship without normals.
    pub fn compute_vertex_normals(&mut self) {
        let mut normals = vec![Vector3::new(0.0f32, 0.0, 0.0); self.vertices.len()];

        for triangle in self.indices.chunks_exact(3) {
            let [a, b, c] = [triangle[0], triangle[1], triangle[2]].map(|i| i as usize);
            let (Some(&va), Some(&vb), Some(&vc)) = (
                self.vertices.get(a),
                self.vertices.get(b),
                self.vertices.get(c),
            ) else {
                continue;
            };
            let (va, vb, vc) = (Vector3::from(va), Vector3::from(vb), Vector3::from(vc));
            let face = (vb - va).cross(vc - va);
            normals[a] += face;
            normals[b] += face;
            normals[c] += face;
        }

        self.normals = normals
            .into_iter()
            .map(|n| {
                let length = (n.x * n.x + n.y * n.y + n.z * n.z).sqrt();
                if length > 0.0 {
                    [n.x / length, n.y / length, n.z / length]
                } else {
                    [0.0, 1.0, 0.0]
                }
            })
            .collect();
    }
}
