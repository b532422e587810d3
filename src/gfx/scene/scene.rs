use crate::gfx::geometry::GeometryData;

use super::graph::SceneGraph;

/// Handle to a mesh registered with a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub(crate) usize);

/// Handle to a material registered with a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub(crate) usize);

/// Linear RGB color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

/// Surface appearance of a renderable node
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    /// Matcap shading, lighting independent.
    ///
    /// `texture` names the matcap asset the material was built from. The
    /// wgpu engine does not sample it; it derives the shade from view-space
    /// normals and multiplies by `tint`.
    Matcap { texture: String, tint: Color },
    /// Unlit flat color
    Basic { color: Color },
}

/// Everything the renderer needs to draw one frame besides the camera
#[derive(Debug)]
pub struct Scene {
    pub background: Color,
    pub graph: SceneGraph,
    meshes: Vec<GeometryData>,
    materials: Vec<Material>,
}

impl Scene {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            graph: SceneGraph::new(),
            meshes: Vec::new(),
            materials: Vec::new(),
        }
    }

    pub fn add_mesh(&mut self, geometry: GeometryData) -> MeshId {
        self.meshes.push(geometry);
        MeshId(self.meshes.len() - 1)
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    pub fn mesh(&self, id: MeshId) -> Option<&GeometryData> {
        self.meshes.get(id.0)
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        let mut statistics = SceneStatistics {
            node_count: self.graph.len(),
            material_count: self.materials.len(),
            ..Default::default()
        };

        self.graph.visit_visible(|_, node, _| {
            let Some(mesh) = node.renderable.and_then(|r| self.mesh(r.mesh)) else {
                return;
            };
            statistics.visible_renderables += 1;
            statistics.total_triangles += mesh.triangle_count();
            statistics.total_vertices += mesh.vertex_count();
        });

        statistics
    }
}

/// Scene statistics for debugging and UI display
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub node_count: usize,
    pub material_count: usize,
    pub visible_renderables: usize,
    pub total_triangles: usize,
    pub total_vertices: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{geometry::generate_cube, scene::graph::{Renderable, Transform}};

    #[test]
    fn hex_colors_unpack_to_unit_range() {
        let peach = Color::from_hex(0xf8c291);
        assert!((peach.r - 248.0 / 255.0).abs() < 1e-6);
        assert!((peach.g - 194.0 / 255.0).abs() < 1e-6);
        assert!((peach.b - 145.0 / 255.0).abs() < 1e-6);
        assert_eq!(Color::from_hex(0xffffff), Color::WHITE);
    }

    #[test]
    fn statistics_count_only_visible_geometry() {
        let mut scene = Scene::new(Color::WHITE);
        let mesh = scene.add_mesh(generate_cube());
        let material = scene.add_material(Material::Basic { color: Color::WHITE });
        let renderable = Some(Renderable { mesh, material });

        scene.graph.add_node(None, "a", Transform::default(), renderable);
        let b = scene.graph.add_node(None, "b", Transform::default(), renderable);
        scene.graph.get_mut(b).unwrap().visible = false;

        let statistics = scene.get_statistics();
        assert_eq!(statistics.node_count, 2);
        assert_eq!(statistics.visible_renderables, 1);
        assert_eq!(statistics.total_triangles, 12);
        assert_eq!(statistics.total_vertices, 24);
    }
}
