//! Arena-backed scene graph
//!
//! Nodes are stored in insertion order and addressed by [`NodeId`]. A node's
//! parent is fixed when it is added; nodes are never removed or reparented,
//! so ids stay valid for the lifetime of the graph.

use cgmath::{Matrix4, Rad, SquareMatrix, Vector3};

use super::{MaterialId, MeshId};

/// Handle to a node in a [`SceneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Local transform of a node.
///
/// Rotation is an Euler triple in radians applied in XYZ order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    pub fn from_position(position: Vector3<f32>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Local matrix: T * Rx * Ry * Rz * S
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_x(Rad(self.rotation.x))
            * Matrix4::from_angle_y(Rad(self.rotation.y))
            * Matrix4::from_angle_z(Rad(self.rotation.z))
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }
}

/// Drawable payload of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderable {
    pub mesh: MeshId,
    pub material: MaterialId,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub transform: Transform,
    pub visible: bool,
    pub renderable: Option<Renderable>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node under `parent` (or as a root) and returns its id.
    ///
    /// # Panics
    /// Panics if `parent` does not belong to this graph.
    pub fn add_node(
        &mut self,
        parent: Option<NodeId>,
        name: impl Into<String>,
        transform: Transform,
        renderable: Option<Renderable>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        self.nodes.push(Node {
            name: name.into(),
            transform,
            visible: true,
            renderable,
            parent,
            children: Vec::new(),
        });
        id
    }

    /// Adds an empty grouping node.
    pub fn add_group(&mut self, parent: Option<NodeId>, name: impl Into<String>) -> NodeId {
        self.add_node(parent, name, Transform::default(), None)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub fn transform(&self, id: NodeId) -> Option<&Transform> {
        self.get(id).map(|node| &node.transform)
    }

    pub fn transform_mut(&mut self, id: NodeId) -> Option<&mut Transform> {
        self.get_mut(id).map(|node| &mut node.transform)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(index, _)| NodeId(index))
    }

    /// World matrix of `id`, composing every ancestor's local transform.
    pub fn world_matrix(&self, id: NodeId) -> Matrix4<f32> {
        let mut matrix = Matrix4::identity();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let Some(node) = self.get(node_id) else {
                break;
            };
            matrix = node.transform.matrix() * matrix;
            current = node.parent;
        }
        matrix
    }

    /// Calls `visit` for every renderable node whose whole ancestry is visible,
    /// depth first in insertion order, with the node's world matrix.
    pub fn visit_visible<F>(&self, mut visit: F)
    where
        F: FnMut(NodeId, &Node, Matrix4<f32>),
    {
        let roots: Vec<NodeId> = self.roots().collect();
        for root in roots {
            self.visit_subtree(root, Matrix4::identity(), &mut visit);
        }
    }

    fn visit_subtree<F>(&self, id: NodeId, parent_world: Matrix4<f32>, visit: &mut F)
    where
        F: FnMut(NodeId, &Node, Matrix4<f32>),
    {
        let node = &self.nodes[id.0];
        if !node.visible {
            return;
        }
        let world = parent_world * node.transform.matrix();
        if node.renderable.is_some() {
            visit(id, node, world);
        }
        for &child in &node.children {
            self.visit_subtree(child, world, visit);
        }
    }
}
