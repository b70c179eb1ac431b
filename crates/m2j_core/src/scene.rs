//! Scene types for M2J.
//!
//! This module defines the in-memory model handed from the importer to
//! the exporter: a node hierarchy plus flat mesh and material lists.

use m2j_math::Mat4;

use crate::material::Material;
use crate::mesh::Mesh;

/// Index of a node within the scene's node arena.
pub type NodeId = usize;

/// An element of the scene hierarchy.
///
/// Nodes live in the scene's arena and reference meshes and child nodes
/// by index, so the tree carries no back-references. The local transform
/// is preserved from the source file but not applied or emitted by the
/// exporter.
#[derive(Clone, Debug, Default)]
pub struct Node {
    /// Optional local transform relative to the parent node
    pub transform: Option<Mat4>,

    /// Indices into the scene's mesh list
    pub meshes: Vec<usize>,

    /// Indices of child nodes in the scene's node arena
    pub children: Vec<NodeId>,
}

impl Node {
    /// Create a node referencing the given meshes, with no children yet.
    pub fn with_meshes(meshes: Vec<usize>) -> Self {
        Self {
            meshes,
            ..Default::default()
        }
    }
}

/// A complete scene: node hierarchy, meshes, and materials.
///
/// The scene owns all of its entities; components downstream only read.
/// The root node always exists and is always node 0.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Node arena; `root` and every `Node::children` entry index into it
    pub nodes: Vec<Node>,

    /// Index of the root node (always 0)
    pub root: NodeId,

    /// Meshes, in source order
    pub meshes: Vec<Mesh>,

    /// Materials referenced by meshes via `Mesh::material_index`
    pub materials: Vec<Material>,

    /// Scene name (usually from filename)
    pub name: String,
}

impl Scene {
    /// Create an empty scene with a root node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::default()],
            root: 0,
            meshes: Vec::new(),
            materials: Vec::new(),
            name: name.into(),
        }
    }

    /// Add a mesh to the scene and return its index.
    pub fn add_mesh(&mut self, mesh: Mesh) -> usize {
        let id = self.meshes.len();
        self.meshes.push(mesh);
        id
    }

    /// Add a material to the scene and return its index.
    pub fn add_material(&mut self, material: Material) -> usize {
        let id = self.materials.len();
        self.materials.push(material);
        id
    }

    /// Add a node as a child of `parent` and return its id.
    pub fn add_node(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        if let Some(parent) = self.nodes.get_mut(parent) {
            parent.children.push(id);
        } else {
            log::warn!("Parent node {} does not exist, node {} is unattached", parent, id);
        }
        id
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a material by index.
    pub fn material(&self, index: usize) -> Option<&Material> {
        self.materials.get(index)
    }

    /// Get mesh count.
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Get material count.
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Get total triangle count across all meshes.
    pub fn total_triangle_count(&self) -> usize {
        self.meshes.iter().map(|m| m.triangle_count()).sum()
    }
}
