//! Hierarchical bounding-box aggregation over the scene's node tree.

use m2j_core::{NodeId, Scene};
use m2j_math::Aabb;

/// Compute the bounding box of every vertex reachable from `node`.
///
/// Folds the positions of every mesh referenced by the subtree rooted at
/// `node` into a running componentwise min/max, starting from the
/// [`Aabb::EMPTY`] sentinel. Sibling order does not affect the result
/// since min/max folding is associative and commutative.
///
/// A subtree containing no vertices yields `Aabb::EMPTY`; callers must
/// treat that as "empty" rather than a valid box.
///
/// Note this is distinct from the flat per-mesh-list aggregate the
/// document emits: it walks the hierarchy and only sees meshes some node
/// actually references.
pub fn node_bounds(scene: &Scene, node: NodeId) -> Aabb {
    let mut bounds = Aabb::EMPTY;
    let mut stack = vec![node];

    while let Some(id) = stack.pop() {
        let Some(node) = scene.node(id) else {
            log::warn!("Node {} does not exist, skipping", id);
            continue;
        };

        for &mesh_index in &node.meshes {
            let Some(mesh) = scene.meshes.get(mesh_index) else {
                log::warn!("Node {} references missing mesh {}", id, mesh_index);
                continue;
            };
            for &position in &mesh.positions {
                bounds.grow(position);
            }
        }

        stack.extend_from_slice(&node.children);
    }

    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use m2j_core::{Mesh, Node};
    use m2j_math::Vec3;

    fn triangle_mesh(offset: Vec3) -> Mesh {
        Mesh::new(
            vec![offset, offset + Vec3::X, offset + Vec3::Y],
            vec![[0, 1, 2]],
            None,
        )
    }

    #[test]
    fn test_empty_subtree_yields_sentinel() {
        let scene = Scene::new("empty");
        let bounds = node_bounds(&scene, scene.root);
        assert!(bounds.is_empty());
    }

    #[test]
    fn test_single_mesh_bounds() {
        let mut scene = Scene::new("one");
        let mesh_id = scene.add_mesh(triangle_mesh(Vec3::ZERO));
        scene.add_node(scene.root, Node::with_meshes(vec![mesh_id]));

        let bounds = node_bounds(&scene, scene.root);
        assert_eq!(bounds.min, Vec3::ZERO);
        assert_eq!(bounds.max, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_recurses_into_grandchildren() {
        let mut scene = Scene::new("deep");
        let near = scene.add_mesh(triangle_mesh(Vec3::ZERO));
        let far = scene.add_mesh(triangle_mesh(Vec3::new(10.0, 10.0, 10.0)));

        let child = scene.add_node(scene.root, Node::with_meshes(vec![near]));
        scene.add_node(child, Node::with_meshes(vec![far]));

        let bounds = node_bounds(&scene, scene.root);
        assert_eq!(bounds.min, Vec3::ZERO);
        assert_eq!(bounds.max, Vec3::new(11.0, 11.0, 10.0));

        // Aggregating from the child skips nothing below it
        let child_bounds = node_bounds(&scene, child);
        assert_eq!(child_bounds, bounds);
    }

    #[test]
    fn test_subtree_excludes_siblings() {
        let mut scene = Scene::new("siblings");
        let near = scene.add_mesh(triangle_mesh(Vec3::ZERO));
        let far = scene.add_mesh(triangle_mesh(Vec3::new(10.0, 0.0, 0.0)));

        scene.add_node(scene.root, Node::with_meshes(vec![near]));
        let right = scene.add_node(scene.root, Node::with_meshes(vec![far]));

        let bounds = node_bounds(&scene, right);
        assert_eq!(bounds.min, Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(11.0, 1.0, 0.0));
    }

    #[test]
    fn test_unreferenced_mesh_is_not_counted() {
        let mut scene = Scene::new("orphan");
        // Mesh exists in the scene list but no node references it
        scene.add_mesh(triangle_mesh(Vec3::new(100.0, 100.0, 100.0)));

        let bounds = node_bounds(&scene, scene.root);
        assert!(bounds.is_empty());
    }
}
