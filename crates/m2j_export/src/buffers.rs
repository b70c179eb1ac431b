//! Per-mesh buffer flattening.
//!
//! Turns one mesh's faces and vertex attributes into the linear sequences
//! the document format wants, plus that mesh's own (flat, non-hierarchical)
//! bounding box.

use serde::Serialize;

use m2j_core::Mesh;
use m2j_math::Aabb;

/// Linear buffers for one mesh.
///
/// Field names match the wire format; `normal` and `tex_coord` are
/// present iff the source mesh carries those attributes.
#[derive(Clone, Debug, Serialize)]
pub struct MeshBuffers {
    /// Flattened triangle list, 3 entries per face
    pub indices: Vec<u32>,

    /// Homogeneous vertex positions (x, y, z, 1), 4 entries per vertex
    pub position: Vec<f32>,

    /// Vertex normals (x, y, z), 3 entries per vertex
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<Vec<f32>>,

    /// First-channel texture coordinates (u, v), 2 entries per vertex
    #[serde(rename = "texCoord", skip_serializing_if = "Option::is_none")]
    pub tex_coord: Option<Vec<f32>>,

    /// This mesh's own bounding box (not hierarchical)
    #[serde(skip)]
    pub bounding_box: Aabb,
}

/// Flatten one mesh into linear buffers.
///
/// The bounding box is seeded from the mesh's first vertex rather than
/// the infinity sentinel, so a single-vertex mesh yields an exact
/// degenerate box. Mesh invariants guarantee no face index is out of
/// range, so this never fails.
pub fn flatten_mesh(mesh: &Mesh) -> MeshBuffers {
    let mut indices = Vec::with_capacity(mesh.triangle_count() * 3);
    for face in &mesh.faces {
        indices.extend_from_slice(face);
    }

    let mut position = Vec::with_capacity(mesh.vertex_count() * 4);
    for v in &mesh.positions {
        position.extend_from_slice(&[v.x, v.y, v.z, 1.0]);
    }

    let normal = mesh.normals.as_ref().map(|normals| {
        let mut buf = Vec::with_capacity(normals.len() * 3);
        for n in normals {
            buf.extend_from_slice(&[n.x, n.y, n.z]);
        }
        buf
    });

    let tex_coord = mesh.uvs.as_ref().map(|uvs| {
        let mut buf = Vec::with_capacity(uvs.len() * 2);
        for uv in uvs {
            buf.extend_from_slice(uv);
        }
        buf
    });

    MeshBuffers {
        indices,
        position,
        normal,
        tex_coord,
        bounding_box: mesh.bounds(),
    }
}
