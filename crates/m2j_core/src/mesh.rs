//! Mesh geometry representation for the M2J scene model.
//!
//! This module provides a format-agnostic mesh representation that can be
//! populated from various file formats and flattened into linear buffers
//! by the exporter.

use m2j_math::{Aabb, Vec3};

/// A triangle mesh: vertex positions, optional per-vertex attributes, and
/// triangular faces referencing vertices by index.
///
/// Invariants maintained by the importer: every face index lies in
/// `[0, vertex_count)`, optional attribute arrays either are absent or
/// have exactly `vertex_count` entries, and `material_index` is a valid
/// index into the owning scene's material list.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Vertex normals (optional - absent or one per vertex)
    pub normals: Option<Vec<Vec3>>,

    /// Texture coordinates, first channel only (optional - one [u, v] per vertex)
    pub uvs: Option<Vec<[f32; 2]>>,

    /// Triangular faces, each a triple of vertex indices
    pub faces: Vec<[u32; 3]>,

    /// Index into the owning scene's material list
    pub material_index: usize,
}

impl Mesh {
    /// Create a new mesh from positions and faces, optionally with normals.
    ///
    /// If normals are not provided, they will NOT be automatically computed.
    /// Call `compute_normals()` explicitly if you need them.
    pub fn new(positions: Vec<Vec3>, faces: Vec<[u32; 3]>, normals: Option<Vec<Vec3>>) -> Self {
        Self {
            positions,
            normals,
            uvs: None,
            faces,
            material_index: 0,
        }
    }

    /// Create a new mesh with UV coordinates.
    pub fn new_with_uvs(
        positions: Vec<Vec3>,
        faces: Vec<[u32; 3]>,
        normals: Option<Vec<Vec3>>,
        uvs: Option<Vec<[f32; 2]>>,
    ) -> Self {
        Self {
            positions,
            normals,
            uvs,
            faces,
            material_index: 0,
        }
    }

    /// Compute the axis-aligned bounding box of this mesh's own vertices.
    ///
    /// Seeded from the first vertex rather than the infinity sentinel, so
    /// a single-vertex mesh yields a degenerate box with min == max. An
    /// empty mesh yields `Aabb::EMPTY`.
    pub fn bounds(&self) -> Aabb {
        match self.positions.split_first() {
            Some((first, rest)) => {
                let mut bounds = Aabb::from_point(*first);
                for pos in rest {
                    bounds.grow(*pos);
                }
                bounds
            }
            None => Aabb::EMPTY,
        }
    }

    /// Compute smooth vertex normals by averaging face normals.
    ///
    /// This generates normals if the mesh doesn't have them, or replaces
    /// existing normals. Each vertex normal is the normalized average of
    /// all face normals for faces that share that vertex.
    pub fn compute_normals(&mut self) {
        let vertex_count = self.positions.len();
        let mut normals = vec![Vec3::ZERO; vertex_count];

        // Accumulate face normals at each vertex
        for face in &self.faces {
            let i0 = face[0] as usize;
            let i1 = face[1] as usize;
            let i2 = face[2] as usize;

            if i0 >= vertex_count || i1 >= vertex_count || i2 >= vertex_count {
                continue;
            }

            let p0 = self.positions[i0];
            let p1 = self.positions[i1];
            let p2 = self.positions[i2];

            let edge1 = p1 - p0;
            let edge2 = p2 - p0;
            let face_normal = edge1.cross(edge2);

            normals[i0] += face_normal;
            normals[i1] += face_normal;
            normals[i2] += face_normal;
        }

        // Normalize accumulated normals
        for normal in &mut normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            } else {
                *normal = Vec3::Y; // Default up normal for degenerate cases
            }
        }

        self.normals = Some(normals);
    }

    /// Check if the mesh has normals.
    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Check if the mesh has texture coordinates.
    pub fn has_uvs(&self) -> bool {
        self.uvs.is_some()
    }

    /// Ensure the mesh has normals, computing them if necessary.
    /// Also recomputes if existing normals don't match vertex count.
    pub fn ensure_normals(&mut self) {
        let should_compute = match &self.normals {
            None => true,
            Some(normals) => normals.len() != self.positions.len(),
        };

        if should_compute {
            if let Some(normals) = &self.normals {
                log::debug!(
                    "Normals array length ({}) doesn't match vertex count ({}), computing smooth normals",
                    normals.len(),
                    self.positions.len()
                );
            }
            self.compute_normals();
        }
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}
