//! Document assembly: one entry per mesh plus the scene-level bounding box.

use serde::Serialize;

use m2j_core::Scene;
use m2j_math::Aabb;

use crate::buffers::flatten_mesh;
use crate::record::{material_record, MaterialRecord};

/// One mesh's entry in the output document.
#[derive(Clone, Debug, Serialize)]
pub struct MeshEntry {
    /// Flattened triangle list
    pub indices: Vec<u32>,

    /// Homogeneous vertex positions (x, y, z, 1)
    pub position: Vec<f32>,

    /// Vertex normals, omitted if the mesh has none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<Vec<f32>>,

    /// Texture coordinates, omitted if the mesh has none
    #[serde(rename = "texCoord", skip_serializing_if = "Option::is_none")]
    pub tex_coord: Option<Vec<f32>>,

    /// This mesh's material properties
    pub material: MaterialRecord,

    /// This mesh's own bounding box as (minX, minY, minZ, maxX, maxY, maxZ)
    #[serde(rename = "boundingBox")]
    pub bounding_box: [f32; 6],
}

/// The complete output document.
#[derive(Clone, Debug, Serialize)]
pub struct Document {
    /// Mesh entries, in scene mesh order
    pub model: Vec<MeshEntry>,

    /// Scene-level bounding box: the elementwise min/max over all
    /// per-mesh bounding boxes. Omitted when the scene has no meshes
    /// (or no mesh has any vertices).
    #[serde(rename = "boundingBox", skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<[f32; 6]>,
}

/// Build the output document for a scene.
///
/// Each mesh yields one entry, in scene order. The scene-level bounding
/// box is the flat fold of the per-mesh boxes - it deliberately ignores
/// the node hierarchy, so meshes no node references still contribute.
///
/// A scene with no meshes yields an empty `model` array and no top-level
/// `boundingBox` key.
pub fn export_scene(scene: &Scene) -> Document {
    let mut model = Vec::with_capacity(scene.mesh_count());
    let mut scene_bounds = Aabb::EMPTY;

    for mesh in &scene.meshes {
        let buffers = flatten_mesh(mesh);

        let material = match scene.material(mesh.material_index) {
            Some(material) => material_record(material),
            None => {
                log::warn!(
                    "Mesh references missing material {}, emitting empty record",
                    mesh.material_index
                );
                MaterialRecord::default()
            }
        };

        scene_bounds = scene_bounds.union(&buffers.bounding_box);

        model.push(MeshEntry {
            indices: buffers.indices,
            position: buffers.position,
            normal: buffers.normal,
            tex_coord: buffers.tex_coord,
            material,
            bounding_box: buffers.bounding_box.to_array(),
        });
    }

    let bounding_box = if scene_bounds.is_empty() {
        None
    } else {
        Some(scene_bounds.to_array())
    };

    log::info!("Exported {} mesh entries", model.len());

    Document {
        model,
        bounding_box,
    }
}
