//! OBJ model import.
//!
//! This module is the collaborator that hands the exporter a scene
//! conforming to the data model: faces triangulated, vertex attributes
//! unified to a single index per vertex, and normals generated when the
//! source file carries none.

use std::path::Path;

use m2j_math::Vec3;
use thiserror::Error;

use crate::material::Material;
use crate::mesh::Mesh;
use crate::scene::{Node, Scene};

/// Errors that can occur during model import.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Couldn't open file: {0}")]
    InputNotFound(String),

    #[error("OBJ load error: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("No geometry found in model file")]
    NoGeometry,
}

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;

/// Load an OBJ file and return a Scene.
///
/// Faces are triangulated and vertex attributes unified to one index per
/// vertex by the loader; meshes without normals get smooth normals
/// computed. Every mesh's `material_index` is valid on return: when the
/// OBJ carries no usable MTL, a default (empty) material is appended and
/// assigned.
///
/// # Example
///
/// ```ignore
/// use m2j_core::import::import_obj;
///
/// let scene = import_obj("model.obj")?;
/// println!("Imported {} meshes", scene.mesh_count());
/// ```
pub fn import_obj<P: AsRef<Path>>(path: P) -> ImportResult<Scene> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(ImportError::InputNotFound(path.display().to_string()));
    }

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unnamed");

    let (models, materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        },
    )?;

    let materials = materials.unwrap_or_else(|e| {
        log::warn!("Couldn't load MTL for {}: {}", path.display(), e);
        Vec::new()
    });

    if models.is_empty() {
        return Err(ImportError::NoGeometry);
    }

    let mut scene = Scene::new(name);

    for mtl in &materials {
        scene.add_material(convert_material(mtl));
    }

    // Fallback material for meshes with no material reference. Created
    // lazily so scenes with full MTL coverage don't carry it.
    let mut default_material: Option<usize> = None;

    for model in &models {
        let mut mesh = convert_mesh(&model.mesh);

        mesh.material_index = match model.mesh.material_id {
            Some(id) if id < scene.material_count() => id,
            _ => *default_material
                .get_or_insert_with(|| scene.add_material(Material::default())),
        };

        mesh.ensure_normals();

        let mesh_id = scene.add_mesh(mesh);
        scene.add_node(scene.root, Node::with_meshes(vec![mesh_id]));
    }

    log::info!(
        "Imported {}: {} meshes, {} materials, {} triangles",
        path.display(),
        scene.mesh_count(),
        scene.material_count(),
        scene.total_triangle_count()
    );

    Ok(scene)
}

/// Convert a tobj mesh (flat attribute arrays) to an M2J mesh.
fn convert_mesh(mesh: &tobj::Mesh) -> Mesh {
    let positions: Vec<Vec3> = mesh
        .positions
        .chunks_exact(3)
        .map(|p| Vec3::new(p[0], p[1], p[2]))
        .collect();

    let normals = if mesh.normals.len() == mesh.positions.len() && !mesh.normals.is_empty() {
        Some(
            mesh.normals
                .chunks_exact(3)
                .map(|n| Vec3::new(n[0], n[1], n[2]))
                .collect(),
        )
    } else {
        None
    };

    let uvs = if mesh.texcoords.len() / 2 == positions.len() && !mesh.texcoords.is_empty() {
        Some(mesh.texcoords.chunks_exact(2).map(|t| [t[0], t[1]]).collect())
    } else {
        None
    };

    let faces = mesh
        .indices
        .chunks_exact(3)
        .map(|f| [f[0], f[1], f[2]])
        .collect();

    Mesh::new_with_uvs(positions, faces, normals, uvs)
}

/// Convert a tobj (MTL) material to an M2J material.
///
/// MTL colors are RGB; they are widened to RGBA with the dissolve value
/// (alpha) when present, 1.0 otherwise.
fn convert_material(mtl: &tobj::Material) -> Material {
    let alpha = mtl.dissolve.unwrap_or(1.0);
    let rgba = |c: [f32; 3]| [c[0], c[1], c[2], alpha];

    Material {
        name: mtl.name.clone(),
        diffuse_texture: mtl.diffuse_texture.clone(),
        diffuse: mtl.diffuse.map(rgba),
        specular: mtl.specular.map(rgba),
        ambient: mtl.ambient.map(rgba),
        shininess: mtl.shininess,
    }
}
