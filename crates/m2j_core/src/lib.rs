//! M2J Core - Scene data model and model import.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Node`, `Mesh`, `Material`
//! - **Import**: OBJ file loading into the scene representation
//!
//! # Example
//!
//! ```ignore
//! use m2j_core::import::import_obj;
//!
//! // Load an OBJ model
//! let scene = import_obj("model.obj")?;
//! println!("Imported {} meshes, {} materials",
//!     scene.mesh_count(),
//!     scene.material_count());
//! ```

pub mod import;
pub mod material;
pub mod mesh;
pub mod scene;

// Re-export commonly used types
pub use import::{import_obj, ImportError};
pub use material::Material;
pub use mesh::Mesh;
pub use scene::{Node, NodeId, Scene};
