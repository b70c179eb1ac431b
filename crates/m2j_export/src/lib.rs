//! M2J Export - scene-to-JSON document generation.
//!
//! This crate turns an in-memory [`m2j_core::Scene`] into a single JSON
//! document describing per-mesh buffers and bounding geometry:
//!
//! - [`buffers`]: flattens one mesh into linear index/position/normal/
//!   texCoord sequences plus its own bounding box
//! - [`record`]: extracts the optional material properties of one mesh
//! - [`document`]: assembles the full document, one entry per mesh, with
//!   a scene-level aggregate bounding box
//! - [`bounds`]: hierarchical bounding-box aggregation over the node tree
//! - [`writer`]: writes the document to a file as UTF-8 JSON
//!
//! # Example
//!
//! ```ignore
//! use m2j_export::{export_scene, write_document};
//!
//! let document = export_scene(&scene);
//! write_document(&document, "model.json")?;
//! ```

pub mod bounds;
pub mod buffers;
pub mod document;
pub mod record;
pub mod writer;

// Re-export commonly used items
pub use bounds::node_bounds;
pub use buffers::{flatten_mesh, MeshBuffers};
pub use document::{export_scene, Document, MeshEntry};
pub use record::{material_record, MaterialRecord};
pub use writer::{write_document, ExportError};
