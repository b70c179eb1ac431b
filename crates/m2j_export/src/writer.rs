//! JSON document output.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use thiserror::Error;

use crate::document::Document;

/// Errors that can occur while writing the output document.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Write a document to `path` as pretty-printed UTF-8 JSON.
///
/// The file is created (truncating any existing one), written once, and
/// closed when the writer drops on either exit path.
pub fn write_document<P: AsRef<Path>>(document: &Document, path: P) -> ExportResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, document)?;

    log::info!("File {} saved", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::export_scene;
    use m2j_core::{Material, Mesh, Scene};
    use m2j_math::Vec3;

    #[test]
    fn test_written_file_parses_back() {
        let mut scene = Scene::new("roundtrip");
        scene.add_material(Material::new("grey", [0.5, 0.5, 0.5, 1.0]));
        scene.add_mesh(Mesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![[0, 1, 2]],
            None,
        ));

        let document = export_scene(&scene);

        let path = std::env::temp_dir().join(format!("m2j_writer_{}.json", std::process::id()));
        write_document(&document, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["model"].as_array().unwrap().len(), 1);
        assert_eq!(json["model"][0]["indices"], serde_json::json!([0, 1, 2]));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_to_bad_path_fails() {
        let document = export_scene(&Scene::new("empty"));
        let err = write_document(&document, "/definitely/missing/dir/out.json").unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
