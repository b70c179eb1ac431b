//! Material property extraction.

use serde::Serialize;

use m2j_core::Material;

/// The material properties of one mesh, ready for JSON emission.
///
/// A property absent in the source material is absent here too and is
/// omitted from the serialized object - never emitted as null or a
/// default. A material defining nothing serializes as `{}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MaterialRecord {
    /// Diffuse texture path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,

    /// Diffuse color (RGBA)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diffuse: Option<[f32; 4]>,

    /// Specular color (RGBA)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specular: Option<[f32; 4]>,

    /// Ambient color (RGBA)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambient: Option<[f32; 4]>,

    /// Specular exponent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shininess: Option<f32>,
}

/// Extract the exported properties of one material.
pub fn material_record(material: &Material) -> MaterialRecord {
    MaterialRecord {
        texture: material.diffuse_texture.clone(),
        diffuse: material.diffuse,
        specular: material.specular,
        ambient: material.ambient,
        shininess: material.shininess,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_material_serializes_to_empty_object() {
        let record = material_record(&Material::default());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_present_properties_only() {
        let material = Material {
            name: "wood".to_string(),
            diffuse_texture: Some("wood.png".to_string()),
            diffuse: Some([0.8, 0.6, 0.4, 1.0]),
            specular: None,
            ambient: None,
            shininess: Some(32.0),
        };

        let json = serde_json::to_value(material_record(&material)).unwrap();

        assert_eq!(json["texture"], "wood.png");
        assert_eq!(json["shininess"], 32.0);
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("specular"));
        assert!(!object.contains_key("ambient"));
        // Absent means absent, not null
        assert!(object.values().all(|v| !v.is_null()));
    }

    #[test]
    fn test_diffuse_only() {
        let material = Material::new("red", [1.0, 0.0, 0.0, 1.0]);
        let json = serde_json::to_value(material_record(&material)).unwrap();
        assert_eq!(json, serde_json::json!({ "diffuse": [1.0, 0.0, 0.0, 1.0] }));
    }
}
