//! Material definition for the M2J scene model.

/// A material with every visual property independently optional.
///
/// Source formats rarely define every property, so each one carries its
/// own presence. The exporter omits absent properties from the output
/// rather than inventing defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Material {
    /// Material name (from the source file, may be empty)
    pub name: String,

    /// Path to the diffuse texture
    pub diffuse_texture: Option<String>,

    /// Diffuse color (RGBA, 0-1)
    pub diffuse: Option<[f32; 4]>,

    /// Specular color (RGBA, 0-1)
    pub specular: Option<[f32; 4]>,

    /// Ambient color (RGBA, 0-1)
    pub ambient: Option<[f32; 4]>,

    /// Specular exponent
    pub shininess: Option<f32>,
}

impl Material {
    /// Create a new material with just a name and diffuse color.
    pub fn new(name: impl Into<String>, diffuse: [f32; 4]) -> Self {
        Self {
            name: name.into(),
            diffuse: Some(diffuse),
            ..Default::default()
        }
    }

    /// Check if this material defines any property at all.
    pub fn is_defined(&self) -> bool {
        self.diffuse_texture.is_some()
            || self.diffuse.is_some()
            || self.specular.is_some()
            || self.ambient.is_some()
            || self.shininess.is_some()
    }
}
