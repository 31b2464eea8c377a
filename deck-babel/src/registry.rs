//! Format registry for format discovery and selection

use crate::error::FormatError;
use crate::format::Format;
use deck::deck::render::RenderTree;
use std::collections::HashMap;

/// Registry of output formats, keyed by name
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let html = registry.serialize(&tree, "html")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Preferred file extension of a format, falling back to its name
    pub fn extension(&self, name: &str) -> Result<String, FormatError> {
        let format = self.get(name)?;
        Ok(format
            .file_extensions()
            .first()
            .map(|ext| ext.to_string())
            .unwrap_or_else(|| format.name().to_string()))
    }

    /// Serialize a render tree using the specified format
    pub fn serialize(&self, tree: &RenderTree, format: &str) -> Result<String, FormatError> {
        self.get(format)?.serialize(tree)
    }

    pub fn serialize_with_options(
        &self,
        tree: &RenderTree,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        self.get(format)?.serialize_with_options(tree, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::html::HtmlFormat::default());
        registry.register(crate::formats::json::JsonFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
