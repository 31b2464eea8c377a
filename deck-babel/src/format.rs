//! Format trait definition
//!
//! Every output format implements [`Format`]. Formats are serialization-only: the document
//! tree comes from the external front-end, never from one of these outputs.

use crate::error::FormatError;
use deck::deck::render::RenderTree;
use std::collections::HashMap;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct Outline;
///
/// impl Format for Outline {
///     fn name(&self) -> &str {
///         "outline"
///     }
///
///     fn serialize(&self, tree: &RenderTree) -> Result<String, FormatError> {
///         Ok(tree.slides.iter().map(|s| s.id.as_str()).collect::<Vec<_>>().join("\n"))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions, preferred first
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    fn serialize(&self, tree: &RenderTree) -> Result<String, FormatError>;

    /// Serialize with per-call options
    ///
    /// Default implementation ignores the options.
    fn serialize_with_options(
        &self,
        tree: &RenderTree,
        _options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        self.serialize(tree)
    }
}
