//! JSON format: the render tree as pretty-printed JSON
//!
//! Useful for tooling that wants the resolved deck without parsing markup, and for
//! inspecting what the generator produced.

use crate::error::FormatError;
use crate::format::Format;
use deck::deck::render::RenderTree;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Render tree as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, tree: &RenderTree) -> Result<String, FormatError> {
        serde_json::to_string_pretty(tree)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }
}
