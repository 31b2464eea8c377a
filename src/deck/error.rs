//! Error types for layout, attribute merging, rendering and compilation

use super::ast::Range;
use super::diagnostics::Diagnostics;
use thiserror::Error;

/// Errors raised while computing container geometry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("column count must be a positive integer, got '{0}'")]
    InvalidColumns(String),

    #[error("invalid alignment '{value}': {reason}")]
    InvalidAlignment { value: String, reason: String },

    #[error("'{key}' must be a percentage between 0% and 100%, got '{value}'")]
    InvalidDimension { key: String, value: String },
}

/// Errors raised while resolving the effective attributes of a call site
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MergeError {
    #[error("unknown component '{name}' at {range}")]
    UnknownComponent { name: String, range: Range },

    #[error("component reference cycle: {}", .chain.join(" -> "))]
    Cycle { chain: Vec<String> },
}

/// Errors raised by the render tree generator
///
/// Rendering assumes a validated model; these surface when it is handed one that is not,
/// instead of producing broken markup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Merge(#[from] MergeError),

    #[error("layout of container at {range}: {source}")]
    Layout {
        #[source]
        source: LayoutError,
        range: Range,
    },

    #[error("invalid value for attribute '{key}' at {range}: {message}")]
    InvalidAttribute {
        key: String,
        message: String,
        range: Range,
    },

    #[error("slot '{name}' rendered outside of a component expansion at {range}")]
    SlotOutsideComponent { name: String, range: Range },

    #[error("cannot encode live quiz '{quiz}' payload: {message}")]
    Payload { quiz: String, message: String },
}

/// Errors returned by [`compile`](crate::deck::pipeline::compile)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error("model rejected with {} error(s) and {} warning(s)", .diagnostics.error_count(), .diagnostics.warning_count())]
    Rejected { diagnostics: Diagnostics },

    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}
