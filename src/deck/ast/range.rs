//! Position and location tracking for source code locations
//!
//! The front-end attaches a [`Range`] to every node it hands over. The core never reads
//! source text; ranges only travel into diagnostics so editors and the command line can
//! point at the offending node.
//!
//! ## Key Design
//!
//! - **Optional on input**: a serialized tree may omit ranges, they default to 0:0..0:0
//! - **Byte ranges preserved**: stores both byte spans and line:column positions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range as ByteRange;

/// Represents a position in source code (line and column)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Represents a location in source code (start and end positions)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    #[serde(default = "empty_span")]
    pub span: ByteRange<usize>,
    #[serde(default)]
    pub start: Position,
    #[serde(default)]
    pub end: Position,
}

fn empty_span() -> ByteRange<usize> {
    0..0
}

impl Range {
    pub fn new(span: ByteRange<usize>, start: Position, end: Position) -> Self {
        Self { span, start, end }
    }

    /// A range covering a single line, handy for hand-built trees
    pub fn line(line: usize) -> Self {
        Self::new(0..0, Position::new(line, 0), Position::new(line, 0))
    }

    /// Check if a position is contained within this location
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos <= self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::new(empty_span(), Position::default(), Position::default())
    }
}
