//! AST definitions for the deck language
//!
//!     This module provides the document tree the front-end hands to the core, along with
//!     source ranges and a visitor for uniform traversal.
//!
//! Lifecycle
//!
//!     The tree arrives fully parsed and with named cross-references (a call site naming
//!     the component it instantiates) that have not been checked yet. Nothing in the core
//!     mutates it; checks and rendering work on shared references.
//!
//! ## Modules
//!
//! - `range` - Position and Range types for source code locations
//! - `elements` - AST node type definitions organized by element type
//! - `traits` - Common traits for AST nodes (AstNode, Visitor)

pub mod elements;
pub mod range;
pub mod traits;

// Re-export commonly used types at module root
pub use elements::{
    Attribute, AttributeValue, CodeBox, Component, ComponentBox, ComponentBoxReference,
    ComponentContentBox, ComponentSlot, Container, ContentBox, Footer, Header, ImageBox, ListBox,
    LiveQuizBox, Model, QuizBox, QuizKind, QuizOption, Slide, SlideBox, SlideRegion, SlotFill,
    Terminal, TextBox, Theme, VideoBox,
};
pub use range::{Position, Range};
pub use traits::{AstNode, Visitor};
