//! Render tree generation
//!
//!     Turns a validated model into a [`RenderTree`]: one rendered slide per slide, each
//!     with its own header and footer and a nested element tree for its content. The tree is
//!     presentational (tags, classes, data attributes, inline styles) and carries every
//!     piece of state the browser-side runtime needs, so emitters only serialize it.
//!
//!     Generation is single-threaded and deterministic: rendering the same model twice
//!     yields equal trees.
//!
//! ## Modules
//!
//! - `tree` - render tree types
//! - `context` - per-run state threaded through the recursion
//! - `generator` - dispatch over box kinds, component expansion, grids
//! - `terminals` - text, image, video, list and code renderers
//! - `quiz` - quiz and live-quiz widgets
//! - `chrome` - theme, header and footer

pub mod chrome;
pub mod context;
pub mod generator;
pub mod quiz;
pub mod terminals;
pub mod tree;

pub use context::RenderContext;
pub use generator::{render, render_box, render_slide};
pub use tree::{Element, RenderNode, RenderTree, RenderedRegion, RenderedSlide, RenderedTheme, Style};
