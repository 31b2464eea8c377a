//! Output formats for deck render trees
//!
//!     The core stops at a [`RenderTree`](deck::deck::render::RenderTree). This crate turns
//!     that tree into artifacts behind one uniform interface.
//!
//! Architecture
//!
//!     - Format trait: uniform interface for every output format
//!     - FormatRegistry: discovery and selection of formats by name
//!     - publish: serialize with a chosen format and write `<outputDir>/<name>.<ext>`
//!
//!     This is a pure lib: it powers deck-cli but assumes no shell. No printing, no env vars.
//!
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── publish.rs              # Serialize and write artifacts
//!     ├── formats
//!     │   ├── html                # Self-contained slide deck
//!     │   └── json                # Render tree dump, for tooling and debugging
//!     └── lib.rs
//!
//! Formats
//!
//!     - html: one self-contained document per deck, wrapping the slides in a reveal.js
//!       skeleton with the runtime script and stylesheet embedded
//!     - json: the render tree as pretty-printed JSON

pub mod error;
pub mod format;
pub mod formats;
pub mod publish;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use formats::html::{HtmlFormat, HtmlOptions};
pub use formats::json::JsonFormat;
pub use publish::{output_path, publish, PublishArtifact, PublishResult, PublishSpec};
pub use registry::FormatRegistry;
