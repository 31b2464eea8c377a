//! Compilation pipeline
//!
//! One run takes an immutable [`Model`] to a [`RenderTree`]:
//!
//! 1. **Symbol table** - built fresh for this run, dropped with it
//! 2. **Validation** - every diagnostic collected across the whole model
//! 3. **Decision** - any error aborts; warnings abort only when denied
//! 4. **Rendering** - the validated model becomes a render tree
//!
//! # Usage
//!
//! ```rust,ignore
//! use deck::deck::pipeline::{compile, Pipeline};
//!
//! let compilation = compile(&model)?;
//! for warning in compilation.diagnostics.warnings() {
//!     eprintln!("{warning}");
//! }
//!
//! // Treat warnings as fatal
//! let strict = Pipeline::new().deny_warnings(true).run(&model);
//! ```
//!
//! Nothing is rendered while a fatal diagnostic is outstanding; the caller gets
//! [`CompileError::Rejected`] with the full list instead of a partial deck.

use super::ast::Model;
use super::diagnostics::{Decision, Diagnostics};
use super::error::CompileError;
use super::render::{render, RenderTree};
use super::symbols::SymbolTable;
use super::validation::validate;
use tracing::{info, instrument, warn};

/// Result of a successful run: the tree plus the warnings that did not block it
#[derive(Debug, Clone, PartialEq)]
pub struct Compilation {
    pub diagnostics: Diagnostics,
    pub tree: RenderTree,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    deny_warnings: bool,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deny_warnings(mut self, deny: bool) -> Self {
        self.deny_warnings = deny;
        self
    }

    /// Validate without rendering
    #[instrument(skip_all)]
    pub fn check(&self, model: &Model) -> Diagnostics {
        let table = SymbolTable::build(model);
        validate(model, &table)
    }

    /// Validate, decide, then render
    #[instrument(skip_all, fields(deny_warnings = self.deny_warnings))]
    pub fn run(&self, model: &Model) -> Result<Compilation, CompileError> {
        let table = SymbolTable::build(model);
        let diagnostics = validate(model, &table);

        if diagnostics.decision(self.deny_warnings) == Decision::Abort {
            warn!(
                errors = diagnostics.error_count(),
                warnings = diagnostics.warning_count(),
                "model rejected"
            );
            return Err(CompileError::Rejected { diagnostics });
        }

        let tree = render(model, &table)?;
        info!(
            slides = tree.slides.len(),
            warnings = diagnostics.warning_count(),
            "deck compiled"
        );
        Ok(Compilation { diagnostics, tree })
    }
}

/// Validate `model` with default settings
pub fn check(model: &Model) -> Diagnostics {
    Pipeline::new().check(model)
}

/// Compile `model` with default settings: errors abort, warnings pass
pub fn compile(model: &Model) -> Result<Compilation, CompileError> {
    Pipeline::new().run(model)
}
