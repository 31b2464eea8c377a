//! Model validation
//!
//!     Validation consumes the [symbol table](super::symbols::SymbolTable) and reports every
//!     violation it finds across the whole model. It never stops at the first problem: each
//!     check pushes into one [`Diagnostics`] list and the caller decides afterwards whether
//!     generation may proceed.
//!
//! Checks, in order
//!
//!     1. Declarations: shadowed components, slots declared twice, slide ids.
//!     2. Component bodies: call sites naming unknown components, components referencing
//!        themselves at any depth, transitive cycles, slot usage at call sites inside
//!        components.
//!     3. Slides and deck-wide regions: call sites must resolve, fills must name declared
//!        slots at most once, declared slots left unfilled are reported as warnings.
//!     4. Attributes: closed key sets per box kind, value rules, repeated keys. Call-site
//!        attributes are checked against the kind of the component's resolved root.
//!     5. Content: quiz and live-quiz consistency, accessibility of media.
//!
//!     Severity follows one rule: anything that would make the rendered deck wrong is an
//!     error, anything that only makes it worse is a warning.

use super::ast::Model;
use super::diagnostics::Diagnostics;
use super::symbols::SymbolTable;
use tracing::{debug, instrument};

pub mod attributes;
pub mod content;
pub mod declarations;
pub mod references;

pub use attributes::validate_attributes;
pub use content::validate_content;
pub use declarations::validate_declarations;
pub use references::{validate_component_references, validate_slide_references};

/// Run every check against `model`
#[instrument(skip_all, fields(components = model.components.len(), slides = model.slides.len()))]
pub fn validate(model: &Model, table: &SymbolTable<'_>) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    diagnostics.extend(validate_declarations(model, table));
    diagnostics.extend(validate_component_references(table));
    diagnostics.extend(validate_slide_references(model, table));
    diagnostics.extend(validate_attributes(model, table));
    diagnostics.extend(validate_content(model));

    debug!(
        errors = diagnostics.error_count(),
        warnings = diagnostics.warning_count(),
        "validation finished"
    );
    diagnostics
}

impl Model {
    /// Build a symbol table and validate against it
    ///
    /// # Example
    /// ```rust,ignore
    /// let diagnostics = model.diagnostics();
    /// for diag in &diagnostics {
    ///     eprintln!("{}", diag);
    /// }
    /// ```
    pub fn diagnostics(&self) -> Diagnostics {
        let table = SymbolTable::build(self);
        validate(self, &table)
    }
}
