//! Declaration-level checks: shadowed components, repeated slots, slide ids

use crate::deck::ast::Model;
use crate::deck::diagnostics::{codes, Diagnostic};
use crate::deck::symbols::SymbolTable;
use std::collections::HashSet;

pub fn validate_declarations(model: &Model, table: &SymbolTable<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for component in table.shadowed() {
        diagnostics.push(
            Diagnostic::warning(
                &component.range,
                format!(
                    "Component '{}' is declared more than once; the last declaration is used",
                    component.name
                ),
            )
            .with_code(codes::DUPLICATE_COMPONENT),
        );
    }

    for (component, slot) in table.repeated_slots() {
        diagnostics.push(
            Diagnostic::warning(
                &slot.range,
                format!(
                    "Slot '{}' is declared more than once in component '{}'",
                    slot.name, component.name
                ),
            )
            .with_code(codes::DUPLICATE_SLOT),
        );
    }

    let mut seen = HashSet::new();
    for slide in &model.slides {
        if slide.id.trim().is_empty() {
            diagnostics.push(
                Diagnostic::error(&slide.range, "Slide has an empty id")
                    .with_code(codes::EMPTY_SLIDE_ID),
            );
        } else if !seen.insert(slide.id.as_str()) {
            diagnostics.push(
                Diagnostic::error(&slide.range, format!("Slide id '{}' is used twice", slide.id))
                    .with_code(codes::DUPLICATE_SLIDE_ID),
            );
        }
    }

    diagnostics
}
