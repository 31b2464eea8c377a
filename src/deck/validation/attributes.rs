//! Attribute checks
//!
//! Walks the whole model with a [`Visitor`] and checks each node's attribute list against
//! the rule set of its kind. Call sites are checked against the kind their component's root
//! resolves to, so `bold` passed to a component whose root is an image is caught at the
//! call site.

use crate::deck::ast::{
    Attribute, ComponentBoxReference, ComponentContentBox, ContentBox, Model, Range,
    SlideRegion, Terminal, Theme, Visitor,
};
use crate::deck::attributes::{check_value, root_kind, AttributeKind};
use crate::deck::diagnostics::{codes, Diagnostic};
use crate::deck::symbols::SymbolTable;
use std::collections::HashSet;

pub fn validate_attributes(model: &Model, table: &SymbolTable<'_>) -> Vec<Diagnostic> {
    let mut checker = AttributeChecker {
        table,
        diagnostics: Vec::new(),
    };
    model.accept(&mut checker);
    checker.diagnostics
}

/// Check one attribute list against `kind`
pub fn check_attributes(kind: AttributeKind, attributes: &[Attribute], node: &Range) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut seen = HashSet::new();

    for attribute in attributes {
        let range = if attribute.range == Range::default() {
            node
        } else {
            &attribute.range
        };

        if !seen.insert(attribute.key.as_str()) {
            diagnostics.push(
                Diagnostic::warning(
                    range,
                    format!("Attribute '{}' is set more than once", attribute.key),
                )
                .with_code(codes::DUPLICATE_ATTRIBUTE),
            );
        }

        if !kind.authorizes(&attribute.key) {
            diagnostics.push(
                Diagnostic::error(
                    range,
                    format!("Attribute '{}' is not allowed on {} boxes", attribute.key, kind),
                )
                .with_code(codes::UNAUTHORIZED_ATTRIBUTE),
            );
            continue;
        }

        if let Err(reason) = check_value(&attribute.key, &attribute.value()) {
            diagnostics.push(
                Diagnostic::error(range, format!("Invalid attribute value: {reason}"))
                    .with_code(codes::INVALID_ATTRIBUTE_VALUE),
            );
        }
    }

    diagnostics
}

struct AttributeChecker<'t, 'a> {
    table: &'t SymbolTable<'a>,
    diagnostics: Vec<Diagnostic>,
}

impl AttributeChecker<'_, '_> {
    fn check(&mut self, kind: AttributeKind, attributes: &[Attribute], node: &Range) {
        self.diagnostics
            .extend(check_attributes(kind, attributes, node));
    }
}

impl Visitor for AttributeChecker<'_, '_> {
    fn visit_theme(&mut self, theme: &Theme) {
        self.check(AttributeKind::Theme, &theme.attributes, &theme.range);
    }

    fn visit_region(&mut self, region: &SlideRegion) {
        self.check(AttributeKind::Region, &region.attributes, &region.range);
    }

    fn visit_content_box(&mut self, container: &ContentBox) {
        self.check(AttributeKind::Container, &container.attributes, &container.range);
    }

    fn visit_component_content_box(&mut self, container: &ComponentContentBox) {
        self.check(AttributeKind::Container, &container.attributes, &container.range);
    }

    fn visit_reference(&mut self, reference: &ComponentBoxReference) {
        // Unknown components and cycles are reported by the reference checks.
        if let Ok(kind) = root_kind(self.table, reference) {
            self.check(kind, &reference.attributes, &reference.range);
        }
    }

    fn visit_terminal(&mut self, terminal: Terminal<'_>) {
        self.check(
            AttributeKind::of_terminal(terminal),
            terminal.attributes(),
            terminal.range(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::ast::{Component, ComponentBox, ComponentSlot, ImageBox, Slide, SlideBox, TextBox};

    fn slide(content: SlideBox) -> Model {
        Model::new().with_slide(Slide::new("s", content))
    }

    #[test]
    fn test_bold_on_image_is_rejected() {
        let model = slide(SlideBox::Image(ImageBox {
            attributes: vec![Attribute::flag("bold")],
            ..ImageBox::new("a.png", "a")
        }));
        let table = SymbolTable::build(&model);
        let diagnostics = validate_attributes(&model, &table);

        assert_eq!(diagnostics.len(), 1);
        insta::assert_snapshot!(diagnostics[0].message, @"Attribute 'bold' is not allowed on image boxes");
    }

    #[test]
    fn test_duplicate_key_is_a_warning() {
        let model = slide(SlideBox::Text(TextBox {
            attributes: vec![Attribute::text("color", "red"), Attribute::text("color", "blue")],
            ..TextBox::new("hi")
        }));
        let table = SymbolTable::build(&model);
        let diagnostics = validate_attributes(&model, &table);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is_warning());
        assert_eq!(diagnostics[0].code.as_deref(), Some(codes::DUPLICATE_ATTRIBUTE));
    }

    #[test]
    fn test_out_of_range_values() {
        let model = slide(SlideBox::ContentBox(
            ContentBox::new(vec![]).with_attributes(vec![
                Attribute::number("column", 0.0),
                Attribute::text("height", "120%"),
            ]),
        ));
        let table = SymbolTable::build(&model);
        let diagnostics = validate_attributes(&model, &table);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics
            .iter()
            .all(|d| d.code.as_deref() == Some(codes::INVALID_ATTRIBUTE_VALUE)));
    }

    #[test]
    fn test_call_site_checked_against_root_kind() {
        let model = Model::new()
            .with_component(Component::new(
                "Logo",
                ComponentBox::Image(ImageBox::new("logo.png", "logo")),
            ))
            .with_slide(Slide::new(
                "s",
                SlideBox::ComponentBoxReference(
                    ComponentBoxReference::new("Logo").with_attributes(vec![
                        Attribute::number("scale", 2.0),
                        Attribute::flag("italic"),
                    ]),
                ),
            ));
        let table = SymbolTable::build(&model);
        let diagnostics = validate_attributes(&model, &table);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Attribute 'italic' is not allowed on image boxes"
        );
    }

    #[test]
    fn test_slot_root_only_accepts_fragment() {
        let model = Model::new()
            .with_component(Component::new(
                "Wrap",
                ComponentBox::ComponentSlot(ComponentSlot::new("x")),
            ))
            .with_slide(Slide::new(
                "s",
                SlideBox::ComponentBoxReference(
                    ComponentBoxReference::new("Wrap")
                        .with_attributes(vec![
                            Attribute::number("column", 3.0),
                            Attribute::text("width", "50%"),
                            Attribute::flag("fragment"),
                        ])
                        .fill("x", SlideBox::Text(TextBox::new("hi"))),
                ),
            ));
        let table = SymbolTable::build(&model);
        let diagnostics = validate_attributes(&model, &table);

        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Attribute 'column' is not allowed on slot boxes",
                "Attribute 'width' is not allowed on slot boxes",
            ]
        );
        assert!(diagnostics
            .iter()
            .all(|d| d.code.as_deref() == Some(codes::UNAUTHORIZED_ATTRIBUTE)));
    }
}
