//! Effective attributes for call sites
//!
//! `merge(D, R)[k] = R[k]` when the call site sets `k`, else `D[k]`. The declared side
//! `D` comes from the component's root box; when that root is a call site itself, its own
//! effective attributes are the declared side, recursively, and the innermost container,
//! terminal or bare slot decides the kind of the result.
//!
//! Merging runs before validation has ruled out cycles (the validator uses it to find the
//! rule set for call-site attributes), so the walk keeps the chain of components it is
//! expanding and reports a cycle instead of recursing forever.

use super::kind::AttributeKind;
use super::map::AttributeMap;
use crate::deck::ast::{Attribute, ComponentBox, ComponentBoxReference};
use crate::deck::error::MergeError;
use crate::deck::symbols::SymbolTable;

/// Override `declared` with `overrides`, key by key
pub fn merge(declared: &AttributeMap, overrides: &[Attribute]) -> AttributeMap {
    let mut merged = declared.clone();
    merged.apply(overrides);
    merged
}

/// The attributes the root box of `reference`'s component renders with
pub fn effective_attributes(
    table: &SymbolTable<'_>,
    reference: &ComponentBoxReference,
) -> Result<AttributeMap, MergeError> {
    let mut chain = Vec::new();
    resolve(table, reference, &mut chain)
}

/// The rule set call-site attributes of `reference` are checked against
pub fn root_kind(
    table: &SymbolTable<'_>,
    reference: &ComponentBoxReference,
) -> Result<AttributeKind, MergeError> {
    effective_attributes(table, reference).map(|map| map.kind())
}

fn resolve(
    table: &SymbolTable<'_>,
    reference: &ComponentBoxReference,
    chain: &mut Vec<String>,
) -> Result<AttributeMap, MergeError> {
    let component =
        table
            .resolve(reference)
            .ok_or_else(|| MergeError::UnknownComponent {
                name: reference.reference.clone(),
                range: reference.range.clone(),
            })?;

    if chain.iter().any(|name| name == &component.name) {
        let mut cycle = chain.clone();
        cycle.push(component.name.clone());
        return Err(MergeError::Cycle { chain: cycle });
    }

    chain.push(component.name.clone());
    let declared = declared_with_chain(table, &component.root, chain)?;
    chain.pop();

    Ok(merge(&declared, &reference.attributes))
}

fn declared_with_chain(
    table: &SymbolTable<'_>,
    root: &ComponentBox,
    chain: &mut Vec<String>,
) -> Result<AttributeMap, MergeError> {
    match root {
        ComponentBox::ComponentBoxReference(inner) => resolve(table, inner, chain),
        // the fill renders as is, so only `fragment` can apply
        ComponentBox::ComponentSlot(_) => Ok(AttributeMap::new(AttributeKind::Slot)),
        ComponentBox::ComponentContentBox(container) => Ok(AttributeMap::from_attributes(
            AttributeKind::Container,
            &container.attributes,
        )),
        ComponentBox::Text(_)
        | ComponentBox::Image(_)
        | ComponentBox::Video(_)
        | ComponentBox::List(_)
        | ComponentBox::Code(_)
        | ComponentBox::Quiz(_)
        | ComponentBox::LiveQuiz(_) => {
            let kind = root
                .as_terminal()
                .map(AttributeKind::of_terminal)
                .unwrap_or(AttributeKind::Container);
            Ok(AttributeMap::from_attributes(kind, root.attributes()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::ast::{Component, ComponentContentBox, ComponentSlot, ImageBox, Model, TextBox};

    fn card_model() -> Model {
        Model::new()
            .with_component(Component::new(
                "Card",
                ComponentBox::ComponentContentBox(
                    ComponentContentBox::new(vec![])
                        .with_attributes(vec![Attribute::text("width", "100%")]),
                ),
            ))
            .with_component(Component::new(
                "Banner",
                ComponentBox::ComponentBoxReference(
                    ComponentBoxReference::new("Card")
                        .with_attributes(vec![Attribute::number("column", 3.0)]),
                ),
            ))
            .with_component(Component::new(
                "Logo",
                ComponentBox::Image(ImageBox {
                    attributes: vec![Attribute::number("scale", 2.0)],
                    ..ImageBox::new("logo.png", "logo")
                }),
            ))
    }

    #[test]
    fn test_call_site_overrides_declaration() {
        let model = card_model();
        let table = SymbolTable::build(&model);
        let reference = ComponentBoxReference::new("Card")
            .with_attributes(vec![Attribute::text("height", "50%")]);

        let merged = effective_attributes(&table, &reference).unwrap();
        assert_eq!(merged.kind(), AttributeKind::Container);
        assert_eq!(merged.text("width").as_deref(), Some("100%"));
        assert_eq!(merged.text("height").as_deref(), Some("50%"));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_nested_reference_resolves_to_innermost_kind() {
        let model = card_model();
        let table = SymbolTable::build(&model);
        let reference = ComponentBoxReference::new("Banner")
            .with_attributes(vec![Attribute::number("column", 4.0)]);

        let merged = effective_attributes(&table, &reference).unwrap();
        assert_eq!(merged.kind(), AttributeKind::Container);
        assert_eq!(merged.number("column"), Some(4.0));
        assert_eq!(merged.text("width").as_deref(), Some("100%"));
    }

    #[test]
    fn test_terminal_root_kind() {
        let model = card_model();
        let table = SymbolTable::build(&model);
        let kind = root_kind(&table, &ComponentBoxReference::new("Logo")).unwrap();
        assert_eq!(kind, AttributeKind::Image);
    }

    #[test]
    fn test_unknown_component() {
        let model = card_model();
        let table = SymbolTable::build(&model);
        let err = effective_attributes(&table, &ComponentBoxReference::new("Ghost")).unwrap_err();
        assert!(matches!(err, MergeError::UnknownComponent { ref name, .. } if name == "Ghost"));
    }

    #[test]
    fn test_cycle_is_reported() {
        let model = Model::new()
            .with_component(Component::new(
                "A",
                ComponentBox::ComponentBoxReference(ComponentBoxReference::new("B")),
            ))
            .with_component(Component::new(
                "B",
                ComponentBox::ComponentBoxReference(ComponentBoxReference::new("A")),
            ));
        let table = SymbolTable::build(&model);
        let err = effective_attributes(&table, &ComponentBoxReference::new("A")).unwrap_err();
        assert_eq!(
            err,
            MergeError::Cycle {
                chain: vec!["A".into(), "B".into(), "A".into()]
            }
        );
    }

    #[test]
    fn test_text_root_keeps_text_rules() {
        let model = Model::new().with_component(Component::new(
            "Title",
            ComponentBox::Text(TextBox {
                attributes: vec![Attribute::flag("bold")],
                ..TextBox::new("Hello")
            }),
        ));
        let table = SymbolTable::build(&model);
        let merged = effective_attributes(
            &table,
            &ComponentBoxReference::new("Title")
                .with_attributes(vec![Attribute::text("color", "red")]),
        )
        .unwrap();
        assert_eq!(merged.kind(), AttributeKind::Text);
        assert!(merged.flag("bold"));
        assert_eq!(merged.text("color").as_deref(), Some("red"));
    }

    #[test]
    fn test_slot_root_only_carries_fragment() {
        let model = Model::new().with_component(Component::new(
            "Wrap",
            ComponentBox::ComponentSlot(ComponentSlot::new("x")),
        ));
        let table = SymbolTable::build(&model);
        let reference = ComponentBoxReference::new("Wrap");

        assert_eq!(root_kind(&table, &reference).unwrap(), AttributeKind::Slot);
        assert!(AttributeKind::Slot.authorizes("fragment"));
        assert!(!AttributeKind::Slot.authorizes("column"));
    }
}
