//! Property tests over merge, slot completeness, self-reference and idempotence

use deck::deck::ast::{
    Attribute, Component, ComponentBox, ComponentBoxReference, ComponentContentBox,
    ComponentSlot, Model, Slide, SlideBox,
};
use deck::deck::attributes::{merge, AttributeKind, AttributeMap};
use deck::deck::diagnostics::codes;
use deck::deck::pipeline::{check, compile};
use deck::deck::testing::{container, sample_deck, text};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

const KEYS: [&str; 5] = ["column", "width", "height", "alignment", "fragment"];
const SLOTS: [&str; 6] = ["title", "body", "aside", "footer", "media", "note"];

fn attribute_list() -> impl Strategy<Value = Vec<(usize, u32)>> {
    prop::collection::vec((0..KEYS.len(), 0u32..100), 0..8)
}

fn to_attributes(pairs: &[(usize, u32)]) -> Vec<Attribute> {
    pairs
        .iter()
        .map(|(key, value)| Attribute::number(KEYS[*key], f64::from(*value)))
        .collect()
}

/// A component whose root nests `depth` containers around a reference to itself
fn self_referencing(name: &str, depth: usize) -> Component {
    let mut root = ComponentBox::ComponentBoxReference(ComponentBoxReference::new(name));
    for _ in 0..depth {
        root = ComponentBox::ComponentContentBox(ComponentContentBox::new(vec![
            ComponentBox::ComponentSlot(ComponentSlot::new("inner")),
            root,
        ]));
    }
    Component::new(name, root)
}

proptest! {
    #[test]
    fn merge_overrides_key_by_key(declared in attribute_list(), overrides in attribute_list()) {
        let declared_map =
            AttributeMap::from_attributes(AttributeKind::Container, &to_attributes(&declared));
        let merged = merge(&declared_map, &to_attributes(&overrides));

        let last_override: HashMap<&str, u32> =
            overrides.iter().map(|(k, v)| (KEYS[*k], *v)).collect();
        for key in KEYS {
            let expected = match last_override.get(key) {
                Some(value) => Some(f64::from(*value)),
                None => declared_map.number(key),
            };
            prop_assert_eq!(merged.number(key), expected);
        }
        prop_assert_eq!(merged.kind(), AttributeKind::Container);
    }

    #[test]
    fn unfilled_slots_are_exactly_declared_minus_provided(
        declared in prop::collection::btree_set(0..SLOTS.len(), 1..SLOTS.len()),
        picks in prop::collection::btree_set(0..SLOTS.len(), 0..SLOTS.len()),
    ) {
        let declared: BTreeSet<&str> = declared.into_iter().map(|i| SLOTS[i]).collect();
        let provided: BTreeSet<&str> = picks
            .into_iter()
            .map(|i| SLOTS[i])
            .filter(|slot| declared.contains(slot))
            .collect();

        let root = ComponentContentBox::new(
            declared
                .iter()
                .map(|slot| ComponentBox::ComponentSlot(ComponentSlot::new(*slot)))
                .collect(),
        );
        let call_site = provided.iter().fold(ComponentBoxReference::new("Frame"), |r, slot| {
            r.fill(*slot, text(slot))
        });
        let model = Model::new()
            .with_component(Component::new("Frame", ComponentBox::ComponentContentBox(root)))
            .with_slide(Slide::new("s", SlideBox::ComponentBoxReference(call_site)));

        let diagnostics = check(&model);
        prop_assert_eq!(diagnostics.error_count(), 0);

        let unused: BTreeSet<String> = diagnostics
            .with_code(codes::UNUSED_SLOT)
            .map(|d| d.message.clone())
            .collect();
        let expected: BTreeSet<String> = declared
            .difference(&provided)
            .map(|slot| format!("Slot '{slot}' of component 'Frame' is never used"))
            .collect();
        prop_assert_eq!(unused, expected);
    }

    #[test]
    fn self_reference_is_rejected_at_any_depth(depth in 0usize..6) {
        let model = Model::new()
            .with_component(self_referencing("Loop", depth))
            .with_slide(Slide::new("s", text("hi")));

        let diagnostics = check(&model);
        prop_assert_eq!(diagnostics.with_code(codes::SELF_REFERENCE).count(), 1);
        prop_assert!(compile(&model).is_err());
    }

    #[test]
    fn generation_is_idempotent(columns in 1u32..5, children in 1usize..10) {
        let items: Vec<SlideBox> = (0..children).map(|i| text(&format!("{i}"))).collect();
        let model = sample_deck().with_slide(Slide::new(
            "grid",
            container(items, vec![Attribute::number("column", f64::from(columns))]),
        ));

        let first = compile(&model).unwrap();
        let second = compile(&model).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&first.tree).unwrap(),
            serde_json::to_string(&second.tree).unwrap()
        );
        prop_assert_eq!(first, second);
    }
}
