//! Call-site checks: resolution, self-reference, cycles and slot completeness

use crate::deck::ast::{ComponentBoxReference, Model, SlideBox};
use crate::deck::diagnostics::{codes, Diagnostic};
use crate::deck::symbols::{collect_references, SymbolTable};
use std::collections::{HashMap, HashSet, VecDeque};

/// Check every call site inside component bodies, plus self-reference and cycles
pub fn validate_component_references(table: &SymbolTable<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for name in table.names() {
        let Some(symbols) = table.symbols(name) else {
            continue;
        };

        let mut references_itself = false;
        for reference in &symbols.references {
            if reference.reference == name {
                references_itself = true;
                diagnostics.push(
                    Diagnostic::error(
                        &reference.range,
                        format!("Component '{name}' references itself"),
                    )
                    .with_code(codes::SELF_REFERENCE),
                );
            } else {
                validate_call_site(table, reference, &mut diagnostics);
            }
        }

        if references_itself {
            continue;
        }
        if let (Some(cycle), Some(component)) = (find_cycle(table, name), table.component(name)) {
            diagnostics.push(
                Diagnostic::error(
                    &component.range,
                    format!(
                        "Component '{name}' is part of a reference cycle: {}",
                        cycle.join(" -> ")
                    ),
                )
                .with_code(codes::REFERENCE_CYCLE),
            );
        }
    }

    diagnostics
}

/// Check every call site reachable from slides and from the deck-wide header and footer
pub fn validate_slide_references(model: &Model, table: &SymbolTable<'_>) -> Vec<Diagnostic> {
    let mut roots: Vec<&SlideBox> = Vec::new();
    for region in model.header.iter().chain(model.footer.iter()) {
        roots.push(&region.content);
    }
    for slide in &model.slides {
        roots.push(&slide.content);
        for region in slide.header.iter().chain(slide.footer.iter()) {
            roots.push(&region.content);
        }
    }

    let mut references = Vec::new();
    for root in roots {
        collect_references(root, &mut references);
    }

    let mut diagnostics = Vec::new();
    for reference in references {
        validate_call_site(table, reference, &mut diagnostics);
    }
    diagnostics
}

fn validate_call_site(
    table: &SymbolTable<'_>,
    reference: &ComponentBoxReference,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Some(component) = table.resolve(reference) else {
        diagnostics.push(
            Diagnostic::error(
                &reference.range,
                format!("Unknown component '{}'", reference.reference),
            )
            .with_code(codes::UNKNOWN_COMPONENT),
        );
        return;
    };
    let Some(declared) = table.slots(&component.name) else {
        return;
    };

    let mut filled = HashSet::new();
    for fill in &reference.slots {
        if !declared.contains(fill.name.as_str()) {
            diagnostics.push(
                Diagnostic::error(
                    &fill.range,
                    format!(
                        "Component '{}' has no slot named '{}'",
                        component.name, fill.name
                    ),
                )
                .with_code(codes::UNKNOWN_SLOT),
            );
        } else if !filled.insert(fill.name.as_str()) {
            diagnostics.push(
                Diagnostic::error(
                    &fill.range,
                    format!("Slot '{}' is filled more than once", fill.name),
                )
                .with_code(codes::DUPLICATE_SLOT_FILL),
            );
        }
    }

    for slot in declared {
        if !filled.contains(slot) {
            diagnostics.push(
                Diagnostic::warning(
                    &reference.range,
                    format!(
                        "Slot '{}' of component '{}' is never used",
                        slot, component.name
                    ),
                )
                .with_code(codes::UNUSED_SLOT),
            );
        }
    }
}

/// Shortest chain of distinct components leading from `start` back to itself
fn find_cycle<'a>(table: &SymbolTable<'a>, start: &'a str) -> Option<Vec<&'a str>> {
    let mut parents: HashMap<&'a str, &'a str> = HashMap::new();
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        let Some(symbols) = table.symbols(current) else {
            continue;
        };
        for &reference in &symbols.references {
            let next = reference.reference.as_str();
            if next == start {
                if current == start {
                    continue;
                }
                let mut chain = vec![current];
                let mut node = current;
                while let Some(&parent) = parents.get(node) {
                    chain.push(parent);
                    node = parent;
                }
                chain.reverse();
                chain.push(start);
                return Some(chain);
            }
            if table.contains(next) && !parents.contains_key(next) {
                parents.insert(next, current);
                queue.push_back(next);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::ast::{Component, ComponentBox, ComponentContentBox, ComponentSlot, Slide, TextBox};

    fn reference(name: &str) -> ComponentBox {
        ComponentBox::ComponentBoxReference(ComponentBoxReference::new(name))
    }

    #[test]
    fn test_direct_self_reference() {
        let model = Model::new().with_component(Component::new("Loop", reference("Loop")));
        let table = SymbolTable::build(&model);
        let diagnostics = validate_component_references(&table);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code.as_deref(), Some(codes::SELF_REFERENCE));
    }

    #[test]
    fn test_transitive_cycle_reported_on_each_member() {
        let model = Model::new()
            .with_component(Component::new("A", reference("B")))
            .with_component(Component::new("B", reference("C")))
            .with_component(Component::new("C", reference("A")));
        let table = SymbolTable::build(&model);
        let diagnostics = validate_component_references(&table);

        let messages: Vec<&str> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Component 'A' is part of a reference cycle: A -> B -> C -> A",
                "Component 'B' is part of a reference cycle: B -> C -> A -> B",
                "Component 'C' is part of a reference cycle: C -> A -> B -> C",
            ]
        );
    }

    #[test]
    fn test_unknown_component_inside_component() {
        let model = Model::new().with_component(Component::new("A", reference("Nope")));
        let table = SymbolTable::build(&model);
        let diagnostics = validate_component_references(&table);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Unknown component 'Nope'");
    }

    #[test]
    fn test_slot_checks_at_slide_call_sites() {
        let card = Component::new(
            "Card",
            ComponentBox::ComponentContentBox(ComponentContentBox::new(vec![
                ComponentBox::ComponentSlot(ComponentSlot::new("title")),
                ComponentBox::ComponentSlot(ComponentSlot::new("body")),
            ])),
        );
        let call = ComponentBoxReference::new("Card")
            .fill("title", SlideBox::Text(TextBox::new("a")))
            .fill("title", SlideBox::Text(TextBox::new("b")))
            .fill("footer", SlideBox::Text(TextBox::new("c")));
        let model = Model::new()
            .with_component(card)
            .with_slide(Slide::new("s1", SlideBox::ComponentBoxReference(call)));
        let table = SymbolTable::build(&model);
        let diagnostics = validate_slide_references(&model, &table);

        let found: Vec<_> = diagnostics.iter().filter_map(|d| d.code.as_deref()).collect();
        assert_eq!(
            found,
            vec![codes::DUPLICATE_SLOT_FILL, codes::UNKNOWN_SLOT, codes::UNUSED_SLOT]
        );
    }
}
