//! Symbol table
//!
//!     Built once per run from the model's component declarations and threaded through
//!     validation and rendering as an explicit parameter. Nothing about it outlives the run.
//!
//!     For every component name the table records:
//!
//!         - the slot names the component exposes
//!         - every call site it contains, including call sites nested in slot defaults
//!           and in the fills of its own call sites
//!
//!     Declarations are processed in order. When a name is declared again the later
//!     declaration wins and the earlier one is kept aside as shadowed, so validation can
//!     warn about it.
//!
//!     Walks are plain recursion over the box trees rather than a [`Visitor`]: the table
//!     borrows from the model and visitor callbacks do not carry that lifetime.
//!
//! [`Visitor`]: crate::deck::ast::Visitor

use super::ast::{Component, ComponentBox, ComponentBoxReference, ComponentSlot, Model, SlideBox};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, instrument};

/// What one component exposes and uses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentSymbols<'a> {
    pub slots: BTreeSet<&'a str>,
    pub references: Vec<&'a ComponentBoxReference>,
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable<'a> {
    components: HashMap<&'a str, &'a Component>,
    symbols: HashMap<&'a str, ComponentSymbols<'a>>,
    shadowed: Vec<&'a Component>,
    repeated_slots: Vec<(&'a Component, &'a ComponentSlot)>,
}

impl<'a> SymbolTable<'a> {
    #[instrument(skip(model), fields(components = model.components.len()))]
    pub fn build(model: &'a Model) -> Self {
        let mut table = SymbolTable::default();

        for component in &model.components {
            if let Some(previous) = table.components.insert(component.name.as_str(), component) {
                debug!(name = %component.name, "component shadows an earlier declaration");
                table.shadowed.push(previous);
            }
        }

        // Only the winning declarations get symbols; shadowed ones are unreachable by name.
        let winners: Vec<&'a Component> = table.components.values().copied().collect();
        for component in winners {
            let mut symbols = ComponentSymbols::default();
            let mut repeated = Vec::new();
            collect_component(&component.root, &mut symbols, &mut repeated);
            table
                .repeated_slots
                .extend(repeated.into_iter().map(|slot| (component, slot)));
            table.symbols.insert(component.name.as_str(), symbols);
        }
        // HashMap iteration order is arbitrary; keep reports stable.
        table
            .repeated_slots
            .sort_by(|a, b| (&a.0.name, &a.1.name).cmp(&(&b.0.name, &b.1.name)));

        debug!(components = table.components.len(), "symbol table built");
        table
    }

    pub fn component(&self, name: &str) -> Option<&'a Component> {
        self.components.get(name).copied()
    }

    /// Resolve a call site to the declaration it names
    pub fn resolve(&self, reference: &ComponentBoxReference) -> Option<&'a Component> {
        self.component(&reference.reference)
    }

    pub fn symbols(&self, name: &str) -> Option<&ComponentSymbols<'a>> {
        self.symbols.get(name)
    }

    pub fn slots(&self, name: &str) -> Option<&BTreeSet<&'a str>> {
        self.symbols.get(name).map(|symbols| &symbols.slots)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Declared component names, sorted
    pub fn names(&self) -> Vec<&'a str> {
        let mut names: Vec<&'a str> = self.components.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Earlier declarations hidden by a later one with the same name, in declaration order
    pub fn shadowed(&self) -> &[&'a Component] {
        &self.shadowed
    }

    /// Slots declared more than once inside one component (each repeat after the first)
    pub fn repeated_slots(&self) -> &[(&'a Component, &'a ComponentSlot)] {
        &self.repeated_slots
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

fn collect_component<'a>(
    node: &'a ComponentBox,
    symbols: &mut ComponentSymbols<'a>,
    repeated: &mut Vec<&'a ComponentSlot>,
) {
    match node {
        ComponentBox::ComponentSlot(slot) => {
            if !symbols.slots.insert(slot.name.as_str()) {
                repeated.push(slot);
            }
            if let Some(default) = &slot.default {
                collect_references(default, &mut symbols.references);
            }
        }
        ComponentBox::ComponentBoxReference(reference) => {
            push_reference(reference, &mut symbols.references);
        }
        ComponentBox::ComponentContentBox(container) => {
            for child in &container.children {
                collect_component(child, symbols, repeated);
            }
        }
        ComponentBox::Text(_)
        | ComponentBox::Image(_)
        | ComponentBox::Video(_)
        | ComponentBox::List(_)
        | ComponentBox::Code(_)
        | ComponentBox::Quiz(_)
        | ComponentBox::LiveQuiz(_) => {}
    }
}

/// Every call site in a slide-level tree, in document order, fills included
pub fn collect_references<'a>(node: &'a SlideBox, out: &mut Vec<&'a ComponentBoxReference>) {
    match node {
        SlideBox::ContentBox(container) => {
            for child in &container.children {
                collect_references(child, out);
            }
        }
        SlideBox::ComponentBoxReference(reference) => push_reference(reference, out),
        SlideBox::Text(_)
        | SlideBox::Image(_)
        | SlideBox::Video(_)
        | SlideBox::List(_)
        | SlideBox::Code(_)
        | SlideBox::Quiz(_)
        | SlideBox::LiveQuiz(_) => {}
    }
}

fn push_reference<'a>(reference: &'a ComponentBoxReference, out: &mut Vec<&'a ComponentBoxReference>) {
    out.push(reference);
    for fill in &reference.slots {
        collect_references(&fill.content, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::ast::{ComponentContentBox, ContentBox, TextBox};

    fn card() -> Component {
        Component::new(
            "Card",
            ComponentBox::ComponentContentBox(ComponentContentBox::new(vec![
                ComponentBox::ComponentSlot(ComponentSlot::new("title")),
                ComponentBox::ComponentSlot(
                    ComponentSlot::new("body").with_default(SlideBox::ComponentBoxReference(
                        ComponentBoxReference::new("Badge"),
                    )),
                ),
                ComponentBox::ComponentBoxReference(
                    ComponentBoxReference::new("Frame").fill(
                        "inner",
                        SlideBox::ContentBox(ContentBox::new(vec![
                            SlideBox::ComponentBoxReference(ComponentBoxReference::new("Logo")),
                        ])),
                    ),
                ),
            ])),
        )
    }

    #[test]
    fn test_slots_and_references() {
        let model = Model::new().with_component(card());
        let table = SymbolTable::build(&model);

        let symbols = table.symbols("Card").unwrap();
        assert_eq!(symbols.slots.iter().copied().collect::<Vec<_>>(), vec!["body", "title"]);
        let names: Vec<&str> = symbols.references.iter().map(|r| r.reference.as_str()).collect();
        assert_eq!(names, vec!["Badge", "Frame", "Logo"]);
    }

    #[test]
    fn test_last_declaration_wins() {
        let first = Component::new(
            "Title",
            ComponentBox::Text(TextBox::new("first")),
        );
        let second = Component::new(
            "Title",
            ComponentBox::ComponentSlot(ComponentSlot::new("text")),
        );
        let model = Model::new().with_component(first).with_component(second);
        let table = SymbolTable::build(&model);

        assert_eq!(table.len(), 1);
        assert_eq!(table.shadowed().len(), 1);
        assert!(matches!(table.shadowed()[0].root, ComponentBox::Text(_)));
        assert!(table.slots("Title").unwrap().contains("text"));
    }

    #[test]
    fn test_repeated_slot() {
        let model = Model::new().with_component(Component::new(
            "Twice",
            ComponentBox::ComponentContentBox(ComponentContentBox::new(vec![
                ComponentBox::ComponentSlot(ComponentSlot::new("a")),
                ComponentBox::ComponentSlot(ComponentSlot::new("a")),
            ])),
        ));
        let table = SymbolTable::build(&model);
        assert_eq!(table.repeated_slots().len(), 1);
        assert_eq!(table.slots("Twice").unwrap().len(), 1);
    }

    #[test]
    fn test_resolution_is_a_lookup() {
        let model = Model::new().with_component(card());
        let table = SymbolTable::build(&model);
        assert!(table.resolve(&ComponentBoxReference::new("Card")).is_some());
        assert!(table.resolve(&ComponentBoxReference::new("Missing")).is_none());
        assert_eq!(table.names(), vec!["Card"]);
    }
}
