//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the common traits that provide uniform access
//! to AST node information across all node types.

use super::elements::{
    Component, ComponentBoxReference, ComponentContentBox, ComponentSlot, ContentBox, Slide,
    SlideRegion, SlotFill, Terminal, Theme,
};
use super::range::Range;

/// Visitor trait for traversing the AST
///
/// Implement this trait to walk the model. Each visit method corresponds to a node type.
/// Default implementations are empty, so you only need to override the methods you care about.
///
/// # Example
///
/// ```ignore
/// struct CountQuizzes(usize);
///
/// impl Visitor for CountQuizzes {
///     fn visit_terminal(&mut self, terminal: Terminal<'_>) {
///         if matches!(terminal, Terminal::Quiz(_)) {
///             self.0 += 1;
///         }
///     }
/// }
///
/// let mut visitor = CountQuizzes(0);
/// model.accept(&mut visitor);
/// ```
pub trait Visitor {
    fn visit_theme(&mut self, _theme: &Theme) {}

    // Declarations
    fn visit_component(&mut self, _component: &Component) {}
    fn leave_component(&mut self, _component: &Component) {}

    fn visit_slide(&mut self, _slide: &Slide) {}
    fn leave_slide(&mut self, _slide: &Slide) {}

    fn visit_region(&mut self, _region: &SlideRegion) {}
    fn leave_region(&mut self, _region: &SlideRegion) {}

    // Containers
    fn visit_content_box(&mut self, _container: &ContentBox) {}
    fn leave_content_box(&mut self, _container: &ContentBox) {}

    fn visit_component_content_box(&mut self, _container: &ComponentContentBox) {}
    fn leave_component_content_box(&mut self, _container: &ComponentContentBox) {}

    // Components plumbing
    fn visit_slot(&mut self, _slot: &ComponentSlot) {}
    fn leave_slot(&mut self, _slot: &ComponentSlot) {}

    fn visit_reference(&mut self, _reference: &ComponentBoxReference) {}
    fn leave_reference(&mut self, _reference: &ComponentBoxReference) {}

    fn visit_slot_fill(&mut self, _fill: &SlotFill) {}
    fn leave_slot_fill(&mut self, _fill: &SlotFill) {}

    // Leaf nodes
    fn visit_terminal(&mut self, _terminal: Terminal<'_>) {}
}

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
    fn range(&self) -> &Range;

    /// Accept a visitor for traversing this node and its children
    fn accept(&self, visitor: &mut dyn Visitor);
}
