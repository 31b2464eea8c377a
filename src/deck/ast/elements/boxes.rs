//! Boxes: the nodes of slide and component content trees
//!
//!     A box is either a container laying out child boxes on a grid, a terminal content
//!     unit, or a call site instantiating a component. Component templates additionally
//!     contain slots, placeholders filled per call site.
//!
//!     Two closed sum types keep the two worlds apart at compile time:
//!
//!         - [`SlideBox`]: what slides, slot fills, slot defaults and header/footer regions
//!           hold. Slots cannot appear here.
//!         - [`ComponentBox`]: what component templates hold. Slots may appear anywhere.
//!
//!     Both serialize with a `$type` tag, matching what the front-end emits.
//!
//! Call Sites
//!
//!     A [`ComponentBoxReference`] names a component by string. The name is a lookup key
//!     resolved through the per-run [symbol table](crate::deck::symbols::SymbolTable), never
//!     a pointer, so a missing component is an ordinary `None`.

use super::super::range::Range;
use super::super::traits::{AstNode, Visitor};
use super::attribute::Attribute;
use super::quiz::{LiveQuizBox, QuizBox};
use super::terminal::{CodeBox, ImageBox, ListBox, TextBox, VideoBox};
use serde::{Deserialize, Serialize};

/// Grid container holding an ordered sequence of children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container<B> {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default = "Vec::new")]
    pub children: Vec<B>,
    #[serde(default)]
    pub range: Range,
}

impl<B> Container<B> {
    pub fn new(children: Vec<B>) -> Self {
        Self {
            attributes: Vec::new(),
            children,
            range: Range::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Slide-level grid container
pub type ContentBox = Container<SlideBox>;

/// Component-level grid container
pub type ComponentContentBox = Container<ComponentBox>;

/// Content supplied for one slot at a call site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotFill {
    pub name: String,
    pub content: SlideBox,
    #[serde(default)]
    pub range: Range,
}

impl SlotFill {
    pub fn new(name: impl Into<String>, content: SlideBox) -> Self {
        Self {
            name: name.into(),
            content,
            range: Range::default(),
        }
    }
}

/// Instantiation of a component: overrides plus slot fills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentBoxReference {
    /// Name of the referenced component
    pub reference: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub slots: Vec<SlotFill>,
    #[serde(default)]
    pub range: Range,
}

impl ComponentBoxReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            attributes: Vec::new(),
            slots: Vec::new(),
            range: Range::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn fill(mut self, name: impl Into<String>, content: SlideBox) -> Self {
        self.slots.push(SlotFill::new(name, content));
        self
    }

    pub fn at(mut self, range: Range) -> Self {
        self.range = range;
        self
    }
}

/// Named placeholder inside a component, optionally with default content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSlot {
    pub name: String,
    #[serde(default)]
    pub default: Option<Box<SlideBox>>,
    #[serde(default)]
    pub range: Range,
}

impl ComponentSlot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            range: Range::default(),
        }
    }

    pub fn with_default(mut self, content: SlideBox) -> Self {
        self.default = Some(Box::new(content));
        self
    }
}

/// Borrowed view over the terminal kinds shared by both box trees
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Terminal<'a> {
    Text(&'a TextBox),
    Image(&'a ImageBox),
    Video(&'a VideoBox),
    List(&'a ListBox),
    Code(&'a CodeBox),
    Quiz(&'a QuizBox),
    LiveQuiz(&'a LiveQuizBox),
}

impl<'a> Terminal<'a> {
    pub fn attributes(&self) -> &'a [Attribute] {
        match self {
            Terminal::Text(b) => &b.attributes,
            Terminal::Image(b) => &b.attributes,
            Terminal::Video(b) => &b.attributes,
            Terminal::List(b) => &b.attributes,
            Terminal::Code(b) => &b.attributes,
            Terminal::Quiz(b) => &b.attributes,
            Terminal::LiveQuiz(b) => &b.attributes,
        }
    }

    pub fn range(&self) -> &'a Range {
        match self {
            Terminal::Text(b) => &b.range,
            Terminal::Image(b) => &b.range,
            Terminal::Video(b) => &b.range,
            Terminal::List(b) => &b.range,
            Terminal::Code(b) => &b.range,
            Terminal::Quiz(b) => &b.range,
            Terminal::LiveQuiz(b) => &b.range,
        }
    }

    pub fn node_type(&self) -> &'static str {
        match self {
            Terminal::Text(_) => "Text",
            Terminal::Image(_) => "Image",
            Terminal::Video(_) => "Video",
            Terminal::List(_) => "List",
            Terminal::Code(_) => "Code",
            Terminal::Quiz(_) => "Quiz",
            Terminal::LiveQuiz(_) => "LiveQuiz",
        }
    }
}

/// A node of a slide's content tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum SlideBox {
    ContentBox(ContentBox),
    ComponentBoxReference(ComponentBoxReference),
    Text(TextBox),
    Image(ImageBox),
    Video(VideoBox),
    List(ListBox),
    Code(CodeBox),
    Quiz(QuizBox),
    LiveQuiz(LiveQuizBox),
}

impl SlideBox {
    pub fn as_terminal(&self) -> Option<Terminal<'_>> {
        match self {
            SlideBox::Text(b) => Some(Terminal::Text(b)),
            SlideBox::Image(b) => Some(Terminal::Image(b)),
            SlideBox::Video(b) => Some(Terminal::Video(b)),
            SlideBox::List(b) => Some(Terminal::List(b)),
            SlideBox::Code(b) => Some(Terminal::Code(b)),
            SlideBox::Quiz(b) => Some(Terminal::Quiz(b)),
            SlideBox::LiveQuiz(b) => Some(Terminal::LiveQuiz(b)),
            SlideBox::ContentBox(_) | SlideBox::ComponentBoxReference(_) => None,
        }
    }

    /// Attributes written on this node (call-site attributes for references)
    pub fn attributes(&self) -> &[Attribute] {
        match self {
            SlideBox::ContentBox(c) => &c.attributes,
            SlideBox::ComponentBoxReference(r) => &r.attributes,
            SlideBox::Text(b) => &b.attributes,
            SlideBox::Image(b) => &b.attributes,
            SlideBox::Video(b) => &b.attributes,
            SlideBox::List(b) => &b.attributes,
            SlideBox::Code(b) => &b.attributes,
            SlideBox::Quiz(b) => &b.attributes,
            SlideBox::LiveQuiz(b) => &b.attributes,
        }
    }

    pub fn range(&self) -> &Range {
        match self {
            SlideBox::ContentBox(c) => &c.range,
            SlideBox::ComponentBoxReference(r) => &r.range,
            SlideBox::Text(b) => &b.range,
            SlideBox::Image(b) => &b.range,
            SlideBox::Video(b) => &b.range,
            SlideBox::List(b) => &b.range,
            SlideBox::Code(b) => &b.range,
            SlideBox::Quiz(b) => &b.range,
            SlideBox::LiveQuiz(b) => &b.range,
        }
    }
}

/// A node of a component template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum ComponentBox {
    ComponentSlot(ComponentSlot),
    ComponentBoxReference(ComponentBoxReference),
    ComponentContentBox(ComponentContentBox),
    Text(TextBox),
    Image(ImageBox),
    Video(VideoBox),
    List(ListBox),
    Code(CodeBox),
    Quiz(QuizBox),
    LiveQuiz(LiveQuizBox),
}

impl ComponentBox {
    pub fn as_terminal(&self) -> Option<Terminal<'_>> {
        match self {
            ComponentBox::Text(b) => Some(Terminal::Text(b)),
            ComponentBox::Image(b) => Some(Terminal::Image(b)),
            ComponentBox::Video(b) => Some(Terminal::Video(b)),
            ComponentBox::List(b) => Some(Terminal::List(b)),
            ComponentBox::Code(b) => Some(Terminal::Code(b)),
            ComponentBox::Quiz(b) => Some(Terminal::Quiz(b)),
            ComponentBox::LiveQuiz(b) => Some(Terminal::LiveQuiz(b)),
            ComponentBox::ComponentSlot(_)
            | ComponentBox::ComponentBoxReference(_)
            | ComponentBox::ComponentContentBox(_) => None,
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        match self {
            ComponentBox::ComponentSlot(_) => &[],
            ComponentBox::ComponentBoxReference(r) => &r.attributes,
            ComponentBox::ComponentContentBox(c) => &c.attributes,
            ComponentBox::Text(b) => &b.attributes,
            ComponentBox::Image(b) => &b.attributes,
            ComponentBox::Video(b) => &b.attributes,
            ComponentBox::List(b) => &b.attributes,
            ComponentBox::Code(b) => &b.attributes,
            ComponentBox::Quiz(b) => &b.attributes,
            ComponentBox::LiveQuiz(b) => &b.attributes,
        }
    }

    pub fn range(&self) -> &Range {
        match self {
            ComponentBox::ComponentSlot(s) => &s.range,
            ComponentBox::ComponentBoxReference(r) => &r.range,
            ComponentBox::ComponentContentBox(c) => &c.range,
            ComponentBox::Text(b) => &b.range,
            ComponentBox::Image(b) => &b.range,
            ComponentBox::Video(b) => &b.range,
            ComponentBox::List(b) => &b.range,
            ComponentBox::Code(b) => &b.range,
            ComponentBox::Quiz(b) => &b.range,
            ComponentBox::LiveQuiz(b) => &b.range,
        }
    }
}

impl AstNode for ContentBox {
    fn node_type(&self) -> &'static str {
        "ContentBox"
    }

    fn display_label(&self) -> String {
        format!("{} children", self.children.len())
    }

    fn range(&self) -> &Range {
        &self.range
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_content_box(self);
        for child in &self.children {
            child.accept(visitor);
        }
        visitor.leave_content_box(self);
    }
}

impl AstNode for ComponentContentBox {
    fn node_type(&self) -> &'static str {
        "ComponentContentBox"
    }

    fn display_label(&self) -> String {
        format!("{} children", self.children.len())
    }

    fn range(&self) -> &Range {
        &self.range
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_component_content_box(self);
        for child in &self.children {
            child.accept(visitor);
        }
        visitor.leave_component_content_box(self);
    }
}

impl AstNode for SlotFill {
    fn node_type(&self) -> &'static str {
        "SlotFill"
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }

    fn range(&self) -> &Range {
        &self.range
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_slot_fill(self);
        self.content.accept(visitor);
        visitor.leave_slot_fill(self);
    }
}

impl AstNode for ComponentBoxReference {
    fn node_type(&self) -> &'static str {
        "ComponentBoxReference"
    }

    fn display_label(&self) -> String {
        self.reference.clone()
    }

    fn range(&self) -> &Range {
        &self.range
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_reference(self);
        for fill in &self.slots {
            fill.accept(visitor);
        }
        visitor.leave_reference(self);
    }
}

impl AstNode for ComponentSlot {
    fn node_type(&self) -> &'static str {
        "ComponentSlot"
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }

    fn range(&self) -> &Range {
        &self.range
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_slot(self);
        if let Some(default) = &self.default {
            default.accept(visitor);
        }
        visitor.leave_slot(self);
    }
}

impl AstNode for SlideBox {
    fn node_type(&self) -> &'static str {
        match self {
            SlideBox::ContentBox(c) => c.node_type(),
            SlideBox::ComponentBoxReference(r) => r.node_type(),
            _ => self.as_terminal().map_or("SlideBox", |t| t.node_type()),
        }
    }

    fn display_label(&self) -> String {
        match self {
            SlideBox::ContentBox(c) => c.display_label(),
            SlideBox::ComponentBoxReference(r) => r.display_label(),
            _ => self.node_type().to_string(),
        }
    }

    fn range(&self) -> &Range {
        SlideBox::range(self)
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            SlideBox::ContentBox(c) => c.accept(visitor),
            SlideBox::ComponentBoxReference(r) => r.accept(visitor),
            SlideBox::Text(b) => visitor.visit_terminal(Terminal::Text(b)),
            SlideBox::Image(b) => visitor.visit_terminal(Terminal::Image(b)),
            SlideBox::Video(b) => visitor.visit_terminal(Terminal::Video(b)),
            SlideBox::List(b) => visitor.visit_terminal(Terminal::List(b)),
            SlideBox::Code(b) => visitor.visit_terminal(Terminal::Code(b)),
            SlideBox::Quiz(b) => visitor.visit_terminal(Terminal::Quiz(b)),
            SlideBox::LiveQuiz(b) => visitor.visit_terminal(Terminal::LiveQuiz(b)),
        }
    }
}

impl AstNode for ComponentBox {
    fn node_type(&self) -> &'static str {
        match self {
            ComponentBox::ComponentSlot(s) => s.node_type(),
            ComponentBox::ComponentBoxReference(r) => r.node_type(),
            ComponentBox::ComponentContentBox(c) => c.node_type(),
            _ => self.as_terminal().map_or("ComponentBox", |t| t.node_type()),
        }
    }

    fn display_label(&self) -> String {
        match self {
            ComponentBox::ComponentSlot(s) => s.display_label(),
            ComponentBox::ComponentBoxReference(r) => r.display_label(),
            ComponentBox::ComponentContentBox(c) => c.display_label(),
            _ => self.node_type().to_string(),
        }
    }

    fn range(&self) -> &Range {
        ComponentBox::range(self)
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            ComponentBox::ComponentSlot(s) => s.accept(visitor),
            ComponentBox::ComponentBoxReference(r) => r.accept(visitor),
            ComponentBox::ComponentContentBox(c) => c.accept(visitor),
            ComponentBox::Text(b) => visitor.visit_terminal(Terminal::Text(b)),
            ComponentBox::Image(b) => visitor.visit_terminal(Terminal::Image(b)),
            ComponentBox::Video(b) => visitor.visit_terminal(Terminal::Video(b)),
            ComponentBox::List(b) => visitor.visit_terminal(Terminal::List(b)),
            ComponentBox::Code(b) => visitor.visit_terminal(Terminal::Code(b)),
            ComponentBox::Quiz(b) => visitor.visit_terminal(Terminal::Quiz(b)),
            ComponentBox::LiveQuiz(b) => visitor.visit_terminal(Terminal::LiveQuiz(b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_box_tagged_deserialization() {
        let json = r#"{
            "$type": "ContentBox",
            "attributes": [{"key": "column", "value": 3}],
            "children": [
                {"$type": "Text", "text": "Hello"},
                {"$type": "ComponentBoxReference", "reference": "Card",
                 "slots": [{"name": "title", "content": {"$type": "Text", "text": "T"}}]}
            ]
        }"#;
        let node: SlideBox = serde_json::from_str(json).unwrap();
        let SlideBox::ContentBox(container) = node else {
            panic!("expected a content box");
        };
        assert_eq!(container.children.len(), 2);
        assert!(matches!(container.children[0], SlideBox::Text(_)));
        match &container.children[1] {
            SlideBox::ComponentBoxReference(reference) => {
                assert_eq!(reference.reference, "Card");
                assert_eq!(reference.slots[0].name, "title");
            }
            other => panic!("unexpected child {other:?}"),
        }
    }

    #[test]
    fn test_component_box_slot_with_default() {
        let json = r#"{"$type": "ComponentSlot", "name": "body",
                       "default": {"$type": "Text", "text": "fallback"}}"#;
        let node: ComponentBox = serde_json::from_str(json).unwrap();
        match node {
            ComponentBox::ComponentSlot(slot) => {
                assert_eq!(slot.name, "body");
                assert!(matches!(slot.default.as_deref(), Some(SlideBox::Text(_))));
            }
            other => panic!("unexpected node {other:?}"),
        }
    }

    #[test]
    fn test_terminal_view_exposes_attributes() {
        let text = SlideBox::Text(TextBox {
            attributes: vec![Attribute::flag("bold")],
            ..TextBox::new("hi")
        });
        let terminal = text.as_terminal().unwrap();
        assert_eq!(terminal.node_type(), "Text");
        assert_eq!(terminal.attributes()[0].key, "bold");
        assert_eq!(text.attributes().len(), 1);
    }
}
