//! Render tree types
//!
//! A small, presentation-level element tree: tags, classes, data attributes and inline
//! style declarations. Emitters turn it into markup; the core never serializes it.

use serde::Serialize;

/// Ordered inline style declarations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property`, replacing an earlier value in place
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// `property: value; property: value`
    pub fn to_css_string(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (property, value) in iter {
            style.set(property, value);
        }
        style
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub style: Style,
    pub children: Vec<RenderNode>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: Vec::new(),
            style: Style::new(),
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_child(mut self, child: impl Into<RenderNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = RenderNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(RenderNode::text(text))
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum RenderNode {
    Element(Element),
    Text { text: String },
}

impl RenderNode {
    pub fn text(text: impl Into<String>) -> Self {
        RenderNode::Text { text: text.into() }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            RenderNode::Element(element) => Some(element),
            RenderNode::Text { .. } => None,
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            RenderNode::Text { text } => text.clone(),
            RenderNode::Element(element) => element
                .children
                .iter()
                .map(RenderNode::text_content)
                .collect(),
        }
    }

    /// Every element in the subtree carrying `class`, in document order
    pub fn find_by_class<'n>(&'n self, class: &str) -> Vec<&'n Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'n>(&'n self, class: &str, found: &mut Vec<&'n Element>) {
        if let RenderNode::Element(element) = self {
            if element.has_class(class) {
                found.push(element);
            }
            for child in &element.children {
                child.collect_by_class(class, found);
            }
        }
    }
}

impl From<Element> for RenderNode {
    fn from(element: Element) -> Self {
        RenderNode::Element(element)
    }
}

/// A header or footer band, rendered for one slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRegion {
    pub content: RenderNode,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSlide {
    pub id: String,
    pub annotable: bool,
    pub header: Option<RenderedRegion>,
    pub footer: Option<RenderedRegion>,
    pub content: RenderNode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTheme {
    pub name: String,
    pub style: Style,
}

/// The resolved deck: one entry per slide, in presentation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderTree {
    pub title: Option<String>,
    pub theme: Option<RenderedTheme>,
    pub slides: Vec<RenderedSlide>,
}
