//! Slide element
//!
//!     A slide is one addressable page of the deck. Its id becomes the anchor of the
//!     generated section, so ids must be unique and non-empty. A slide owns one content
//!     box and may override the deck-wide header and footer.
//!
//!     Header and footer are [`SlideRegion`]s: a content box plus a few style attributes.
//!     A region is rendered once per slide that uses it.

use super::super::range::Range;
use super::super::traits::{AstNode, Visitor};
use super::attribute::Attribute;
use super::boxes::SlideBox;
use serde::{Deserialize, Serialize};

/// Header or footer band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideRegion {
    pub content: SlideBox,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub range: Range,
}

impl SlideRegion {
    pub fn new(content: SlideBox) -> Self {
        Self {
            content,
            attributes: Vec::new(),
            range: Range::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }
}

pub type Header = SlideRegion;
pub type Footer = SlideRegion;

/// Deck-wide look: a named base theme plus attribute tweaks
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    #[serde(default)]
    pub annotable: bool,
    pub content: SlideBox,
    #[serde(default)]
    pub header: Option<Header>,
    #[serde(default)]
    pub footer: Option<Footer>,
    #[serde(default)]
    pub range: Range,
}

impl Slide {
    pub fn new(id: impl Into<String>, content: SlideBox) -> Self {
        Self {
            id: id.into(),
            annotable: false,
            content,
            header: None,
            footer: None,
            range: Range::default(),
        }
    }

    pub fn annotable(mut self) -> Self {
        self.annotable = true;
        self
    }

    pub fn with_header(mut self, header: Header) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_footer(mut self, footer: Footer) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn at(mut self, range: Range) -> Self {
        self.range = range;
        self
    }
}

impl AstNode for SlideRegion {
    fn node_type(&self) -> &'static str {
        "SlideRegion"
    }

    fn display_label(&self) -> String {
        format!("region ({} attributes)", self.attributes.len())
    }

    fn range(&self) -> &Range {
        &self.range
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_region(self);
        self.content.accept(visitor);
        visitor.leave_region(self);
    }
}

impl AstNode for Slide {
    fn node_type(&self) -> &'static str {
        "Slide"
    }

    fn display_label(&self) -> String {
        self.id.clone()
    }

    fn range(&self) -> &Range {
        &self.range
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_slide(self);
        if let Some(header) = &self.header {
            header.accept(visitor);
        }
        if let Some(footer) = &self.footer {
            footer.accept(visitor);
        }
        self.content.accept(visitor);
        visitor.leave_slide(self);
    }
}
