//! Terminal content boxes
//!
//!     Terminal boxes hold content and no nested boxes: text, image, video, list and code.
//!     Quizzes are terminal too, see [quiz](super::quiz).
//!
//!     Each terminal kind has its own closed set of legal attributes, so the structs only
//!     carry raw attributes; interpretation happens in the renderers.

use super::super::range::Range;
use super::attribute::Attribute;
use serde::{Deserialize, Serialize};

/// A run of text
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBox {
    pub text: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub range: Range,
}

impl TextBox {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// An image, `alt` is the accessible description
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageBox {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub range: Range,
}

impl ImageBox {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VideoBox {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub range: Range,
}

impl VideoBox {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            ..Self::default()
        }
    }
}

/// A bulleted or numbered list of plain items
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListBox {
    pub items: Vec<String>,
    #[serde(default)]
    pub ordered: bool,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub range: Range,
}

impl ListBox {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// A code listing, shown verbatim
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodeBox {
    #[serde(default)]
    pub language: Option<String>,
    pub code: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub range: Range,
}

impl CodeBox {
    pub fn new(language: Option<&str>, code: impl Into<String>) -> Self {
        Self {
            language: language.map(str::to_string),
            code: code.into(),
            ..Self::default()
        }
    }
}
