//! Attribute element
//!
//!     An attribute is a key with an optional value attached to a box. Values are strings,
//!     numbers or boolean flags; an attribute written without a value is a flag set to true.
//!
//!     Examples:
//!         bold
//!         color="#ff0000"
//!         column=3
//!         height="50%"
//!
//!     Which keys a box accepts depends on the box kind, see
//!     [`AttributeKind`](crate::deck::attributes::AttributeKind).

use super::super::range::Range;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The value half of an attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl AttributeValue {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            AttributeValue::Flag(flag) => Some(*flag),
            AttributeValue::Text(text) => match text.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            AttributeValue::Number(_) => None,
        }
    }

    /// Numeric view; numeric strings such as `"3"` count as numbers
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(number) => Some(*number),
            AttributeValue::Text(text) => text.trim().parse().ok(),
            AttributeValue::Flag(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Flag(flag) => write!(f, "{flag}"),
            AttributeValue::Number(number) if number.fract() == 0.0 && number.abs() < 1e15 => {
                write!(f, "{}", *number as i64)
            }
            AttributeValue::Number(number) => write!(f, "{number}"),
            AttributeValue::Text(text) => write!(f, "{text}"),
        }
    }
}

/// A key with an optional value, attached to any box kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<AttributeValue>,
    #[serde(default)]
    pub range: Range,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: Option<AttributeValue>) -> Self {
        Self {
            key: key.into(),
            value,
            range: Range::default(),
        }
    }

    pub fn flag(key: impl Into<String>) -> Self {
        Self::new(key, None)
    }

    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, Some(AttributeValue::Text(value.into())))
    }

    pub fn number(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, Some(AttributeValue::Number(value)))
    }

    /// Preferred builder
    pub fn at(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    /// The effective value; a bare key is a flag set to true
    pub fn value(&self) -> AttributeValue {
        self.value.clone().unwrap_or(AttributeValue::Flag(true))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.key, value),
            None => write!(f, "{}", self.key),
        }
    }
}
