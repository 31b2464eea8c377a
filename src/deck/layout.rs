//! Grid layout for container boxes
//!
//!     Containers lay their children out on a grid. Geometry is declarative: the engine
//!     computes column and row counts plus placement primitives and hands them to the
//!     renderer as layout directives, never pixel positions.
//!
//!     Given a container's `column` attribute (default 2) and its child count n:
//!
//!         rows = ceil(n / columns)
//!
//!     The engine is pure. The same component expanded at several call sites with different
//!     child counts gets its geometry computed independently at each site.
//!
//! Alignment
//!
//!     `alignment` is a compass term of one or two words, in any order:
//!
//!         "top left", "center", "bottom right", "right top", "left"
//!
//!     top/left map to start, center to center, bottom/right to end. A single word leaves
//!     the other axis centered.

use super::attributes::{parse_percentage, AttributeMap};
use super::error::LayoutError;
use serde::Serialize;
use std::fmt;

pub const DEFAULT_COLUMNS: usize = 2;

/// Placement primitive along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Start,
    #[default]
    Center,
    End,
}

impl Placement {
    pub fn css(self) -> &'static str {
        match self {
            Placement::Start => "start",
            Placement::Center => "center",
            Placement::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Alignment {
    pub vertical: Placement,
    pub horizontal: Placement,
}

enum Word {
    Vertical(Placement),
    Horizontal(Placement),
    Center,
}

fn word(value: &str, token: &str) -> Result<Word, LayoutError> {
    match token.to_ascii_lowercase().as_str() {
        "top" => Ok(Word::Vertical(Placement::Start)),
        "bottom" => Ok(Word::Vertical(Placement::End)),
        "left" => Ok(Word::Horizontal(Placement::Start)),
        "right" => Ok(Word::Horizontal(Placement::End)),
        "center" => Ok(Word::Center),
        other => Err(LayoutError::InvalidAlignment {
            value: value.to_string(),
            reason: format!("unknown word '{other}'"),
        }),
    }
}

impl Alignment {
    pub fn new(vertical: Placement, horizontal: Placement) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    pub fn parse(value: &str) -> Result<Self, LayoutError> {
        let tokens: Vec<&str> = value.split_whitespace().collect();
        let invalid = |reason: &str| LayoutError::InvalidAlignment {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        match tokens.as_slice() {
            [] => Err(invalid("expected one or two words")),
            [single] => Ok(match word(value, single)? {
                Word::Vertical(p) => Alignment::new(p, Placement::Center),
                Word::Horizontal(p) => Alignment::new(Placement::Center, p),
                Word::Center => Alignment::default(),
            }),
            [first, second] => match (word(value, first)?, word(value, second)?) {
                (Word::Vertical(v), Word::Horizontal(h))
                | (Word::Horizontal(h), Word::Vertical(v)) => Ok(Alignment::new(v, h)),
                (Word::Vertical(v), Word::Center) | (Word::Center, Word::Vertical(v)) => {
                    Ok(Alignment::new(v, Placement::Center))
                }
                (Word::Horizontal(h), Word::Center) | (Word::Center, Word::Horizontal(h)) => {
                    Ok(Alignment::new(Placement::Center, h))
                }
                (Word::Center, Word::Center) => Ok(Alignment::default()),
                (Word::Vertical(_), Word::Vertical(_)) => {
                    Err(invalid("both words are vertical"))
                }
                (Word::Horizontal(_), Word::Horizontal(_)) => {
                    Err(invalid("both words are horizontal"))
                }
            },
            _ => Err(invalid("expected one or two words")),
        }
    }
}

/// Size of a container along one axis
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Occupy the parent's available space
    #[default]
    Fill,
    Percent(f64),
}

impl Dimension {
    fn from_attributes(attributes: &AttributeMap, key: &str) -> Result<Self, LayoutError> {
        let Some(value) = attributes.get(key) else {
            return Ok(Dimension::Fill);
        };
        match parse_percentage(value) {
            Some(percent) if (0.0..=100.0).contains(&percent) => Ok(Dimension::Percent(percent)),
            _ => Err(LayoutError::InvalidDimension {
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Fill => f.write_str("100%"),
            Dimension::Percent(p) => write!(f, "{p}%"),
        }
    }
}

/// Computed geometry of one container
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub alignment: Alignment,
    pub width: Dimension,
    pub height: Dimension,
}

impl GridLayout {
    /// Inline style directives for the container element
    pub fn style(&self) -> Vec<(&'static str, String)> {
        vec![
            ("display", "grid".to_string()),
            (
                "grid-template-columns",
                format!("repeat({}, minmax(0, 1fr))", self.columns),
            ),
            (
                "grid-template-rows",
                format!("repeat({}, auto)", self.rows.max(1)),
            ),
            ("justify-items", self.alignment.horizontal.css().to_string()),
            ("align-items", self.alignment.vertical.css().to_string()),
            ("width", self.width.to_string()),
            ("height", self.height.to_string()),
        ]
    }
}

fn columns(attributes: &AttributeMap) -> Result<usize, LayoutError> {
    let Some(value) = attributes.get("column") else {
        return Ok(DEFAULT_COLUMNS);
    };
    match value.as_number() {
        Some(n) if n >= 1.0 && n.fract() == 0.0 => Ok(n as usize),
        _ => Err(LayoutError::InvalidColumns(value.to_string())),
    }
}

/// Compute the grid of a container from its resolved attributes and child count
pub fn compute_grid(attributes: &AttributeMap, child_count: usize) -> Result<GridLayout, LayoutError> {
    let columns = columns(attributes)?;
    let alignment = match attributes.get("alignment") {
        Some(value) => Alignment::parse(&value.to_string())?,
        None => Alignment::default(),
    };

    Ok(GridLayout {
        columns,
        rows: child_count.div_ceil(columns),
        alignment,
        width: Dimension::from_attributes(attributes, "width")?,
        height: Dimension::from_attributes(attributes, "height")?,
    })
}
