//! Value rules
//!
//! Keys carry a value rule independent of the box kind: `height` is a percentage on a
//! container and on an image alike. Unknown keys fall back to [`ValueRule::Any`]; they are
//! rejected by authorization before their value matters.

use crate::deck::ast::AttributeValue;
use crate::deck::layout::Alignment;
use once_cell::sync::Lazy;
use regex::Regex;

static PERCENTAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*%?\s*$").expect("valid percentage regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    Flag,
    Text,
    PositiveInteger,
    Percentage,
    NonNegative,
    Positive,
    Compass,
    /// A flag, or the name of a reveal animation
    Fragment,
    Any,
}

impl ValueRule {
    pub fn for_key(key: &str) -> Self {
        match key {
            "bold" | "italic" | "underline" | "autoplay" | "loop" | "muted" | "line-numbers" => {
                ValueRule::Flag
            }
            "color" | "font" | "background" => ValueRule::Text,
            "column" => ValueRule::PositiveInteger,
            "width" | "height" => ValueRule::Percentage,
            "spacing" => ValueRule::NonNegative,
            "size" | "scale" => ValueRule::Positive,
            "alignment" => ValueRule::Compass,
            "fragment" => ValueRule::Fragment,
            _ => ValueRule::Any,
        }
    }
}

/// Parse `50`, `50%` or `"50 %"` into a number, without range checks
pub fn parse_percentage(value: &AttributeValue) -> Option<f64> {
    match value {
        AttributeValue::Number(number) => Some(*number),
        AttributeValue::Text(text) => PERCENTAGE
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok()),
        AttributeValue::Flag(_) => None,
    }
}

/// Check `value` against the rule of `key`, returning a human-readable reason on failure
pub fn check_value(key: &str, value: &AttributeValue) -> Result<(), String> {
    match ValueRule::for_key(key) {
        ValueRule::Flag => value
            .as_flag()
            .map(|_| ())
            .ok_or_else(|| format!("'{key}' is a flag, got '{value}'")),
        ValueRule::Text => match value.as_text() {
            Some(text) if !text.trim().is_empty() => Ok(()),
            _ => Err(format!("'{key}' expects a non-empty text value, got '{value}'")),
        },
        ValueRule::PositiveInteger => match value.as_number() {
            Some(n) if n >= 1.0 && n.fract() == 0.0 => Ok(()),
            _ => Err(format!(
                "'{key}' must be a positive integer, got '{value}'"
            )),
        },
        ValueRule::Percentage => match parse_percentage(value) {
            Some(p) if (0.0..=100.0).contains(&p) => Ok(()),
            _ => Err(format!(
                "'{key}' must be a percentage between 0% and 100%, got '{value}'"
            )),
        },
        ValueRule::NonNegative => match value.as_number() {
            Some(n) if n >= 0.0 => Ok(()),
            _ => Err(format!("'{key}' must not be negative, got '{value}'")),
        },
        ValueRule::Positive => match value.as_number() {
            Some(n) if n > 0.0 => Ok(()),
            _ => Err(format!("'{key}' must be a positive number, got '{value}'")),
        },
        ValueRule::Compass => match value.as_text() {
            Some(text) => Alignment::parse(text)
                .map(|_| ())
                .map_err(|err| err.to_string()),
            None => Err(format!("'{key}' expects a compass term, got '{value}'")),
        },
        ValueRule::Fragment => match value {
            AttributeValue::Flag(_) => Ok(()),
            AttributeValue::Text(text) if !text.trim().is_empty() => Ok(()),
            _ => Err(format!(
                "'{key}' is a flag or an animation name, got '{value}'"
            )),
        },
        ValueRule::Any => Ok(()),
    }
}
