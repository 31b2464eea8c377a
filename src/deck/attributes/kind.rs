//! Box kinds and their closed attribute sets

use crate::deck::ast::Terminal;
use serde::Serialize;
use std::fmt;

/// The rule set an attribute list is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributeKind {
    Text,
    Image,
    Video,
    List,
    Code,
    Quiz,
    LiveQuiz,
    Container,
    /// Component root that is a bare slot; only reveal applies to the fill
    Slot,
    /// Header and footer bands
    Region,
    Theme,
}

const TEXT_KEYS: &[&str] = &["fragment", "bold", "italic", "underline", "color", "font", "size"];
const IMAGE_KEYS: &[&str] = &["fragment", "width", "height", "scale"];
const VIDEO_KEYS: &[&str] = &[
    "fragment", "width", "height", "scale", "autoplay", "loop", "muted",
];
const LIST_KEYS: &[&str] = &["fragment", "spacing", "bold", "italic", "color", "font", "size"];
const CODE_KEYS: &[&str] = &["fragment", "font", "size", "line-numbers"];
const QUIZ_KEYS: &[&str] = &["fragment"];
const CONTAINER_KEYS: &[&str] = &["fragment", "column", "width", "height", "alignment"];
const SLOT_KEYS: &[&str] = &["fragment"];
const REGION_KEYS: &[&str] = &["height", "color", "background"];
const THEME_KEYS: &[&str] = &["color", "background", "font", "size"];

impl AttributeKind {
    pub fn of_terminal(terminal: Terminal<'_>) -> Self {
        match terminal {
            Terminal::Text(_) => AttributeKind::Text,
            Terminal::Image(_) => AttributeKind::Image,
            Terminal::Video(_) => AttributeKind::Video,
            Terminal::List(_) => AttributeKind::List,
            Terminal::Code(_) => AttributeKind::Code,
            Terminal::Quiz(_) => AttributeKind::Quiz,
            Terminal::LiveQuiz(_) => AttributeKind::LiveQuiz,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AttributeKind::Text => "text",
            AttributeKind::Image => "image",
            AttributeKind::Video => "video",
            AttributeKind::List => "list",
            AttributeKind::Code => "code",
            AttributeKind::Quiz => "quiz",
            AttributeKind::LiveQuiz => "live-quiz",
            AttributeKind::Container => "container",
            AttributeKind::Slot => "slot",
            AttributeKind::Region => "header/footer",
            AttributeKind::Theme => "theme",
        }
    }

    pub fn authorized_keys(self) -> &'static [&'static str] {
        match self {
            AttributeKind::Text => TEXT_KEYS,
            AttributeKind::Image => IMAGE_KEYS,
            AttributeKind::Video => VIDEO_KEYS,
            AttributeKind::List => LIST_KEYS,
            AttributeKind::Code => CODE_KEYS,
            AttributeKind::Quiz | AttributeKind::LiveQuiz => QUIZ_KEYS,
            AttributeKind::Slot => SLOT_KEYS,
            AttributeKind::Container => CONTAINER_KEYS,
            AttributeKind::Region => REGION_KEYS,
            AttributeKind::Theme => THEME_KEYS,
        }
    }

    pub fn authorizes(self, key: &str) -> bool {
        self.authorized_keys().contains(&key)
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AttributeKind::Text, "bold", true)]
    #[case(AttributeKind::Image, "bold", false)]
    #[case(AttributeKind::Image, "scale", true)]
    #[case(AttributeKind::Container, "column", true)]
    #[case(AttributeKind::Container, "color", false)]
    #[case(AttributeKind::List, "spacing", true)]
    #[case(AttributeKind::Quiz, "fragment", true)]
    #[case(AttributeKind::LiveQuiz, "width", false)]
    #[case(AttributeKind::Slot, "fragment", true)]
    #[case(AttributeKind::Slot, "column", false)]
    #[case(AttributeKind::Slot, "width", false)]
    #[case(AttributeKind::Region, "fragment", false)]
    #[case(AttributeKind::Theme, "background", true)]
    fn test_authorization(#[case] kind: AttributeKind, #[case] key: &str, #[case] legal: bool) {
        assert_eq!(kind.authorizes(key), legal);
    }

    #[test]
    fn test_every_box_kind_accepts_fragment() {
        for kind in [
            AttributeKind::Text,
            AttributeKind::Image,
            AttributeKind::Video,
            AttributeKind::List,
            AttributeKind::Code,
            AttributeKind::Quiz,
            AttributeKind::LiveQuiz,
            AttributeKind::Container,
            AttributeKind::Slot,
        ] {
            assert!(kind.authorizes("fragment"), "{kind} should accept fragment");
        }
    }
}
