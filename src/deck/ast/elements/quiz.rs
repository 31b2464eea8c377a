//! Quiz and live quiz elements
//!
//!     A quiz is a single-player widget: the learner answers locally and the browser
//!     compares the answer case-insensitively with the recorded one. No network involved.
//!
//!     A live quiz is an audience poll. It carries a session identifier naming the
//!     real-time room voters join, and each option gets its own vote counter keyed by the
//!     option label. See [live](crate::deck::live) for the wire contract.

use super::super::range::Range;
use super::attribute::Attribute;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizKind {
    /// Multiple choice
    #[default]
    Mcq,
    /// Free-text short answer
    Short,
}

impl QuizKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QuizKind::Mcq => "mcq",
            QuizKind::Short => "short",
        }
    }
}

impl fmt::Display for QuizKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub range: Range,
}

impl QuizOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            range: Range::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuizBox {
    pub id: String,
    #[serde(default)]
    pub kind: QuizKind,
    pub question: String,
    #[serde(default)]
    pub options: Vec<QuizOption>,
    /// Option id for multiple choice, expected text for short answers
    #[serde(default)]
    pub answer: Option<String>,
    /// Show the correct answer on demand
    #[serde(default)]
    pub reveal: bool,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub range: Range,
}

impl QuizBox {
    pub fn new(id: impl Into<String>, kind: QuizKind, question: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            question: question.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LiveQuizBox {
    pub id: String,
    /// Room identifier shared by the presenter and the voters
    pub session: String,
    pub question: String,
    #[serde(default)]
    pub options: Vec<QuizOption>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub range: Range,
}

impl LiveQuizBox {
    pub fn new(
        id: impl Into<String>,
        session: impl Into<String>,
        question: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            session: session.into(),
            question: question.into(),
            ..Self::default()
        }
    }
}
