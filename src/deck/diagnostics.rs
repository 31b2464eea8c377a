//! Diagnostic collection and the commit/abort decision
//!
//! Validation never stops at the first problem. Every check pushes into one
//! [`Diagnostics`] list, and callers decide afterwards whether generation may go on.
//!
//! ## Severities
//!
//! - **Error**: structural problems that make a meaningful render impossible
//!   (unknown component, self-reference, unknown or repeated slot fill, illegal attribute)
//! - **Warning**: quality signals (shadowed declaration, unused slot, quiz without answer,
//!   empty alt text). Warnings never block generation unless the caller asks for it.
//!
//! The shape mirrors the LSP diagnostic (range, severity, message, code, source) so editors
//! can consume the list directly.

use super::ast::Range;
use std::fmt;

/// Stable diagnostic codes
pub mod codes {
    pub const DUPLICATE_COMPONENT: &str = "duplicate-component";
    pub const DUPLICATE_SLOT: &str = "duplicate-slot";
    pub const UNKNOWN_COMPONENT: &str = "unknown-component";
    pub const SELF_REFERENCE: &str = "self-reference";
    pub const REFERENCE_CYCLE: &str = "reference-cycle";
    pub const UNKNOWN_SLOT: &str = "unknown-slot";
    pub const DUPLICATE_SLOT_FILL: &str = "duplicate-slot-fill";
    pub const UNUSED_SLOT: &str = "unused-slot";
    pub const UNAUTHORIZED_ATTRIBUTE: &str = "unauthorized-attribute";
    pub const INVALID_ATTRIBUTE_VALUE: &str = "invalid-attribute-value";
    pub const DUPLICATE_ATTRIBUTE: &str = "duplicate-attribute";
    pub const EMPTY_SLIDE_ID: &str = "empty-slide-id";
    pub const DUPLICATE_SLIDE_ID: &str = "duplicate-slide-id";
    pub const QUIZ_MISSING_ANSWER: &str = "quiz-missing-answer";
    pub const QUIZ_UNKNOWN_ANSWER: &str = "quiz-unknown-answer";
    pub const QUIZ_WITHOUT_OPTIONS: &str = "quiz-without-options";
    pub const SHORT_QUIZ_OPTIONS: &str = "short-quiz-options";
    pub const DUPLICATE_OPTION: &str = "duplicate-option";
    pub const EMPTY_SESSION: &str = "empty-session";
    pub const EMPTY_ALT_TEXT: &str = "empty-alt-text";
}

/// Diagnostic severity levels matching LSP protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Information,
    Hint,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Error => write!(f, "error"),
            DiagnosticSeverity::Warning => write!(f, "warning"),
            DiagnosticSeverity::Information => write!(f, "info"),
            DiagnosticSeverity::Hint => write!(f, "hint"),
        }
    }
}

/// Structured diagnostic for tooling consumption
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: DiagnosticSeverity,
    pub message: String,
    pub code: Option<String>,
    pub source: String,
}

impl Diagnostic {
    pub fn new(range: Range, severity: DiagnosticSeverity, message: String) -> Self {
        Self {
            range,
            severity,
            message,
            code: None,
            source: "deck".to_string(),
        }
    }

    pub fn error(range: &Range, message: impl Into<String>) -> Self {
        Self::new(range.clone(), DiagnosticSeverity::Error, message.into())
    }

    pub fn warning(range: &Range, message: impl Into<String>) -> Self {
        Self::new(range.clone(), DiagnosticSeverity::Warning, message.into())
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == DiagnosticSeverity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: {} at {}",
            self.severity, self.source, self.message, self.range.start
        )
    }
}

/// Whether generation may go on after validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Commit,
    Abort,
}

/// Ordered list of everything validation found
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// All diagnostics carrying `code`
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.items
            .iter()
            .filter(move |d| d.code.as_deref() == Some(code))
    }

    /// Abort on any error; with `deny_warnings`, on any warning too
    pub fn decision(&self, deny_warnings: bool) -> Decision {
        if self.has_errors() || (deny_warnings && self.warnings().next().is_some()) {
            Decision::Abort
        } else {
            Decision::Commit
        }
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
