//! Component element
//!
//!     A component is a named, reusable box template owning exactly one root box. Its
//!     identity is its name. Declaring the same name twice is allowed but flagged; the last
//!     declaration shadows earlier ones when references are resolved.

use super::super::range::Range;
use super::super::traits::{AstNode, Visitor};
use super::boxes::ComponentBox;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub root: ComponentBox,
    #[serde(default)]
    pub range: Range,
}

impl Component {
    pub fn new(name: impl Into<String>, root: ComponentBox) -> Self {
        Self {
            name: name.into(),
            root,
            range: Range::default(),
        }
    }

    pub fn at(mut self, range: Range) -> Self {
        self.range = range;
        self
    }
}

impl AstNode for Component {
    fn node_type(&self) -> &'static str {
        "Component"
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }

    fn range(&self) -> &Range {
        &self.range
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_component(self);
        self.root.accept(visitor);
        visitor.leave_component(self);
    }
}
