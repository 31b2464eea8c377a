//! Per-run render state
//!
//! The context is created once per generation run and passed as `&mut` through every
//! recursive call. It holds the symbol table and a stack of expansion frames, one per
//! component currently being expanded, each carrying that call site's pre-rendered fills.

use super::tree::RenderNode;
use crate::deck::error::{MergeError, RenderError};
use crate::deck::symbols::SymbolTable;
use std::collections::HashMap;
use tracing::trace;

#[derive(Debug)]
struct Frame {
    component: String,
    fills: HashMap<String, RenderNode>,
}

#[derive(Debug)]
pub struct RenderContext<'t, 'a> {
    table: &'t SymbolTable<'a>,
    frames: Vec<Frame>,
}

impl<'t, 'a> RenderContext<'t, 'a> {
    pub fn new(table: &'t SymbolTable<'a>) -> Self {
        Self {
            table,
            frames: Vec::new(),
        }
    }

    pub fn table(&self) -> &'t SymbolTable<'a> {
        self.table
    }

    /// Start expanding `component` with the fills of its call site
    ///
    /// Fails when the component is already being expanded further up the stack.
    pub fn enter(
        &mut self,
        component: &str,
        fills: HashMap<String, RenderNode>,
    ) -> Result<(), RenderError> {
        if self.frames.iter().any(|frame| frame.component == component) {
            let mut chain: Vec<String> = self.frames.iter().map(|f| f.component.clone()).collect();
            chain.push(component.to_string());
            return Err(MergeError::Cycle { chain }.into());
        }
        trace!(component, depth = self.frames.len(), "expanding component");
        self.frames.push(Frame {
            component: component.to_string(),
            fills,
        });
        Ok(())
    }

    pub fn leave(&mut self) {
        self.frames.pop();
    }

    /// The fill supplied for `slot` by the innermost call site
    pub fn fill(&self, slot: &str) -> Option<&RenderNode> {
        self.frames.last().and_then(|frame| frame.fills.get(slot))
    }

    pub fn in_expansion(&self) -> bool {
        !self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::ast::Model;

    #[test]
    fn test_reentering_a_component_is_a_cycle() {
        let model = Model::new();
        let table = SymbolTable::build(&model);
        let mut ctx = RenderContext::new(&table);

        ctx.enter("A", HashMap::new()).unwrap();
        ctx.enter("B", HashMap::new()).unwrap();
        let err = ctx.enter("A", HashMap::new()).unwrap_err();
        assert_eq!(err.to_string(), "component reference cycle: A -> B -> A");

        ctx.leave();
        ctx.leave();
        assert!(!ctx.in_expansion());
    }

    #[test]
    fn test_fills_come_from_the_innermost_frame() {
        let model = Model::new();
        let table = SymbolTable::build(&model);
        let mut ctx = RenderContext::new(&table);

        let outer = HashMap::from([("title".to_string(), RenderNode::text("outer"))]);
        ctx.enter("Outer", outer).unwrap();
        ctx.enter("Inner", HashMap::new()).unwrap();
        assert!(ctx.fill("title").is_none());
        ctx.leave();
        assert_eq!(ctx.fill("title"), Some(&RenderNode::text("outer")));
    }
}
