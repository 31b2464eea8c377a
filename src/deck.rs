//! Main module for deck library functionality

pub mod ast;
pub mod attributes;
pub mod diagnostics;
pub mod error;
pub mod layout;
pub mod live;
pub mod pipeline;
pub mod render;
pub mod symbols;
pub mod testing;
pub mod validation;
