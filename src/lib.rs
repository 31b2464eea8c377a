//! # deck
//!
//! The semantic core of the deck presentation language.
//!
//! File Layout
//!
//! The front-end (tokenizer and parser) lives outside this crate and hands over an already
//! parsed document tree. Everything here works on that tree:
//!
//! src/deck
//!   ├── ast          The document tree: model, components, slides, boxes, attributes
//!   ├── symbols      Per-run symbol table over component declarations
//!   ├── validation   Reference, slot, attribute and content checks
//!   ├── attributes   Ordered attribute maps, per-kind authorization, merge engine
//!   ├── layout       Grid geometry for container boxes
//!   ├── render       Render tree and the recursive generator
//!   └── pipeline     check / compile entry points
//!
//! Output emission (HTML), configuration and the command line live in the sibling
//! `deck-babel`, `deck-config` and `deck-cli` crates.

pub mod deck;
