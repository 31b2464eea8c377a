//! HTML format: a self-contained, reveal.js-compatible slide deck
//!
//! # Data Model
//!
//! | Render tree            | HTML                                                      |
//! |------------------------|-----------------------------------------------------------|
//! | RenderTree             | `div.reveal > div.slides`, theme style on `div.reveal`    |
//! | RenderedSlide          | `section#<id>.deck-slide.annotable` or `.non-annotable`   |
//! | header / footer        | serialized into `data-header` / `data-footer` plus        |
//! |                        | `data-header-style` / `data-footer-style` on the section  |
//! | Element                | element with `class`, data attributes and inline `style`  |
//! | Text                   | escaped text node                                         |
//!
//! Header and footer bands live outside the slides (`div.deck-header`, `div.deck-footer`);
//! the runtime script swaps their markup and style from the data attributes whenever the
//! current slide changes.
//!
//! # Runtime
//!
//! The document embeds the stylesheet and runtime script, loads reveal.js and the socket.io
//! client from the configured URLs, and exposes the live-polling event names and the relay
//! URL to the script as JSON.
//!
//! # Options
//!
//! `serialize_with_options` accepts these keys, overriding [`HtmlOptions`]:
//! `title`, `reveal-url`, `socket-io-url`, `relay-url`.

mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use deck::deck::render::RenderTree;
use std::collections::HashMap;

pub use serializer::{render_node_to_html, serialize_to_html};

pub const DEFAULT_REVEAL_URL: &str = "https://cdn.jsdelivr.net/npm/reveal.js@5.1.0";
pub const DEFAULT_SOCKET_IO_URL: &str = "https://cdn.socket.io/4.7.5/socket.io.min.js";
pub const DEFAULT_RELAY_URL: &str = "http://localhost:3000";

/// Knobs of the HTML document wrapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Overrides the deck title
    pub title: Option<String>,
    /// Base URL of the reveal.js distribution
    pub reveal_url: String,
    pub socket_io_url: String,
    /// Live-polling relay voters and presenter connect to
    pub relay_url: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: None,
            reveal_url: DEFAULT_REVEAL_URL.to_string(),
            socket_io_url: DEFAULT_SOCKET_IO_URL.to_string(),
            relay_url: DEFAULT_RELAY_URL.to_string(),
        }
    }
}

impl HtmlOptions {
    /// Apply string options on top of these
    pub fn merged(&self, options: &HashMap<String, String>) -> Self {
        let mut merged = self.clone();
        for (key, value) in options {
            match key.as_str() {
                "title" => merged.title = Some(value.clone()),
                "reveal-url" => merged.reveal_url = value.clone(),
                "socket-io-url" => merged.socket_io_url = value.clone(),
                "relay-url" => merged.relay_url = value.clone(),
                _ => {}
            }
        }
        merged
    }

    /// The string form [`merged`](Self::merged) reads, for callers passing options by name
    pub fn to_options(&self) -> HashMap<String, String> {
        let mut options = HashMap::from([
            ("reveal-url".to_string(), self.reveal_url.clone()),
            ("socket-io-url".to_string(), self.socket_io_url.clone()),
            ("relay-url".to_string(), self.relay_url.clone()),
        ]);
        if let Some(title) = &self.title {
            options.insert("title".to_string(), title.clone());
        }
        options
    }
}

#[derive(Debug, Default, Clone)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Self-contained HTML slide deck"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn serialize(&self, tree: &RenderTree) -> Result<String, FormatError> {
        serialize_to_html(tree, &self.options)
    }

    fn serialize_with_options(
        &self,
        tree: &RenderTree,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        serialize_to_html(tree, &self.options.merged(options))
    }
}
