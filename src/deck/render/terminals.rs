//! Terminal renderers
//!
//! Each terminal kind maps its resolved attributes to presentation directives. Renderers
//! do not know their container: geometry belongs to the grid cell, not to the content.
//! Attribute values are checked before these run, so readers here can assume well-formed
//! values and fall back to no directive otherwise.

use super::tree::{Element, RenderNode, Style};
use crate::deck::ast::{CodeBox, ImageBox, ListBox, TextBox, VideoBox};
use crate::deck::attributes::{parse_percentage, AttributeMap};

fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Typography shared by text and lists
fn typography(attributes: &AttributeMap, style: &mut Style) {
    if attributes.flag("bold") {
        style.set("font-weight", "bold");
    }
    if attributes.flag("italic") {
        style.set("font-style", "italic");
    }
    if attributes.flag("underline") {
        style.set("text-decoration", "underline");
    }
    if let Some(color) = attributes.text("color") {
        style.set("color", color);
    }
    if let Some(font) = attributes.text("font") {
        style.set("font-family", font);
    }
    if let Some(size) = attributes.number("size") {
        style.set("font-size", format!("{}px", number(size)));
    }
}

/// Box sizing shared by images and videos
fn media(attributes: &AttributeMap, style: &mut Style) {
    for key in ["width", "height"] {
        if let Some(percent) = attributes.get(key).and_then(parse_percentage) {
            style.set(key, format!("{}%", number(percent)));
        }
    }
    if let Some(scale) = attributes.number("scale") {
        style.set("transform", format!("scale({})", number(scale)));
    }
}

pub fn render_text(text: &TextBox, attributes: &AttributeMap) -> Element {
    let mut style = Style::new();
    typography(attributes, &mut style);
    Element::new("p")
        .with_class("deck-text")
        .with_style(style)
        .with_text(text.text.clone())
}

pub fn render_image(image: &ImageBox, attributes: &AttributeMap) -> Element {
    let mut style = Style::new();
    media(attributes, &mut style);
    Element::new("img")
        .with_class("deck-image")
        .with_attr("src", image.src.clone())
        .with_attr("alt", image.alt.clone())
        .with_style(style)
}

pub fn render_video(video: &VideoBox, attributes: &AttributeMap) -> Element {
    let mut style = Style::new();
    media(attributes, &mut style);
    let mut element = Element::new("video")
        .with_class("deck-video")
        .with_attr("src", video.src.clone())
        .with_attr("aria-label", video.alt.clone())
        .with_attr("controls", "");
    for flag in ["autoplay", "loop", "muted"] {
        if attributes.flag(flag) {
            element = element.with_attr(flag, "");
        }
    }
    element.with_style(style)
}

pub fn render_list(list: &ListBox, attributes: &AttributeMap) -> Element {
    let mut style = Style::new();
    typography(attributes, &mut style);

    let mut item_style = Style::new();
    if let Some(spacing) = attributes.number("spacing") {
        item_style.set("margin-bottom", format!("{}px", number(spacing)));
    }

    let items = list.items.iter().map(|item| {
        RenderNode::from(
            Element::new("li")
                .with_style(item_style.clone())
                .with_text(item.clone()),
        )
    });
    Element::new(if list.ordered { "ol" } else { "ul" })
        .with_class("deck-list")
        .with_style(style)
        .with_children(items)
}

pub fn render_code(code: &CodeBox, attributes: &AttributeMap) -> Element {
    let mut style = Style::new();
    if let Some(font) = attributes.text("font") {
        style.set("font-family", font);
    }
    if let Some(size) = attributes.number("size") {
        style.set("font-size", format!("{}px", number(size)));
    }

    let mut inner = Element::new("code");
    if let Some(language) = &code.language {
        inner = inner.with_class(format!("language-{language}"));
    }
    if attributes.flag("line-numbers") {
        inner = inner.with_attr("data-line-numbers", "");
    }
    Element::new("pre")
        .with_class("deck-code")
        .with_style(style)
        .with_child(inner.with_text(code.code.clone()))
}
