//! HTML serialization (render tree → HTML deck)
//!
//! Pipeline: RenderTree → RcDom (HTML DOM tree) → HTML string → document wrapper

use super::HtmlOptions;
use crate::error::FormatError;
use deck::deck::live::EventNames;
use deck::deck::render::{RenderNode, RenderTree, RenderedRegion, RenderedSlide};
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;
use tracing::debug;

/// Serialize a render tree to a complete HTML document
pub fn serialize_to_html(tree: &RenderTree, options: &HtmlOptions) -> Result<String, FormatError> {
    // Step 1: RenderTree → DOM
    let deck = build_deck(tree)?;

    // Step 2: DOM → HTML string
    let body = serialize_node(&deck)?;

    // Step 3: Wrap in complete HTML document with CSS and runtime
    let html = wrap_in_document(&body, tree, options)?;
    debug!(slides = tree.slides.len(), bytes = html.len(), "serialized html deck");
    Ok(html)
}

/// Serialize a single render node to an HTML fragment
pub fn render_node_to_html(node: &RenderNode) -> Result<String, FormatError> {
    serialize_node(&to_dom(node))
}

fn append(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

fn borrowed(attrs: &[(String, String)]) -> Vec<(&str, &str)> {
    attrs
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect()
}

/// Build `div.reveal`: header band, slides, footer band
fn build_deck(tree: &RenderTree) -> Result<Handle, FormatError> {
    let mut attrs = vec![("class".to_string(), "reveal".to_string())];
    if let Some(theme) = &tree.theme {
        attrs.push(("data-theme".to_string(), theme.name.clone()));
        if !theme.style.is_empty() {
            attrs.push(("style".to_string(), theme.style.to_css_string()));
        }
    }
    let reveal = create_element("div", borrowed(&attrs));

    append(&reveal, create_element("div", vec![("class", "deck-header")]));
    let slides = create_element("div", vec![("class", "slides")]);
    for slide in &tree.slides {
        append(&slides, build_slide(slide)?);
    }
    append(&reveal, slides);
    append(&reveal, create_element("div", vec![("class", "deck-footer")]));

    Ok(reveal)
}

fn build_slide(slide: &RenderedSlide) -> Result<Handle, FormatError> {
    let marker = if slide.annotable {
        "annotable"
    } else {
        "non-annotable"
    };
    let mut attrs = vec![
        ("id".to_string(), slide.id.clone()),
        ("class".to_string(), format!("deck-slide {marker}")),
        ("data-annotable".to_string(), slide.annotable.to_string()),
    ];
    push_region(&mut attrs, "header", slide.header.as_ref())?;
    push_region(&mut attrs, "footer", slide.footer.as_ref())?;

    let section = create_element("section", borrowed(&attrs));
    append(&section, to_dom(&slide.content));
    Ok(section)
}

fn push_region(
    attrs: &mut Vec<(String, String)>,
    name: &str,
    region: Option<&RenderedRegion>,
) -> Result<(), FormatError> {
    if let Some(region) = region {
        attrs.push((format!("data-{name}"), render_node_to_html(&region.content)?));
        attrs.push((format!("data-{name}-style"), region.style.to_css_string()));
    }
    Ok(())
}

fn to_dom(node: &RenderNode) -> Handle {
    match node {
        RenderNode::Text { text } => create_text(text),
        RenderNode::Element(element) => {
            let mut attrs = Vec::new();
            if !element.classes.is_empty() {
                attrs.push(("class".to_string(), element.classes.join(" ")));
            }
            attrs.extend(element.attributes.iter().cloned());
            if !element.style.is_empty() {
                attrs.push(("style".to_string(), element.style.to_css_string()));
            }

            let handle = create_element(&element.tag, borrowed(&attrs));
            for child in &element.children {
                append(&handle, to_dom(child));
            }
            handle
        }
    }
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize a node and its children
fn serialize_node(node: &Handle) -> Result<String, FormatError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    let serializable = SerializableHandle::from(node.clone());
    serialize(&mut output, &serializable, opts).map_err(|e| {
        FormatError::SerializationError(format!("HTML serialization failed: {}", e))
    })?;

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {}", e)))
}

/// What the runtime script reads from `window.DECK_RUNTIME`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RuntimeConfig<'a> {
    events: EventNames,
    relay_url: &'a str,
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Wrap the deck in a complete HTML document with embedded CSS and runtime
fn wrap_in_document(
    body_html: &str,
    tree: &RenderTree,
    options: &HtmlOptions,
) -> Result<String, FormatError> {
    let css = include_str!("../../../assets/deck.css");
    let runtime = include_str!("../../../assets/runtime.js");

    let title = options
        .title
        .as_deref()
        .or(tree.title.as_deref())
        .unwrap_or("Deck");
    let config = serde_json::to_string(&RuntimeConfig {
        events: EventNames::default(),
        relay_url: &options.relay_url,
    })
    .map_err(|e| FormatError::SerializationError(e.to_string()))?
    // keep the JSON from closing the script element
    .replace("</", "<\\/");

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="deck-babel">
  <title>{title}</title>
  <link rel="stylesheet" href="{reveal}/dist/reveal.css">
  <style>
{css}
  </style>
</head>
<body>
{body_html}
<script src="{reveal}/dist/reveal.js"></script>
<script src="{socket_io}"></script>
<script>window.DECK_RUNTIME = {config};</script>
<script>
{runtime}
</script>
</body>
</html>"#,
        title = escape(title),
        reveal = escape(options.reveal_url.trim_end_matches('/')),
        socket_io = escape(&options.socket_io_url),
    );

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck::deck::render::{Element, Style};

    fn slide(id: &str, annotable: bool, content: RenderNode) -> RenderedSlide {
        RenderedSlide {
            id: id.to_string(),
            annotable,
            header: None,
            footer: None,
            content,
        }
    }

    fn tree(slides: Vec<RenderedSlide>) -> RenderTree {
        RenderTree {
            title: Some("Talk <1>".to_string()),
            theme: None,
            slides,
        }
    }

    #[test]
    fn test_element_serialization() {
        let mut style = Style::new();
        style.set("font-weight", "bold");
        let node: RenderNode = Element::new("p")
            .with_class("deck-text")
            .with_attr("data-x", "1")
            .with_style(style)
            .with_text("a < b")
            .into();

        insta::assert_snapshot!(
            render_node_to_html(&node).unwrap(),
            @r#"<p class="deck-text" data-x="1" style="font-weight: bold">a &lt; b</p>"#
        );
    }

    #[test]
    fn test_void_elements() {
        let node: RenderNode = Element::new("img").with_attr("src", "a.png").into();
        assert_eq!(render_node_to_html(&node).unwrap(), r#"<img src="a.png">"#);
    }

    #[test]
    fn test_slide_sections() {
        let html = serialize_to_html(
            &tree(vec![
                slide("intro", true, Element::new("p").with_text("Hello").into()),
                slide("outro", false, Element::new("p").with_text("Bye").into()),
            ]),
            &HtmlOptions::default(),
        )
        .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Talk &lt;1&gt;</title>"));
        assert!(html.contains(r#"<div class="reveal"><div class="deck-header"></div><div class="slides">"#));
        assert!(html.contains(r#"<section id="intro" class="deck-slide annotable" data-annotable="true">"#));
        assert!(html.contains(r#"<section id="outro" class="deck-slide non-annotable" data-annotable="false">"#));
    }

    #[test]
    fn test_header_goes_into_data_attributes() {
        let mut style = Style::new();
        style.set("height", "10%");
        let mut with_header = slide("s", false, Element::new("p").with_text("x").into());
        with_header.header = Some(RenderedRegion {
            content: Element::new("span").with_text("ACME").into(),
            style,
        });

        let html = serialize_to_html(&tree(vec![with_header]), &HtmlOptions::default()).unwrap();
        assert!(html.contains(r#"data-header="<span>ACME</span>""#));
        assert!(html.contains(r#"data-header-style="height: 10%""#));
        assert!(!html.contains("data-footer="));
    }

    #[test]
    fn test_runtime_config_is_embedded() {
        let options = HtmlOptions {
            relay_url: "https://relay.example".to_string(),
            ..HtmlOptions::default()
        };
        let html = serialize_to_html(&tree(vec![]), &options).unwrap();
        assert!(html.contains(r#""relayUrl":"https://relay.example""#));
        assert!(html.contains(r#""resultsUpdate":"qcm-results-update""#));
    }
}
