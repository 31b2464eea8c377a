//! Render tree generator
//!
//!     Walks slides → boxes recursively and dispatches on the box kind:
//!
//!         - terminals go to their dedicated renderer with their resolved attributes
//!         - containers compute their grid and recurse over their children
//!         - call sites expand the referenced component in place
//!
//!     Expansion of a call site:
//!
//!         1. resolve the component through the symbol table
//!         2. compute the effective attributes of its root (declared, overridden by the
//!            call site)
//!         3. render every slot fill in the caller's scope
//!         4. push an expansion frame holding those fills and render the component root
//!            with the effective attributes; each slot met on the way is replaced by its
//!            fill, else by its default content, else by an empty placeholder
//!
//!     A `fragment` attribute wraps the box's own output in a reveal wrapper. It never
//!     reaches the box's own style.
//!
//!     Rendering expects a validated model. Handed one that is not, it returns a
//!     [`RenderError`] instead of producing broken markup.

use super::chrome::{render_region, render_theme};
use super::context::RenderContext;
use super::quiz::{render_live_quiz, render_quiz};
use super::terminals::{render_code, render_image, render_list, render_text, render_video};
use super::tree::{Element, RenderNode, RenderTree, RenderedSlide};
use crate::deck::ast::{
    AttributeValue, ComponentBox, ComponentBoxReference, ComponentSlot, Model, Range, Slide,
    SlideBox, Terminal,
};
use crate::deck::attributes::{check_value, effective_attributes, AttributeKind, AttributeMap};
use crate::deck::error::{MergeError, RenderError};
use crate::deck::layout::compute_grid;
use crate::deck::symbols::SymbolTable;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Render every slide of `model`
#[instrument(skip_all, fields(slides = model.slides.len()))]
pub fn render(model: &Model, table: &SymbolTable<'_>) -> Result<RenderTree, RenderError> {
    let mut ctx = RenderContext::new(table);

    let theme = model.theme.as_ref().map(render_theme).transpose()?;
    let mut slides = Vec::with_capacity(model.slides.len());
    for slide in &model.slides {
        slides.push(render_slide(&mut ctx, model, slide)?);
    }

    Ok(RenderTree {
        title: model.title.clone(),
        theme,
        slides,
    })
}

pub fn render_slide(
    ctx: &mut RenderContext<'_, '_>,
    model: &Model,
    slide: &Slide,
) -> Result<RenderedSlide, RenderError> {
    let header = model
        .header_for(slide)
        .map(|region| render_region(ctx, region))
        .transpose()?;
    let footer = model
        .footer_for(slide)
        .map(|region| render_region(ctx, region))
        .transpose()?;
    let content = render_box(ctx, &slide.content)?;

    debug!(slide = %slide.id, "rendered slide");
    Ok(RenderedSlide {
        id: slide.id.clone(),
        annotable: slide.annotable,
        header,
        footer,
        content,
    })
}

/// Render a slide-level box
pub fn render_box(
    ctx: &mut RenderContext<'_, '_>,
    node: &SlideBox,
) -> Result<RenderNode, RenderError> {
    match node {
        SlideBox::ContentBox(container) => {
            let attributes =
                AttributeMap::from_attributes(AttributeKind::Container, &container.attributes);
            render_grid(ctx, attributes, &container.children, &container.range, render_box)
        }
        SlideBox::ComponentBoxReference(reference) => render_reference(ctx, reference, None),
        SlideBox::Text(b) => render_terminal(Terminal::Text(b), None),
        SlideBox::Image(b) => render_terminal(Terminal::Image(b), None),
        SlideBox::Video(b) => render_terminal(Terminal::Video(b), None),
        SlideBox::List(b) => render_terminal(Terminal::List(b), None),
        SlideBox::Code(b) => render_terminal(Terminal::Code(b), None),
        SlideBox::Quiz(b) => render_terminal(Terminal::Quiz(b), None),
        SlideBox::LiveQuiz(b) => render_terminal(Terminal::LiveQuiz(b), None),
    }
}

/// Render a component box; `overrides` replaces the box's own attributes at a root
fn render_component_box(
    ctx: &mut RenderContext<'_, '_>,
    node: &ComponentBox,
    overrides: Option<AttributeMap>,
) -> Result<RenderNode, RenderError> {
    match node {
        ComponentBox::ComponentSlot(slot) => {
            let content = render_slot(ctx, slot)?;
            match overrides {
                Some(attributes) => {
                    check_attributes(&attributes, &slot.range)?;
                    Ok(decorate(content, &attributes))
                }
                None => Ok(content),
            }
        }
        ComponentBox::ComponentBoxReference(reference) => {
            render_reference(ctx, reference, overrides)
        }
        ComponentBox::ComponentContentBox(container) => {
            let attributes = overrides.unwrap_or_else(|| {
                AttributeMap::from_attributes(AttributeKind::Container, &container.attributes)
            });
            render_grid(
                ctx,
                attributes,
                &container.children,
                &container.range,
                |ctx, child| render_component_box(ctx, child, None),
            )
        }
        ComponentBox::Text(b) => render_terminal(Terminal::Text(b), overrides),
        ComponentBox::Image(b) => render_terminal(Terminal::Image(b), overrides),
        ComponentBox::Video(b) => render_terminal(Terminal::Video(b), overrides),
        ComponentBox::List(b) => render_terminal(Terminal::List(b), overrides),
        ComponentBox::Code(b) => render_terminal(Terminal::Code(b), overrides),
        ComponentBox::Quiz(b) => render_terminal(Terminal::Quiz(b), overrides),
        ComponentBox::LiveQuiz(b) => render_terminal(Terminal::LiveQuiz(b), overrides),
    }
}

/// Expand a call site; `merged` is set when an enclosing expansion already resolved it
fn render_reference(
    ctx: &mut RenderContext<'_, '_>,
    reference: &ComponentBoxReference,
    merged: Option<AttributeMap>,
) -> Result<RenderNode, RenderError> {
    let table = ctx.table();
    let component = table
        .resolve(reference)
        .ok_or_else(|| MergeError::UnknownComponent {
            name: reference.reference.clone(),
            range: reference.range.clone(),
        })?;
    let attributes = match merged {
        Some(attributes) => attributes,
        None => effective_attributes(table, reference)?,
    };

    let mut fills = HashMap::new();
    for fill in &reference.slots {
        let rendered = render_box(ctx, &fill.content)?;
        fills.entry(fill.name.clone()).or_insert(rendered);
    }

    ctx.enter(&component.name, fills)?;
    let rendered = render_component_box(ctx, &component.root, Some(attributes));
    ctx.leave();
    rendered
}

fn render_slot(
    ctx: &mut RenderContext<'_, '_>,
    slot: &ComponentSlot,
) -> Result<RenderNode, RenderError> {
    if !ctx.in_expansion() {
        return Err(RenderError::SlotOutsideComponent {
            name: slot.name.clone(),
            range: slot.range.clone(),
        });
    }
    if let Some(fill) = ctx.fill(&slot.name) {
        return Ok(fill.clone());
    }
    match &slot.default {
        Some(default) => render_box(ctx, default),
        None => Ok(Element::new("div")
            .with_class("deck-slot-empty")
            .with_attr("data-slot", slot.name.clone())
            .into()),
    }
}

fn render_grid<'t, 'a, B, F>(
    ctx: &mut RenderContext<'t, 'a>,
    attributes: AttributeMap,
    children: &[B],
    range: &Range,
    mut render_child: F,
) -> Result<RenderNode, RenderError>
where
    F: FnMut(&mut RenderContext<'t, 'a>, &B) -> Result<RenderNode, RenderError>,
{
    check_attributes(&attributes, range)?;
    let grid = compute_grid(&attributes, children.len()).map_err(|source| RenderError::Layout {
        source,
        range: range.clone(),
    })?;

    let mut rendered = Vec::with_capacity(children.len());
    for child in children {
        rendered.push(render_child(ctx, child)?);
    }

    let element = Element::new("div")
        .with_class("deck-box")
        .with_attr("data-columns", grid.columns.to_string())
        .with_attr("data-rows", grid.rows.to_string())
        .with_style(grid.style().into_iter().collect())
        .with_children(rendered);
    Ok(decorate(element.into(), &attributes))
}

fn render_terminal(
    terminal: Terminal<'_>,
    overrides: Option<AttributeMap>,
) -> Result<RenderNode, RenderError> {
    let attributes = overrides.unwrap_or_else(|| {
        AttributeMap::from_attributes(AttributeKind::of_terminal(terminal), terminal.attributes())
    });
    check_attributes(&attributes, terminal.range())?;

    let element = match terminal {
        Terminal::Text(b) => render_text(b, &attributes),
        Terminal::Image(b) => render_image(b, &attributes),
        Terminal::Video(b) => render_video(b, &attributes),
        Terminal::List(b) => render_list(b, &attributes),
        Terminal::Code(b) => render_code(b, &attributes),
        Terminal::Quiz(b) => render_quiz(b),
        Terminal::LiveQuiz(b) => render_live_quiz(b)?,
    };
    Ok(decorate(element.into(), &attributes))
}

/// Reject attribute values a renderer cannot turn into directives
pub(crate) fn check_attributes(attributes: &AttributeMap, range: &Range) -> Result<(), RenderError> {
    let kind = attributes.kind();
    for (key, value) in attributes.iter() {
        if !kind.authorizes(key) {
            return Err(RenderError::InvalidAttribute {
                key: key.to_string(),
                message: format!("not allowed on {kind} boxes"),
                range: range.clone(),
            });
        }
        check_value(key, value).map_err(|message| RenderError::InvalidAttribute {
            key: key.to_string(),
            message,
            range: range.clone(),
        })?;
    }
    Ok(())
}

/// Wrap `node` for incremental reveal when `fragment` is set
fn decorate(node: RenderNode, attributes: &AttributeMap) -> RenderNode {
    let Some(value) = attributes.get("fragment") else {
        return node;
    };
    let wrapper = Element::new("div").with_class("fragment");
    let wrapper = match (value.as_flag(), value) {
        (Some(false), _) => return node,
        (Some(true), _) => wrapper,
        (None, AttributeValue::Text(animation)) => wrapper.with_class(animation.trim()),
        (None, _) => wrapper,
    };
    wrapper.with_child(node).into()
}
