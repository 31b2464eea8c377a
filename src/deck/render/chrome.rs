//! Deck chrome: theme, header and footer bands

use super::context::RenderContext;
use super::generator::{check_attributes, render_box};
use super::tree::{RenderedRegion, RenderedTheme, Style};
use crate::deck::ast::{SlideRegion, Theme};
use crate::deck::attributes::{parse_percentage, AttributeKind, AttributeMap};
use crate::deck::error::RenderError;

/// Render a header or footer for one slide
///
/// Regions are rendered per slide, never shared, so each gets its own geometry.
pub fn render_region(
    ctx: &mut RenderContext<'_, '_>,
    region: &SlideRegion,
) -> Result<RenderedRegion, RenderError> {
    let attributes = AttributeMap::from_attributes(AttributeKind::Region, &region.attributes);
    check_attributes(&attributes, &region.range)?;

    let mut style = Style::new();
    if let Some(height) = attributes.get("height").and_then(parse_percentage) {
        style.set("height", format!("{height}%"));
    }
    if let Some(color) = attributes.text("color") {
        style.set("color", color);
    }
    if let Some(background) = attributes.text("background") {
        style.set("background", background);
    }

    Ok(RenderedRegion {
        content: render_box(ctx, &region.content)?,
        style,
    })
}

pub fn render_theme(theme: &Theme) -> Result<RenderedTheme, RenderError> {
    let attributes = AttributeMap::from_attributes(AttributeKind::Theme, &theme.attributes);
    check_attributes(&attributes, &theme.range)?;

    let mut style = Style::new();
    if let Some(color) = attributes.text("color") {
        style.set("color", color);
    }
    if let Some(background) = attributes.text("background") {
        style.set("background", background);
    }
    if let Some(font) = attributes.text("font") {
        style.set("font-family", font);
    }
    if let Some(size) = attributes.get("size") {
        style.set("font-size", format!("{size}px"));
    }

    Ok(RenderedTheme {
        name: theme.name.clone(),
        style,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::ast::{Attribute, Model, SlideBox, TextBox};
    use crate::deck::symbols::SymbolTable;

    #[test]
    fn test_region_style() {
        let model = Model::new();
        let table = SymbolTable::build(&model);
        let mut ctx = RenderContext::new(&table);
        let region = SlideRegion::new(SlideBox::Text(TextBox::new("ACME"))).with_attributes(vec![
            Attribute::text("height", "10%"),
            Attribute::text("background", "#222"),
        ]);

        let rendered = render_region(&mut ctx, &region).unwrap();
        assert_eq!(rendered.style.to_css_string(), "height: 10%; background: #222");
        assert_eq!(rendered.content.text_content(), "ACME");
    }

    #[test]
    fn test_theme_style() {
        let theme = Theme {
            name: "night".into(),
            attributes: vec![Attribute::text("font", "Inter"), Attribute::number("size", 28.0)],
            ..Theme::default()
        };
        let rendered = render_theme(&theme).unwrap();
        assert_eq!(rendered.name, "night");
        assert_eq!(rendered.style.to_css_string(), "font-family: Inter; font-size: 28px");
    }

    #[test]
    fn test_invalid_region_height() {
        let model = Model::new();
        let table = SymbolTable::build(&model);
        let mut ctx = RenderContext::new(&table);
        let region = SlideRegion::new(SlideBox::Text(TextBox::new("x")))
            .with_attributes(vec![Attribute::text("height", "300%")]);
        assert!(matches!(
            render_region(&mut ctx, &region),
            Err(RenderError::InvalidAttribute { .. })
        ));
    }
}
