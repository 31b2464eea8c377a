//! Model
//!
//!     The root of a parsed presentation. It owns the component declarations, the slides in
//!     presentation order, and the optional deck-wide theme, header and footer.
//!
//!     The model is produced once by the front-end and is read-only for the core. Symbol
//!     tables and render trees are derived from it per run and then dropped.

use super::super::traits::{AstNode, Visitor};
use super::component::Component;
use super::slide::{Footer, Header, Slide, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub header: Option<Header>,
    #[serde(default)]
    pub footer: Option<Footer>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    pub fn with_slide(mut self, slide: Slide) -> Self {
        self.slides.push(slide);
        self
    }

    pub fn with_header(mut self, header: Header) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_footer(mut self, footer: Footer) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn slide(&self, id: &str) -> Option<&Slide> {
        self.slides.iter().find(|slide| slide.id == id)
    }

    /// The header shown on `slide`: its own, else the deck-wide one
    pub fn header_for<'a>(&'a self, slide: &'a Slide) -> Option<&'a Header> {
        slide.header.as_ref().or(self.header.as_ref())
    }

    /// The footer shown on `slide`: its own, else the deck-wide one
    pub fn footer_for<'a>(&'a self, slide: &'a Slide) -> Option<&'a Footer> {
        slide.footer.as_ref().or(self.footer.as_ref())
    }

    /// Walk every declaration: theme, deck-wide regions, components, then slides
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        if let Some(theme) = &self.theme {
            visitor.visit_theme(theme);
        }
        if let Some(header) = &self.header {
            header.accept(visitor);
        }
        if let Some(footer) = &self.footer {
            footer.accept(visitor);
        }
        for component in &self.components {
            component.accept(visitor);
        }
        for slide in &self.slides {
            slide.accept(visitor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::ast::elements::{SlideBox, SlideRegion, TextBox};

    fn text(value: &str) -> SlideBox {
        SlideBox::Text(TextBox::new(value))
    }

    #[test]
    fn test_slide_region_inheritance() {
        let model = Model::new()
            .with_header(SlideRegion::new(text("deck header")))
            .with_slide(Slide::new("intro", text("a")))
            .with_slide(
                Slide::new("outro", text("b")).with_header(SlideRegion::new(text("own header"))),
            );

        let intro = model.slide("intro").unwrap();
        let outro = model.slide("outro").unwrap();
        assert_eq!(
            model.header_for(intro).map(|h| &h.content),
            Some(&text("deck header"))
        );
        assert_eq!(
            model.header_for(outro).map(|h| &h.content),
            Some(&text("own header"))
        );
        assert!(model.footer_for(intro).is_none());
    }

    #[test]
    fn test_model_deserializes_from_yaml() {
        let yaml = r#"
title: Demo
components:
  - name: Card
    root:
      $type: ComponentContentBox
      children:
        - $type: ComponentSlot
          name: title
slides:
  - id: first
    annotable: true
    content:
      $type: ComponentBoxReference
      reference: Card
      slots:
        - name: title
          content:
            $type: Text
            text: Hello
"#;
        let model: Model = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(model.title.as_deref(), Some("Demo"));
        assert_eq!(model.components[0].name, "Card");
        assert!(model.slides[0].annotable);
    }
}
