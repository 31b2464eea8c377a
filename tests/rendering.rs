//! Render tree generation over whole decks

use deck::deck::ast::{Attribute, Component, ComponentBox, ComponentBoxReference, Model, Slide, SlideBox};
use deck::deck::live::RegisterQuiz;
use deck::deck::pipeline::compile;
use deck::deck::render::{render, RenderNode};
use deck::deck::symbols::SymbolTable;
use deck::deck::testing::{
    card_component, container, fill_card, sample_deck, styled_text, text,
};
use rstest::rstest;

fn slide<'t>(tree: &'t deck::deck::render::RenderTree, id: &str) -> &'t RenderNode {
    &tree
        .slides
        .iter()
        .find(|slide| slide.id == id)
        .expect("slide present")
        .content
}

#[test]
fn sample_deck_renders_every_slide_in_order() {
    let compilation = compile(&sample_deck()).unwrap();
    let tree = &compilation.tree;

    let ids: Vec<_> = tree.slides.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["intro", "media", "quiz"]);
    assert_eq!(tree.title.as_deref(), Some("Sample deck"));
    assert!(tree.slides[0].annotable);
    assert!(!tree.slides[1].annotable);
    assert!(tree.slides.iter().all(|s| s.header.is_some() && s.footer.is_none()));

    let theme = tree.theme.as_ref().unwrap();
    assert_eq!(theme.name, "white");
    assert_eq!(theme.style.get("font-family"), Some("Inter"));
}

#[test]
fn component_fill_lands_in_the_card() {
    let tree = compile(&sample_deck()).unwrap().tree;
    let intro = slide(&tree, "intro");

    let boxes = intro.find_by_class("deck-box");
    assert_eq!(boxes.len(), 2);
    let card = boxes[1];
    assert_eq!(card.attr("data-columns"), Some("1"));
    assert_eq!(card.style.get("width"), Some("100%"));
    assert_eq!(RenderNode::from(card.clone()).text_content(), "Agenda");
    assert_eq!(intro.find_by_class("deck-slot-empty").len(), 1);
}

#[test]
fn live_quiz_embeds_its_registration() {
    let tree = compile(&sample_deck()).unwrap().tree;
    let quiz = slide(&tree, "quiz");

    let live = quiz.find_by_class("deck-live-quiz")[0];
    assert_eq!(live.attr("data-session"), Some("room-1"));
    let register: RegisterQuiz =
        serde_json::from_str(live.attr("data-register").unwrap()).unwrap();
    assert_eq!(register.session, "room-1");
    assert_eq!(register.options, vec!["Red", "Blue"]);

    let labels: Vec<_> = quiz
        .find_by_class("deck-live-counter")
        .iter()
        .map(|counter| counter.attr("data-option").unwrap())
        .collect();
    assert_eq!(labels, vec!["Red", "Blue"]);
}

#[rstest]
#[case(Attribute::flag("fragment"), vec!["fragment"])]
#[case(Attribute::text("fragment", "fade-up"), vec!["fragment", "fade-up"])]
fn fragments_wrap_the_box(#[case] fragment: Attribute, #[case] classes: Vec<&str>) {
    let model = Model::new().with_slide(Slide::new(
        "s",
        styled_text("reveal me", vec![fragment]),
    ));
    let tree = compile(&model).unwrap().tree;
    let wrapper = tree.slides[0].content.as_element().unwrap();

    assert_eq!(wrapper.classes, classes);
    assert_eq!(wrapper.children.len(), 1);
}

#[test]
fn call_site_overrides_reach_nested_components() {
    let model = Model::new()
        .with_component(card_component())
        .with_component(Component::new(
            "WideCard",
            ComponentBox::ComponentBoxReference(
                ComponentBoxReference::new("Card")
                    .with_attributes(vec![Attribute::number("column", 2.0)]),
            ),
        ))
        .with_slide(Slide::new(
            "s",
            SlideBox::ComponentBoxReference(
                ComponentBoxReference::new("WideCard")
                    .with_attributes(vec![Attribute::text("height", "40%")]),
            ),
        ));
    let table = SymbolTable::build(&model);
    let tree = render(&model, &table).unwrap();

    let card = tree.slides[0].content.as_element().unwrap();
    assert_eq!(card.attr("data-columns"), Some("2"));
    assert_eq!(card.style.get("width"), Some("100%"));
    assert_eq!(card.style.get("height"), Some("40%"));
}

#[test]
fn rendering_unvalidated_model_fails_cleanly() {
    let model = Model::new().with_slide(Slide::new(
        "s",
        container(vec![fill_card(&[("title", text("x"))])], vec![]),
    ));
    let table = SymbolTable::build(&model);
    let err = render(&model, &table).unwrap_err();
    assert!(err.to_string().contains("unknown component 'Card'"));
}
