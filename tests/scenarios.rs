//! Reference scenarios for the validate → merge → layout → render pipeline

use deck::deck::ast::{
    Attribute, AttributeValue, Component, ComponentBox, ComponentBoxReference,
    ComponentContentBox, LiveQuizBox, Model, QuizBox, QuizKind, Slide, SlideBox,
};
use deck::deck::attributes::{effective_attributes, AttributeKind, AttributeMap};
use deck::deck::diagnostics::{codes, Decision};
use deck::deck::error::CompileError;
use deck::deck::layout::compute_grid;
use deck::deck::pipeline::{check, compile};
use deck::deck::symbols::SymbolTable;
use deck::deck::testing::{card_component, container, fill_card, options, text};

fn deck_with(content: SlideBox) -> Model {
    Model::new()
        .with_component(card_component())
        .with_slide(Slide::new("only", content))
}

#[test]
fn scenario_a_unfilled_slot_is_the_only_warning() {
    let model = deck_with(fill_card(&[("title", text("Hello"))]));
    let diagnostics = check(&model);

    assert_eq!(diagnostics.error_count(), 0);
    assert_eq!(diagnostics.warning_count(), 1);
    let warning = diagnostics.warnings().next().unwrap();
    assert_eq!(warning.code.as_deref(), Some(codes::UNUSED_SLOT));
    assert!(warning.message.contains("'body'"));
    assert!(warning.message.contains("never used"));
    assert_eq!(diagnostics.decision(false), Decision::Commit);
}

#[test]
fn scenario_b_seven_children_in_three_columns() {
    let children: Vec<SlideBox> = (1..=7).map(|i| text(&format!("item {i}"))).collect();
    let attributes = vec![Attribute::number("column", 3.0)];

    let map = AttributeMap::from_attributes(AttributeKind::Container, &attributes);
    let grid = compute_grid(&map, children.len()).unwrap();
    assert_eq!((grid.columns, grid.rows), (3, 3));

    let compilation = compile(&deck_with(container(children, attributes))).unwrap();
    let content = compilation.tree.slides[0].content.as_element().unwrap();
    assert_eq!(content.attr("data-columns"), Some("3"));
    assert_eq!(content.attr("data-rows"), Some("3"));
    assert_eq!(content.children.len(), 7);
}

#[test]
fn scenario_c_call_site_adds_height() {
    let model = Model::new().with_component(Component::new(
        "Panel",
        ComponentBox::ComponentContentBox(
            ComponentContentBox::new(vec![ComponentBox::Text(
                deck::deck::ast::TextBox::new("panel"),
            )])
            .with_attributes(vec![Attribute::text("width", "100%")]),
        ),
    ));
    let table = SymbolTable::build(&model);
    let reference =
        ComponentBoxReference::new("Panel").with_attributes(vec![Attribute::text("height", "50%")]);

    let merged = effective_attributes(&table, &reference).unwrap();
    let entries: Vec<_> = merged.iter().collect();
    assert_eq!(
        entries,
        vec![
            ("width", &AttributeValue::Text("100%".to_string())),
            ("height", &AttributeValue::Text("50%".to_string())),
        ]
    );
    assert_eq!(merged.kind(), AttributeKind::Container);
}

#[test]
fn scenario_d_short_quiz_with_options_still_renders() {
    let quiz = SlideBox::Quiz(QuizBox {
        options: options(&["yes", "no"]),
        answer: Some("yes".to_string()),
        ..QuizBox::new("q", QuizKind::Short, "Well?")
    });
    let model = Model::new().with_slide(Slide::new("only", quiz));

    let compilation = compile(&model).unwrap();
    let warnings: Vec<_> = compilation
        .diagnostics
        .with_code(codes::SHORT_QUIZ_OPTIONS)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].message,
        "short-answer quizzes should not define option entries"
    );
    assert_eq!(
        compilation.tree.slides[0].content.find_by_class("deck-quiz").len(),
        1
    );
}

#[test]
fn scenario_e_live_quiz_without_session_aborts() {
    let live = SlideBox::LiveQuiz(LiveQuizBox {
        options: options(&["A", "B"]),
        answer: Some("A".to_string()),
        ..LiveQuizBox::new("poll", "", "Pick one")
    });
    let model = Model::new().with_slide(Slide::new("only", live));

    match compile(&model) {
        Err(CompileError::Rejected { diagnostics }) => {
            assert_eq!(diagnostics.with_code(codes::EMPTY_SESSION).count(), 1);
            assert_eq!(diagnostics.decision(false), Decision::Abort);
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}
