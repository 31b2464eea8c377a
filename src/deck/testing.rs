//! Model factories for tests
//!
//!     Building document trees by hand is verbose and easy to get subtly wrong. Tests across
//!     the workspace build their models from these factories instead, so a change in the
//!     tree shape is fixed in one place.
//!
//!     [`sample_deck`] is a complete, valid deck exercising every box kind. It compiles with
//!     exactly one warning (an unused slot) and is the fixture the emitter and CLI tests
//!     serialize.

use super::ast::{
    Attribute, CodeBox, Component, ComponentBox, ComponentBoxReference, ComponentContentBox,
    ComponentSlot, ContentBox, ImageBox, ListBox, LiveQuizBox, Model, QuizBox, QuizKind,
    QuizOption, Slide, SlideBox, SlideRegion, TextBox, Theme, VideoBox,
};

pub fn text(value: &str) -> SlideBox {
    SlideBox::Text(TextBox::new(value))
}

pub fn styled_text(value: &str, attributes: Vec<Attribute>) -> SlideBox {
    SlideBox::Text(TextBox {
        attributes,
        ..TextBox::new(value)
    })
}

pub fn container(children: Vec<SlideBox>, attributes: Vec<Attribute>) -> SlideBox {
    SlideBox::ContentBox(ContentBox::new(children).with_attributes(attributes))
}

pub fn reference(name: &str) -> SlideBox {
    SlideBox::ComponentBoxReference(ComponentBoxReference::new(name))
}

/// `Card`: a one-column container with slots `title` and `body`
pub fn card_component() -> Component {
    Component::new(
        "Card",
        ComponentBox::ComponentContentBox(
            ComponentContentBox::new(vec![
                ComponentBox::ComponentSlot(ComponentSlot::new("title")),
                ComponentBox::ComponentSlot(ComponentSlot::new("body")),
            ])
            .with_attributes(vec![
                Attribute::number("column", 1.0),
                Attribute::text("width", "100%"),
            ]),
        ),
    )
}

/// A `Card` call site with the given fills
pub fn fill_card(fills: &[(&str, SlideBox)]) -> SlideBox {
    let reference = fills
        .iter()
        .fold(ComponentBoxReference::new("Card"), |reference, (name, content)| {
            reference.fill(*name, content.clone())
        });
    SlideBox::ComponentBoxReference(reference)
}

pub fn options(labels: &[&str]) -> Vec<QuizOption> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| QuizOption::new(format!("o{}", index + 1), *label))
        .collect()
}

pub fn mcq(id: &str, question: &str, labels: &[&str], answer: &str) -> SlideBox {
    SlideBox::Quiz(QuizBox {
        options: options(labels),
        answer: Some(answer.to_string()),
        ..QuizBox::new(id, QuizKind::Mcq, question)
    })
}

pub fn short_quiz(id: &str, question: &str, answer: &str) -> SlideBox {
    SlideBox::Quiz(QuizBox {
        answer: Some(answer.to_string()),
        reveal: true,
        ..QuizBox::new(id, QuizKind::Short, question)
    })
}

pub fn live_quiz(id: &str, session: &str, question: &str, labels: &[&str]) -> SlideBox {
    SlideBox::LiveQuiz(LiveQuizBox {
        options: options(labels),
        answer: labels.first().map(|label| label.to_string()),
        ..LiveQuizBox::new(id, session, question)
    })
}

/// A valid deck touching every box kind
pub fn sample_deck() -> Model {
    Model {
        title: Some("Sample deck".to_string()),
        theme: Some(Theme {
            name: "white".to_string(),
            attributes: vec![Attribute::text("font", "Inter")],
            ..Theme::default()
        }),
        header: Some(
            SlideRegion::new(text("ACME Corp"))
                .with_attributes(vec![Attribute::text("height", "8%")]),
        ),
        ..Model::default()
    }
    .with_component(card_component())
    .with_slide(
        Slide::new(
            "intro",
            container(
                vec![
                    styled_text("Welcome", vec![Attribute::flag("bold")]),
                    fill_card(&[("title", text("Agenda"))]),
                ],
                vec![Attribute::text("alignment", "top left")],
            ),
        )
        .annotable(),
    )
    .with_slide(Slide::new(
        "media",
        container(
            vec![
                SlideBox::Image(ImageBox::new("diagram.png", "Architecture diagram")),
                SlideBox::Video(VideoBox {
                    attributes: vec![Attribute::flag("muted"), Attribute::flag("loop")],
                    ..VideoBox::new("demo.mp4", "Product demo")
                }),
                SlideBox::List(ListBox::new(["fast", "small", "safe"])),
                SlideBox::Code(CodeBox::new(Some("rust"), "fn main() {}")),
            ],
            vec![Attribute::number("column", 2.0)],
        ),
    ))
    .with_slide(Slide::new(
        "quiz",
        container(
            vec![
                mcq("capital", "Capital of France?", &["Paris", "Rome"], "o1"),
                short_quiz("prime", "Smallest prime?", "2"),
                live_quiz("poll", "room-1", "Favourite colour?", &["Red", "Blue"]),
            ],
            vec![Attribute::number("column", 3.0)],
        ),
    ))
}
