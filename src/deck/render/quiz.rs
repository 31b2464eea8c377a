//! Quiz widgets
//!
//!     A quiz is self-contained: the widget carries its id, type, correct answer and reveal
//!     policy as data attributes. The browser-side script compares a learner's choice with
//!     the recorded answer case-insensitively and shows feedback locally, with no network.
//!
//!     A live quiz also carries the session id and the option labels needed to join the
//!     relay room (see [`live`](crate::deck::live)), a placeholder the script fills with a
//!     scannable join code, and one tally counter per option label starting at zero.

use super::tree::{Element, RenderNode};
use crate::deck::ast::{LiveQuizBox, QuizBox, QuizKind};
use crate::deck::error::RenderError;
use crate::deck::live::RegisterQuiz;
use serde::Serialize;

pub fn render_quiz(quiz: &QuizBox) -> Element {
    let question = Element::new("p")
        .with_class("deck-quiz-question")
        .with_text(quiz.question.clone());

    let input = match quiz.kind {
        QuizKind::Mcq => {
            let options = quiz.options.iter().map(|option| {
                RenderNode::from(
                    Element::new("li").with_child(
                        Element::new("button")
                            .with_class("deck-quiz-option")
                            .with_attr("type", "button")
                            .with_attr("data-option-id", option.id.clone())
                            .with_text(option.label.clone()),
                    ),
                )
            });
            Element::new("ul")
                .with_class("deck-quiz-options")
                .with_children(options)
        }
        QuizKind::Short => Element::new("input")
            .with_class("deck-quiz-input")
            .with_attr("type", "text")
            .with_attr("autocomplete", "off"),
    };

    let mut widget = Element::new("div")
        .with_class("deck-quiz")
        .with_attr("data-quiz-id", quiz.id.clone())
        .with_attr("data-quiz-type", quiz.kind.as_str())
        .with_attr("data-answer", quiz.answer.clone().unwrap_or_default())
        .with_attr("data-reveal", quiz.reveal.to_string())
        .with_child(question)
        .with_child(input);

    if quiz.kind == QuizKind::Short {
        widget = widget.with_child(
            Element::new("button")
                .with_class("deck-quiz-submit")
                .with_attr("type", "button")
                .with_text("Check"),
        );
    }
    if quiz.reveal {
        widget = widget.with_child(
            Element::new("button")
                .with_class("deck-quiz-reveal")
                .with_attr("type", "button")
                .with_text("Show answer"),
        );
    }
    widget.with_child(Element::new("p").with_class("deck-quiz-feedback"))
}

pub fn render_live_quiz(quiz: &LiveQuizBox) -> Result<Element, RenderError> {
    let payload = RegisterQuiz::from(quiz);
    let options = encode(quiz, &payload.options)?;
    let register = encode(quiz, &payload)?;

    let join = Element::new("div")
        .with_class("deck-live-join")
        .with_child(
            Element::new("div")
                .with_class("deck-join-code")
                .with_attr("data-session", quiz.session.clone()),
        )
        .with_child(Element::new("span").with_class("deck-join-url"));

    let counters = quiz.options.iter().map(|option| {
        RenderNode::from(
            Element::new("li")
                .with_class("deck-live-counter")
                .with_attr("data-option", option.label.clone())
                .with_child(
                    Element::new("span")
                        .with_class("deck-live-label")
                        .with_text(option.label.clone()),
                )
                .with_child(
                    Element::new("span")
                        .with_class("deck-live-count")
                        .with_text("0"),
                ),
        )
    });

    Ok(Element::new("div")
        .with_class("deck-live-quiz")
        .with_attr("data-quiz-id", quiz.id.clone())
        .with_attr("data-session", quiz.session.clone())
        .with_attr("data-answer", quiz.answer.clone().unwrap_or_default())
        .with_attr("data-options", options)
        .with_attr("data-register", register)
        .with_child(
            Element::new("p")
                .with_class("deck-quiz-question")
                .with_text(quiz.question.clone()),
        )
        .with_child(join)
        .with_child(
            Element::new("ul")
                .with_class("deck-live-tally")
                .with_children(counters),
        ))
}

fn encode<T: Serialize>(quiz: &LiveQuizBox, value: &T) -> Result<String, RenderError> {
    serde_json::to_string(value).map_err(|err| RenderError::Payload {
        quiz: quiz.id.clone(),
        message: err.to_string(),
    })
}
