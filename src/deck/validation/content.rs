//! Content checks: quizzes, live quizzes and media accessibility

use crate::deck::ast::{LiveQuizBox, Model, QuizBox, QuizKind, QuizOption, Terminal, Visitor};
use crate::deck::diagnostics::{codes, Diagnostic};
use std::collections::HashSet;

pub fn validate_content(model: &Model) -> Vec<Diagnostic> {
    let mut checker = ContentChecker::default();
    model.accept(&mut checker);
    checker.diagnostics
}

#[derive(Default)]
struct ContentChecker {
    diagnostics: Vec<Diagnostic>,
}

impl Visitor for ContentChecker {
    fn visit_terminal(&mut self, terminal: Terminal<'_>) {
        match terminal {
            Terminal::Quiz(quiz) => self.diagnostics.extend(check_quiz(quiz)),
            Terminal::LiveQuiz(quiz) => self.diagnostics.extend(check_live_quiz(quiz)),
            Terminal::Image(image) if image.alt.trim().is_empty() => {
                self.diagnostics.push(empty_alt(terminal, &image.src))
            }
            Terminal::Video(video) if video.alt.trim().is_empty() => {
                self.diagnostics.push(empty_alt(terminal, &video.src))
            }
            _ => {}
        }
    }
}

fn empty_alt(terminal: Terminal<'_>, src: &str) -> Diagnostic {
    Diagnostic::warning(
        terminal.range(),
        format!("{} '{}' has no alt text", terminal.node_type(), src),
    )
    .with_code(codes::EMPTY_ALT_TEXT)
}

/// Options repeating an earlier one under `key`
fn repeated<'o>(options: &'o [QuizOption], key: impl Fn(&QuizOption) -> &str) -> Vec<&'o QuizOption> {
    let mut seen = HashSet::new();
    options
        .iter()
        .filter(|option| !seen.insert(key(*option).to_string()))
        .collect()
}

pub fn check_quiz(quiz: &QuizBox) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let range = &quiz.range;

    match quiz.kind {
        QuizKind::Mcq => {
            if quiz.options.is_empty() {
                diagnostics.push(
                    Diagnostic::error(
                        range,
                        format!("Multiple-choice quiz '{}' has no options", quiz.id),
                    )
                    .with_code(codes::QUIZ_WITHOUT_OPTIONS),
                );
            }
            for option in repeated(&quiz.options, |o| o.id.as_str()) {
                diagnostics.push(
                    Diagnostic::error(
                        &option.range,
                        format!("Quiz '{}' repeats option id '{}'", quiz.id, option.id),
                    )
                    .with_code(codes::DUPLICATE_OPTION),
                );
            }
            if let Some(answer) = &quiz.answer {
                let matches = quiz.options.iter().any(|option| {
                    option.id.eq_ignore_ascii_case(answer.trim())
                        || option.label.trim().eq_ignore_ascii_case(answer.trim())
                });
                if !quiz.options.is_empty() && !matches {
                    diagnostics.push(
                        Diagnostic::warning(
                            range,
                            format!("Answer '{}' of quiz '{}' matches no option", answer, quiz.id),
                        )
                        .with_code(codes::QUIZ_UNKNOWN_ANSWER),
                    );
                }
            }
        }
        QuizKind::Short => {
            if !quiz.options.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        range,
                        "short-answer quizzes should not define option entries",
                    )
                    .with_code(codes::SHORT_QUIZ_OPTIONS),
                );
            }
        }
    }

    if quiz.answer.as_deref().map_or(true, |a| a.trim().is_empty()) {
        diagnostics.push(
            Diagnostic::warning(range, format!("Quiz '{}' has no correct answer", quiz.id))
                .with_code(codes::QUIZ_MISSING_ANSWER),
        );
    }

    diagnostics
}

pub fn check_live_quiz(quiz: &LiveQuizBox) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let range = &quiz.range;

    if quiz.session.trim().is_empty() {
        diagnostics.push(
            Diagnostic::error(range, format!("Live quiz '{}' has an empty session id", quiz.id))
                .with_code(codes::EMPTY_SESSION),
        );
    }
    if quiz.options.is_empty() {
        diagnostics.push(
            Diagnostic::error(range, format!("Live quiz '{}' has no options", quiz.id))
                .with_code(codes::QUIZ_WITHOUT_OPTIONS),
        );
    }
    // Tally counters are keyed by label
    for option in repeated(&quiz.options, |o| o.label.as_str()) {
        diagnostics.push(
            Diagnostic::error(
                &option.range,
                format!("Live quiz '{}' repeats option label '{}'", quiz.id, option.label),
            )
            .with_code(codes::DUPLICATE_OPTION),
        );
    }
    if quiz.answer.as_deref().map_or(true, |a| a.trim().is_empty()) {
        diagnostics.push(
            Diagnostic::warning(range, format!("Live quiz '{}' has no correct answer", quiz.id))
                .with_code(codes::QUIZ_MISSING_ANSWER),
        );
    }

    diagnostics
}
