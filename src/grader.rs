//! Quiz scoring.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::QuizQuestion;

/// Shown instead of a correct answer when the question had no options.
pub const UNMARKED_PLACEHOLDER: &str = "Unknown (not marked)";

/// Selected option text keyed by question index.
pub type Selections = BTreeMap<usize, String>;

/// Outcome for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub index: usize,
    pub is_correct: bool,
    pub displayed_correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizReport {
    pub score: usize,
    pub total: usize,
    pub verdicts: Vec<Verdict>,
}

impl QuizReport {
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.score as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Score `questions` against `selections`.
///
/// A selection counts only when it is exactly the question's correct option.
pub fn grade(questions: &[QuizQuestion], selections: &Selections) -> QuizReport {
    let verdicts: Vec<Verdict> = questions
        .iter()
        .map(|question| {
            let selected = selections.get(&question.index);
            let is_correct = match (&question.correct_option, selected) {
                (Some(correct), Some(selected)) => correct == selected,
                _ => false,
            };

            Verdict {
                index: question.index,
                is_correct,
                displayed_correct_answer: question
                    .correct_option
                    .clone()
                    .unwrap_or_else(|| UNMARKED_PLACEHOLDER.to_string()),
            }
        })
        .collect();

    let score = verdicts.iter().filter(|v| v.is_correct).count();

    QuizReport {
        score,
        total: questions.len(),
        verdicts,
    }
}

/// The user's answers for one pass over a quiz.
#[derive(Debug, Clone, Default)]
pub struct QuizAttempt {
    selections: Selections,
}

impl QuizAttempt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: usize, option: impl Into<String>) {
        self.selections.insert(index, option.into());
    }

    pub fn selection(&self, index: usize) -> Option<&str> {
        self.selections.get(&index).map(String::as_str)
    }

    pub fn answered(&self) -> usize {
        self.selections.len()
    }

    pub fn grade(&self, questions: &[QuizQuestion]) -> QuizReport {
        let report = grade(questions, &self.selections);
        tracing::info!(score = report.score, total = report.total, "quiz graded");
        report
    }
}
