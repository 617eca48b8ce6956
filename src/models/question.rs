use serde::{Deserialize, Serialize};

/// A multiple-choice question recovered from generated quiz text.
///
/// `options` keep each line as it was generated, label included, minus any
/// `*` marker. `correct_option`, when present, is one of `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub index: usize,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: Option<String>,
}
