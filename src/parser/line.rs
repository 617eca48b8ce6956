//! Per-line classification of generated text.
//!
//! Both parsers first turn every cleaned line into a [`Line`] and only then
//! run their state machines over the tags.

const OPTION_PREFIXES: [&str; 4] = ["a)", "b)", "c)", "d)"];

/// The two output formats the generator is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Flashcards,
    Quiz,
}

/// A tagged line. Payloads borrow from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `1. What is ...` — carries the text after the first `.`.
    QuestionStart(&'a str),
    /// `b) Paris*` — carries the whole line.
    Option(&'a str),
    /// `Q: ...` — carries the text after the first `:`.
    QuestionLabel(&'a str),
    /// `A: ...` — carries the text after the first `:`.
    AnswerLabel(&'a str),
    Ignored,
}

/// Trimmed, non-empty lines of `raw`.
pub fn cleaned_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines().map(str::trim).filter(|line| !line.is_empty())
}

impl Dialect {
    /// Tag a single line. `line` is expected to be trimmed already.
    pub fn classify(self, line: &str) -> Line<'_> {
        match self {
            Dialect::Flashcards => classify_flashcard_line(line),
            Dialect::Quiz => classify_quiz_line(line),
        }
    }
}

fn classify_flashcard_line(line: &str) -> Line<'_> {
    match line.chars().next() {
        Some(c) if c.eq_ignore_ascii_case(&'q') => Line::QuestionLabel(after_colon(line)),
        Some(c) if c.eq_ignore_ascii_case(&'a') => Line::AnswerLabel(after_colon(line)),
        _ => Line::Ignored,
    }
}

fn classify_quiz_line(line: &str) -> Line<'_> {
    let starts_with_digit = line.chars().next().is_some_and(|c| c.is_ascii_digit());

    if starts_with_digit {
        if let Some((_, text)) = line.split_once('.') {
            return Line::QuestionStart(text.trim());
        }
    }

    if is_option(line) {
        Line::Option(line)
    } else {
        Line::Ignored
    }
}

fn is_option(line: &str) -> bool {
    line.get(..2)
        .is_some_and(|head| OPTION_PREFIXES.iter().any(|p| head.eq_ignore_ascii_case(p)))
}

/// Everything after the first `:`, trimmed; empty when there is no colon.
fn after_colon(line: &str) -> &str {
    line.split_once(':').map_or("", |(_, rest)| rest.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleaned_lines_drops_blanks_and_trims() {
        let lines: Vec<&str> = cleaned_lines("  Q: one \n\n   \n\tA: two\r\n").collect();
        assert_eq!(lines, vec!["Q: one", "A: two"]);
    }

    #[test]
    fn flashcard_labels() {
        let d = Dialect::Flashcards;
        assert_eq!(d.classify("Q: What?"), Line::QuestionLabel("What?"));
        assert_eq!(d.classify("question: Why?"), Line::QuestionLabel("Why?"));
        assert_eq!(d.classify("A: Because"), Line::AnswerLabel("Because"));
        assert_eq!(d.classify("Answer:Yes"), Line::AnswerLabel("Yes"));
        assert_eq!(d.classify("Note: skip me"), Line::Ignored);
    }

    #[test]
    fn flashcard_any_q_word_is_a_question() {
        // Loose matching: "quick note" still counts as a question line.
        assert_eq!(Dialect::Flashcards.classify("quick note"), Line::QuestionLabel(""));
        assert_eq!(
            Dialect::Flashcards.classify("quick: note"),
            Line::QuestionLabel("note")
        );
    }

    #[test]
    fn flashcard_splits_on_first_colon_only() {
        assert_eq!(
            Dialect::Flashcards.classify("Q: Ratio 1:2?"),
            Line::QuestionLabel("Ratio 1:2?")
        );
    }

    #[test]
    fn quiz_question_start_needs_digit_and_dot() {
        let d = Dialect::Quiz;
        assert_eq!(d.classify("1. 2+2=?"), Line::QuestionStart("2+2=?"));
        assert_eq!(d.classify("12.What is pi? 3.14"), Line::QuestionStart("What is pi? 3.14"));
        assert_eq!(d.classify("1) no dot"), Line::Ignored);
        assert_eq!(d.classify("Question 1."), Line::Ignored);
    }

    #[test]
    fn quiz_options_by_prefix_only() {
        let d = Dialect::Quiz;
        assert_eq!(d.classify("a) 3"), Line::Option("a) 3"));
        assert_eq!(d.classify("D) 6*"), Line::Option("D) 6*"));
        assert_eq!(d.classify("e) 7"), Line::Ignored);
        assert_eq!(d.classify("a"), Line::Ignored);
        assert_eq!(d.classify("Here is your quiz:"), Line::Ignored);
    }

    #[test]
    fn quiz_question_start_wins_over_option() {
        assert_eq!(Dialect::Quiz.classify("1. a) odd"), Line::QuestionStart("a) odd"));
    }

    #[test]
    fn multibyte_lines_do_not_panic() {
        assert_eq!(Dialect::Quiz.classify("é) café"), Line::Ignored);
        assert_eq!(Dialect::Flashcards.classify("Ärger: x"), Line::Ignored);
    }
}
