use crate::models::Flashcard;

use super::line::{cleaned_lines, Dialect, Line};

/// Parse `Q:` / `A:` style text into flashcards, in input order.
///
/// A card is emitted as soon as both a question and an answer are pending.
/// A trailing question or answer without its pair is dropped.
pub fn parse_flashcards(raw: &str) -> Vec<Flashcard> {
    let mut cards = Vec::new();
    let mut pending = Pending::default();

    for line in cleaned_lines(raw) {
        match Dialect::Flashcards.classify(line) {
            Line::QuestionLabel(text) => pending.question = text,
            Line::AnswerLabel(text) => pending.answer = text,
            _ => {}
        }

        if let Some(card) = pending.take_complete() {
            cards.push(card);
        }
    }

    cards
}

#[derive(Default)]
struct Pending<'a> {
    question: &'a str,
    answer: &'a str,
}

impl Pending<'_> {
    fn take_complete(&mut self) -> Option<Flashcard> {
        if self.question.is_empty() || self.answer.is_empty() {
            return None;
        }

        let card = Flashcard {
            question: self.question.to_string(),
            answer: self.answer.to_string(),
        };
        *self = Pending::default();
        Some(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card(question: &str, answer: &str) -> Flashcard {
        Flashcard {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn parse_pairs_in_order() {
        let input = "Q: What is 2+2?\nA: 4\nQ: Capital of France?\nA: Paris";
        assert_eq!(
            parse_flashcards(input),
            vec![card("What is 2+2?", "4"), card("Capital of France?", "Paris")]
        );
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse_flashcards("").is_empty());
        assert!(parse_flashcards("  \n\n  ").is_empty());
    }

    #[test]
    fn trailing_question_is_dropped() {
        let cards = parse_flashcards("Q: One\nA: 1\nQ: Two");
        assert_eq!(cards, vec![card("One", "1")]);
    }

    #[test]
    fn long_labels_and_blank_lines() {
        let input = "Question: What is Rust?\n\n   Answer:  A language. \n";
        assert_eq!(parse_flashcards(input), vec![card("What is Rust?", "A language.")]);
    }

    #[test]
    fn answer_before_question_still_pairs() {
        let cards = parse_flashcards("A: Paris\nQ: Capital of France?");
        assert_eq!(cards, vec![card("Capital of France?", "Paris")]);
    }

    #[test]
    fn later_question_replaces_pending_one() {
        let cards = parse_flashcards("Q: First\nQ: Second\nA: Answer");
        assert_eq!(cards, vec![card("Second", "Answer")]);
    }

    #[test]
    fn stray_prose_is_ignored() {
        let input = "Here are your flashcards:\n\nQ: Sky colour?\nA: Blue\nHope this helps!";
        assert_eq!(parse_flashcards(input), vec![card("Sky colour?", "Blue")]);
    }

    #[test]
    fn label_without_colon_clears_the_pending_value() {
        let cards = parse_flashcards("Q: Real question\nquick note\nA: Answer");
        assert!(cards.is_empty());
    }

    #[test]
    fn error_text_yields_nothing() {
        assert!(parse_flashcards("Request failed: 503 Service Unavailable").is_empty());
    }

    #[test]
    fn parse_is_idempotent() {
        let input = "Q: a\nA: b\nQ: c\nA: d";
        assert_eq!(parse_flashcards(input), parse_flashcards(input));
    }
}
