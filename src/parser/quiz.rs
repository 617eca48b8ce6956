use crate::models::QuizQuestion;

use super::line::{cleaned_lines, Dialect, Line};

/// Character the generator appends to the correct option.
pub const MARKER: char = '*';

/// Parse numbered multiple-choice text into questions, in input order.
///
/// A question is pending only once its text is non-empty; it is finalized
/// when the next question with text starts or the input ends. Options are
/// buffered until then, so options seen before any question text belong to
/// the first real question.
pub fn parse_quiz(raw: &str) -> Vec<QuizQuestion> {
    let mut questions = Vec::new();
    let mut pending = "";
    let mut options: Vec<&str> = Vec::new();

    for line in cleaned_lines(raw) {
        match Dialect::Quiz.classify(line) {
            Line::QuestionStart(text) => {
                if !pending.is_empty() {
                    let finished = std::mem::take(&mut options);
                    questions.push(finalize(questions.len() + 1, pending, finished));
                }
                pending = text;
            }
            Line::Option(option) => options.push(option),
            _ => {}
        }
    }

    if !pending.is_empty() {
        questions.push(finalize(questions.len() + 1, pending, options));
    }

    questions
}

fn finalize(index: usize, text: &str, raw_options: Vec<&str>) -> QuizQuestion {
    let mut correct_option = None;
    let options: Vec<String> = raw_options
        .into_iter()
        .map(|option| {
            if !option.contains(MARKER) {
                return option.to_string();
            }
            let stripped = option.replace(MARKER, "").trim().to_string();
            if correct_option.is_none() {
                correct_option = Some(stripped.clone());
            }
            stripped
        })
        .collect();

    let correct_option = correct_option.or_else(|| options.first().cloned());

    QuizQuestion {
        index,
        text: text.to_string(),
        options,
        correct_option,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_marked_question() {
        let questions = parse_quiz("1. 2+2=?\na) 3\nb) 4*\nc) 5\nd) 6");
        assert_eq!(
            questions,
            vec![QuizQuestion {
                index: 1,
                text: "2+2=?".to_string(),
                options: vec!["a) 3".into(), "b) 4".into(), "c) 5".into(), "d) 6".into()],
                correct_option: Some("b) 4".to_string()),
            }]
        );
    }

    #[test]
    fn unmarked_defaults_to_first_option() {
        let questions = parse_quiz("1. Pick one\na) red\nb) blue");
        assert_eq!(questions[0].correct_option.as_deref(), Some("a) red"));
        assert_eq!(questions[0].correct_option.as_ref(), questions[0].options.first());
    }

    #[test]
    fn question_without_options_has_no_answer() {
        let questions = parse_quiz("1. Empty?\n2. Also empty?");
        assert_eq!(questions.len(), 2);
        assert!(questions[0].options.is_empty());
        assert_eq!(questions[0].correct_option, None);
        assert_eq!(questions[1].index, 2);
    }

    #[test]
    fn question_without_text_is_never_emitted() {
        assert!(parse_quiz("1.\na) x*").is_empty());
        assert!(parse_quiz("1.   \n2.").is_empty());
    }

    #[test]
    fn blank_question_options_carry_into_next_question() {
        let questions = parse_quiz("1.\na) x\nb) y*\n2. Real?\nc) z");
        assert_eq!(
            questions,
            vec![QuizQuestion {
                index: 1,
                text: "Real?".to_string(),
                options: vec!["a) x".into(), "b) y".into(), "c) z".into()],
                correct_option: Some("b) y".to_string()),
            }]
        );
    }

    #[test]
    fn first_marker_wins_and_all_markers_are_stripped() {
        let questions = parse_quiz("1. Q\na) x*\nb) y *\nc) z");
        let q = &questions[0];
        assert_eq!(q.correct_option.as_deref(), Some("a) x"));
        assert_eq!(q.options, vec!["a) x", "b) y", "c) z"]);
        assert!(q.options.iter().all(|o| !o.contains(MARKER)));
    }

    #[test]
    fn marker_anywhere_in_option() {
        let q = &parse_quiz("1. Q\na) one\n*b) two")[0];
        assert_eq!(q.correct_option.as_deref(), Some("a) one"));

        let q = &parse_quiz("1. Q\na) one\nb) **two**")[0];
        assert_eq!(q.correct_option.as_deref(), Some("b) two"));
        assert_eq!(q.options[1], "b) two");
    }

    #[test]
    fn multiple_questions_get_sequential_indexes() {
        let input = "\
Here is your quiz:

1. First?
a) one*
b) two

2. Second?
A) alpha
B) beta*
C) gamma
D) delta
";
        let questions = parse_quiz(input);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].index, 1);
        assert_eq!(questions[0].text, "First?");
        assert_eq!(questions[1].index, 2);
        assert_eq!(questions[1].options.len(), 4);
        assert_eq!(questions[1].correct_option.as_deref(), Some("B) beta"));
    }

    #[test]
    fn options_before_any_question_join_the_first_question() {
        let questions = parse_quiz("a) stray\n1. Real\nb) kept");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options, vec!["a) stray", "b) kept"]);
    }

    #[test]
    fn options_out_of_letter_order_are_kept_in_encounter_order() {
        let q = &parse_quiz("1. Q\nd) last\na) first\na) first")[0];
        assert_eq!(q.options, vec!["d) last", "a) first", "a) first"]);
    }

    #[test]
    fn parse_empty_and_garbage() {
        assert!(parse_quiz("").is_empty());
        assert!(parse_quiz("Error: quota exceeded").is_empty());
    }

    #[test]
    fn parse_is_idempotent() {
        let input = "1. A?\na) x\nb) y*\n2. B?\nc) z";
        assert_eq!(parse_quiz(input), parse_quiz(input));
    }
}
