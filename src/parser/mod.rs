//! Parsers for loosely formatted generator output.
//!
//! Neither parser can fail: malformed or empty text simply yields fewer
//! records.

mod flashcards;
mod line;
mod quiz;

pub use flashcards::parse_flashcards;
pub use line::{cleaned_lines, Dialect, Line};
pub use quiz::{parse_quiz, MARKER};
