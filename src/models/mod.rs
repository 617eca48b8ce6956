mod flashcard;
mod question;

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

pub use flashcard::Flashcard;
pub use question::QuizQuestion;

/// Screen the application is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Editing,
    Prompt,
    Working,
    Summary,
    Flashcards,
    Quiz,
    Result,
}

/// What the user asked the generator for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Artifact {
    Summary,
    Flashcards,
    Quiz,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Summary => write!(f, "summary"),
            Artifact::Flashcards => write!(f, "flashcards"),
            Artifact::Quiz => write!(f, "quiz"),
        }
    }
}
