//! Background work the UI hands off: generation and material imports.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tokio::task::JoinHandle;

use crate::error::{GenerateError, SourceError};
use crate::generate::{prompts, Generator};
use crate::models::{Artifact, Flashcard, QuizQuestion};
use crate::parser::{parse_flashcards, parse_quiz};
use crate::sources::{self, TranscriptFetcher};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    Generate { artifact: Artifact, material: String },
    ImportFile(PathBuf),
    ImportYoutube(String),
}

#[derive(Debug)]
pub enum Outcome {
    Generated {
        artifact: Artifact,
        result: Result<String, GenerateError>,
    },
    Imported(Result<String, SourceError>),
}

/// Run `job` to completion. Never panics on collaborator failure; errors are
/// carried in the outcome.
pub async fn perform<G: Generator>(job: Job, generator: &G, transcripts: &TranscriptFetcher) -> Outcome {
    match job {
        Job::Generate { artifact, material } => {
            tracing::info!(%artifact, chars = material.len(), "generating");
            let result = generator.generate(&prompts::for_artifact(artifact, &material)).await;
            match &result {
                Ok(text) => tracing::info!(%artifact, chars = text.len(), "generation finished"),
                Err(e) => tracing::warn!(%artifact, error = %e, "generation failed"),
            }
            Outcome::Generated { artifact, result }
        }
        Job::ImportFile(path) => {
            tracing::info!(path = %path.display(), "importing file");
            Outcome::Imported(load_file_off_thread(path).await)
        }
        Job::ImportYoutube(url) => {
            tracing::info!(%url, "importing youtube transcript");
            Outcome::Imported(transcripts.fetch(&url, generator).await)
        }
    }
}

async fn load_file_off_thread(path: PathBuf) -> Result<String, SourceError> {
    let task_path = path.clone();
    let handle = tokio::task::spawn_blocking(move || sources::load_file(task_path));
    join_import(path, handle).await
}

async fn join_import(
    path: PathBuf,
    handle: JoinHandle<Result<String, SourceError>>,
) -> Result<String, SourceError> {
    handle.await.unwrap_or_else(|e| {
        Err(SourceError::Task {
            path,
            message: e.to_string(),
        })
    })
}

/// Parsed result of one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Generated {
    Summary { text: String },
    Flashcards { cards: Vec<Flashcard> },
    Quiz { questions: Vec<QuizQuestion> },
}

impl Generated {
    pub fn from_text(artifact: Artifact, text: &str) -> Self {
        let generated = match artifact {
            Artifact::Summary => Generated::Summary {
                text: text.to_string(),
            },
            Artifact::Flashcards => Generated::Flashcards {
                cards: parse_flashcards(text),
            },
            Artifact::Quiz => Generated::Quiz {
                questions: parse_quiz(text),
            },
        };
        tracing::debug!(%artifact, records = generated.len(), "parsed generated text");
        generated
    }

    /// Number of parsed records; a summary counts as one.
    pub fn len(&self) -> usize {
        match self {
            Generated::Summary { .. } => 1,
            Generated::Flashcards { cards } => cards.len(),
            Generated::Quiz { questions } => questions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Generated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generated::Summary { text } => writeln!(f, "{}", text),
            Generated::Flashcards { cards } => {
                for card in cards {
                    writeln!(f, "Q: {}\nA: {}\n", card.question, card.answer)?;
                }
                Ok(())
            }
            Generated::Quiz { questions } => {
                for question in questions {
                    writeln!(f, "{}. {}", question.index, question.text)?;
                    for option in &question.options {
                        let marker = if question.correct_option.as_ref() == Some(option) {
                            " *"
                        } else {
                            ""
                        };
                        writeln!(f, "   {}{}", option, marker)?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }
}
