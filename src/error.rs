//! Error types for studybot.
//!
//! Parsing and grading never fail; everything here belongs to the
//! collaborators around them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the text-generation service.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no API key configured (set GEMINI_API_KEY or pass --api-key)")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("generation service returned no text ({0})")]
    EmptyResponse(String),
}

/// Errors while loading study material.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not extract text from {}: {message}", .path.display())]
    Pdf { path: PathBuf, message: String },

    #[error("loading {} was interrupted: {message}", .path.display())]
    Task { path: PathBuf, message: String },

    #[error("not a YouTube video URL: {0}")]
    InvalidYoutubeUrl(String),

    #[error("transcripts are disabled for this video")]
    TranscriptsDisabled,

    #[error("no transcript found in English or Hindi")]
    NoTranscript,

    #[error("transcript request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("translation failed: {0}")]
    Translation(#[from] GenerateError),
}

/// Top-level error for running the application.
#[derive(Debug, Error)]
pub enum StudyError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("could not encode output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = StudyError> = std::result::Result<T, E>;
