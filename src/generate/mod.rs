//! Text generation collaborators.

mod gemini;
pub mod prompts;

use std::future::Future;

use crate::error::GenerateError;

pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_API_BASE, DEFAULT_MODEL};

/// Something that turns a prompt into generated text.
///
/// Implementations must be shareable across tasks so the UI can hand a
/// request off and keep drawing.
pub trait Generator: Send + Sync + 'static {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, GenerateError>> + Send;
}
