use serde::{Deserialize, Serialize};

/// A single question/answer study pair. Both sides are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}
