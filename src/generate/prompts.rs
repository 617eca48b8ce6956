//! Prompt builders. The flashcard and quiz prompts ask for exactly the line
//! formats the parsers understand.

use crate::models::Artifact;

pub fn summary(material: &str) -> String {
    format!(
        "Summarize the following content clearly and concisely for a student.\n\n\
         Content:\n{material}\n"
    )
}

pub fn flashcards(material: &str) -> String {
    format!(
        "You are a helpful study assistant.\n\n\
         Generate 5-10 flashcards from the content below in EXACTLY this format:\n\n\
         Q: [question]\n\
         A: [short answer]\n\n\
         Do not add titles, numbering, explanations or any other text.\n\n\
         Content:\n{material}\n"
    )
}

pub fn quiz(material: &str) -> String {
    format!(
        "You are a quiz generator.\n\n\
         Create a 5-question multiple choice quiz based on the content below.\n\
         Format STRICTLY as follows:\n\n\
         1. [Question]\n\
         a) Option A\n\
         b) Option B\n\
         c) Option C\n\
         d) Option D\n\n\
         Append a single * to the end of the one correct option of every question.\n\
         Do not include titles, explanations or any other text.\n\n\
         Content:\n{material}\n"
    )
}

pub fn translate_hindi(transcript: &str) -> String {
    format!(
        "Translate the following Hindi transcript to English. \
         Do not add any explanations or headings.\n\n\
         Hindi transcript:\n{transcript}\n"
    )
}

pub fn for_artifact(artifact: Artifact, material: &str) -> String {
    match artifact {
        Artifact::Summary => summary(material),
        Artifact::Flashcards => flashcards(material),
        Artifact::Quiz => quiz(material),
    }
}
