use std::path::PathBuf;

use crate::grader::{QuizAttempt, QuizReport};
use crate::jobs::{Generated, Job, Outcome};
use crate::models::{AppState, Artifact, Flashcard, QuizQuestion};

const EMPTY_MATERIAL_NOTICE: &str = "Please enter some content first.";

/// Columns the output screens spend on margin and padding.
const OUTPUT_CHROME_WIDTH: u16 = 4;
const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// What the single-line prompt is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    File,
    Youtube,
}

impl PromptKind {
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::File => "Path to a PDF or text file",
            PromptKind::Youtube => "YouTube video URL",
        }
    }
}

pub struct App {
    pub state: AppState,
    input: String,
    notice: Option<String>,
    prompt_kind: PromptKind,
    prompt_input: String,
    working_label: String,
    summary: String,
    raw_output: String,
    flashcards: Vec<Flashcard>,
    questions: Vec<QuizQuestion>,
    attempt: QuizAttempt,
    current_question_index: usize,
    selected_option: usize,
    report: Option<QuizReport>,
    scroll: usize,
    text_width: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::Editing,
            input: String::new(),
            notice: None,
            prompt_kind: PromptKind::File,
            prompt_input: String::new(),
            working_label: String::new(),
            summary: String::new(),
            raw_output: String::new(),
            flashcards: Vec::new(),
            questions: Vec::new(),
            attempt: QuizAttempt::new(),
            current_question_index: 0,
            selected_option: 0,
            report: None,
            scroll: 0,
            text_width: text_width(DEFAULT_TERMINAL_WIDTH),
        }
    }

    pub fn with_material(material: String) -> Self {
        Self {
            input: material,
            ..Self::new()
        }
    }

    // --- material editor ---

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn push_char(&mut self, c: char) {
        self.notice = None;
        self.input.push(c);
    }

    pub fn paste(&mut self, text: &str) {
        self.notice = None;
        match self.state {
            AppState::Editing => self.input.push_str(&text.replace("\r\n", "\n")),
            AppState::Prompt => self.prompt_input.push_str(text.trim()),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.notice = None;
    }

    /// Start generating `artifact` from the current material.
    ///
    /// Returns `None` and leaves a notice when there is nothing to send.
    pub fn request(&mut self, artifact: Artifact) -> Option<Job> {
        let material = self.input.trim();
        if material.is_empty() {
            self.notice = Some(EMPTY_MATERIAL_NOTICE.to_string());
            return None;
        }
        let material = material.to_string();

        self.clear_output();
        self.working_label = format!("Generating {}...", artifact);
        self.state = AppState::Working;
        Some(Job::Generate { artifact, material })
    }

    // --- import prompt ---

    pub fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt_kind = kind;
        self.prompt_input.clear();
        self.notice = None;
        self.state = AppState::Prompt;
    }

    pub fn prompt_kind(&self) -> PromptKind {
        self.prompt_kind
    }

    pub fn prompt_input(&self) -> &str {
        &self.prompt_input
    }

    pub fn prompt_push(&mut self, c: char) {
        self.notice = None;
        self.prompt_input.push(c);
    }

    pub fn prompt_pop(&mut self) {
        self.prompt_input.pop();
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt_input.clear();
        self.notice = None;
        self.state = AppState::Editing;
    }

    pub fn submit_prompt(&mut self) -> Option<Job> {
        let value = self.prompt_input.trim().to_string();
        if value.is_empty() {
            self.notice = Some(match self.prompt_kind {
                PromptKind::File => "Please enter a file path.".to_string(),
                PromptKind::Youtube => "Please enter a YouTube URL.".to_string(),
            });
            return None;
        }

        let job = match self.prompt_kind {
            PromptKind::File => {
                self.working_label = format!("Importing {}...", value);
                Job::ImportFile(PathBuf::from(value))
            }
            PromptKind::Youtube => {
                self.working_label = "Fetching transcript...".to_string();
                Job::ImportYoutube(value)
            }
        };
        self.prompt_input.clear();
        self.state = AppState::Working;
        Some(job)
    }

    pub fn working_label(&self) -> &str {
        &self.working_label
    }

    // --- results of background work ---

    pub fn complete(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Generated {
                artifact,
                result: Ok(text),
            } => self.show_generated(artifact, text),
            Outcome::Generated {
                artifact,
                result: Err(e),
            } => {
                self.notice = Some(format!("Could not generate {}: {}", artifact, e));
                self.state = AppState::Editing;
            }
            Outcome::Imported(Ok(text)) => {
                self.notice = Some(format!("Imported {} characters.", text.chars().count()));
                self.input = text;
                self.state = AppState::Editing;
            }
            Outcome::Imported(Err(e)) => {
                self.notice = Some(format!("Could not load material: {}", e));
                self.state = AppState::Editing;
            }
        }
    }

    fn show_generated(&mut self, artifact: Artifact, text: String) {
        self.clear_output();
        match Generated::from_text(artifact, &text) {
            Generated::Summary { text } => {
                self.summary = text;
                self.state = AppState::Summary;
            }
            Generated::Flashcards { cards } => {
                self.flashcards = cards;
                self.state = AppState::Flashcards;
            }
            Generated::Quiz { questions } => {
                self.questions = questions;
                self.state = AppState::Quiz;
            }
        }
        self.raw_output = text;
    }

    /// Drop every generated record and return to the editor.
    pub fn clear_output(&mut self) {
        self.summary.clear();
        self.raw_output.clear();
        self.flashcards.clear();
        self.questions.clear();
        self.attempt = QuizAttempt::new();
        self.current_question_index = 0;
        self.selected_option = 0;
        self.report = None;
        self.scroll = 0;
        self.state = AppState::Editing;
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn raw_output(&self) -> &str {
        &self.raw_output
    }

    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    // --- quiz ---

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_question_index)
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn attempt(&self) -> &QuizAttempt {
        &self.attempt
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Record the highlighted option and move on. Choosing on the last
    /// question submits the quiz.
    pub fn choose_option(&mut self) {
        let Some(question) = self.current_question() else {
            return;
        };
        let Some(option) = question.options.get(self.selected_option) else {
            return;
        };
        let index = question.index;
        let option = option.clone();
        self.attempt.select(index, option);

        if self.current_question_index + 1 >= self.questions.len() {
            self.submit_quiz();
        } else {
            self.next_question();
        }
    }

    pub fn next_question(&mut self) {
        if self.current_question_index + 1 < self.questions.len() {
            self.current_question_index += 1;
            self.sync_cursor();
        }
    }

    pub fn previous_question(&mut self) {
        if self.current_question_index > 0 {
            self.current_question_index -= 1;
            self.sync_cursor();
        }
    }

    /// Put the cursor on the option already chosen for this question.
    fn sync_cursor(&mut self) {
        self.selected_option = self
            .current_question()
            .and_then(|q| {
                let chosen = self.attempt.selection(q.index)?;
                q.options.iter().position(|o| o == chosen)
            })
            .unwrap_or(0);
    }

    pub fn submit_quiz(&mut self) {
        if self.questions.is_empty() {
            return;
        }
        self.report = Some(self.attempt.grade(&self.questions));
        self.scroll = 0;
        self.state = AppState::Result;
    }

    pub fn report(&self) -> Option<&QuizReport> {
        self.report.as_ref()
    }

    pub fn restart_quiz(&mut self) {
        self.attempt = QuizAttempt::new();
        self.report = None;
        self.current_question_index = 0;
        self.selected_option = 0;
        self.scroll = 0;
        self.state = AppState::Quiz;
    }

    // --- scrolling ---

    pub fn scroll(&self) -> u16 {
        u16::try_from(self.scroll).unwrap_or(u16::MAX)
    }

    /// Record the terminal width so scrolling follows wrapped rows.
    pub fn set_viewport_width(&mut self, width: u16) {
        self.text_width = text_width(width);
        self.scroll = self.scroll.min(self.scroll_limit());
    }

    fn scroll_limit(&self) -> usize {
        let width = self.text_width;
        let rows = match self.state {
            AppState::Summary => wrapped_rows(&self.summary, width),
            AppState::Flashcards if self.flashcards.is_empty() => {
                2 + wrapped_rows(&self.raw_output, width)
            }
            AppState::Flashcards => self
                .flashcards
                .iter()
                .map(|card| {
                    line_rows(card.question.chars().count() + 3, width)
                        + line_rows(card.answer.chars().count() + 3, width)
                        + 1
                })
                .sum(),
            AppState::Result => self.report.as_ref().map_or(0, |report| {
                report
                    .verdicts
                    .iter()
                    .map(|verdict| {
                        // Header preview is capped; the feedback line carries the answer.
                        line_rows(64, width)
                            + line_rows(verdict.displayed_correct_answer.chars().count() + 36, width)
                    })
                    .sum()
            }),
            _ => 0,
        };
        rows.saturating_sub(1).min(usize::from(u16::MAX))
    }

    pub fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(self.scroll_limit());
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

fn text_width(terminal_width: u16) -> usize {
    usize::from(terminal_width.saturating_sub(OUTPUT_CHROME_WIDTH).max(1))
}

fn line_rows(chars: usize, width: usize) -> usize {
    chars.div_ceil(width).max(1)
}

/// Rows `text` takes once wrapped at `width` columns.
fn wrapped_rows(text: &str, width: usize) -> usize {
    text.lines()
        .map(|line| line_rows(line.chars().count(), width))
        .sum()
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
