//! # studybot
//!
//! Turn study material into summaries, flashcards and multiple-choice
//! quizzes with a language model, then take the quiz in the terminal.
//!
//! The parsing and grading core is usable on its own:
//!
//! ```rust
//! use studybot::{grade, parse_quiz, Selections};
//!
//! let questions = parse_quiz("1. 2+2=?\na) 3\nb) 4*\nc) 5\nd) 6");
//! let mut selections = Selections::new();
//! selections.insert(1, "b) 4".to_string());
//!
//! let report = grade(&questions, &selections);
//! assert_eq!((report.score, report.total), (1, 1));
//! ```
//!
//! The interactive application needs a [`Generator`]:
//!
//! ```rust,no_run
//! use studybot::{GeminiClient, GeminiConfig, StudyBot, StudyError};
//!
//! # async fn example() -> Result<(), StudyError> {
//! let client = GeminiClient::new(GeminiConfig::default());
//! StudyBot::new(client).run().await?;
//! # Ok(())
//! # }
//! ```

mod app;
pub mod error;
pub mod generate;
mod grader;
mod jobs;
mod models;
pub mod parser;
pub mod sources;
pub mod terminal;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

pub use app::{App, PromptKind};
pub use error::{GenerateError, Result, SourceError, StudyError};
pub use generate::{GeminiClient, GeminiConfig, Generator};
pub use grader::{grade, QuizAttempt, QuizReport, Selections, Verdict, UNMARKED_PLACEHOLDER};
pub use jobs::{perform, Generated, Job, Outcome};
pub use models::{AppState, Artifact, Flashcard, QuizQuestion};
pub use parser::{parse_flashcards, parse_quiz};
pub use sources::TranscriptFetcher;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The interactive study session.
pub struct StudyBot<G: Generator> {
    app: App,
    generator: Arc<G>,
    transcripts: Arc<TranscriptFetcher>,
}

impl<G: Generator> StudyBot<G> {
    pub fn new(generator: G) -> Self {
        Self {
            app: App::new(),
            generator: Arc::new(generator),
            transcripts: Arc::new(TranscriptFetcher::new()),
        }
    }

    /// Start with `material` already in the editor.
    pub fn with_material(mut self, material: String) -> Self {
        self.app = App::with_material(material);
        self
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Take over the terminal until the user quits.
    ///
    /// Generation and imports run on spawned tasks; the UI keeps drawing and
    /// picks their outcomes up between frames.
    pub async fn run(mut self) -> Result<()> {
        let mut term = terminal::init()?;
        let result = self.event_loop(&mut term).await;
        terminal::restore()?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut terminal::StudyTerminal) -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();

        loop {
            while let Ok(outcome) = rx.try_recv() {
                self.app.complete(outcome);
            }

            self.app.set_viewport_width(terminal.size()?.width);
            terminal.draw(|frame| ui::render(frame, &self.app))?;

            if !event::poll(POLL_INTERVAL)? {
                tokio::task::yield_now().await;
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match handle_input(&mut self.app, key) {
                        Control::Quit => break,
                        Control::Run(job) => self.spawn(job, tx.clone()),
                        Control::Continue => {}
                    }
                }
                Event::Paste(text) => self.app.paste(&text),
                _ => {}
            }
        }

        tracing::info!("session ended");
        Ok(())
    }

    fn spawn(&self, job: Job, tx: mpsc::UnboundedSender<Outcome>) {
        let generator = Arc::clone(&self.generator);
        let transcripts = Arc::clone(&self.transcripts);
        tokio::spawn(async move {
            let outcome = perform(job, generator.as_ref(), &transcripts).await;
            // The receiver is gone once the user has quit.
            let _ = tx.send(outcome);
        });
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
    Run(Job),
}

impl From<Option<Job>> for Control {
    fn from(job: Option<Job>) -> Self {
        job.map_or(Control::Continue, Control::Run)
    }
}

/// Apply one key press to `app`.
pub fn handle_input(app: &mut App, key: KeyEvent) -> Control {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Control::Quit;
    }

    match app.state {
        AppState::Editing => handle_editing_input(app, key),
        AppState::Prompt => handle_prompt_input(app, key),
        AppState::Working => Control::Continue,
        AppState::Summary | AppState::Flashcards => handle_output_input(app, key.code),
        AppState::Quiz => handle_quiz_input(app, key.code),
        AppState::Result => handle_result_input(app, key.code),
    }
}

fn handle_editing_input(app: &mut App, key: KeyEvent) -> Control {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') => app.request(Artifact::Summary).into(),
            KeyCode::Char('f') => app.request(Artifact::Flashcards).into(),
            KeyCode::Char('t') => app.request(Artifact::Quiz).into(),
            KeyCode::Char('o') => {
                app.open_prompt(PromptKind::File);
                Control::Continue
            }
            KeyCode::Char('y') => {
                app.open_prompt(PromptKind::Youtube);
                Control::Continue
            }
            KeyCode::Char('l') => {
                app.clear_input();
                Control::Continue
            }
            _ => Control::Continue,
        };
    }

    match key.code {
        KeyCode::Esc => return Control::Quit,
        KeyCode::Char(c) => app.push_char(c),
        KeyCode::Enter => app.push_char('\n'),
        KeyCode::Tab => app.push_char('\t'),
        KeyCode::Backspace => app.backspace(),
        _ => {}
    }
    Control::Continue
}

fn handle_prompt_input(app: &mut App, key: KeyEvent) -> Control {
    match key.code {
        KeyCode::Enter => app.submit_prompt().into(),
        KeyCode::Esc => {
            app.cancel_prompt();
            Control::Continue
        }
        KeyCode::Backspace => {
            app.prompt_pop();
            Control::Continue
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.prompt_push(c);
            Control::Continue
        }
        _ => Control::Continue,
    }
}

fn handle_output_input(app: &mut App, key: KeyCode) -> Control {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
        KeyCode::Esc | KeyCode::Char('b') => app.clear_output(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Control::Quit,
        _ => {}
    }
    Control::Continue
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> Control {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.choose_option(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_question(),
        KeyCode::Right | KeyCode::Char('l') => app.next_question(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.submit_quiz(),
        KeyCode::Esc => app.clear_output(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Control::Quit,
        _ => {}
    }
    Control::Continue
}

fn handle_result_input(app: &mut App, key: KeyCode) -> Control {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart_quiz(),
        KeyCode::Esc | KeyCode::Char('b') => app.clear_output(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Control::Quit,
        _ => {}
    }
    Control::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_input(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_edits_material() {
        let mut app = App::new();
        type_text(&mut app, "cels");
        handle_input(&mut app, key(KeyCode::Backspace));
        handle_input(&mut app, key(KeyCode::Backspace));
        type_text(&mut app, "lls");
        handle_input(&mut app, key(KeyCode::Enter));
        assert_eq!(app.input(), "cells\n");
    }

    #[test]
    fn ctrl_shortcuts_start_generation() {
        let mut app = App::with_material("photosynthesis".to_string());
        assert_eq!(
            handle_input(&mut app, ctrl('t')),
            Control::Run(Job::Generate {
                artifact: Artifact::Quiz,
                material: "photosynthesis".to_string(),
            })
        );
        assert_eq!(app.state, AppState::Working);
        assert_eq!(handle_input(&mut app, key(KeyCode::Char('x'))), Control::Continue);
    }

    #[test]
    fn empty_material_does_not_spawn() {
        let mut app = App::new();
        assert_eq!(handle_input(&mut app, ctrl('s')), Control::Continue);
        assert_eq!(app.state, AppState::Editing);
    }

    #[test]
    fn q_is_text_while_editing_but_quits_elsewhere() {
        let mut app = App::new();
        assert_eq!(handle_input(&mut app, key(KeyCode::Char('q'))), Control::Continue);
        assert_eq!(app.input(), "q");

        app.request(Artifact::Summary);
        app.complete(Outcome::Generated {
            artifact: Artifact::Summary,
            result: Ok("Short summary.".to_string()),
        });
        assert_eq!(app.state, AppState::Summary);
        assert_eq!(handle_input(&mut app, key(KeyCode::Char('q'))), Control::Quit);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = App::with_material("x".to_string());
        app.request(Artifact::Summary);
        assert_eq!(handle_input(&mut app, ctrl('c')), Control::Quit);
    }

    #[test]
    fn import_prompt_flow() {
        let mut app = App::new();
        handle_input(&mut app, ctrl('o'));
        assert_eq!(app.state, AppState::Prompt);
        type_text(&mut app, "notes.pdf");
        assert_eq!(
            handle_input(&mut app, key(KeyCode::Enter)),
            Control::Run(Job::ImportFile("notes.pdf".into()))
        );

        let mut app = App::new();
        handle_input(&mut app, ctrl('y'));
        handle_input(&mut app, key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Editing);
    }

    #[test]
    fn quiz_keys_drive_grading() {
        let mut app = App::with_material("x".to_string());
        app.request(Artifact::Quiz);
        app.complete(Outcome::Generated {
            artifact: Artifact::Quiz,
            result: Ok("1. 2+2=?\na) 3\nb) 4*\n2. 1+1=?\na) 2*\nb) 3".to_string()),
        });

        handle_input(&mut app, key(KeyCode::Char('j')));
        handle_input(&mut app, key(KeyCode::Enter));
        handle_input(&mut app, key(KeyCode::Char('j')));
        handle_input(&mut app, key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Result);
        let report = app.report().unwrap();
        assert_eq!((report.score, report.total), (1, 2));

        handle_input(&mut app, key(KeyCode::Char('r')));
        assert_eq!(app.state, AppState::Quiz);
        handle_input(&mut app, key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Editing);
        assert!(app.questions().is_empty());
    }
}
