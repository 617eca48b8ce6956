mod editor;
mod output;
mod quiz;
mod result;
mod working;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Editing => editor::render(frame, area, app),
        AppState::Prompt => {
            editor::render(frame, area, app);
            editor::render_prompt(frame, area, app);
        }
        AppState::Working => working::render(frame, area, app.working_label()),
        AppState::Summary => output::render_summary(frame, area, app),
        AppState::Flashcards => output::render_flashcards(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
    }
}

/// Dim one-line key hints along the bottom of a screen.
fn render_controls(frame: &mut Frame, area: Rect, hints: &str) {
    let widget = Paragraph::new(hints)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
