use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;

use super::render_controls;

const SCROLL_HINTS: &str = "j/k scroll  ·  esc back  ·  q quit";

fn layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area)
}

fn render_heading(frame: &mut Frame, area: Rect, heading: &str, detail: String) {
    let widget = Paragraph::new(Line::from(vec![
        Span::styled(heading, Style::default().fg(Color::Cyan).bold()),
        Span::styled(format!("  {}", detail), Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

pub fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = layout(area);

    render_heading(frame, chunks[0], "SUMMARY", String::new());

    let widget = Paragraph::new(app.summary())
        .wrap(Wrap { trim: false })
        .fg(Color::White)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((app.scroll(), 0));
    frame.render_widget(widget, chunks[1]);

    render_controls(frame, chunks[2], SCROLL_HINTS);
}

pub fn render_flashcards(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = layout(area);
    let cards = app.flashcards();

    render_heading(frame, chunks[0], "FLASHCARDS", format!("{} cards", cards.len()));

    let widget = if cards.is_empty() {
        let mut lines = vec![
            Line::from(Span::styled(
                "No flashcards could be read from the generated text:",
                Style::default().fg(Color::Yellow),
            )),
            Line::from(""),
        ];
        lines.extend(
            app.raw_output()
                .lines()
                .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Gray)))),
        );
        Paragraph::new(lines)
    } else {
        let lines: Vec<Line> = cards
            .iter()
            .flat_map(|card| {
                [
                    Line::from(vec![
                        Span::styled("Q: ", Style::default().fg(Color::Cyan).bold()),
                        Span::styled(card.question.as_str(), Style::default().fg(Color::White).bold()),
                    ]),
                    Line::from(vec![
                        Span::styled("A: ", Style::default().fg(Color::Green)),
                        Span::styled(card.answer.as_str(), Style::default().fg(Color::Gray)),
                    ]),
                    Line::from(""),
                ]
            })
            .collect();
        Paragraph::new(lines)
    };

    let widget = widget
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((app.scroll(), 0));
    frame.render_widget(widget, chunks[1]);

    render_controls(frame, chunks[2], SCROLL_HINTS);
}
