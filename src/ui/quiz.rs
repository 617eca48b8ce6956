use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::QuizQuestion;

use super::render_controls;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let Some(question) = app.current_question() else {
        render_unreadable(frame, chunks[1].union(chunks[2]), app.raw_output());
        render_controls(frame, chunks[3], "esc back  ·  q quit");
        return;
    };

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], question);
    render_options(
        frame,
        chunks[2],
        question,
        app.selected_option(),
        app.attempt().selection(question.index),
    );
    render_controls(
        frame,
        chunks[3],
        "j/k navigate  ·  enter select  ·  h/l prev/next  ·  s submit  ·  esc back  ·  q quit",
    );
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "{} answered  ·  {}/{}",
        app.attempt().answered(),
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, question: &QuizQuestion) {
    let widget = Paragraph::new(format!("Question {}: {}", question.index, question.text))
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &QuizQuestion,
    selected: usize,
    chosen: Option<&str>,
) {
    if question.options.is_empty() {
        let widget = Paragraph::new("This question has no options.").fg(Color::DarkGray);
        frame.render_widget(widget, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_selected = index == selected;
        let is_chosen = chosen == Some(option.as_str());
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else if is_chosen {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let check = if is_chosen { "● " } else { "○ " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(check, style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_unreadable(frame: &mut Frame, area: Rect, raw: &str) {
    let mut lines = vec![
        Line::from(Span::styled(
            "No questions could be read from the generated quiz:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
    ];
    lines.extend(raw.lines().map(|line| Line::from(line.fg(Color::Gray))));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
