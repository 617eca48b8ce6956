use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::App;

use super::render_controls;

const CURSOR: &str = "▏";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_title(frame, chunks[0]);
    render_notice(frame, chunks[1], app.notice());
    render_material(frame, chunks[2], app.input());
    render_controls(
        frame,
        chunks[3],
        "^S summary  ·  ^F flashcards  ·  ^T quiz  ·  ^O import file  ·  ^Y youtube  ·  ^L clear  ·  esc quit",
    );
}

fn render_title(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(Line::from(vec![
        Span::styled("STUDYBOT", Style::default().fg(Color::Cyan).bold()),
        Span::styled("  enter your study material", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(widget, area);
}

fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    if let Some(notice) = notice {
        frame.render_widget(Paragraph::new(notice).fg(Color::Yellow), area);
    }
}

fn render_material(frame: &mut Frame, area: Rect, input: &str) {
    let visible_rows = area.height.saturating_sub(2) as usize;
    let line_count = input.split('\n').count();
    let scroll = u16::try_from(line_count.saturating_sub(visible_rows)).unwrap_or(u16::MAX);

    let mut text = Text::from(input.to_string());
    match text.lines.last_mut() {
        Some(line) if !input.ends_with('\n') => line.push_span(Span::raw(CURSOR)),
        _ => text.lines.push(Line::from(CURSOR)),
    }

    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

pub fn render_prompt(frame: &mut Frame, area: Rect, app: &App) {
    let popup = centered(area, 70, 7);
    frame.render_widget(Clear, popup);

    let mut content = vec![
        Line::from(Span::styled(
            app.prompt_kind().label(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(app.prompt_input(), Style::default().fg(Color::White)),
            Span::raw(CURSOR),
        ]),
    ];
    if let Some(notice) = app.notice() {
        content.push(Line::from(Span::styled(notice, Style::default().fg(Color::Yellow))));
    }

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Cyan)
            .title(" enter to load  ·  esc cancel ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, popup);
}

fn centered(area: Rect, width_percent: u16, height: u16) -> Rect {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, popup, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Percentage(width_percent),
        Constraint::Fill(1),
    ])
    .areas(row);
    popup
}
