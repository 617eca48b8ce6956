use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::grader::QuizReport;
use crate::models::QuizQuestion;

use super::render_controls;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(report) = app.report() else {
        return;
    };
    let percentage = report.percentage();
    let grade_color = get_grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], report, percentage, grade_color);
    render_question_breakdown(frame, chunks[2], app.questions(), report, app.scroll());
    render_controls(frame, chunks[3], "j/k scroll  ·  r retake  ·  esc back  ·  q quit");
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    report: &QuizReport,
    percentage: f64,
    grade_color: Color,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "You got {} out of {} correct  ({:.0}%)",
                report.score, report.total, percentage
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(
    frame: &mut Frame,
    area: Rect,
    questions: &[QuizQuestion],
    report: &QuizReport,
    scroll: u16,
) {
    let lines: Vec<Line> = report
        .verdicts
        .iter()
        .zip(questions.iter())
        .flat_map(|(verdict, question)| {
            let preview = truncate_question(&question.text);
            let header = Line::from(vec![
                Span::styled(
                    format!("{:2}. ", verdict.index),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(preview, Style::default().fg(Color::Gray)),
            ]);

            let feedback = if verdict.is_correct {
                Line::from(Span::styled("    ✅ Correct", Style::default().fg(Color::Green)))
            } else {
                Line::from(Span::styled(
                    format!(
                        "    ❌ Incorrect. Correct Answer: {}",
                        verdict.displayed_correct_answer
                    ),
                    Style::default().fg(Color::Red),
                ))
            };

            [header, feedback]
        })
        .collect();

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_colors_follow_percentage() {
        assert_eq!(get_grade_color(100.0), Color::Green);
        assert_eq!(get_grade_color(75.0), Color::Cyan);
        assert_eq!(get_grade_color(50.0), Color::Yellow);
        assert_eq!(get_grade_color(0.0), Color::Red);
    }

    #[test]
    fn long_questions_are_truncated() {
        let long = "x".repeat(80);
        assert_eq!(truncate_question(&long).chars().count(), QUESTION_PREVIEW_LENGTH + 3);
        assert_eq!(truncate_question("short"), "short");
    }
}
