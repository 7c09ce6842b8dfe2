use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Feedback, Question};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], &question.text);
    render_options(frame, chunks[2], question, app.selected_option());
    render_feedback(frame, chunks[3], question.feedback());
    render_controls(frame, chunks[4]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let mut progress = format!(
        "{}/{}",
        app.current_question_number(),
        app.total_questions()
    );
    if let Some(remaining) = app.remaining_time() {
        progress = format!("{}  ·  {}", super::format_duration(remaining.as_secs()), progress);
    }
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, question: &Question, cursor: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_cursor = index == cursor;
        let is_chosen = question.selected_answer == Some(option.letter);
        let style = if is_cursor {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_cursor { ">" } else { " " };

        let mut spans = vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}) ", option.letter), style),
            Span::styled(option.text.as_str(), style),
        ];
        if is_chosen {
            spans.push(match question.feedback() {
                Feedback::Correct => Span::styled("  ✓", Style::default().fg(Color::Green)),
                Feedback::Incorrect { .. } => Span::styled("  ✗", Style::default().fg(Color::Red)),
                _ => Span::styled("  •", Style::default().fg(Color::Yellow)),
            });
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: Feedback) {
    let line = match feedback {
        Feedback::Incorrect { correct } => Line::from(Span::styled(
            format!("Correct answer: {}", correct),
            Style::default().fg(Color::Red),
        )),
        Feedback::Correct => {
            Line::from(Span::styled("Correct!", Style::default().fg(Color::Green)))
        }
        Feedback::Unanswered | Feedback::Ungraded => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let help = "j/k navigate  ·  enter select  ·  n/p next/prev  ·  f finish  ·  q quit";
    let widget = Paragraph::new(help)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
