use crate::session::{Highlight, Session};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, List, ListItem, Paragraph, Wrap},
};

/// Draw the current session state. Stateless over the session snapshot, so
/// repeated calls (redraws, resizes) are safe.
pub fn render<R: Rng>(frame: &mut Frame, session: &Session<R>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let score = session.score();
    let total = Line::from(format!("{}/{}", score.correct(), score.answered()))
        .bold()
        .right_aligned();

    let question = Line::from(vec![
        Span::styled(
            format!("Question {}", session.question_number()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(": "),
        Span::raw(session.precede().to_string()),
        Span::styled(
            session.question().unwrap_or_default().to_string(),
            Style::default().fg(Color::Blue),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(question)
            .block(Block::bordered().title(total))
            .wrap(Wrap { trim: false }),
        layout[0],
    );

    let answer_items: Vec<ListItem> = session
        .choices()
        .iter()
        .zip(session.highlights())
        .enumerate()
        .map(|(index, (choice, highlight))| {
            let style = match highlight {
                Highlight::Correct => Style::default().fg(Color::Green),
                Highlight::Incorrect => Style::default().fg(Color::Red),
                // Alternate bold/dim so adjacent answers read apart.
                Highlight::None if index % 2 == 0 => {
                    Style::default().add_modifier(Modifier::BOLD)
                }
                Highlight::None => Style::default().add_modifier(Modifier::DIM),
            };
            ListItem::new(format!("{}: {}", index + 1, choice)).style(style)
        })
        .collect();

    frame.render_widget(
        List::new(answer_items).block(Block::bordered().title(Line::from("Answers"))),
        layout[1],
    );

    let status = if session.answer_chosen() {
        "Press any key for the next question. q to quit.".to_string()
    } else {
        format!(
            "Press 1-{} to answer. q to quit.",
            session.choices().len().max(1)
        )
    };
    frame.render_widget(
        Paragraph::new(status).block(Block::bordered().title(Line::from("Status"))),
        layout[2],
    );
}
