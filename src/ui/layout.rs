//! Layout components (form area, status bar)

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::SubmitPhase;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form grows on large terminals
const MAX_FORM_WIDTH: u16 = 72;

/// Split the screen into the form area and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = chunks[0];
    let width = content.width.min(MAX_FORM_WIDTH);
    let form_area = Rect {
        x: content.x + (content.width - width) / 2,
        width,
        ..content
    };

    (form_area, chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Cyan);
    let dim = Style::default().fg(Color::Gray);

    let mut spans = vec![
        match app.state.form.phase() {
            SubmitPhase::Validating | SubmitPhase::Submitting => {
                Span::styled(" ◐ ", Style::default().fg(Color::Yellow))
            }
            SubmitPhase::ValidationFailed | SubmitPhase::Failed => {
                Span::styled(" ● ", Style::default().fg(Color::Red))
            }
            SubmitPhase::Idle | SubmitPhase::Succeeded => {
                Span::styled(" ● ", Style::default().fg(Color::Green))
            }
        },
        Span::styled("Tab", key),
        Span::styled(":next ", dim),
        Span::styled(SUBMIT_SHORTCUT, key),
        Span::styled(":submit ", dim),
        Span::styled(RESET_SHORTCUT, key),
        Span::styled(":reset ", dim),
        Span::styled("Esc", key),
        Span::styled(":quit", dim),
    ];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Endpoint on the right
    let endpoint = Paragraph::new(Span::styled(
        format!("{} ", app.state.endpoint),
        Style::default().fg(Color::Blue),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(endpoint, area);
}
