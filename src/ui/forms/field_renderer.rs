//! Field rendering utilities for forms

use crate::state::{FieldName, FormField, InputKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus the error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw one input with its error message beneath it
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    error: Option<&str>,
    is_active: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Error
        ])
        .split(area);

    frame.render_widget(input_widget(field, error.is_some(), is_active), chunks[0]);

    if let Some(message) = error {
        let error_line = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error_line, chunks[1]);
    }
}

fn input_widget(field: &FormField, has_error: bool, is_active: bool) -> Paragraph<'static> {
    let border_style = match (has_error, is_active) {
        (true, true) => Style::default().fg(Color::LightRed),
        (true, false) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let cursor = if is_active { "▌" } else { "" };

    let value = if field.value.is_empty() {
        Span::styled(
            field.placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(field.display_value(), Style::default().fg(Color::White))
    };

    let content = if field.value.is_empty() {
        // Cursor sits before the placeholder
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            value,
        ])
    } else {
        Line::from(vec![
            value,
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", field.placeholder))
        .title_bottom(Line::from(kind_hint(field)).right_aligned())
        .borders(Borders::ALL)
        .border_style(border_style);

    Paragraph::new(content).block(block)
}

fn kind_hint(field: &FormField) -> &'static str {
    match (field.name, field.kind) {
        (FieldName::GithubUrl, _) => " url ",
        (_, InputKind::Number) => " number ",
        (_, InputKind::Email) => " email ",
        (_, InputKind::Password) => " hidden ",
        _ => "",
    }
}
