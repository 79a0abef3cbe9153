//! Acknowledgment dialog shown at the end of a submit

use super::base::{render_dialog, DialogConfig};
use crate::state::Acknowledgment;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the acknowledgment overlay centered on the screen
pub fn render_acknowledgment(frame: &mut Frame, acknowledgment: Acknowledgment) {
    let color = match acknowledgment {
        Acknowledgment::Submitted => Color::Green,
        Acknowledgment::SomethingWentWrong => Color::Red,
    };

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: acknowledgment.title(),
            title_color: color,
            border_color: color,
            message: acknowledgment.message(),
            hint: Some(hint),
            max_width: 60,
        },
    );
}
