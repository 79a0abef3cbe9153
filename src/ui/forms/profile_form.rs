//! Profile form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FieldName, Form};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Heading shown above the fields
const FORM_TITLE: &str = "Developer Profile";

/// Draw the form: heading, five fields and the submit button
pub fn draw_profile_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(format!(" {FORM_TITLE} "))
        .title_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1)]; // spacing under the title
    constraints.extend(FieldName::ALL.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for name in FieldName::ALL {
        let Some(field) = form.get_field(name.index()) else {
            continue;
        };
        draw_field(
            frame,
            chunks[name.index() + 1],
            field,
            form.error(name),
            form.active_field() == name.index(),
        );
    }

    let button_area = centered_width(chunks[FieldName::ALL.len() + 1], 20);
    let label = if app.is_submitting() {
        "Submitting..."
    } else {
        "Submit"
    };
    render_button(
        frame,
        button_area,
        label,
        form.is_submit_button_active(),
        !app.is_submitting(),
    );

    if let Some(rest) = chunks.last() {
        draw_error_summary(frame, *rest, app);
    }
}

/// One line naming the fields that need attention
fn draw_error_summary(frame: &mut Frame, area: Rect, app: &App) {
    let errors = app.state.form.errors();
    let count = errors.len();
    if count == 0 || area.height == 0 {
        return;
    }
    let noun = if count == 1 { "field needs" } else { "fields need" };
    let names: Vec<&str> = errors.iter().map(|(name, _)| name.placeholder()).collect();
    let summary = Paragraph::new(Line::from(Span::styled(
        format!(" {count} {noun} attention: {}", names.join(", ")),
        Style::default().fg(Color::Red),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(summary, area);
}

fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
