//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub title_color: Color,
    pub border_color: Color,
    /// Message content, may contain `\n`
    pub message: &'a str,
    /// Hint line at the bottom (e.g. "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

/// Render a centered modal dialog over whatever was drawn before
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    const PADDING: u16 = 4; // 2 columns each side

    let max_line_width = config.max_width.saturating_sub(PADDING + 2) as usize;
    let lines = wrap_text(config.message, max_line_width.max(1));

    let hint_width = config
        .hint
        .as_ref()
        .map(|spans| spans.iter().map(|s| s.content.chars().count()).sum::<usize>())
        .unwrap_or(0);
    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .chain([config.title.chars().count(), hint_width])
        .max()
        .unwrap_or(0) as u16;

    // title, blank, message, [blank, hint], borders
    let hint_rows = if config.hint.is_some() { 2 } else { 0 };
    let height = 2 + lines.len() as u16 + hint_rows + 2;
    let width = (content_width + PADDING + 2).min(config.max_width);

    let dialog_area = centered_rect(frame.area(), width, height);
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
    ];
    content.extend(lines.into_iter().map(|l| Line::from(l).centered()));
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint).centered());
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color)),
        )
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(dialog, dialog_area);
}

/// Center a `width` x `height` rect inside `area`, clamped to it
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Word-wrap text to `max_width` columns; paragraphs split on `\n`
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if !current.is_empty() && needed > max_width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}
