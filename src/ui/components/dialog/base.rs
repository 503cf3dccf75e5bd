//! Base dialog component

use super::super::text::wrap_text;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Secondary text shown under the message in `border_color`
    pub detail: Option<&'a str>,
    /// Hint text shown at the bottom (e.g., "Press r to reload")
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            message: "",
            detail: None,
            hint: None,
            max_width: 60,
        }
    }
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let padding = 4u16; // 2 chars padding on each side
    let max_width = config.max_width.min(area.width).max(padding + 3);
    let max_line_width = (max_width - padding - 2) as usize;

    let wrapped_lines = wrap_text(config.message, max_line_width);
    let detail_lines = config
        .detail
        .map(|detail| wrap_text(detail, max_line_width))
        .unwrap_or_default();

    let content_width = wrapped_lines
        .iter()
        .chain(detail_lines.iter())
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let dialog_width = (content_width + padding + 2).min(max_width); // +2 for borders

    // Height: title + blank + message + (blank + detail) + (blank + hint) + borders
    let detail_height = if detail_lines.is_empty() {
        0
    } else {
        detail_lines.len() as u16 + 1
    };
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let dialog_height =
        (2 + wrapped_lines.len() as u16 + detail_height + hint_lines + 2).max(5);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width.min(area.width),
        height: dialog_height.min(area.height),
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for line in wrapped_lines {
        content.push(Line::from(line));
    }

    if !detail_lines.is_empty() {
        content.push(Line::from(""));
        for line in detail_lines {
            content.push(Line::from(Span::styled(
                line,
                Style::default().fg(config.border_color),
            )));
        }
    }

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}
