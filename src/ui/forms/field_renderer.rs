//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field needs: borders plus one line, or more for multiline fields
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline() {
        6
    } else {
        3
    }
}

/// Draw a form field. An error, when present, replaces the border color and
/// is shown on the bottom border.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let border_style = match (error, is_active) {
        (Some(_), _) => Style::default().fg(Color::Red),
        (None, true) => Style::default().fg(Color::Cyan),
        (None, false) => Style::default().fg(Color::DarkGray),
    };

    let text_style = if field.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = field
            .display_value()
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if is_active {
            if field.is_empty() {
                lines.insert(0, Line::from(Span::styled(cursor, cursor_style)));
            } else if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(cursor, cursor_style));
            }
        }
        // Keep the cursor line in view
        let inner_height = area.height.saturating_sub(2);
        let overflow = (lines.len() as u16).saturating_sub(inner_height);
        Paragraph::new(lines).scroll((overflow, 0))
    } else {
        let spans = if is_active && field.is_empty() {
            vec![
                Span::styled(cursor, cursor_style),
                Span::styled(field.display_value().to_string(), text_style),
            ]
        } else {
            vec![
                Span::styled(field.display_value().to_string(), text_style),
                Span::styled(cursor, cursor_style),
            ]
        };
        Paragraph::new(Line::from(spans))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(error) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    } else if field.is_multiline() {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {}/{} ", field.char_count(), field.field.max_len()),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        );
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
