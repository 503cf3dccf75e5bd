//! Toast overlay

use crate::state::{ToastKind, Toasts};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 44;

/// Draw toasts stacked in the top-right corner of `area`
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &Toasts) {
    let width = TOAST_WIDTH.min(area.width);
    let mut y = area.y;

    for toast in toasts.iter() {
        let color = match toast.kind {
            ToastKind::Success => Color::Green,
            ToastKind::Destructive => Color::Red,
        };

        let mut lines = vec![Line::from(Span::styled(
            toast.title.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))];
        if let Some(description) = &toast.description {
            lines.extend(
                super::wrap_text(description, width.saturating_sub(2) as usize)
                    .into_iter()
                    .map(Line::from),
            );
        }

        let height = lines.len() as u16 + 2;
        if y + height > area.y + area.height {
            break;
        }
        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(width),
            y,
            width,
            height,
        };

        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
            toast_area,
        );
        y += height;
    }
}
