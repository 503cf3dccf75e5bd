//! Catch-all page for unknown paths

use super::components::{muted, push_wrapped, render_button, BUTTON_HEIGHT};
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Actions offered on the not-found page
pub const ACTIONS: [&str; 2] = ["Return Home", "Go Back"];

const CARD_WIDTH: u16 = 60;
const APOLOGY: &str = "Oops! It seems you've ventured into uncharted territory. The page you're looking for doesn't exist or has been moved.";

fn card_area(area: Rect) -> Rect {
    let width = CARD_WIDTH.min(area.width);
    let height = 14u16.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Button rectangles under the message, in [`ACTIONS`] order
pub fn button_areas(area: Rect) -> Vec<Rect> {
    let card = card_area(area);
    let y = card.y + card.height.saturating_sub(BUTTON_HEIGHT);
    let mut x = card.x;
    ACTIONS
        .iter()
        .map(|label| {
            let width = label.len() as u16 + 4;
            let remaining = (card.x + card.width).saturating_sub(x);
            let rect = Rect {
                x,
                y,
                width: width.min(remaining),
                height: BUTTON_HEIGHT.min(card.height),
            };
            x += width + 2;
            rect
        })
        .collect()
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App, path: &str) {
    let card = card_area(area);

    let mut lines = vec![
        Line::from(Span::styled(
            "404",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Page Not Found",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    push_wrapped(&mut lines, APOLOGY, card.width, "", muted());
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Path: {path}"),
        Style::default().fg(Color::Cyan),
    )));
    frame.render_widget(Paragraph::new(lines), card);

    for (idx, (label, button)) in ACTIONS.iter().zip(button_areas(area)).enumerate() {
        render_button(frame, button, label, idx == app.state.selected_option, true);
    }
}
