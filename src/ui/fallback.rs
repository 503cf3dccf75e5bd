//! Fallback view shown after an uncaught error

use super::components::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Clear,
    Frame,
};

const APOLOGY: &str = "We apologize for the inconvenience. An unexpected error has occurred.";

/// Replace the whole screen with the error notice
pub fn draw(frame: &mut Frame, error: &str) {
    frame.render_widget(Clear, frame.area());

    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("r", key),
        Span::raw(" to reload or "),
        Span::styled("q", key),
        Span::raw(" to quit"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Something went wrong",
            title_color: Color::Red,
            border_color: Color::Red,
            message: APOLOGY,
            detail: Some(error),
            hint: Some(hint),
            max_width: 64,
        },
    );
}
