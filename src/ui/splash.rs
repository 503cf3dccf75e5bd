//! Splash screen rendering with the owner's name

use crate::content::{HERO_ROLES, OWNER_NAME};
use crate::state::SplashState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn build_intro_text() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            OWNER_NAME,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        HERO_ROLES
            .iter()
            .map(|role| Line::from(Span::styled(*role, Style::default().fg(Color::Gray)))),
    );
    lines
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let lines = build_intro_text();
    let text_height = lines.len() as u16;
    let text_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;

    // Center position minus the scroll offset; may go above the screen
    let base_y = area.y as i32 + (area.height.saturating_sub(text_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let x = area.x + (area.width.saturating_sub(text_width)) / 2;

    let lines_off_top = if y_pos < 0 { (-y_pos) as usize } else { 0 };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines
        .into_iter()
        .skip(lines_off_top)
        .map(Line::centered)
        .collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = if y_pos < 0 { area.y } else { y_pos as u16 };

    let text_area = Rect {
        x,
        y: render_y,
        width: text_width.min(area.width),
        height: visible_height.min(area.height.saturating_sub(render_y - area.y)),
    };
    frame.render_widget(Paragraph::new(visible_lines), text_area);

    // Hint at the bottom while the name is held still
    if splash_state.scroll_offset < 1.0 && area.height >= 2 {
        let hint = "Press any key to skip";
        let hint_area = Rect {
            x: area.x + (area.width.saturating_sub(hint.len() as u16)) / 2,
            y: area.y + area.height - 2,
            width: (hint.len() as u16).min(area.width),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
            hint_area,
        );
    }
}
