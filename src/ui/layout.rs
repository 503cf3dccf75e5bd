//! Layout components (navigation bar, footer, status bar, path prompt)

use super::components::{nav_button_width, render_nav_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::content::{FOOTER_TAGLINE, OWNER_NAME};
use crate::platform::{COPY_HINT, SUBMIT_SHORTCUT};
use crate::state::{Focus, Route, Section, NAV_ITEMS};
use chrono::Datelike;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Screen regions for a page
pub struct PageLayout {
    pub nav: Rect,
    pub content: Rect,
    pub footer: Rect,
    pub status: Rect,
}

/// Split the screen into navigation bar, content, footer and status bar
pub fn create_layout(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Navigation bar
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Footer
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    PageLayout {
        nav: chunks[0],
        content: chunks[1],
        footer: chunks[2],
        status: chunks[3],
    }
}

/// Navigation button rectangles, left to right, for drawing and hit-testing
pub fn nav_button_areas(nav: Rect) -> Vec<Rect> {
    let name_width = OWNER_NAME.chars().count() as u16 + 2;
    let mut x = nav.x + name_width;
    let mut areas = Vec::with_capacity(NAV_ITEMS.len());

    for (idx, item) in NAV_ITEMS.iter().enumerate() {
        let width = nav_button_width(&(idx + 1).to_string(), item.name);
        if x + width > nav.x + nav.width {
            break;
        }
        areas.push(Rect {
            x,
            y: nav.y,
            width,
            height: nav.height,
        });
        x += width;
    }
    areas
}

/// Draw the navigation bar: owner name on the left, menu buttons after it
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let name_area = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: (OWNER_NAME.chars().count() as u16 + 2).min(area.width),
        height: area.height.min(1),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {OWNER_NAME}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        name_area,
    );

    let section = app.state.current_section();
    for (idx, button_area) in nav_button_areas(area).into_iter().enumerate() {
        let item = NAV_ITEMS[idx];
        render_nav_button(
            frame,
            button_area,
            &(idx + 1).to_string(),
            item.name,
            item.is_active(&app.state.route, section),
        );
    }
}

/// Footer line with the copyright notice
pub fn footer_line(year: i32) -> String {
    format!("© {year} {OWNER_NAME}. All rights reserved.  {FOOTER_TAGLINE}")
}

pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let year = chrono::Local::now().year();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            footer_line(year),
            Style::default().fg(Color::DarkGray),
        )))
        .centered(),
        area,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.route),
        Style::default().fg(Color::Blue),
    )];

    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if app.state.contact_form.is_submitting() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Sending...",
            Style::default().fg(Color::Yellow),
        ));
    }

    if app.state.focus == Focus::Page && !app.state.toasts.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("x:dismiss", Style::default().fg(Color::Gray)));
    }

    if app.state.focus == Focus::Page && app.state.scroll().shows_back_to_top() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "g:back to top ↑",
            Style::default().fg(Color::Cyan),
        ));
    }

    let quit_hint = " q:quit ";
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_width),
        y: area.y,
        width: quit_width.min(area.width),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray)),
        quit_area,
    );
}

/// Get keyboard hints for the current route and focus
fn get_hints(app: &App) -> String {
    match app.state.focus {
        Focus::ContactForm => format!("Tab:next  Enter:send  {SUBMIT_SHORTCUT}:send  Esc:done"),
        Focus::PathPrompt => "Enter:go  Esc:cancel".to_string(),
        Focus::Page => match &app.state.route {
            Route::Home(_) => {
                let section = app.state.current_section();
                match section {
                    Section::Contact => {
                        format!("1-6:menu  h/l:section  j/k:channel  {COPY_HINT}  i:write  ::path")
                    }
                    Section::Projects => {
                        "1-6:menu  h/l:section  j/k:scroll  Enter:all projects  ::path"
                            .to_string()
                    }
                    _ => "1-6:menu  h/l:section  j/k:scroll  ::path".to_string(),
                }
            }
            Route::Works => "h/l:select  Enter:open  Esc:home  ::path".to_string(),
            Route::WorksList(_) => "j/k:scroll  Esc:works  ::path".to_string(),
            Route::NotFound(_) if app.state.can_go_back() => {
                "h/l:select  Enter:go  Esc:back".to_string()
            }
            Route::NotFound(_) => "h/l:select  Enter:go  Esc:home".to_string(),
        },
    }
}

/// Draw the address prompt over the status bar
pub fn draw_prompt(frame: &mut Frame, area: Rect, input: &str) {
    frame.render_widget(Clear, area);
    let line = Line::from(vec![
        Span::styled(
            " Go to: ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(input.to_string()),
        Span::styled("▌", Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::SubmissionPipeline;
    use crate::relay::MockMessageRelay;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app() -> App {
        let pipeline = SubmissionPipeline::new(Arc::new(MockMessageRelay::new()), "Recipient");
        App::with_pipeline(pipeline, Route::default(), false)
    }

    #[test]
    fn test_status_bar_with_no_rows_draws_nothing() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| draw_status_bar(frame, Rect::new(0, 1, 80, 0), &app))
            .unwrap();
        assert!(terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .all(|cell| cell.symbol() == " "));
    }

    #[test]
    fn test_nav_bar_with_no_rows_draws_nothing() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| draw_nav_bar(frame, Rect::new(0, 1, 80, 0), &app))
            .unwrap();
    }

    #[test]
    fn test_footer_line_has_year_and_owner() {
        let line = footer_line(2031);
        assert!(line.starts_with("© 2031 Sheikh Azwad Abrar."));
        assert!(line.contains(FOOTER_TAGLINE));
    }

    #[test]
    fn test_nav_buttons_do_not_overlap() {
        let areas = nav_button_areas(Rect::new(0, 0, 200, 3));
        assert_eq!(areas.len(), NAV_ITEMS.len());
        for pair in areas.windows(2) {
            assert!(pair[0].x + pair[0].width <= pair[1].x);
        }
    }

    #[test]
    fn test_narrow_nav_bar_drops_buttons() {
        let areas = nav_button_areas(Rect::new(0, 0, 40, 3));
        assert!(areas.len() < NAV_ITEMS.len());
    }
}
