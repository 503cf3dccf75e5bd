//! UI module for rendering the TUI

mod components;
mod contact;
pub mod fallback;
mod forms;
mod home;
mod layout;
mod not_found;
mod splash;
mod works;

use crate::app::App;
use crate::state::{Focus, Route, Section};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub use layout::create_layout;

/// Smallest terminal the pages are laid out for
pub const MIN_WIDTH: u16 = 24;
pub const MIN_HEIGHT: u16 = 10;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let Some(splash_state) = &app.state.splash {
        splash::draw(frame, area, splash_state);
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        draw_too_small(frame, area);
        return;
    }

    let page = create_layout(area);

    layout::draw_nav_bar(frame, page.nav, app);

    match &app.state.route {
        Route::Home(_) => home::draw(frame, page.content, app),
        Route::Works => works::draw_landing(frame, page.content, app),
        Route::WorksList(category) => works::draw_list(frame, page.content, app, *category),
        Route::NotFound(path) => not_found::draw(frame, page.content, app, path),
    }

    layout::draw_footer(frame, page.footer);

    if app.state.focus == Focus::PathPrompt {
        layout::draw_prompt(frame, page.status, &app.state.prompt_input);
    } else {
        layout::draw_status_bar(frame, page.status, app);
    }

    components::render_toasts(frame, page.content, &app.state.toasts);
}

fn draw_too_small(frame: &mut Frame, area: Rect) {
    let notice = format!("Terminal too small, need {MIN_WIDTH}x{MIN_HEIGHT}");
    frame.render_widget(
        Paragraph::new(notice)
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Largest useful scroll offset for the current page in a terminal of `area`
pub fn scroll_limit(app: &App, area: Rect) -> u16 {
    let content = create_layout(area).content;
    let (lines, viewport) = match &app.state.route {
        Route::Home(_) => {
            let section = app.state.current_section();
            if section == Section::Contact {
                return 0;
            }
            let body = home::body_area(content);
            (home::section_lines(section, body.width).len(), body.height)
        }
        Route::WorksList(category) => (
            works::list_lines(*category, content.width).len(),
            content.height,
        ),
        Route::Works | Route::NotFound(_) => return 0,
    };
    (lines as u16).saturating_sub(viewport)
}

/// Something clickable on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Navigation bar item by index
    Nav(usize),
    /// Works landing card by index
    WorksCard(usize),
    /// Not-found page action by index
    NotFoundAction(usize),
    /// Contact form field or submit row by index
    ContactRow(usize),
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Resolve a mouse position to the element under it
pub fn hit_test(app: &App, area: Rect, x: u16, y: u16) -> Option<HitTarget> {
    let page = create_layout(area);

    if let Some(idx) = layout::nav_button_areas(page.nav)
        .iter()
        .position(|r| contains(*r, x, y))
    {
        return Some(HitTarget::Nav(idx));
    }

    match &app.state.route {
        Route::Works => works::card_areas(page.content)
            .iter()
            .position(|r| contains(*r, x, y))
            .map(HitTarget::WorksCard),
        Route::NotFound(_) => not_found::button_areas(page.content)
            .iter()
            .position(|r| contains(*r, x, y))
            .map(HitTarget::NotFoundAction),
        Route::Home(_) if app.state.current_section() == Section::Contact => {
            let (_, form_area) = contact::columns(home::body_area(page.content));
            contact::form_areas(form_area, &app.state.contact_form)
                .iter()
                .position(|r| contains(*r, x, y))
                .map(HitTarget::ContactRow)
        }
        _ => None,
    }
}
