//! Contact section: direct channels and the message form

use super::components::{heading, muted, push_wrapped, render_button, BUTTON_HEIGHT};
use super::forms::{draw_field, field_height};
use crate::app::App;
use crate::content::{AVAILABLE_FOR, CONTACT_CHANNELS, CONTACT_SUBTITLE};
use crate::contact::ContactField;
use crate::state::{ContactForm, Focus, Form, SubmitStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Columns of the contact pane: channels, then the form
pub fn columns(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Rectangles of the four fields and the submit button inside the form column
pub fn form_areas(form_area: Rect, form: &ContactForm) -> Vec<Rect> {
    let inner = Block::default().borders(Borders::ALL).inner(form_area);
    let mut constraints: Vec<Constraint> = ContactField::ALL
        .iter()
        .map(|f| {
            let field = form.field(*f);
            if field.is_multiline() {
                Constraint::Min(field_height(field))
            } else {
                Constraint::Length(field_height(field))
            }
        })
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));

    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner)
        .to_vec()
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let (channels_area, form_area) = columns(area);
    draw_channels(frame, channels_area, app);
    draw_form(frame, form_area, app);
}

fn draw_channels(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width.saturating_sub(1);
    let mut lines = heading("Let's Connect", Some(CONTACT_SUBTITLE), width);
    let browsing = app.state.focus == Focus::Page;

    for (idx, channel) in CONTACT_CHANNELS.iter().enumerate() {
        let selected = browsing && idx == app.state.selected_channel;
        let marker = if selected { "▸ " } else { "  " };
        let label_style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(channel.label.to_string(), label_style),
        ]));
        let value_style = if channel.is_external() {
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            muted()
        };
        push_wrapped(&mut lines, channel.value, width, "    ", value_style);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Available for:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for item in AVAILABLE_FOR {
        push_wrapped(&mut lines, &format!("• {item}"), width, "  ", muted());
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Submit button text for the form's current status
fn submit_label(status: SubmitStatus) -> &'static str {
    match status {
        SubmitStatus::Idle => "Send Message",
        SubmitStatus::Submitting => "Sending...",
        SubmitStatus::Failed => "Try Again",
    }
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.contact_form;
    let editing = app.state.focus == Focus::ContactForm;

    let title = if editing {
        " Send a Message "
    } else {
        " Send a Message (i to write) "
    };
    let border = if editing { Color::Cyan } else { Color::DarkGray };
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title),
        area,
    );

    let areas = form_areas(area, form);
    for idx in 0..ContactForm::SUBMIT_ROW {
        if let Some(input) = form.get_field(idx) {
            draw_field(
                frame,
                areas[idx],
                input,
                editing && form.active_field() == idx,
                form.errors().get(input.field),
            );
        }
    }

    let label = submit_label(form.status());
    let button_area = areas[ContactForm::SUBMIT_ROW];
    let button_width = (label.len() as u16 + 4).min(button_area.width);
    render_button(
        frame,
        Rect {
            width: button_width,
            ..button_area
        },
        label,
        editing && form.is_submit_row_active(),
        !form.is_submitting(),
    );
}
