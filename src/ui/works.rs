//! Works landing page and the project list pages

use super::components::{heading, muted, push_wrapped, tags};
use crate::app::App;
use crate::content::{Project, WorksCategory};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const WORKS_INTRO: &str = "Explore my portfolio of freelance and academic projects showcasing design expertise and engineering capabilities";

/// Rows taken by the landing page header
const LANDING_HEADER_HEIGHT: u16 = 6;

/// Card rectangles on the landing page, in [`WorksCategory::ALL`] order
pub fn card_areas(area: Rect) -> Vec<Rect> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(LANDING_HEADER_HEIGHT), Constraint::Min(0)])
        .split(area);
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    cards
        .iter()
        .map(|card| Rect {
            height: card.height.min(10),
            ..*card
        })
        .collect()
}

pub fn draw_landing(frame: &mut Frame, area: Rect, app: &App) {
    let mut header = vec![Line::from(Span::styled(
        "← Back to Home (Esc)",
        Style::default().fg(Color::DarkGray),
    ))];
    header.push(Line::from(""));
    header.push(Line::from(vec![
        Span::styled("My ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            "Works",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    push_wrapped(&mut header, WORKS_INTRO, area.width, "", muted());
    frame.render_widget(Paragraph::new(header), area);

    for (idx, (category, card)) in WorksCategory::ALL
        .iter()
        .zip(card_areas(area))
        .enumerate()
    {
        draw_card(frame, card, *category, idx == app.state.selected_option);
    }
}

fn project_count_label(count: usize) -> String {
    if count == 1 {
        "1 Project".to_string()
    } else {
        format!("{count} Projects")
    }
}

fn draw_card(frame: &mut Frame, area: Rect, category: WorksCategory, selected: bool) {
    let border = if selected { Color::Cyan } else { Color::DarkGray };
    let title_style = if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(category.title(), title_style)),
        Line::from(""),
        Line::from(Span::styled(category.description(), muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                project_count_label(category.projects().len()),
                Style::default().fg(Color::Gray),
            ),
            Span::raw("   "),
            Span::styled("View Projects →", Style::default().fg(Color::Magenta)),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        ),
        area,
    );
}

/// Pre-wrapped lines of a project list page
pub fn list_lines(category: WorksCategory, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "← Back to Works (Esc)",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    lines.extend(heading(category.title(), Some(category.description()), width));

    for project in category.projects() {
        lines.extend(project_lines(project, width));
    }
    lines
}

fn project_lines(project: &Project, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            project.title.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", project.year),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("  [{}]", project.status.label()),
            Style::default().fg(Color::Green),
        ),
    ])];
    push_wrapped(&mut lines, project.description, width, "  ", muted());
    lines.extend(tags(project.technologies, width, "  "));
    if !project.achievements.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Key Achievements",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for achievement in project.achievements {
            push_wrapped(&mut lines, &format!("✓ {achievement}"), width, "    ", muted());
        }
    }
    lines.push(Line::from(""));
    lines
}

pub fn draw_list(frame: &mut Frame, area: Rect, app: &App, category: WorksCategory) {
    let lines = list_lines(category, area.width);
    let offset = app.state.scroll().offset;
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}
