//! Home page: one pane per section with a section tab strip

use super::components::{heading, muted, push_wrapped, tags};
use super::contact;
use crate::app::App;
use crate::content::{
    WorksCategory, ABOUT_STORY, ABOUT_SUBTITLE, DRIVES, DRIVES_SUBTITLE, EDUCATION, HERO_BADGE,
    HERO_ROLES, HERO_TAGLINE, OWNER_NAME, PROJECTS_SUBTITLE, SERVICES_SUBTITLE,
    SERVICE_CATEGORIES, SKILL_CATEGORIES,
};
use crate::state::Section;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the home area into the tab strip and the section body
fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Inner area of the bordered section body
pub fn body_area(area: Rect) -> Rect {
    let (_, body) = split(area);
    Block::default().borders(Borders::ALL).inner(body)
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let section = app.state.current_section();
    let (tabs, body) = split(area);

    draw_tabs(frame, tabs, section);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", section.title()));
    let inner = block.inner(body);
    frame.render_widget(block, body);

    if section == Section::Contact {
        contact::draw(frame, inner, app);
        return;
    }

    let lines = section_lines(section, inner.width);
    let offset = app.state.scroll().offset;
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}

fn draw_tabs(frame: &mut Frame, area: Rect, current: Section) {
    let mut spans = vec![Span::raw(" ")];
    for section in Section::ALL {
        let style = if section == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", section.anchor()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Pre-wrapped lines for a scrollable section
pub fn section_lines(section: Section, width: u16) -> Vec<Line<'static>> {
    match section {
        Section::Hero => hero_lines(width),
        Section::About => about_lines(width),
        Section::Skills => skills_lines(width),
        Section::Projects => projects_lines(width),
        Section::Services => services_lines(width),
        Section::Drives => drives_lines(width),
        Section::Contact => Vec::new(),
    }
}

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn hero_lines(width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("● {HERO_BADGE}"),
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from(Span::styled(OWNER_NAME.to_string(), bold(Color::Cyan))),
        Line::from(""),
    ];
    for (idx, role) in HERO_ROLES.iter().enumerate() {
        let style = if idx + 1 == HERO_ROLES.len() {
            bold(Color::Magenta)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(role.to_string(), style)));
    }
    lines.push(Line::from(""));
    push_wrapped(&mut lines, HERO_TAGLINE, width, "", muted());
    lines.push(Line::from(""));
    push_wrapped(
        &mut lines,
        "Press l or Tab to explore, 6 to get in touch",
        width,
        "",
        Style::default().fg(Color::DarkGray),
    );
    lines
}

fn about_lines(width: u16) -> Vec<Line<'static>> {
    let mut lines = heading(Section::About.title(), Some(ABOUT_SUBTITLE), width);
    lines.push(Line::from(Span::styled("My Journey", bold(Color::White))));
    for paragraph in ABOUT_STORY {
        push_wrapped(&mut lines, paragraph, width, "", muted());
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled("Education", bold(Color::White))));
    for (idx, entry) in EDUCATION.iter().enumerate() {
        let style = if idx == 0 {
            Style::default().fg(Color::Cyan)
        } else {
            muted()
        };
        push_wrapped(&mut lines, entry, width, "  ", style);
    }
    lines
}

fn skills_lines(width: u16) -> Vec<Line<'static>> {
    let mut lines = heading(Section::Skills.title(), None, width);
    for category in SKILL_CATEGORIES {
        lines.push(Line::from(Span::styled(
            category.title.to_string(),
            bold(Color::White),
        )));
        lines.extend(tags(category.skills, width, "  "));
        lines.push(Line::from(""));
    }
    lines
}

fn projects_lines(width: u16) -> Vec<Line<'static>> {
    let mut lines = heading(Section::Projects.title(), Some(PROJECTS_SUBTITLE), width);
    for category in WorksCategory::ALL {
        lines.push(Line::from(Span::styled(
            category.section_heading().to_string(),
            bold(Color::White),
        )));
        lines.push(Line::from(""));
        for project in category.projects() {
            let marker = if project.featured { "★ " } else { "• " };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(project.title.to_string(), bold(Color::Cyan)),
                Span::styled(
                    format!("  {} · {}", project.year, project.status.label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            push_wrapped(&mut lines, project.summary, width, "  ", muted());
            lines.extend(tags(project.technologies, width, "  "));
            lines.push(Line::from(""));
        }
    }
    lines.push(Line::from(Span::styled(
        "↗ View All Projects (Enter)",
        bold(Color::Magenta),
    )));
    lines
}

fn services_lines(width: u16) -> Vec<Line<'static>> {
    let mut lines = heading(Section::Services.title(), Some(SERVICES_SUBTITLE), width);
    for category in SERVICE_CATEGORIES {
        lines.push(Line::from(Span::styled(
            category.title.to_string(),
            bold(Color::White),
        )));
        push_wrapped(&mut lines, category.description, width, "", muted());
        lines.push(Line::from(""));
        for service in category.services {
            let mut title = vec![
                Span::raw("  "),
                Span::styled(service.title.to_string(), bold(Color::Cyan)),
            ];
            if service.featured {
                title.push(Span::styled(
                    "  Popular",
                    Style::default().fg(Color::Yellow),
                ));
            }
            lines.push(Line::from(title));
            push_wrapped(&mut lines, service.description, width, "    ", muted());
        }
        lines.push(Line::from(""));
    }
    lines
}

fn drives_lines(width: u16) -> Vec<Line<'static>> {
    let mut lines = heading(Section::Drives.title(), Some(DRIVES_SUBTITLE), width);
    for drive in DRIVES {
        lines.push(Line::from(Span::styled(
            drive.title.to_string(),
            bold(Color::Cyan),
        )));
        push_wrapped(&mut lines, drive.description, width, "  ", muted());
        lines.push(Line::from(""));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_every_scrollable_section_has_content() {
        for section in Section::ALL {
            let lines = section_lines(section, 60);
            if section == Section::Contact {
                assert!(lines.is_empty());
            } else {
                assert!(!lines.is_empty(), "{section:?}");
            }
        }
    }

    #[test]
    fn test_wrapped_text_fits_width() {
        for section in Section::ALL {
            for line in section_lines(section, 40) {
                // Title rows carry extra spans and may be clipped
                if line.spans.len() <= 2 {
                    assert!(line.width() <= 40, "{line:?}");
                }
            }
        }
    }

    #[test]
    fn test_projects_lists_both_categories() {
        let content = text(&section_lines(Section::Projects, 80));
        assert!(content.contains("Personal/Freelance Projects"));
        assert!(content.contains("Academic Projects"));
        assert!(content.contains("View All Projects"));
    }

    #[test]
    fn test_hero_shows_roles() {
        let content = text(&section_lines(Section::Hero, 80));
        assert!(content.contains("Aspiring Avionics Engineer &"));
        assert!(content.contains("Jr. Product Designer"));
    }
}
