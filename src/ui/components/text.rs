//! Text layout helpers shared by the page views

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Wrap text to fit within a maximum width (in characters)
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count();
            if current_width + word_width + 1 > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }
            if !current_line.is_empty() {
                current_line.push(' ');
                current_width += 1;
            }
            current_line.push_str(word);
            current_width += word_width;
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Append `text` wrapped to `width`, each line prefixed by `indent`
pub fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    width: u16,
    indent: &str,
    style: Style,
) {
    let available = (width as usize).saturating_sub(indent.chars().count());
    for line in wrap_text(text, available) {
        lines.push(Line::from(vec![
            Span::raw(indent.to_string()),
            Span::styled(line, style),
        ]));
    }
}

/// Section heading: bold title, muted subtitle, blank line
pub fn heading(title: &str, subtitle: Option<&str>, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(subtitle) = subtitle {
        push_wrapped(&mut lines, subtitle, width, "", muted());
    }
    lines.push(Line::from(""));
    lines
}

/// Style for secondary text
pub fn muted() -> Style {
    Style::default().fg(Color::Gray)
}

/// Inline list of tags, e.g. technologies. Tags never break across lines.
pub fn tags(items: &[&str], width: u16, indent: &str) -> Vec<Line<'static>> {
    let style = Style::default().fg(Color::Magenta);
    let available = (width as usize).saturating_sub(indent.chars().count()).max(1);
    let mut rows: Vec<String> = Vec::new();
    let mut current = String::new();

    for item in items {
        let tag = format!("[{item}]");
        let needed = tag.chars().count() + usize::from(!current.is_empty());
        if !current.is_empty() && current.chars().count() + needed > available {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&tag);
    }
    if !current.is_empty() {
        rows.push(current);
    }

    rows.into_iter()
        .map(|row| Line::from(vec![Span::raw(indent.to_string()), Span::styled(row, style)]))
        .collect()
}
