/// Small line-level building blocks: badges, chips, progress bars, wrapping
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

pub fn badge(label: &str, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", label), style)
}

/// Lays tags out as chips, wrapping onto new lines when `width` is exceeded.
/// A chip wider than `width` still gets a line of its own.
pub fn chip_lines(tags: &[String], style: Style, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;

    for tag in tags {
        let chip = badge(tag, style);
        let chip_width = chip.width();
        let needed = if current.is_empty() {
            chip_width
        } else {
            chip_width + 1
        };

        if !current.is_empty() && used + needed > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }

        if !current.is_empty() {
            current.push(Span::raw(" "));
            used += 1;
        }
        used += chip_width;
        current.push(chip);
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }

    lines
}

/// Horizontal bar filled proportionally to `percent`, clamped to 100.
pub fn progress_bar(percent: u8, width: u16, fill: Color, track: Color) -> Line<'static> {
    let percent = percent.min(100) as u32;
    let width = width as u32;
    let filled = ((width * percent) as f64 / 100.0).round() as usize;
    let empty = (width as usize).saturating_sub(filled);

    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(fill)),
        Span::styled("░".repeat(empty), Style::default().fg(track)),
    ])
}

pub fn wrap_text(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    if text.is_empty() {
        return Vec::new();
    }
    textwrap::wrap(text, (width as usize).max(1))
        .into_iter()
        .map(|segment| Line::from(Span::styled(segment.into_owned(), style)))
        .collect()
}

/// Places `right` flush against the right edge after `left`.
pub fn spread(left: Vec<Span<'static>>, right: Vec<Span<'static>>, width: u16) -> Line<'static> {
    let left_width: usize = left.iter().map(|s| s.width()).sum();
    let right_width: usize = right.iter().map(|s| s.width()).sum();
    let gap = (width as usize)
        .saturating_sub(left_width + right_width)
        .max(1);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(right);
    Line::from(spans)
}

pub fn indent(prefix: &'static str, line: Line<'static>) -> Line<'static> {
    let mut spans = vec![Span::raw(prefix)];
    spans.extend(line.spans);
    Line::from(spans).style(line.style)
}

pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_chip_lines_wraps_at_width() {
        let lines = chip_lines(&tags(&["Python", "SQL", "Statistics"]), Style::default(), 16);
        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(text, vec![" Python   SQL ", " Statistics "]);
    }

    #[test]
    fn test_chip_lines_empty() {
        assert!(chip_lines(&[], Style::default(), 40).is_empty());
    }

    #[test]
    fn test_oversized_chip_gets_own_line() {
        let lines = chip_lines(&tags(&["A", "Distributed Systems Design"]), Style::default(), 10);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_progress_bar_fill() {
        let line = progress_bar(50, 10, Color::Green, Color::DarkGray);
        assert_eq!(line_text(&line), "█████░░░░░");

        let full = progress_bar(250, 4, Color::Green, Color::DarkGray);
        assert_eq!(line_text(&full), "████");

        let empty = progress_bar(0, 4, Color::Green, Color::DarkGray);
        assert_eq!(line_text(&empty), "░░░░");
    }

    #[test]
    fn test_spread_right_aligns() {
        let line = spread(vec![Span::raw("Skill Match")], vec![Span::raw("88%")], 20);
        assert_eq!(line_text(&line), "Skill Match      88%");
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("one two three four", 10, Style::default());
        assert_eq!(lines.len(), 2);
        assert!(wrap_text("", 9, Style::default()).is_empty());
    }
}
