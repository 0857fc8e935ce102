/// Learning roadmap rendered as a vertical timeline of accordion phases
use super::elements::{badge, chip_lines, indent, spread, wrap_text};
use crate::theme::{self, Icon};
use careerlens_core::formatters::{capitalize_first, format_timeframe};
use careerlens_core::types::{LearningPhase, LearningResource, LearningRoadmap};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const SKILL_CHIP: Style = Style::new().fg(Color::White).bg(theme::PRIMARY_LIGHT);
const CONNECTOR: &str = "│   ";
const LAST_PHASE: &str = "    ";

/// Which phase is open. At most one phase is expanded at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapTimelineState {
    pub expanded: Option<usize>,
}

impl RoadmapTimelineState {
    /// The first phase starts open when there is one.
    pub fn new(phase_count: usize) -> Self {
        Self {
            expanded: if phase_count > 0 { Some(0) } else { None },
        }
    }

    /// Opens `index`, or closes it when it is already the open phase.
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }
}

pub struct LearningRoadmapTimeline<'a> {
    roadmap: &'a LearningRoadmap,
    state: &'a RoadmapTimelineState,
    focused: Option<usize>,
    high_contrast: bool,
}

impl<'a> LearningRoadmapTimeline<'a> {
    pub fn new(roadmap: &'a LearningRoadmap, state: &'a RoadmapTimelineState) -> Self {
        Self {
            roadmap,
            state,
            focused: None,
            high_contrast: false,
        }
    }

    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }

    /// All content lines plus the line index where each phase starts.
    pub fn layout(&self, width: u16) -> (Vec<Line<'static>>, Vec<usize>) {
        let mut lines = vec![
            Line::from(Span::styled("Recommended Learning Path", theme::muted())),
            Line::from(""),
        ];
        let mut starts = Vec::with_capacity(self.roadmap.phases.len());
        let last = self.roadmap.phases.len().saturating_sub(1);

        for (index, phase) in self.roadmap.phases.iter().enumerate() {
            starts.push(lines.len());
            let prefix = if index == last { LAST_PHASE } else { CONNECTOR };
            let body_width = width.saturating_sub(prefix.chars().count() as u16);

            lines.push(self.phase_header(index, phase));
            let mut body = wrap_text(&phase.description, body_width, theme::muted());
            if self.state.is_expanded(index) {
                body.extend(self.phase_details(phase, body_width));
            }
            body.push(Line::from(""));

            lines.extend(body.into_iter().map(|line| indent(prefix, line)));
        }

        (lines, starts)
    }

    fn phase_header(&self, index: usize, phase: &LearningPhase) -> Line<'static> {
        let accent = theme::accent(self.high_contrast);
        let expanded = self.state.is_expanded(index);

        let (node, node_style) = if expanded {
            ("●", Style::default().fg(accent))
        } else {
            ("○", Style::default().fg(Color::Gray))
        };
        let chevron = if expanded {
            Icon::ExpandOpen
        } else {
            Icon::ExpandClosed
        };

        let mut title_style = Style::default().add_modifier(Modifier::BOLD);
        if self.focused == Some(index) {
            title_style = title_style.add_modifier(Modifier::REVERSED);
        }

        Line::from(vec![
            Span::styled(format!("{} ", node), node_style),
            Span::styled(format!("{} ", chevron.glyph()), Style::default().fg(accent)),
            Span::styled(format!("Phase {}: {}", index + 1, phase.title), title_style),
            Span::styled(format!("  {} ", Icon::Schedule.glyph()), theme::muted()),
            Span::raw(format_timeframe(phase.duration)),
        ])
    }

    fn phase_details(&self, phase: &LearningPhase, width: u16) -> Vec<Line<'static>> {
        let heading = Style::default().add_modifier(Modifier::BOLD);
        let chip = if self.high_contrast {
            theme::Palette::HIGH_CONTRAST.badge_style()
        } else {
            SKILL_CHIP
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled("Skills to Learn", heading)),
        ];
        lines.extend(chip_lines(&phase.skills, chip, width));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Learning Resources", heading)));

        for resource in &phase.resources {
            lines.extend(self.resource_lines(resource, width));
        }

        lines
    }

    fn resource_lines(&self, resource: &LearningResource, width: u16) -> Vec<Line<'static>> {
        let kind = resource.resource_type.kind();
        let palette = theme::resource_palette(kind).contrast(self.high_contrast);
        let icon = theme::resource_icon(kind);
        let label = capitalize_first(resource.resource_type.as_str());
        let nested = width.saturating_sub(2);

        let mut lines = vec![spread(
            vec![
                Span::styled(format!("{} ", icon.glyph()), theme::muted()),
                Span::styled(
                    resource.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ],
            vec![badge(&label, palette.badge_style())],
            width,
        )];

        let duration = Span::styled(
            format!("{} {}", Icon::Schedule.glyph(), format_timeframe(resource.duration)),
            theme::muted(),
        );
        let source = resource
            .source()
            .map(|s| vec![Span::styled(s.to_string(), theme::muted())])
            .unwrap_or_default();
        lines.push(indent("  ", spread(source, vec![duration], nested)));

        if let Some(description) = resource.description.as_deref() {
            lines.extend(
                wrap_text(description, nested, theme::muted())
                    .into_iter()
                    .map(|line| indent("  ", line)),
            );
        }

        lines
    }

    /// First visible line so that the focused phase header stays on screen.
    fn scroll_offset(&self, starts: &[usize], height: u16) -> u16 {
        let Some(start) = self.focused.and_then(|i| starts.get(i)).copied() else {
            return 0;
        };
        let height = height as usize;
        let offset = if start + 2 <= height {
            0
        } else {
            start.saturating_sub(1)
        };
        u16::try_from(offset).unwrap_or(u16::MAX)
    }
}

impl<'a> Widget for LearningRoadmapTimeline<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_style = theme::title_style(self.high_contrast);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_style(self.high_contrast))
            .title(Line::from(vec![
                Span::styled(format!(" {} ", Icon::EastArrow.glyph()), title_style),
                Span::styled("Learning Roadmap ", title_style),
            ]));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let (lines, starts) = self.layout(inner.width);
        let offset = self.scroll_offset(&starts, inner.height);
        let paragraph = Paragraph::new(lines).scroll((offset, 0));
        Widget::render(paragraph, inner, buf);
    }
}
