/// Skills analysis: current strengths and skill gaps
use super::elements::{badge, indent, progress_bar, spread};
use super::{render_card, CardView};
use crate::theme::{self, Icon, ScoreTier};
use careerlens_core::formatters::{format_priority, format_skill_level};
use careerlens_core::types::{CurrentSkill, SkillGap, SkillLevel, SkillsAnalysis};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

pub struct SkillsAnalysisCard<'a> {
    analysis: &'a SkillsAnalysis,
    scroll: u16,
    high_contrast: bool,
}

impl<'a> SkillsAnalysisCard<'a> {
    pub fn new(analysis: &'a SkillsAnalysis) -> Self {
        Self {
            analysis,
            scroll: 0,
            high_contrast: false,
        }
    }

    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }

    /// Number of content lines. Wrapping never adds lines to this card, so
    /// the count is the same at every width.
    pub fn line_count(&self) -> usize {
        self.content(0).len()
    }

    /// Largest scroll offset that still fills `visible` rows.
    pub fn max_scroll(&self, visible: u16) -> u16 {
        let hidden = self.line_count().saturating_sub(usize::from(visible));
        u16::try_from(hidden).unwrap_or(u16::MAX)
    }

    fn placeholder(message: &str) -> Line<'static> {
        Line::from(Span::styled(
            format!("  {}", message),
            Style::default().add_modifier(Modifier::DIM),
        ))
    }

    fn level_badge(&self, level: SkillLevel) -> Span<'static> {
        let palette = theme::skill_level_palette(level.as_str()).contrast(self.high_contrast);
        badge(format_skill_level(level), palette.badge_style())
    }

    fn section_header(&self, icon: Icon, title: &str) -> Line<'static> {
        let style = theme::title_style(self.high_contrast);
        Line::from(vec![
            Span::styled(format!("{} ", icon.glyph()), style),
            Span::styled(title.to_string(), style),
        ])
    }

    fn skill_lines(&self, skill: &CurrentSkill, width: u16) -> Vec<Line<'static>> {
        let inner = width.saturating_sub(2);
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let tier = ScoreTier::from_score(skill.score);

        vec![
            spread(
                vec![Span::styled(skill.name.clone(), bold)],
                vec![self.level_badge(skill.level)],
                inner,
            ),
            spread(
                vec![Span::styled("Skill Level", theme::muted())],
                vec![Span::styled(format!("{}%", skill.score.min(100)), bold)],
                inner,
            ),
            progress_bar(
                skill.score,
                inner,
                tier.color(self.high_contrast),
                theme::TRACK,
            ),
        ]
        .into_iter()
        .map(|line| indent("  ", line))
        .collect()
    }

    fn gap_lines(&self, gap: &SkillGap, width: u16) -> Vec<Line<'static>> {
        let inner = width.saturating_sub(2);
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let importance =
            theme::priority_palette(gap.importance.as_str()).contrast(self.high_contrast);

        // current and target are shown as given, even when target < current
        vec![
            spread(
                vec![Span::styled(gap.name.clone(), bold)],
                vec![badge(format_priority(gap.importance), importance.badge_style())],
                inner,
            ),
            Line::from(vec![
                Span::styled("Current Level ", theme::muted()),
                self.level_badge(gap.current_level),
                Span::styled(format!(" {} ", Icon::EastArrow.glyph()), theme::muted()),
                Span::styled("Target Level ", theme::muted()),
                self.level_badge(gap.target_level),
            ]),
        ]
        .into_iter()
        .map(|line| indent("  ", line))
        .collect()
    }
}

impl<'a> CardView for SkillsAnalysisCard<'a> {
    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_style(self.high_contrast))
            .title(Span::styled(
                " Skills Analysis ",
                theme::title_style(self.high_contrast),
            ))
    }

    fn content(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = vec![self.section_header(Icon::Academic, "Current Strengths")];
        if self.analysis.current_skills.is_empty() {
            lines.push(Self::placeholder("No current skills recorded"));
            lines.push(Line::from(""));
        }
        for skill in &self.analysis.current_skills {
            lines.extend(self.skill_lines(skill, width));
            lines.push(Line::from(""));
        }

        lines.push(self.section_header(Icon::TrendingUp, "Areas for Improvement"));
        if self.analysis.skill_gaps.is_empty() {
            lines.push(Self::placeholder("No skill gaps identified"));
        }
        for gap in &self.analysis.skill_gaps {
            lines.extend(self.gap_lines(gap, width));
            lines.push(Line::from(""));
        }

        lines
    }
}

impl<'a> Widget for SkillsAnalysisCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = self.block().inner(area).height;
        let scroll = self.scroll.min(self.max_scroll(visible));
        render_card(&self, area, buf, scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::elements::line_text;
    use careerlens_core::types::Priority;

    fn analysis() -> SkillsAnalysis {
        SkillsAnalysis {
            current_skills: vec![CurrentSkill {
                name: "Rust".to_string(),
                level: SkillLevel::Advanced,
                score: 80,
            }],
            skill_gaps: vec![SkillGap {
                name: "Kubernetes".to_string(),
                importance: Priority::High,
                current_level: SkillLevel::Expert,
                target_level: SkillLevel::Beginner,
            }],
        }
    }

    #[test]
    fn test_regressive_gap_renders() {
        let analysis = analysis();
        let lines: Vec<String> = SkillsAnalysisCard::new(&analysis)
            .content(60)
            .iter()
            .map(line_text)
            .collect();

        assert!(lines
            .iter()
            .any(|l| l == "  Current Level  Expert  → Target Level  Beginner "));
    }

    #[test]
    fn test_progress_bar_uses_score_tier_color() {
        let analysis = analysis();
        let lines = SkillsAnalysisCard::new(&analysis).content(42);
        let bar = &lines[3];

        assert_eq!(bar.spans[1].style.fg, Some(ScoreTier::Strong.color(false)));
    }

    #[test]
    fn test_empty_lists_show_placeholders() {
        let analysis = SkillsAnalysis::default();
        let card = SkillsAnalysisCard::new(&analysis);
        let lines: Vec<String> = card.content(40).iter().map(line_text).collect();

        assert_eq!(
            lines,
            vec![
                format!("{} Current Strengths", Icon::Academic.glyph()),
                "  No current skills recorded".to_string(),
                String::new(),
                format!("{} Areas for Improvement", Icon::TrendingUp.glyph()),
                "  No skill gaps identified".to_string(),
            ]
        );
        assert_eq!(card.line_count(), 5);
    }

    #[test]
    fn test_scroll_stops_at_last_page() {
        let analysis = analysis();
        let card = SkillsAnalysisCard::new(&analysis);
        // header, 3 skill rows, blank, header, 2 gap rows, blank
        assert_eq!(card.line_count(), 9);
        assert_eq!(card.max_scroll(4), 5);
        assert_eq!(card.max_scroll(20), 0);

        let area = Rect::new(0, 0, 40, 6);
        let mut clamped = Buffer::empty(area);
        SkillsAnalysisCard::new(&analysis)
            .scroll(u16::MAX)
            .render(area, &mut clamped);
        let mut last_page = Buffer::empty(area);
        SkillsAnalysisCard::new(&analysis)
            .scroll(5)
            .render(area, &mut last_page);

        assert_eq!(clamped, last_page);
    }
}
