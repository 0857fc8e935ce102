/// Card for one career recommendation
use super::elements::{badge, chip_lines, progress_bar, spread, wrap_text};
use super::{render_card, CardView};
use crate::theme::{self, Icon, Palette};
use careerlens_core::formatters::{format_career_match, format_salary_range};
use careerlens_core::types::CareerRecommendation;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

const REQUIRED_CHIP: Style = Style::new().fg(Color::White).bg(theme::PRIMARY_LIGHT);
const NICE_TO_HAVE_CHIP: Style = Style::new()
    .fg(Color::Rgb(97, 97, 97))
    .bg(Color::Rgb(238, 238, 238));

pub struct CareerRecommendationCard<'a> {
    recommendation: &'a CareerRecommendation,
    selected: bool,
    high_contrast: bool,
}

impl<'a> CareerRecommendationCard<'a> {
    pub fn new(recommendation: &'a CareerRecommendation) -> Self {
        Self {
            recommendation,
            selected: false,
            high_contrast: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }

    pub fn palette(&self) -> Palette {
        theme::match_palette(self.recommendation.match_level.as_str()).contrast(self.high_contrast)
    }

    fn chip_style(&self, style: Style) -> Style {
        if self.high_contrast {
            Palette::HIGH_CONTRAST.badge_style()
        } else {
            style
        }
    }
}

impl<'a> CardView for CareerRecommendationCard<'a> {
    fn block(&self) -> Block<'static> {
        let (border_type, border_style) = if self.selected {
            (
                BorderType::Thick,
                Style::default().fg(theme::accent(self.high_contrast)),
            )
        } else {
            (BorderType::Rounded, theme::border_style(self.high_contrast))
        };

        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .title_top(
                Line::from(badge(
                    format_career_match(self.recommendation.match_level),
                    self.palette().badge_style(),
                ))
                .right_aligned(),
            )
    }

    fn content(&self, width: u16) -> Vec<Line<'static>> {
        let rec = self.recommendation;
        let accent = theme::accent(self.high_contrast);
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let percent = rec.match_percentage.min(100);

        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{} ", Icon::Work.glyph()), Style::default().fg(accent)),
            Span::styled(rec.title.clone(), bold),
        ])];
        lines.extend(wrap_text(&rec.description, width, theme::muted()));
        lines.push(Line::from(""));

        lines.push(spread(
            vec![Span::styled("Skill Match", theme::muted())],
            vec![Span::styled(format!("{}%", percent), bold.fg(accent))],
            width,
        ));
        let fill = if self.high_contrast {
            Color::White
        } else {
            theme::PRIMARY
        };
        lines.push(progress_bar(percent, width, fill, theme::TRACK));
        lines.push(Line::from(""));

        lines.push(Line::from(vec![
            Span::styled("Salary Range: ", theme::muted()),
            Span::styled(
                format_salary_range(rec.salary_range.min, rec.salary_range.max),
                bold,
            ),
        ]));
        let growth = if self.high_contrast {
            Color::White
        } else {
            theme::GROWTH
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", Icon::TrendingUp.glyph()), Style::default().fg(growth)),
            Span::styled("Growth Potential: ", theme::muted()),
            Span::styled(rec.growth_potential.clone(), bold.fg(growth)),
        ]));

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Required Skills", theme::muted())));
        lines.extend(chip_lines(
            &rec.required_skills,
            self.chip_style(REQUIRED_CHIP),
            width,
        ));

        if !rec.nice_to_have.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Nice to Have", theme::muted())));
            lines.extend(chip_lines(
                &rec.nice_to_have,
                self.chip_style(NICE_TO_HAVE_CHIP),
                width,
            ));
        }

        lines
    }
}

impl<'a> Widget for CareerRecommendationCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_card(&self, area, buf, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::elements::line_text;
    use careerlens_core::types::{CareerMatchLevel, SalaryRange};

    fn recommendation(nice_to_have: &[&str]) -> CareerRecommendation {
        CareerRecommendation {
            title: "Cloud Engineer".to_string(),
            description: "Operate infrastructure at scale.".to_string(),
            match_level: CareerMatchLevel::Good,
            match_percentage: 76,
            salary_range: SalaryRange {
                min: 80_000.0,
                max: 95_000.0,
            },
            growth_potential: "High".to_string(),
            required_skills: vec!["AWS".to_string(), "Terraform".to_string()],
            nice_to_have: nice_to_have.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn text(card: &CareerRecommendationCard<'_>) -> Vec<String> {
        card.content(60).iter().map(line_text).collect()
    }

    #[test]
    fn test_nice_to_have_hidden_when_empty() {
        let rec = recommendation(&[]);
        let lines = text(&CareerRecommendationCard::new(&rec));
        assert!(!lines.iter().any(|l| l.contains("Nice to Have")));
    }

    #[test]
    fn test_nice_to_have_shown_with_one_chip() {
        let rec = recommendation(&["Kubernetes"]);
        let lines = text(&CareerRecommendationCard::new(&rec));

        let heading = lines.iter().position(|l| l == "Nice to Have").unwrap();
        assert_eq!(lines.len(), heading + 2);
        assert_eq!(lines[heading + 1], " Kubernetes ");
    }

    #[test]
    fn test_salary_and_percentage_lines() {
        let rec = recommendation(&[]);
        let lines = text(&CareerRecommendationCard::new(&rec));
        assert!(lines.contains(&"Salary Range: ₹80K - ₹95K".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("Skill Match") && l.ends_with("76%")));
    }

    #[test]
    fn test_percentage_is_clamped() {
        let mut rec = recommendation(&[]);
        rec.match_percentage = 140;
        let lines = text(&CareerRecommendationCard::new(&rec));
        assert!(lines.iter().any(|l| l.ends_with("100%")));
        assert!(lines.contains(&"█".repeat(60)));
    }
}
