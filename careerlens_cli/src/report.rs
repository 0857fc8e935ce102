/// Plain-text rendering of result sections for the `show` command
use crate::components::{
    ActionItemCard, CardView, CareerRecommendationCard, LearningRoadmapTimeline,
    RoadmapTimelineState, SkillsAnalysisCard,
};
use careerlens_core::types::AssessmentResult;
use clap::ValueEnum;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Actions,
    Careers,
    Skills,
    Roadmap,
    All,
}

impl Section {
    fn heading(&self) -> &'static str {
        match self {
            Section::Actions => "Action Items",
            Section::Careers => "Career Recommendations",
            Section::Skills => "Skills Analysis",
            Section::Roadmap => "Learning Roadmap",
            Section::All => "Assessment Results",
        }
    }
}

/// Renders `section` into text lines `width` columns wide, with trailing
/// blanks trimmed. Colors are dropped.
pub fn render_section(result: &AssessmentResult, section: Section, width: u16) -> String {
    let width = width.max(20);
    let mut out = Vec::new();

    match section {
        Section::All => {
            for part in [
                Section::Careers,
                Section::Skills,
                Section::Roadmap,
                Section::Actions,
            ] {
                if !out.is_empty() {
                    out.push(String::new());
                }
                out.extend(section_lines(result, part, width));
            }
        }
        single => out.extend(section_lines(result, single, width)),
    }

    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn section_lines(result: &AssessmentResult, section: Section, width: u16) -> Vec<String> {
    let mut lines = vec![format!("== {} ==", section.heading()), String::new()];

    match section {
        Section::Careers => {
            if result.career_recommendations.is_empty() {
                lines.push("No career recommendations available".to_string());
            }
            for rec in &result.career_recommendations {
                lines.extend(card_lines(&CareerRecommendationCard::new(rec), width));
            }
        }
        Section::Actions => {
            if result.action_items.is_empty() {
                lines.push("No action items available".to_string());
            }
            for item in &result.action_items {
                lines.extend(card_lines(&ActionItemCard::new(item), width));
            }
        }
        Section::Skills => {
            lines.extend(card_lines(
                &SkillsAnalysisCard::new(&result.skills_analysis),
                width,
            ));
        }
        Section::Roadmap => {
            let roadmap = &result.learning_roadmap;
            if roadmap.phases.is_empty() {
                lines.push("No learning roadmap available".to_string());
            } else {
                let state = RoadmapTimelineState::new(roadmap.phases.len());
                let timeline = LearningRoadmapTimeline::new(roadmap, &state);
                let (content, _) = timeline.layout(width.saturating_sub(2));
                let height = u16::try_from(content.len())
                    .unwrap_or(u16::MAX)
                    .saturating_add(2);
                lines.extend(render_to_lines(timeline, width, height));
            }
        }
        Section::All => {}
    }

    lines
}

fn card_lines<C: CardView>(card: &C, width: u16) -> Vec<String> {
    let height = card.height(width);
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    crate::components::render_card(card, area, &mut buf, 0);
    buffer_lines(&buf)
}

fn render_to_lines<W: Widget>(widget: W, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buffer_lines(&buf)
}

fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol()))
                .collect();
            row.trim_end().to_string()
        })
        .collect()
}
