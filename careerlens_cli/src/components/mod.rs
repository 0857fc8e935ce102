/// Component module exports
pub mod action_item_card;
pub mod card_stack;
pub mod career_card;
pub mod elements;
pub mod roadmap_timeline;
pub mod skills_card;

pub use action_item_card::ActionItemCard;
pub use card_stack::CardStack;
pub use career_card::CareerRecommendationCard;
pub use roadmap_timeline::{LearningRoadmapTimeline, RoadmapTimelineState};
pub use skills_card::SkillsAnalysisCard;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

/// A bordered widget whose content is a list of lines. The content width is
/// the card width minus its two border columns.
pub trait CardView {
    fn block(&self) -> Block<'static>;

    fn content(&self, width: u16) -> Vec<Line<'static>>;

    fn height(&self, width: u16) -> u16 {
        let lines = self.content(width.saturating_sub(2)).len();
        u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
    }
}

pub fn render_card<C: CardView + ?Sized>(card: &C, area: Rect, buf: &mut Buffer, scroll: u16) {
    let block = card.block();
    let inner = block.inner(area);
    Widget::render(block, area, buf);

    let paragraph = Paragraph::new(card.content(inner.width)).scroll((scroll, 0));
    Widget::render(paragraph, inner, buf);
}
