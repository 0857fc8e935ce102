/// Card for a single recommended action item
use super::elements::{badge, indent, spread, wrap_text};
use super::{render_card, CardView};
use crate::theme::{self, Icon, Palette};
use careerlens_core::formatters::format_priority;
use careerlens_core::types::ActionItem;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

const CATEGORY_CHIP: Style = Style::new()
    .fg(Color::Rgb(97, 97, 97))
    .bg(Color::Rgb(245, 245, 245));

pub struct ActionItemCard<'a> {
    item: &'a ActionItem,
    selected: bool,
    high_contrast: bool,
}

impl<'a> ActionItemCard<'a> {
    pub fn new(item: &'a ActionItem) -> Self {
        Self {
            item,
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
        theme::priority_palette(self.item.priority.as_str()).contrast(self.high_contrast)
    }
}

impl<'a> CardView for ActionItemCard<'a> {
    fn block(&self) -> Block<'static> {
        let palette = self.palette();
        let border_type = if self.selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };

        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(palette.border))
            .title_top(
                Line::from(badge(format_priority(self.item.priority), palette.badge_style()))
                    .right_aligned(),
            )
    }

    fn content(&self, width: u16) -> Vec<Line<'static>> {
        let accent = theme::accent(self.high_contrast);
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{} ", Icon::Checklist.glyph()), Style::default().fg(accent)),
            Span::styled(
                self.item.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ])];

        lines.extend(
            wrap_text(&self.item.description, width.saturating_sub(2), theme::muted())
                .into_iter()
                .map(|line| indent("  ", line)),
        );

        let category_style = if self.high_contrast {
            Palette::HIGH_CONTRAST.badge_style()
        } else {
            CATEGORY_CHIP
        };

        lines.push(spread(
            vec![
                Span::styled(format!("{} ", Icon::Schedule.glyph()), theme::muted()),
                Span::styled(
                    self.item.estimated_time.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ],
            vec![badge(&self.item.category, category_style)],
            width,
        ));

        lines
    }
}

impl<'a> Widget for ActionItemCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_card(&self, area, buf, 0);
    }
}
