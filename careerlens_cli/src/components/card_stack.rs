/// Vertical stack of cards that keeps the selected card in view
use super::{render_card, CardView};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

const CARD_SPACING: u16 = 1;

pub struct CardStack<C: CardView> {
    cards: Vec<C>,
    selected: usize,
}

impl<C: CardView> CardStack<C> {
    pub fn new(cards: Vec<C>) -> Self {
        Self {
            cards,
            selected: 0,
        }
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = index.min(self.cards.len().saturating_sub(1));
        self
    }

    /// Index of the first card drawn so that the selected card fits below it.
    pub fn first_visible(&self, width: u16, height: u16) -> usize {
        let heights: Vec<u16> = self.cards.iter().map(|c| c.height(width)).collect();
        let mut first = 0;

        while first < self.selected {
            let span: u32 = heights[first..=self.selected]
                .iter()
                .map(|h| u32::from(*h) + u32::from(CARD_SPACING))
                .sum::<u32>()
                - u32::from(CARD_SPACING);
            if span <= u32::from(height) {
                break;
            }
            first += 1;
        }

        first
    }
}

impl<C: CardView> Widget for CardStack<C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.cards.is_empty() || area.height == 0 {
            return;
        }

        let first = self.first_visible(area.width, area.height);
        let mut y = area.top();

        for card in self.cards.iter().skip(first) {
            if y >= area.bottom() {
                break;
            }
            let height = card.height(area.width).min(area.bottom() - y);
            render_card(card, Rect::new(area.left(), y, area.width, height), buf, 0);
            y = y.saturating_add(height).saturating_add(CARD_SPACING);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{text::Line, widgets::{Block, Borders}};

    struct FixedCard(usize);

    impl CardView for FixedCard {
        fn block(&self) -> Block<'static> {
            Block::default().borders(Borders::ALL)
        }

        fn content(&self, _width: u16) -> Vec<Line<'static>> {
            vec![Line::from("row"); self.0]
        }
    }

    #[test]
    fn test_first_visible_scrolls_to_selection() {
        // Each card is 5 rows tall (3 content + 2 border), 1 row apart.
        let cards = (0..4).map(|_| FixedCard(3)).collect();
        let stack = CardStack::new(cards).selected(3);

        assert_eq!(stack.first_visible(20, 11), 2);
        assert_eq!(stack.first_visible(20, 100), 0);
    }

    #[test]
    fn test_selection_is_clamped() {
        let stack = CardStack::new(vec![FixedCard(1), FixedCard(1)]).selected(9);
        assert_eq!(stack.first_visible(20, 3), 1);
    }

    #[test]
    fn test_render_stops_at_area_bottom() {
        let stack = CardStack::new(vec![FixedCard(2), FixedCard(2), FixedCard(2)]);
        let area = Rect::new(0, 0, 10, 6);
        let mut buf = Buffer::empty(area);
        stack.render(area, &mut buf);

        // first card fills rows 0..4, the spacer is row 4, the second card
        // is cut down to a single row
        assert_eq!(buf.cell((0, 3)).map(|c| c.symbol()), Some("└"));
        assert_eq!(buf.cell((0, 4)).map(|c| c.symbol()), Some(" "));
        assert_ne!(buf.cell((0, 5)).map(|c| c.symbol()), Some(" "));
    }
}
