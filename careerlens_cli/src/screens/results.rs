/// Results screen - tabbed view over one assessment result
use crate::components::{
    ActionItemCard, CardStack, CareerRecommendationCard, LearningRoadmapTimeline,
    RoadmapTimelineState, SkillsAnalysisCard,
};
use crate::theme;
use careerlens_core::formatters::{
    format_completed_at, format_confidence, format_processing_time,
};
use careerlens_core::types::AssessmentResult;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsTab {
    Careers,
    Skills,
    Roadmap,
    ActionItems,
}

impl ResultsTab {
    pub const ALL: [ResultsTab; 4] = [
        ResultsTab::Careers,
        ResultsTab::Skills,
        ResultsTab::Roadmap,
        ResultsTab::ActionItems,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResultsTab::Careers => "Careers",
            ResultsTab::Skills => "Skills",
            ResultsTab::Roadmap => "Roadmap",
            ResultsTab::ActionItems => "Action Items",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ResultsTab::Careers => 0,
            ResultsTab::Skills => 1,
            ResultsTab::Roadmap => 2,
            ResultsTab::ActionItems => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// What happened when the focused element was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Career(usize),
    ActionItem(usize),
    PhaseToggled { index: usize, expanded: bool },
}

pub struct ResultsState {
    pub result: AssessmentResult,
    pub tab: ResultsTab,
    pub career_selected: usize,
    pub action_selected: usize,
    pub phase_focus: usize,
    pub skills_scroll: u16,
    pub roadmap: RoadmapTimelineState,
    pub high_contrast: bool,
    pub last_action: String,
}

impl ResultsState {
    pub fn new(result: AssessmentResult) -> Self {
        let roadmap = RoadmapTimelineState::new(result.learning_roadmap.phases.len());
        Self {
            result,
            tab: ResultsTab::Careers,
            career_selected: 0,
            action_selected: 0,
            phase_focus: 0,
            skills_scroll: 0,
            roadmap,
            high_contrast: false,
            last_action: "Ready".to_string(),
        }
    }

    /// Replaces the displayed result. Selection and the roadmap accordion
    /// start over for the new data.
    pub fn load(&mut self, result: AssessmentResult) {
        let high_contrast = self.high_contrast;
        *self = Self::new(result);
        self.high_contrast = high_contrast;
        self.set_last_action("Loaded new assessment".to_string());
    }

    pub fn select_tab(&mut self, tab: ResultsTab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.tab = self.tab.prev();
    }

    fn item_count(&self) -> usize {
        match self.tab {
            ResultsTab::Careers => self.result.career_recommendations.len(),
            ResultsTab::Skills => 0,
            ResultsTab::Roadmap => self.result.learning_roadmap.phases.len(),
            ResultsTab::ActionItems => self.result.action_items.len(),
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self.tab {
            ResultsTab::Careers => Some(&mut self.career_selected),
            ResultsTab::Skills => None,
            ResultsTab::Roadmap => Some(&mut self.phase_focus),
            ResultsTab::ActionItems => Some(&mut self.action_selected),
        }
    }

    pub fn move_down(&mut self) {
        let count = self.item_count();
        match self.cursor_mut() {
            Some(cursor) => {
                if *cursor + 1 < count {
                    *cursor += 1;
                }
            }
            None => {
                let last = SkillsAnalysisCard::new(&self.result.skills_analysis).max_scroll(1);
                self.skills_scroll = self.skills_scroll.saturating_add(1).min(last);
            }
        }
    }

    pub fn move_up(&mut self) {
        match self.cursor_mut() {
            Some(cursor) => *cursor = cursor.saturating_sub(1),
            None => self.skills_scroll = self.skills_scroll.saturating_sub(1),
        }
    }

    /// Activates whatever has focus on the current tab. Nothing happens on
    /// an empty list or on the skills tab.
    pub fn activate(&mut self) -> Option<Activation> {
        if self.item_count() == 0 {
            return None;
        }
        match self.tab {
            ResultsTab::Careers => Some(Activation::Career(self.career_selected)),
            ResultsTab::ActionItems => Some(Activation::ActionItem(self.action_selected)),
            ResultsTab::Roadmap => {
                let index = self.phase_focus;
                self.roadmap.toggle(index);
                Some(Activation::PhaseToggled {
                    index,
                    expanded: self.roadmap.is_expanded(index),
                })
            }
            ResultsTab::Skills => None,
        }
    }

    pub fn set_last_action(&mut self, action: String) {
        self.last_action = action;
    }
}

pub struct ResultsScreen<'a> {
    state: &'a ResultsState,
}

impl<'a> ResultsScreen<'a> {
    pub fn new(state: &'a ResultsState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for ResultsScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_tabs(chunks[1], buf);
        self.render_body(chunks[2], buf);
        self.render_status_bar(chunks[3], buf);
    }
}

impl<'a> ResultsScreen<'a> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let hc = self.state.high_contrast;
        let result = &self.state.result;
        let dim = Style::default().add_modifier(Modifier::DIM);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(hc))
            .title(Span::styled(" CareerLens - Assessment Results ", theme::title_style(hc)));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let mut student = Vec::new();
        match &result.student_profile {
            Some(profile) => {
                student.push(Span::styled(profile.name.clone(), theme::title_style(hc)));
                student.push(Span::styled(format!("  {}", profile.major), dim));
                if let Some(gpa) = profile.gpa {
                    student.push(Span::styled(format!("  GPA {:.2}", gpa), dim));
                }
            }
            None => student.push(Span::styled("Career Assessment Results", theme::title_style(hc))),
        }

        let mut session = Vec::new();
        if let Some(id) = &result.session_id {
            session.push(Span::styled("Session: ", dim));
            session.push(Span::raw(id.clone()));
            session.push(Span::raw("  "));
        }
        if let Some(completed) = &result.completed_at {
            session.push(Span::styled("Completed: ", dim));
            session.push(Span::raw(format_completed_at(completed)));
        }

        let mut metrics = Vec::new();
        if let Some(seconds) = result.processing_time {
            metrics.push(Span::styled("Processing Time: ", dim));
            metrics.push(Span::raw(format_processing_time(seconds)));
            metrics.push(Span::raw("  "));
        }
        if let Some(confidence) = result.confidence {
            metrics.push(Span::styled("Confidence: ", dim));
            metrics.push(Span::styled(
                format_confidence(confidence),
                Style::default().fg(theme::accent(hc)),
            ));
        }

        let lines = vec![Line::from(student), Line::from(session), Line::from(metrics)];
        Widget::render(Paragraph::new(lines), inner, buf);
    }

    fn render_tabs(&self, area: Rect, buf: &mut Buffer) {
        let hc = self.state.high_contrast;
        let titles: Vec<Line> = ResultsTab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.label())))
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme::border_style(hc)),
            )
            .select(self.state.tab.index())
            .highlight_style(theme::title_style(hc).add_modifier(Modifier::REVERSED));

        Widget::render(tabs, area, buf);
    }

    fn render_body(&self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let hc = state.high_contrast;
        let result = &state.result;

        match state.tab {
            ResultsTab::Careers => {
                if result.career_recommendations.is_empty() {
                    return render_empty(area, buf, "No career recommendations available");
                }
                let cards = result
                    .career_recommendations
                    .iter()
                    .enumerate()
                    .map(|(i, rec)| {
                        CareerRecommendationCard::new(rec)
                            .selected(i == state.career_selected)
                            .high_contrast(hc)
                    })
                    .collect();
                CardStack::new(cards)
                    .selected(state.career_selected)
                    .render(area, buf);
            }
            ResultsTab::Skills => {
                SkillsAnalysisCard::new(&result.skills_analysis)
                    .scroll(state.skills_scroll)
                    .high_contrast(hc)
                    .render(area, buf);
            }
            ResultsTab::Roadmap => {
                if result.learning_roadmap.phases.is_empty() {
                    return render_empty(area, buf, "No learning roadmap available");
                }
                LearningRoadmapTimeline::new(&result.learning_roadmap, &state.roadmap)
                    .focused(Some(state.phase_focus))
                    .high_contrast(hc)
                    .render(area, buf);
            }
            ResultsTab::ActionItems => {
                if result.action_items.is_empty() {
                    return render_empty(area, buf, "No action items available");
                }
                let cards = result
                    .action_items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        ActionItemCard::new(item)
                            .selected(i == state.action_selected)
                            .high_contrast(hc)
                    })
                    .collect();
                CardStack::new(cards)
                    .selected(state.action_selected)
                    .render(area, buf);
            }
        }
    }

    fn render_status_bar(&self, area: Rect, buf: &mut Buffer) {
        let hc = self.state.high_contrast;
        let dim = Style::default().add_modifier(Modifier::DIM);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(hc));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let status_text = vec![Line::from(vec![
            Span::styled("Status: ", dim),
            Span::styled(
                self.state.last_action.clone(),
                Style::default().fg(theme::accent(hc)),
            ),
            Span::raw("  "),
            Span::styled("[Tab] Switch", dim),
            Span::raw("  "),
            Span::styled("[?] Help", dim),
            Span::raw("  "),
            Span::styled("[q] Quit", dim),
        ])];

        Widget::render(Paragraph::new(status_text), inner, buf);
    }
}

fn render_empty(area: Rect, buf: &mut Buffer, message: &str) {
    let paragraph = Paragraph::new(Span::styled(
        message.to_string(),
        Style::default().add_modifier(Modifier::DIM),
    ))
    .alignment(Alignment::Center);
    Widget::render(paragraph, area, buf);
}
