/// Top-level TUI event loop and input handler
use crate::keymap::KeyMap;
use crate::screens::{Activation, ResultsScreen, ResultsState, ResultsTab};
use crate::theme;
use anyhow::Result;
use careerlens_core::formatters::{format_career_match, format_priority, format_salary_range};
use careerlens_core::loader;
use careerlens_core::types::AssessmentResult;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Results,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

impl Modal {
    fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

pub struct AppState {
    pub screen: Screen,
    pub results: ResultsState,
    pub modal: Option<Modal>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(result: AssessmentResult, high_contrast: bool) -> Self {
        let mut results = ResultsState::new(result);
        results.high_contrast = high_contrast;

        Self {
            screen: Screen::Results,
            results,
            modal: None,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // An open modal swallows the key that closes it
        if self.modal.is_some() {
            if KeyMap::is_quit(code, modifiers) || KeyMap::is_activate(code) {
                self.modal = None;
            }
            return;
        }

        if KeyMap::is_quit(code, modifiers) {
            if self.screen != Screen::Results {
                self.screen = Screen::Results;
            } else {
                self.should_quit = true;
            }
            return;
        }

        if KeyMap::is_help(code) {
            self.screen = if self.screen == Screen::Help {
                Screen::Results
            } else {
                Screen::Help
            };
            return;
        }

        match self.screen {
            Screen::Results => self.handle_results_key(code),
            Screen::Help => {
                // Any key closes help
                if matches!(code, KeyCode::Char(_) | KeyCode::Enter) {
                    self.screen = Screen::Results;
                }
            }
        }
    }

    fn handle_results_key(&mut self, code: KeyCode) {
        if KeyMap::is_toggle_theme(code) {
            self.results.high_contrast = !self.results.high_contrast;
            let mode = if self.results.high_contrast { "on" } else { "off" };
            self.results
                .set_last_action(format!("High contrast {}", mode));
        } else if KeyMap::is_next_tab(code) {
            self.results.next_tab();
        } else if KeyMap::is_prev_tab(code) {
            self.results.prev_tab();
        } else if let Some(tab) = KeyMap::tab_index(code).and_then(ResultsTab::from_index) {
            self.results.select_tab(tab);
        } else if KeyMap::is_down(code) {
            self.results.move_down();
        } else if KeyMap::is_up(code) {
            self.results.move_up();
        } else if KeyMap::is_activate(code) {
            if let Some(activation) = self.results.activate() {
                self.on_activation(activation);
            }
        }
    }

    fn on_activation(&mut self, activation: Activation) {
        log::debug!("[TUI] activation: {:?}", activation);
        let result = &self.results.result;

        match activation {
            Activation::Career(index) => {
                let Some(rec) = result.career_recommendations.get(index) else {
                    return;
                };
                let message = format!(
                    "{}\n\n{} ({}%)\nSalary: {}\nGrowth: {}\nRequired: {}\n\n[Esc/Enter] Close",
                    rec.description,
                    format_career_match(rec.match_level),
                    rec.match_percentage.min(100),
                    format_salary_range(rec.salary_range.min, rec.salary_range.max),
                    rec.growth_potential,
                    rec.required_skills.join(", "),
                );
                let title = rec.title.clone();
                self.results.set_last_action(format!("Opened career: {}", title));
                self.modal = Some(Modal::new(title, message));
            }
            Activation::ActionItem(index) => {
                let Some(item) = result.action_items.get(index) else {
                    return;
                };
                let message = format!(
                    "{}\n\n{}  |  {}  |  {}\n\n[Esc/Enter] Close",
                    item.description,
                    format_priority(item.priority),
                    item.category,
                    item.estimated_time,
                );
                let title = item.title.clone();
                self.results.set_last_action(format!("Opened action: {}", title));
                self.modal = Some(Modal::new(title, message));
            }
            Activation::PhaseToggled { index, expanded } => {
                let verb = if expanded { "Expanded" } else { "Collapsed" };
                self.results
                    .set_last_action(format!("{} Phase {}", verb, index + 1));
            }
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        let size = f.area();
        let high_contrast = self.results.high_contrast;

        match self.screen {
            Screen::Results => {
                f.render_widget(ResultsScreen::new(&self.results), size);
            }
            Screen::Help => {
                render_help(f, size, high_contrast);
            }
        }

        if let Some(modal) = &self.modal {
            render_modal(f, size, &modal.title, &modal.message, high_contrast);
        }
    }
}

pub fn run_tui(path: &Path, high_contrast: bool) -> Result<()> {
    // Load before touching the terminal so errors print normally
    let result = loader::load_assessment(path)?;
    let mut app = AppState::new(result, high_contrast);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| app.draw(f))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code, key.modifiers);
                }
            }
        }
    }
    Ok(())
}

fn render_help(f: &mut Frame, area: Rect, high_contrast: bool) {
    let accent = theme::accent(high_contrast);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(high_contrast))
        .title(Span::styled(
            " Help - Keybindings ",
            theme::title_style(high_contrast),
        ));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "CareerLens Results Viewer",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (key, desc) in KeyMap::help_text() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(desc),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    f.render_widget(paragraph, inner);
}

fn render_modal(f: &mut Frame, area: Rect, title: &str, message: &str, high_contrast: bool) {
    let accent = theme::accent(high_contrast);

    // Center the modal
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(vertical[1]);

    let modal_area = horizontal[1];

    // Clear the area
    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);

    let text = Paragraph::new(message.to_string())
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left);
    f.render_widget(text, inner);
}
