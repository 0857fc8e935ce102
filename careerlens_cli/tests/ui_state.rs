/// State transition tests for the results screen, plus export and report output

use careerlens_cli::export::{export_to_file, ExportFormat};
use careerlens_cli::report::{render_section, Section};
use careerlens_cli::screens::{Activation, ResultsState, ResultsTab};
use careerlens_cli::ui::{AppState, Screen};
use careerlens_core::loader::{parse_assessment_json, load_assessment};
use careerlens_core::types::AssessmentResult;
use crossterm::event::{KeyCode, KeyModifiers};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn sample() -> AssessmentResult {
    parse_assessment_json(include_str!("../assets/sample_assessment.json")).unwrap()
}

fn press(app: &mut AppState, code: KeyCode) {
    app.handle_key(code, KeyModifiers::NONE);
}

// ============================================================================
// TAB NAVIGATION
// ============================================================================

#[test]
fn test_tab_keys() {
    let mut app = AppState::new(sample(), false);
    assert_eq!(app.results.tab, ResultsTab::Careers);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.results.tab, ResultsTab::Skills);

    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.results.tab, ResultsTab::Roadmap);

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.results.tab, ResultsTab::Skills);

    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.results.tab, ResultsTab::ActionItems);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.results.tab, ResultsTab::Careers);

    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.results.tab, ResultsTab::ActionItems);
}

#[test]
fn test_selection_clamps() {
    let mut state = ResultsState::new(sample());

    state.move_up();
    assert_eq!(state.career_selected, 0);

    for _ in 0..5 {
        state.move_down();
    }
    assert_eq!(state.career_selected, 2);

    // Each tab keeps its own cursor
    state.select_tab(ResultsTab::ActionItems);
    state.move_down();
    assert_eq!(state.action_selected, 1);
    assert_eq!(state.career_selected, 2);
}

#[test]
fn test_skills_scroll_stops_at_last_line() {
    let mut app = AppState::new(sample(), false);
    press(&mut app, KeyCode::Char('2'));

    // 4 strengths of 4 lines, 3 gaps of 3 lines, 2 headers
    for _ in 0..100 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.results.skills_scroll, 26);

    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.results.skills_scroll, 25);
}

// ============================================================================
// ACTIVATION
// ============================================================================

#[test]
fn test_activate_cards() {
    let mut state = ResultsState::new(sample());
    state.move_down();
    assert_eq!(state.activate(), Some(Activation::Career(1)));

    state.select_tab(ResultsTab::ActionItems);
    assert_eq!(state.activate(), Some(Activation::ActionItem(0)));

    state.select_tab(ResultsTab::Skills);
    assert_eq!(state.activate(), None);
}

#[test]
fn test_roadmap_accordion_through_keys() {
    let mut app = AppState::new(sample(), false);
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.results.roadmap.expanded, Some(0));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.results.roadmap.expanded, None);
    assert_eq!(app.results.last_action, "Collapsed Phase 1");

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.results.roadmap.expanded, Some(1));
    assert_eq!(app.results.last_action, "Expanded Phase 2");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.results.roadmap.expanded, None);
    assert!(app.modal.is_none());
}

#[test]
fn test_career_modal_open_and_close() {
    let mut app = AppState::new(sample(), false);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    let modal = app.modal.clone().unwrap();
    assert_eq!(modal.title, "UX Researcher");
    assert!(modal.message.contains("Fair Match (52%)"));
    assert!(modal.message.contains("₹50K - ₹12.0L"));
    assert_eq!(app.results.last_action, "Opened career: UX Researcher");

    // Keys other than close are swallowed while the modal is open
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.results.tab, ResultsTab::Careers);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.modal.is_none());
    assert!(!app.should_quit);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_action_item_modal() {
    let mut app = AppState::new(sample(), false);
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);

    let modal = app.modal.clone().unwrap();
    assert_eq!(modal.title, "Publish a portfolio project");
    assert!(modal.message.contains("Medium Priority  |  Portfolio  |  2 weeks"));
}

// ============================================================================
// GLOBAL KEYS
// ============================================================================

#[test]
fn test_help_toggle_and_quit() {
    let mut app = AppState::new(sample(), false);

    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.screen, Screen::Help);

    // Esc leaves help instead of quitting
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen, Screen::Results);
    assert!(!app.should_quit);

    app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.should_quit);
}

#[test]
fn test_high_contrast_toggle() {
    let mut app = AppState::new(sample(), true);
    assert!(app.results.high_contrast);

    press(&mut app, KeyCode::Char('t'));
    assert!(!app.results.high_contrast);
    assert_eq!(app.results.last_action, "High contrast off");
}

#[test]
fn test_load_resets_roadmap_state() {
    let mut state = ResultsState::new(sample());
    state.high_contrast = true;
    state.select_tab(ResultsTab::Roadmap);
    state.move_down();
    state.activate();
    assert_eq!(state.roadmap.expanded, Some(1));

    state.load(sample());
    assert_eq!(state.roadmap.expanded, Some(0));
    assert_eq!(state.phase_focus, 0);
    assert_eq!(state.tab, ResultsTab::Careers);
    assert!(state.high_contrast);

    state.load(AssessmentResult::default());
    assert_eq!(state.roadmap.expanded, None);
}

// ============================================================================
// EXPORT AND REPORT
// ============================================================================

#[test]
fn test_export_csv_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("actions.csv");

    export_to_file(&sample(), ExportFormat::Csv, &out).unwrap();
    let content = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "title,category,priority,estimated_time,description");
    assert_eq!(
        lines[1],
        "Complete an ML course,Learning,High Priority,4 weeks,Finish the first two modules of the specialization."
    );
    assert!(lines[3].contains("Low Priority"));
}

#[test]
fn test_export_json_round_trips() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("result.json");
    let expected = sample();

    export_to_file(&expected, ExportFormat::Json, &out).unwrap();
    assert_eq!(load_assessment(&out).unwrap(), expected);
}

#[test]
fn test_export_json_keeps_resource_type_text() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("result.json");
    let mut result = sample();
    result.learning_roadmap.phases[0].resources[0].resource_type = "COURSE".into();

    export_to_file(&result, ExportFormat::Json, &out).unwrap();
    let content = std::fs::read_to_string(&out).unwrap();

    assert!(content.contains("\"type\": \"COURSE\""));
    assert_eq!(load_assessment(&out).unwrap(), result);
}

#[test]
fn test_show_skills_section() {
    let text = render_section(&sample(), Section::Skills, 80);

    assert!(text.starts_with("== Skills Analysis =="));
    assert!(text.contains("Current Level  Expert  → Target Level  Intermediate"));
    assert!(text.contains("92%"));
}

#[test]
fn test_show_roadmap_uses_initial_state() {
    let text = render_section(&sample(), Section::Roadmap, 90);

    assert!(text.contains("Phase 1: Foundations"));
    assert!(text.contains("Machine Learning Specialization"));
    assert!(text.contains("Phase 3: Credentials"));
    assert!(!text.contains("Kaggle Meetup"));
}

#[test]
fn test_show_all_orders_sections() {
    let text = render_section(&sample(), Section::All, 80);

    let careers = text.find("== Career Recommendations ==").unwrap();
    let skills = text.find("== Skills Analysis ==").unwrap();
    let roadmap = text.find("== Learning Roadmap ==").unwrap();
    let actions = text.find("== Action Items ==").unwrap();
    assert!(careers < skills && skills < roadmap && roadmap < actions);
}
