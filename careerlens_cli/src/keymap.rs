/// Centralized keybindings and help text for the CareerLens TUI

use crossterm::event::{KeyCode, KeyModifiers};

pub struct KeyMap;

impl KeyMap {
    /// Get help text for all keybindings
    pub fn help_text() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Tab/l/→", "Next tab"),
            ("S-Tab/h/←", "Previous tab"),
            ("1-4", "Jump to tab"),
            ("j/↓", "Move down"),
            ("k/↑", "Move up"),
            ("Enter/Space", "Open card / toggle phase"),
            ("t", "Toggle high-contrast"),
            ("?", "Show help"),
            ("q/Esc", "Quit/Close"),
        ]
    }

    /// Check if key is quit
    pub fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Char('q') | KeyCode::Esc)
            || (matches!(code, KeyCode::Char('c')) && modifiers.contains(KeyModifiers::CONTROL))
    }

    /// Check if key is help
    pub fn is_help(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('?'))
    }

    /// Check if key is down
    pub fn is_down(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('j') | KeyCode::Down)
    }

    /// Check if key is up
    pub fn is_up(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('k') | KeyCode::Up)
    }

    pub fn is_next_tab(code: KeyCode) -> bool {
        matches!(code, KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right)
    }

    pub fn is_prev_tab(code: KeyCode) -> bool {
        matches!(code, KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left)
    }

    /// Zero-based tab index for the digit keys 1-4
    pub fn tab_index(code: KeyCode) -> Option<usize> {
        match code {
            KeyCode::Char(c @ '1'..='4') => c.to_digit(10).map(|d| d as usize - 1),
            _ => None,
        }
    }

    /// Check if key activates the focused card or phase
    pub fn is_activate(code: KeyCode) -> bool {
        matches!(code, KeyCode::Enter | KeyCode::Char(' '))
    }

    /// Check if key is toggle theme
    pub fn is_toggle_theme(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('t'))
    }
}
