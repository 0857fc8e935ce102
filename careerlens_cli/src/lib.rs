/// CareerLens CLI library: widgets, screens and the TUI loop
pub mod components;
pub mod export;
pub mod keymap;
pub mod report;
pub mod screens;
pub mod theme;
pub mod ui;
