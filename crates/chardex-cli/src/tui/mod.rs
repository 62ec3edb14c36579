//! TUI module for the interactive character browser.
//!
//! Uses `ratatui` + `crossterm` for rendering.

mod browser;
/// Character browser state types.
pub mod state;
mod ui;

pub use browser::run_browser;
