//! Character browser TUI main loop.

use std::io;

use anyhow::{Context, Result};
use chardex_api::disney::{FilmsAndTvShows, LocalCharacterApi, SearchCriterion};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::state::{Action, BrowserState, Focus, Outcome};
use super::ui;

/// Runs the character browser TUI until the user quits.
///
/// `summary` populates the film and TV show selection lists; searches are
/// sent through `api` one at a time.
///
/// # Errors
///
/// Returns an error if terminal setup or event handling fails. Search
/// failures are shown in the result pane instead.
pub async fn run_browser(
    api: &(impl LocalCharacterApi + Sync),
    summary: &FilmsAndTvShows,
    criterion: SearchCriterion,
) -> Result<()> {
    let mut state = BrowserState::new(summary, criterion);

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut state, api).await;

    // Cleanup (always attempt even if event loop failed)
    disable_raw_mode().context("failed to disable raw mode")?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;

    result
}

/// Main event loop.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut BrowserState,
    api: &(impl LocalCharacterApi + Sync),
) -> Result<()> {
    loop {
        terminal
            .draw(|frame| ui::draw(frame, state))
            .context("failed to draw TUI")?;

        if event::poll(std::time::Duration::from_millis(100)).context("failed to poll events")?
            && let Event::Key(key) = event::read().context("failed to read event")?
            && key.kind == KeyEventKind::Press
        {
            match handle_key(state, key.code, key.modifiers) {
                Action::None => {}
                Action::Quit => return Ok(()),
                Action::Open(url) => {
                    let _ = open::that(&url);
                }
                Action::Search { query, criterion } => {
                    state.begin_search();
                    terminal
                        .draw(|frame| ui::draw(frame, state))
                        .context("failed to draw TUI")?;

                    let result = api.search_characters(&query, criterion).await;
                    state.apply_results(result);

                    // The client logs failures to stdout; repaint over them.
                    if matches!(state.outcome, Outcome::Error(_)) {
                        terminal.clear().context("failed to clear terminal")?;
                    }
                }
            }
        }
    }
}

/// Dispatches a key press to the focused widget.
fn handle_key(state: &mut BrowserState, key: KeyCode, modifiers: KeyModifiers) -> Action {
    match key {
        KeyCode::Esc => return Action::Quit,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Action::Quit,
        KeyCode::Tab => {
            state.focus_next();
            return Action::None;
        }
        KeyCode::BackTab => {
            state.focus_prev();
            return Action::None;
        }
        _ => {}
    }

    match state.focus {
        Focus::Query => handle_query_input(state, key),
        Focus::Films | Focus::TvShows => handle_selection_input(state, key),
        Focus::Results => handle_results_input(state, key),
    }
}

/// Handles key input in the query field.
fn handle_query_input(state: &mut BrowserState, key: KeyCode) -> Action {
    match key {
        KeyCode::Enter => return state.search_from_query(),
        KeyCode::Backspace => state.query_pop(),
        KeyCode::Up => state.criterion_prev(),
        KeyCode::Down => state.criterion_next(),
        KeyCode::Char(c) => state.query_push(c),
        _ => {}
    }
    Action::None
}

/// Handles key input in a selection list.
fn handle_selection_input(state: &mut BrowserState, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Enter => return state.search_from_selection(),
        KeyCode::Up | KeyCode::Char('k') => state.move_up(),
        KeyCode::Down | KeyCode::Char('j') => state.move_down(),
        _ => {}
    }
    Action::None
}

/// Handles key input in the result pane.
fn handle_results_input(state: &mut BrowserState, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('o') => return state.open_current(),
        KeyCode::Up | KeyCode::Char('k') => state.move_up(),
        KeyCode::Down | KeyCode::Char('j') => state.move_down(),
        _ => {}
    }
    Action::None
}
