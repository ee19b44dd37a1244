//! Catalog browser application loop
//!
//! Owns the terminal, drives the draw/event cycle, and completes the
//! one-shot catalog fetch.

use super::events::{self, EventResult};
use super::state::AppState;
use super::theme::Theme;
use super::widgets::{CardList, HelpBar, KeyHint, ProductCard, SearchBar, StatusBar};
use crate::PneuError;
use crate::catalog::{self, CatalogClient, FetchResult};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// Event poll timeout; also bounds the latency of fetch-result delivery
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Run the interactive catalog browser
///
/// Spawns the catalog fetch, then draws and handles events until the user
/// exits. The terminal is restored before returning. If the fetch is still
/// outstanding on exit, its late result dies with the dropped channel.
///
/// # Errors
///
/// Returns `PneuError` if the terminal cannot be configured or an I/O
/// error occurs in the event loop.
pub fn run(client: CatalogClient, initial_query: String) -> Result<(), PneuError> {
    let fetch = catalog::spawn_fetch(client);
    let mut state = AppState::new(initial_query);
    let theme = Theme::default();

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut state, &theme, &fetch);
    cleanup_terminal()?;
    result
}

/// Setup terminal for TUI
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Cleanup terminal after TUI
fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Draw and handle events until the user exits
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut AppState,
    theme: &Theme,
    fetch: &Receiver<FetchResult>,
) -> Result<(), PneuError> {
    let hints = HelpBar::default_hints();

    loop {
        if let Ok(result) = fetch.try_recv() {
            state.finish_fetch(result);
        }

        terminal.draw(|frame| draw(frame, state, theme, &hints))?;

        match events::poll_and_handle(state, POLL_TIMEOUT)? {
            EventResult::Exit => return Ok(()),
            EventResult::QueryChanged => state.refilter(),
            EventResult::Continue | EventResult::Ignored => {}
        }
    }
}

/// Render one frame
fn draw(frame: &mut Frame, state: &mut AppState, theme: &Theme, hints: &[KeyHint]) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Search bar
            Constraint::Min(ProductCard::HEIGHT),     // Card list
            Constraint::Length(3),                    // Status bar
            Constraint::Length(1),                    // Help bar
        ])
        .split(area);

    let list_inner_height = main_layout[1].height.saturating_sub(2);
    state.visible_cards = ((list_inner_height / ProductCard::HEIGHT).max(1)) as usize;

    let search_bar = SearchBar::new(&state.query, state.query_cursor, theme);
    frame.render_widget(search_bar, main_layout[0]);

    let card_list = CardList::new(state, theme);
    frame.render_widget(card_list, main_layout[1]);

    let status_bar = StatusBar::new(state, theme);
    frame.render_widget(status_bar, main_layout[2]);

    let help_bar = HelpBar::new(hints, theme);
    frame.render_widget(help_bar, main_layout[3]);
}
