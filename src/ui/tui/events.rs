//! Event handling for the catalog browser
//!
//! Maps keyboard and mouse events to application actions.

use super::state::AppState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Exit the browser
    Exit,
    /// Query changed, the filtered view needs recomputation
    QueryChanged,
    /// No action taken
    Ignored,
}

/// Handle a key event against the current state
fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Exit,

        // Card list navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.scroll_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.scroll_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::QueryChanged
        }
        (KeyCode::Backspace, _) => {
            if state.query.is_empty() {
                EventResult::Ignored
            } else {
                state.query_backspace();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Delete, _) => {
            if state.query_cursor >= state.query.len() {
                EventResult::Ignored
            } else {
                state.query_delete();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query_clear();
            EventResult::QueryChanged
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            state.query_delete_word();
            EventResult::QueryChanged
        }

        _ => EventResult::Ignored,
    }
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.scroll_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.scroll_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
