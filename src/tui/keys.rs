/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
/// Stopwatch actions are stamped with the current time here, which keeps
/// the reducer free of clock reads.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

use super::action::{Action, StopwatchAction};
use super::state::AppState;
use super::types::{ScrollDirection, Tab};
use crate::time_source::TimeSource;

/// Handle global keys that work regardless of tab
fn handle_global_keys(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

/// Handle direct tab switching via number keys and tab cycling
fn handle_tab_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('1') => Some(Action::NavigateTab(Tab::Clock)),
        KeyCode::Char('2') => Some(Action::NavigateTab(Tab::Stopwatch)),
        KeyCode::Left | KeyCode::BackTab => Some(Action::NavigateTabLeft),
        KeyCode::Right | KeyCode::Tab => Some(Action::NavigateTabRight),
        _ => None,
    }
}

/// Handle Stopwatch tab controls
fn handle_stopwatch_keys(key_code: KeyCode, time: &dyn TimeSource) -> Option<Action> {
    match key_code {
        KeyCode::Char(' ') | KeyCode::Char('s') => Some(Action::Stopwatch(StopwatchAction::Toggle {
            at: time.now_millis(),
        })),
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Char('r') => {
            Some(Action::Stopwatch(StopwatchAction::Primary))
        }
        KeyCode::Up => Some(Action::ScrollLaps(ScrollDirection::Up)),
        KeyCode::Down => Some(Action::ScrollLaps(ScrollDirection::Down)),
        _ => None,
    }
}

/// Convert a key event into an action, if it maps to one
pub fn key_to_action(key: KeyEvent, state: &AppState, time: &dyn TimeSource) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    trace!("KEY: {:?} on {:?}", key.code, state.navigation.current_tab);

    if let Some(action) = handle_global_keys(&key) {
        return Some(action);
    }

    if let Some(action) = handle_tab_keys(key.code) {
        return Some(action);
    }

    match state.navigation.current_tab {
        Tab::Stopwatch => handle_stopwatch_keys(key.code, time),
        Tab::Clock => None,
    }
}
