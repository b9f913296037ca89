use super::action::Action;
use super::component::Effect;
use super::state::AppState;

use crate::tui::reducers::{reduce_clock, reduce_navigation, reduce_stopwatch};

/// Apply `action` to `state`, returning the next state and the work the
/// runtime should do
///
/// No I/O and no clock reads happen here; timestamps arrive inside the
/// actions. Sub-reducers take the state by value and hand it back as
/// `Err(state)` when the action is not theirs, so it is never cloned.
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    let state = match reduce_navigation(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_stopwatch(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_clock(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::SetStatusMessage { message, is_error } => {
            let mut new_state = state;
            if is_error {
                new_state.system.set_status_error_message(message);
            } else {
                new_state.system.set_status_message(message);
            }
            (new_state, Effect::None)
        }

        _ => (state, Effect::None),
    }
}
