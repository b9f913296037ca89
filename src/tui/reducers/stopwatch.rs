use tracing::{debug, trace};

use crate::stopwatch::{format_time, PrimaryOutcome};
use crate::tui::action::{Action, StopwatchAction};
use crate::tui::component::Effect;
use crate::tui::state::AppState;
use crate::tui::types::{ScrollDirection, Tab, Ticker};

/// Handle stopwatch engine and lap list actions
pub fn reduce_stopwatch(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::Stopwatch(StopwatchAction::Toggle { at }) => Ok(toggle(state, *at)),
        Action::Stopwatch(StopwatchAction::Tick { at }) => Ok(tick(state, *at)),
        Action::Stopwatch(StopwatchAction::Primary) => Ok(primary(state)),
        Action::ScrollLaps(direction) => Ok(scroll_laps(state, *direction)),
        _ => Err(state),
    }
}

fn toggle(state: AppState, at: u64) -> (AppState, Effect) {
    let mut new_state = state;
    let running = new_state.stopwatch.engine.toggle(at);
    debug!("STOPWATCH: {} at {}", if running { "started" } else { "stopped" }, at);

    let effect = if !running {
        Effect::StopTicker(Ticker::Stopwatch)
    } else if new_state.navigation.current_tab == Tab::Stopwatch {
        Effect::StartTicker(Ticker::Stopwatch)
    } else {
        // Armed when the tab becomes visible
        Effect::None
    };
    (new_state, effect)
}

fn tick(state: AppState, at: u64) -> (AppState, Effect) {
    let mut new_state = state;
    let delta = new_state.stopwatch.engine.tick(at);
    trace!("STOPWATCH: tick at {} (+{}ms)", at, delta);
    (new_state, Effect::None)
}

fn primary(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    let outcome = new_state.stopwatch.engine.primary_action();
    new_state.stopwatch.lap_scroll = 0;

    let message = match outcome {
        PrimaryOutcome::Lap => {
            let engine = &new_state.stopwatch.engine;
            format!(
                "Lap {} recorded at {}",
                engine.lap_number(0),
                format_time(engine.elapsed_millis())
            )
        }
        PrimaryOutcome::Reset => "Stopwatch reset".to_string(),
    };
    debug!("STOPWATCH: {}", message);
    let effect = Effect::Action(Action::SetStatusMessage {
        message,
        is_error: false,
    });
    (new_state, effect)
}

fn scroll_laps(state: AppState, direction: ScrollDirection) -> (AppState, Effect) {
    let mut new_state = state;
    let last = new_state.stopwatch.engine.laps().len().saturating_sub(1);
    let scroll = &mut new_state.stopwatch.lap_scroll;
    *scroll = match direction {
        ScrollDirection::Up => scroll.saturating_sub(1),
        ScrollDirection::Down => (*scroll + 1).min(last),
    };
    (new_state, Effect::None)
}
