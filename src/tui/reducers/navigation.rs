use tracing::{debug, trace};

use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::state::AppState;
use crate::tui::types::{Tab, Ticker};

/// Handle all navigation-related actions
pub fn reduce_navigation(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::NavigateTab(tab) => Ok(navigate_to_tab(state, *tab)),
        Action::NavigateTabLeft => {
            let tab = state.navigation.current_tab.prev();
            Ok(navigate_to_tab(state, tab))
        }
        Action::NavigateTabRight => {
            let tab = state.navigation.current_tab.next();
            Ok(navigate_to_tab(state, tab))
        }
        _ => Err(state),
    }
}

fn navigate_to_tab(state: AppState, tab: Tab) -> (AppState, Effect) {
    if state.navigation.current_tab == tab {
        trace!("Already on tab {:?}", tab);
        return (state, Effect::None);
    }

    debug!("NAV: {:?} -> {:?}", state.navigation.current_tab, tab);
    let mut new_state = state;
    new_state.navigation.current_tab = tab;
    new_state.system.reset_status_message();
    let effect = tab_tickers(&new_state);
    (new_state, effect)
}

/// Tickers the visible tab needs, with the other tab's ticker torn down
///
/// The clock ticker runs while the Clock tab is visible. The stopwatch
/// ticker runs while the Stopwatch tab is visible and the stopwatch is
/// running.
pub fn tab_tickers(state: &AppState) -> Effect {
    match state.navigation.current_tab {
        Tab::Clock => Effect::Batch(vec![
            Effect::StopTicker(Ticker::Stopwatch),
            Effect::StartTicker(Ticker::Clock),
        ]),
        Tab::Stopwatch => {
            let mut effects = vec![Effect::StopTicker(Ticker::Clock)];
            if state.stopwatch.engine.is_running() {
                effects.push(Effect::StartTicker(Ticker::Stopwatch));
            }
            Effect::Batch(effects)
        }
    }
}
