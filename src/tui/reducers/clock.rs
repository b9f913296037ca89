use crate::clock::ClockSample;
use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::state::AppState;

/// Store a fresh wall-clock sample
pub fn reduce_clock(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::ClockTick(now) => {
            let mut new_state = state;
            let sample = ClockSample::sample(now, &new_state.system.config);
            tracing::trace!("CLOCK: {} {}", sample.time, sample.date);
            new_state.clock.sample = Some(sample);
            Ok((new_state, Effect::None))
        }
        _ => Err(state),
    }
}
