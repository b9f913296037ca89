use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::component::{Component, Effect, Element};
use super::components::App;
use super::effects::Tickers;
use super::reducer::reduce;
use super::reducers::tab_tickers;
use super::state::AppState;
use crate::time_source::TimeSource;

/// Owns the state and turns actions into state changes and side effects
///
/// Actions come from key presses via `dispatch` and from tickers via the
/// channel drained by `process_actions`. Dropping the runtime drops its
/// tickers, which aborts their tasks.
pub struct Runtime {
    state: AppState,

    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Repeating timer tasks
    tickers: Tickers,

    time_source: Arc<dyn TimeSource>,
}

impl Runtime {
    /// Create a new runtime with initial state and a time source
    pub fn new(initial_state: AppState, time_source: Arc<dyn TimeSource>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let tickers = Tickers::new(
            action_tx.clone(),
            Arc::clone(&time_source),
            &initial_state.system.config,
        );

        Self {
            state: initial_state,
            action_tx,
            action_rx,
            tickers,
            time_source,
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn time_source(&self) -> &dyn TimeSource {
        self.time_source.as_ref()
    }

    pub fn tickers(&self) -> &Tickers {
        &self.tickers
    }

    /// Arm the tickers the initial tab needs
    ///
    /// Must be called from within a tokio runtime.
    pub fn activate(&mut self) {
        let effect = tab_tickers(&self.state);
        self.execute_effect(effect);
    }

    /// Run one action through the reducer and carry out its effect
    pub fn dispatch(&mut self, action: Action) {
        if action.is_tick() {
            trace!("ACTION: Dispatching {:?}", action);
        } else {
            debug!("ACTION: Dispatching {:?}", action);
        }

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => {
                let _ = self.action_tx.send(action);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    self.execute_effect(e);
                }
            }
            Effect::StartTicker(ticker) => self.tickers.start(ticker),
            Effect::StopTicker(ticker) => self.tickers.stop(ticker),
        }
    }

    /// Dispatch every queued action, returning how many there were
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Element tree for the current state
    pub fn build(&self) -> Element {
        App.view(&self.state, &())
    }

    /// Sender for queueing actions from outside the UI loop
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_source::ManualTimeSource;
    use crate::tui::action::StopwatchAction;
    use crate::tui::keys::key_to_action;
    use crate::tui::types::{Tab, Ticker};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Duration;

    fn create_test_runtime(source: Arc<ManualTimeSource>) -> Runtime {
        Runtime::new(AppState::default(), source)
    }

    fn press(runtime: &mut Runtime, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::empty());
        if let Some(action) = key_to_action(key, runtime.state(), runtime.time_source()) {
            runtime.dispatch(action);
        }
    }

    #[tokio::test]
    async fn test_runtime_initial_state() {
        let runtime = create_test_runtime(Arc::new(ManualTimeSource::new(0)));
        assert_eq!(runtime.state().navigation.current_tab, Tab::Clock);
        assert!(!runtime.tickers().is_active(Ticker::Clock));
    }

    #[tokio::test]
    async fn test_activate_arms_clock_ticker() {
        let mut runtime = create_test_runtime(Arc::new(ManualTimeSource::new(0)));
        runtime.activate();
        assert!(runtime.tickers().is_active(Ticker::Clock));
        assert!(!runtime.tickers().is_active(Ticker::Stopwatch));
    }

    #[tokio::test]
    async fn test_action_queue() {
        let mut runtime = create_test_runtime(Arc::new(ManualTimeSource::new(0)));

        let tx = runtime.action_sender();
        tx.send(Action::NavigateTab(Tab::Stopwatch)).unwrap();

        assert_eq!(runtime.process_actions(), 1);
        assert_eq!(runtime.state().navigation.current_tab, Tab::Stopwatch);
    }

    #[tokio::test]
    async fn test_toggle_arms_and_cancels_stopwatch_ticker() {
        let mut runtime = create_test_runtime(Arc::new(ManualTimeSource::new(0)));
        runtime.activate();

        press(&mut runtime, KeyCode::Char('2'));
        assert!(!runtime.tickers().is_active(Ticker::Clock));

        press(&mut runtime, KeyCode::Char(' '));
        assert!(runtime.state().stopwatch.engine.is_running());
        assert!(runtime.tickers().is_active(Ticker::Stopwatch));

        press(&mut runtime, KeyCode::Char(' '));
        assert!(!runtime.state().stopwatch.engine.is_running());
        assert!(!runtime.tickers().is_active(Ticker::Stopwatch));
    }

    #[tokio::test]
    async fn test_switching_tabs_swaps_tickers() {
        let mut runtime = create_test_runtime(Arc::new(ManualTimeSource::new(0)));
        runtime.activate();
        runtime.dispatch(Action::NavigateTab(Tab::Stopwatch));
        runtime.dispatch(Action::Stopwatch(StopwatchAction::Toggle { at: 0 }));

        runtime.dispatch(Action::NavigateTab(Tab::Clock));
        assert!(runtime.tickers().is_active(Ticker::Clock));
        assert!(!runtime.tickers().is_active(Ticker::Stopwatch));

        runtime.dispatch(Action::NavigateTab(Tab::Stopwatch));
        assert!(!runtime.tickers().is_active(Ticker::Clock));
        assert!(runtime.tickers().is_active(Ticker::Stopwatch));
    }

    #[tokio::test(start_paused = true)]
    async fn test_running_stopwatch_accumulates_from_ticker() {
        let source = Arc::new(ManualTimeSource::new(10_000));
        let mut runtime = create_test_runtime(Arc::clone(&source));
        runtime.dispatch(Action::NavigateTab(Tab::Stopwatch));
        press(&mut runtime, KeyCode::Char('s'));

        // Sleep off the 10ms tick grid so every tick lands before the drain
        for _ in 0..5 {
            source.advance(100);
            tokio::time::sleep(Duration::from_millis(15)).await;
            runtime.process_actions();
        }

        assert_eq!(runtime.state().stopwatch.engine.elapsed_millis(), 500);

        press(&mut runtime, KeyCode::Enter);
        assert_eq!(runtime.state().stopwatch.engine.laps(), &[500]);

        // The status update is queued as a follow-up action
        runtime.process_actions();
        assert_eq!(
            runtime.state().system.status_message.as_deref(),
            Some("Lap 1 recorded at 00:00.50")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_ticker_populates_sample() {
        let mut runtime = create_test_runtime(Arc::new(ManualTimeSource::new(1_700_000_000_000)));
        runtime.activate();

        tokio::time::sleep(Duration::from_millis(1)).await;
        runtime.process_actions();

        assert!(runtime.state().clock.sample.is_some());
    }

    #[tokio::test]
    async fn test_build_returns_component_tree() {
        let runtime = create_test_runtime(Arc::new(ManualTimeSource::new(0)));

        match runtime.build() {
            Element::Container { children, .. } => assert_eq!(children.len(), 3),
            _ => panic!("Expected container element from App component"),
        }
    }
}
