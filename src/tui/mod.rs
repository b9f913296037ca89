// Module declarations
pub mod widgets;
pub mod components;

// Core modules
pub mod action;
pub mod component;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod reducers;
pub mod renderer;
pub mod runtime;
pub mod state;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use action::{Action, StopwatchAction};
pub use component::{Component, Effect, Element};
pub use effects::Tickers;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use renderer::Renderer;
pub use runtime::Runtime;
pub use state::AppState;
pub use types::{ScrollDirection, Tab, Ticker};

use std::io;
use std::sync::Arc;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use crate::config::Config;
use crate::time_source::TimeSource;

/// Key polling interval; short enough for the hundredths display to move smoothly
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Main entry point for TUI mode
///
/// `startup_error` is shown in the status bar once the screen is up, e.g.
/// a config file that failed to load.
pub async fn run(
    config: Config,
    time_source: Arc<dyn TimeSource>,
    startup_error: Option<String>,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut initial_state = AppState::default();
    initial_state.system.config = config;

    let mut runtime = Runtime::new(initial_state, time_source);
    runtime.activate();

    if let Some(message) = startup_error {
        runtime.dispatch(Action::SetStatusMessage {
            message,
            is_error: true,
        });
    }

    let result = run_loop(&mut terminal, &mut runtime);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, runtime: &mut Runtime) -> io::Result<()> {
    let renderer = Renderer::new();
    // The first pass always draws
    let mut input_handled = true;

    loop {
        refresh(terminal, runtime, &renderer, input_handled)?;
        input_handled = false;

        if !event::poll(EVENT_POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                let Some(action) = key_to_action(key, runtime.state(), runtime.time_source()) else {
                    continue;
                };

                if action == Action::Quit {
                    tracing::debug!("ACTION: Quitting application");
                    break;
                }

                runtime.dispatch(action);
                input_handled = true;
            }
            Event::Resize(_, _) => input_handled = true,
            _ => {}
        }
    }

    Ok(())
}

/// Drain queued actions and draw a frame if anything changed
///
/// Returns whether a frame was drawn. Idle passes leave the terminal alone,
/// so the Clock tab only redraws when its ticker fires.
fn refresh<B: Backend>(
    terminal: &mut Terminal<B>,
    runtime: &mut Runtime,
    renderer: &Renderer,
    input_handled: bool,
) -> io::Result<bool> {
    let actions_processed = runtime.process_actions();
    if actions_processed > 0 {
        tracing::trace!("LOOP: Processed {} actions", actions_processed);
    } else if !input_handled {
        return Ok(false);
    }

    terminal.draw(|f| {
        let area = f.area();
        let element = runtime.build();
        let config = &runtime.state().system.config.display;
        renderer.render(&element, area, f.buffer_mut(), config);
    })?;
    Ok(true)
}
