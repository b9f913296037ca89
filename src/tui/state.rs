use crate::clock::ClockSample;
use crate::config::Config;
use crate::stopwatch::Stopwatch;

use super::types::Tab;

/// Everything the screen shows
///
/// Only `reduce` produces new values; components read slices of it as
/// props. The stopwatch lives here rather than in its tab so it keeps
/// running while the Clock tab is visible; leaving the Stopwatch tab does
/// not reset it, and the time spent away is caught up on return.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub navigation: NavigationState,

    pub stopwatch: StopwatchState,

    pub clock: ClockState,

    /// Config and status line
    pub system: SystemState,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub current_tab: Tab,
}

#[derive(Debug, Clone, Default)]
pub struct StopwatchState {
    pub engine: Stopwatch,
    /// Index of the first visible lap row
    pub lap_scroll: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ClockState {
    /// Last sample; None until the clock ticker first fires
    pub sample: Option<ClockSample>,
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Keys: ←→ switch tab | space start/stop | enter lap/reset | ↑↓ scroll laps | q quit";

#[derive(Debug, Clone)]
pub struct SystemState {
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            config: Config::default(),
            status_message: Some(DEFAULT_STATUS_MESSAGE.to_string()),
            status_is_error: false,
        }
    }
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}
