use chrono::{DateTime, Local};

use super::types::{ScrollDirection, Tab};

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - Tickers (periodic clock and stopwatch updates)
/// - Effects returned by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation actions
    NavigateTab(Tab),
    NavigateTabLeft,
    NavigateTabRight,

    // Stopwatch actions
    Stopwatch(StopwatchAction),
    ScrollLaps(ScrollDirection),

    /// Fresh wall-clock reading from the clock ticker
    ClockTick(DateTime<Local>),

    // System actions
    SetStatusMessage { message: String, is_error: bool },
    Quit,
}

/// Stopwatch actions, stamped with the time they were produced at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchAction {
    Toggle { at: u64 },
    Tick { at: u64 },
    /// Lap while running, reset while stopped
    Primary,
}

impl Action {
    /// Returns true for the high-frequency ticker actions
    pub fn is_tick(&self) -> bool {
        matches!(
            self,
            Self::ClockTick(_) | Self::Stopwatch(StopwatchAction::Tick { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_tick() {
        assert!(Action::Stopwatch(StopwatchAction::Tick { at: 1 }).is_tick());
        assert!(Action::ClockTick(Local::now()).is_tick());
        assert!(!Action::Stopwatch(StopwatchAction::Toggle { at: 1 }).is_tick());
        assert!(!Action::Stopwatch(StopwatchAction::Primary).is_tick());
        assert!(!Action::NavigateTabRight.is_tick());
        assert!(!Action::Quit.is_tick());
    }
}
