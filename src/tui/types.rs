/// Core type definitions used across the TUI
///
/// This module contains fundamental types that are used throughout
/// the TUI, particularly for navigation and scheduling.

/// Tab enum for main navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Clock,
    Stopwatch,
}

impl Tab {
    /// All tabs in navigation bar order
    pub const ALL: [Tab; 2] = [Tab::Clock, Tab::Stopwatch];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clock => "Clock",
            Self::Stopwatch => "Stopwatch",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Clock => 0,
            Self::Stopwatch => 1,
        }
    }

    /// Tab to the right, wrapping around
    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Tab to the left, wrapping around
    pub fn prev(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Repeating timer tasks owned by the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ticker {
    /// Resamples the wall clock
    Clock,
    /// Advances the running stopwatch
    Stopwatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}
