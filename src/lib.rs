pub mod clock;
pub mod commands;
pub mod config;
pub mod stopwatch;
pub mod time_source;
pub mod tui;
