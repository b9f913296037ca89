// Component library exports

pub mod app;
pub mod clock_tab;
pub mod status_bar;
pub mod stopwatch_tab;

pub use app::App;
pub use clock_tab::ClockTab;
pub use status_bar::StatusBar;
pub use stopwatch_tab::StopwatchTab;
