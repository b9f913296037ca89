pub mod clock;
pub mod navigation;
pub mod stopwatch;

pub use clock::reduce_clock;
pub use navigation::{reduce_navigation, tab_tickers};
pub use stopwatch::reduce_stopwatch;
