//! Leaf widgets rendered by the component tree
//!
//! Each widget implements `ElementWidget` and draws straight into a
//! ratatui buffer, so it can be tested against a plain test buffer.

pub mod big_text;
pub use big_text::{BigText, BIG_TEXT_HEIGHT};

pub mod button_row;
pub use button_row::ButtonRow;

pub mod label;
pub use label::{Label, Tone};

pub mod lap_list;
pub use lap_list::LapList;

pub mod tab_bar;
pub use tab_bar::TabBar;
