use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::config::DisplayConfig;
use crate::tui::component::ElementWidget;

/// Colour role of a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Dim,
    Error,
}

impl Tone {
    pub fn style(&self, config: &DisplayConfig) -> Style {
        match self {
            Self::Normal => Style::default(),
            Self::Dim => Style::default().fg(config.dim_fg),
            Self::Error => Style::default().fg(config.error_fg),
        }
    }
}

/// A single line of text
#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
    pub tone: Tone,
    pub alignment: Alignment,
}

impl Label {
    pub fn centered(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            alignment: Alignment::Center,
        }
    }

    pub fn left(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            alignment: Alignment::Left,
        }
    }
}

impl ElementWidget for Label {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        Paragraph::new(self.text.as_str())
            .style(self.tone.style(config))
            .alignment(self.alignment)
            .render(area, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
