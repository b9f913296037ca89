use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::config::DisplayConfig;
use crate::tui::component::ElementWidget;

const BUTTON_WIDTH: u16 = 11;
const BUTTON_HEIGHT: u16 = 3;

/// The stopwatch's two round buttons: Lap/Reset on the left and
/// Start/Stop on the right
#[derive(Debug, Clone)]
pub struct ButtonRow {
    pub primary_label: &'static str,
    pub toggle_label: &'static str,
    pub running: bool,
}

/// Center a button-sized rect within `area`
fn button_rect(area: Rect) -> Rect {
    let width = BUTTON_WIDTH.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: BUTTON_HEIGHT.min(area.height),
    }
}

fn render_button(label: &str, style: Style, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(style);
    Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(block)
        .render(button_rect(area), buf);
}

impl ElementWidget for ButtonRow {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let half = area.width / 2;
        let left = Rect { width: half, ..area };
        let right = Rect {
            x: area.x + half,
            width: area.width - half,
            ..area
        };

        let toggle_fg = if self.running { config.stop_fg } else { config.start_fg };
        render_button(self.primary_label, Style::default().fg(config.dim_fg), left, buf);
        render_button(self.toggle_label, Style::default().fg(toggle_fg), right, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
