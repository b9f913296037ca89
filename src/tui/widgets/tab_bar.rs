/// TabBar widget - the navigation bar under the content area
///
/// The first row is a rule with connectors above the gaps between tabs,
/// the second row holds the tab labels separated by vertical bars. The
/// selected tab is highlighted.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::tui::component::ElementWidget;
use crate::tui::types::Tab;

#[derive(Debug, Clone)]
pub struct TabBar {
    pub current: Tab,
}

impl TabBar {
    pub fn new(current: Tab) -> Self {
        Self { current }
    }

    fn tab_style(&self, tab: Tab, config: &DisplayConfig) -> Style {
        if tab == self.current {
            Style::default().fg(config.selection_fg)
        } else {
            Style::default().fg(config.dim_fg)
        }
    }

    /// Build the label line with separators
    fn build_tab_line(&self, config: &DisplayConfig) -> Vec<(String, Style)> {
        let base_style = Style::default().fg(config.dim_fg);
        let mut segments = Vec::new();

        for (i, tab) in Tab::ALL.iter().enumerate() {
            if i > 0 {
                segments.push((" │ ".to_string(), base_style));
            }
            segments.push((tab.label().to_string(), self.tab_style(*tab, config)));
        }

        segments
    }

    /// Build the rule line with connectors above tab gaps
    fn build_separator_line(&self, area_width: usize, config: &DisplayConfig) -> Vec<(String, Style)> {
        let base_style = Style::default().fg(config.dim_fg);
        let mut segments = Vec::new();
        let mut pos = 0;

        for (i, tab) in Tab::ALL.iter().enumerate() {
            if i > 0 {
                segments.push(("─┬─".to_string(), base_style));
                pos += 3;
            }
            let tab_width = tab.label().width();
            segments.push(("─".repeat(tab_width), base_style));
            pos += tab_width;
        }

        if pos < area_width {
            segments.push(("─".repeat(area_width - pos), base_style));
        }

        segments
    }
}

fn render_segments(segments: Vec<(String, Style)>, area: Rect, y: u16, buf: &mut Buffer) {
    let mut x = area.x;
    for (text, style) in segments {
        if x >= area.right() {
            break;
        }
        let max_width = (area.right() - x) as usize;
        buf.set_stringn(x, y, &text, max_width, style);
        x += text.width() as u16;
    }
}

impl ElementWidget for TabBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        render_segments(self.build_separator_line(area.width as usize, config), area, area.y, buf);
        render_segments(self.build_tab_line(config), area, area.y + 1, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
