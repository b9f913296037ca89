use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::stopwatch::format_time;
use crate::tui::component::ElementWidget;

/// Columns kept free on each side of the list
const SIDE_PADDING: u16 = 2;

/// Scrollable list of recorded laps, newest first
///
/// Each lap takes two rows: "Lap N" with its time right-aligned, then a
/// divider rule.
#[derive(Debug, Clone)]
pub struct LapList {
    /// Lap number and time, newest first
    pub laps: Vec<(usize, u64)>,
    /// Index of the first visible lap
    pub scroll: usize,
}

impl ElementWidget for LapList {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width <= SIDE_PADDING * 2 || area.height == 0 {
            return;
        }

        let x = area.x + SIDE_PADDING;
        let width = area.width - SIDE_PADDING * 2;
        let divider_style = Style::default().fg(config.dim_fg);
        let mut y = area.y;

        for (number, millis) in self.laps.iter().skip(self.scroll) {
            if y >= area.bottom() {
                break;
            }

            let label = format!("Lap {}", number);
            let time = format_time(*millis);
            buf.set_stringn(x, y, &label, width as usize, Style::default());
            let time_width = time.width() as u16;
            if time_width + (label.width() as u16) < width {
                buf.set_string(x + width - time_width, y, &time, Style::default());
            }
            y += 1;

            if y < area.bottom() {
                buf.set_string(x, y, "─".repeat(width as usize), divider_style);
                y += 1;
            }
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwatch::Stopwatch;
    use crate::tui::testing::{assert_buffer, render_widget};

    #[test]
    fn test_laps_newest_first_with_dividers() {
        let widget = LapList {
            laps: vec![(2, 1_234), (1, 500)],
            scroll: 0,
        };
        let buf = render_widget(&widget, 24, 4);

        assert_buffer(&buf, &[
            "  Lap 2       00:01.23",
            "  ────────────────────",
            "  Lap 1       00:00.50",
            "  ────────────────────",
        ]);
    }

    #[test]
    fn test_scroll_skips_newer_laps() {
        let widget = LapList {
            laps: vec![(3, 3_000), (2, 2_000), (1, 1_000)],
            scroll: 1,
        };
        let buf = render_widget(&widget, 24, 3);

        assert_buffer(&buf, &[
            "  Lap 2       00:02.00",
            "  ────────────────────",
            "  Lap 1       00:01.00",
        ]);
    }

    #[test]
    fn test_duplicate_times_keep_engine_numbers() {
        let mut engine = Stopwatch::new();
        engine.toggle(0);
        engine.primary_action();
        engine.primary_action();
        let widget = LapList {
            laps: engine.numbered_laps().collect(),
            scroll: 0,
        };
        let buf = render_widget(&widget, 24, 3);

        assert_buffer(&buf, &[
            "  Lap 2       00:00.00",
            "  ────────────────────",
            "  Lap 1       00:00.00",
        ]);
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let widget = LapList {
            laps: Vec::new(),
            scroll: 0,
        };
        let buf = render_widget(&widget, 24, 2);

        assert_buffer(&buf, &["", ""]);
    }

    #[test]
    fn test_narrow_area_drops_time_column() {
        let widget = LapList {
            laps: vec![(1, 500)],
            scroll: 0,
        };
        let buf = render_widget(&widget, 14, 1);

        assert_buffer(&buf, &["  Lap 1"]);
    }
}
