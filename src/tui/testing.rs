//! Buffer helpers for widget, component and renderer tests

use ratatui::{buffer::Buffer, layout::Rect};

use super::component::ElementWidget;
use crate::config::DisplayConfig;

/// Draw `widget` into a fresh `width` x `height` buffer with default colours
pub fn render_widget(widget: &impl ElementWidget, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf, &DisplayConfig::default());
    buf
}

/// One string per buffer row, full width
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (area.top()..area.bottom())
        .map(|y| (area.left()..area.right()).map(|x| buf[(x, y)].symbol()).collect())
        .collect()
}

/// Compare buffer rows with `expected`, ignoring trailing blanks
///
/// Rows are compared as a whole so a failure prints the entire screen.
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual: Vec<String> = buffer_lines(buf)
        .iter()
        .map(|line| line.trim_end().to_string())
        .collect();
    let expected: Vec<String> = expected.iter().map(|line| line.trim_end().to_string()).collect();

    assert_eq!(actual, expected, "buffer contents differ");
}
