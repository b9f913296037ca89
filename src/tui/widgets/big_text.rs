/// BigText widget - large block-glyph rendering of clock and timer digits
///
/// Glyphs are five rows high. Digits are three columns wide, separators
/// one column, with one blank column between glyphs. When the area is too
/// small the text is drawn plainly on the middle row instead.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use super::label::Tone;
use crate::config::DisplayConfig;
use crate::tui::component::ElementWidget;

/// Rows in every glyph
pub const BIG_TEXT_HEIGHT: u16 = 5;

const GLYPH_GAP: u16 = 1;
const FILL: &str = "█";

type Glyph = [&'static str; BIG_TEXT_HEIGHT as usize];

const BLANK: Glyph = ["   ", "   ", "   ", "   ", "   "];

fn glyph(c: char) -> Glyph {
    match c {
        '0' => ["###", "# #", "# #", "# #", "###"],
        '1' => [" # ", "## ", " # ", " # ", "###"],
        '2' => ["###", "  #", "###", "#  ", "###"],
        '3' => ["###", "  #", "###", "  #", "###"],
        '4' => ["# #", "# #", "###", "  #", "  #"],
        '5' => ["###", "#  ", "###", "  #", "###"],
        '6' => ["###", "#  ", "###", "# #", "###"],
        '7' => ["###", "  #", "  #", "  #", "  #"],
        '8' => ["###", "# #", "###", "# #", "###"],
        '9' => ["###", "# #", "###", "  #", "###"],
        ':' => [" ", "#", " ", "#", " "],
        '.' => [" ", " ", " ", " ", "#"],
        '-' => ["   ", "   ", "###", "   ", "   "],
        _ => BLANK,
    }
}

fn glyph_width(g: &Glyph) -> u16 {
    g[0].len() as u16
}

#[derive(Debug, Clone)]
pub struct BigText {
    pub text: String,
    pub tone: Tone,
}

impl BigText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Normal,
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Columns needed to draw the text with block glyphs
    pub fn width(&self) -> u16 {
        let glyphs: u16 = self.text.chars().map(|c| glyph_width(&glyph(c))).sum();
        let gaps = (self.text.chars().count() as u16).saturating_sub(1) * GLYPH_GAP;
        glyphs + gaps
    }

    fn render_plain(&self, area: Rect, buf: &mut Buffer, style: Style) {
        let text_width = self.text.width() as u16;
        let x = area.x + area.width.saturating_sub(text_width) / 2;
        let y = area.y + area.height / 2;
        buf.set_stringn(x, y, &self.text, area.width as usize, style);
    }
}

impl ElementWidget for BigText {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let style = self.tone.style(config);
        let width = self.width();
        if area.width < width || area.height < BIG_TEXT_HEIGHT {
            self.render_plain(area, buf, style);
            return;
        }

        let mut x = area.x + (area.width - width) / 2;
        for c in self.text.chars() {
            let g = glyph(c);
            for (row, pattern) in g.iter().enumerate() {
                for (col, cell) in pattern.chars().enumerate() {
                    if cell == '#' {
                        buf[(x + col as u16, area.y + row as u16)]
                            .set_symbol(FILL)
                            .set_style(style);
                    }
                }
            }
            x += glyph_width(&g) + GLYPH_GAP;
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
