use ratatui::{buffer::Buffer, layout::Rect};

use crate::clock::ClockSample;
use crate::config::DisplayConfig;
use crate::tui::component::{Component, Element, ElementWidget};
use crate::tui::widgets::{BigText, Label, Tone, BIG_TEXT_HEIGHT};

/// Shown until the first clock sample arrives
const PLACEHOLDER_TIME: &str = "--:--";

/// Caption, gap, digits, gap, date
const FACE_HEIGHT: u16 = 1 + 1 + BIG_TEXT_HEIGHT + 1 + 1;

/// ClockTab component - the local wall clock
pub struct ClockTab;

impl Component for ClockTab {
    type Props = Option<ClockSample>;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        let (time, date) = match props {
            Some(sample) => (sample.time.clone(), sample.date.clone()),
            None => (PLACEHOLDER_TIME.to_string(), String::new()),
        };
        Element::widget(ClockFace { time, date })
    }
}

/// Vertically centred block holding the caption, big time and date
#[derive(Debug, Clone)]
struct ClockFace {
    time: String,
    date: String,
}

/// The `height` rows starting `offset` rows into `area`, clipped to it
fn row(area: Rect, offset: u16, height: u16) -> Option<Rect> {
    if offset >= area.height {
        return None;
    }
    Some(Rect {
        y: area.y + offset,
        height: height.min(area.height - offset),
        ..area
    })
}

impl ElementWidget for ClockFace {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let top = area.height.saturating_sub(FACE_HEIGHT) / 2;

        if let Some(rect) = row(area, top, 1) {
            Label::centered("Local Time", Tone::Dim).render(rect, buf, config);
        }
        if let Some(rect) = row(area, top + 2, BIG_TEXT_HEIGHT) {
            BigText::new(self.time.as_str()).render(rect, buf, config);
        }
        if let Some(rect) = row(area, top + 3 + BIG_TEXT_HEIGHT, 1) {
            Label::centered(self.date.as_str(), Tone::Dim).render(rect, buf, config);
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
