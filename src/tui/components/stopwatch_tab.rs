use crate::stopwatch::format_time;
use crate::tui::component::{vertical, Component, Constraint, Element};
use crate::tui::state::StopwatchState;
use crate::tui::widgets::{BigText, ButtonRow, LapList, Tone, BIG_TEXT_HEIGHT};

/// StopwatchTab component - elapsed time, the two buttons and the lap list
pub struct StopwatchTab;

impl Component for StopwatchTab {
    type Props = StopwatchState;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        let engine = &props.engine;

        // Paused with time on the clock
        let tone = if !engine.is_running() && engine.elapsed_millis() > 0 {
            Tone::Dim
        } else {
            Tone::Normal
        };

        vertical(
            [
                Constraint::Length(1),
                Constraint::Length(BIG_TEXT_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ],
            vec![
                Element::None,
                Element::widget(BigText::new(format_time(engine.elapsed_millis())).with_tone(tone)),
                Element::None,
                Element::widget(ButtonRow {
                    primary_label: engine.primary_label(),
                    toggle_label: engine.toggle_label(),
                    running: engine.is_running(),
                }),
                Element::None,
                Element::widget(LapList {
                    laps: engine.numbered_laps().collect(),
                    scroll: props.lap_scroll,
                }),
            ],
        )
    }
}
