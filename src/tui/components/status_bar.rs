use crate::tui::component::{Component, Element};
use crate::tui::state::SystemState;
use crate::tui::widgets::{Label, Tone};

/// StatusBar component - one line of help text or the latest message
///
/// Errors are drawn in the error colour, everything else dimmed.
pub struct StatusBar;

impl Component for StatusBar {
    type Props = SystemState;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        let Some(message) = &props.status_message else {
            return Element::None;
        };

        let tone = if props.status_is_error { Tone::Error } else { Tone::Dim };
        Element::widget(Label::left(format!(" {}", message), tone))
    }
}
