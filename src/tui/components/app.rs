use crate::tui::component::{vertical, Component, Constraint, Element};
use crate::tui::state::AppState;
use crate::tui::types::Tab;
use crate::tui::widgets::TabBar;

use super::{ClockTab, StatusBar, StopwatchTab};

/// Root App component
///
/// Renders the active tab's content above the tab bar, with the status
/// line at the very bottom. It takes the whole AppState as props.
pub struct App;

impl Component for App {
    type Props = AppState;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        tracing::trace!("APP: view for tab {:?}", props.navigation.current_tab);
        vertical(
            [
                Constraint::Min(0),    // Tab content
                Constraint::Length(2), // TabBar (rule + labels)
                Constraint::Length(1), // StatusBar
            ],
            vec![
                self.render_content(props),
                Element::widget(TabBar::new(props.navigation.current_tab)),
                StatusBar.view(&props.system, &()),
            ],
        )
    }
}

impl App {
    fn render_content(&self, state: &AppState) -> Element {
        match state.navigation.current_tab {
            Tab::Clock => ClockTab.view(&state.clock.sample, &()),
            Tab::Stopwatch => StopwatchTab.view(&state.stopwatch, &()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockSample;
    use crate::config::DisplayConfig;
    use crate::tui::renderer::Renderer;
    use crate::tui::testing::buffer_lines;
    use ratatui::{buffer::Buffer, layout::Rect};

    fn render(state: &AppState) -> Vec<String> {
        let element = App.view(state, &());
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 20));
        Renderer::default().render(&element, buf.area, &mut buf, &DisplayConfig::default());
        buffer_lines(&buf)
    }

    #[test]
    fn test_app_has_content_tab_bar_and_status() {
        match App.view(&AppState::default(), &()) {
            Element::Container { children, .. } => assert_eq!(children.len(), 3),
            _ => panic!("Expected container element"),
        }
    }

    #[test]
    fn test_clock_tab_is_shown_by_default() {
        let mut state = AppState::default();
        state.clock.sample = Some(ClockSample {
            time: "09:41".to_string(),
            date: "Mon, 19 Oct".to_string(),
        });
        let lines = render(&state);

        assert!(lines.iter().any(|l| l.trim() == "Local Time"));
        assert!(lines.iter().any(|l| l.trim() == "Mon, 19 Oct"));
        assert!(lines[17].starts_with("──────┬"));
        assert!(lines[18].starts_with("Clock │ Stopwatch"));
        assert!(lines[19].starts_with(" Keys:"));
    }

    #[test]
    fn test_stopwatch_tab_content() {
        let mut state = AppState::default();
        state.navigation.current_tab = Tab::Stopwatch;
        let lines = render(&state);

        assert!(!lines.iter().any(|l| l.contains("Local Time")));
        assert!(lines.iter().any(|l| l.contains("Start")));
        assert!(lines.iter().any(|l| l.contains("Reset")));
    }
}
