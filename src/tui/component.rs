use ratatui::{buffer::Buffer, layout::Rect};

use super::action::Action;
use super::types::Ticker;
use crate::config::DisplayConfig;

/// A piece of UI that turns props into an element tree
///
/// Views are pure: everything they show comes from `props`, so the same
/// state always yields the same tree. `State` is for view-local data;
/// every component in this crate uses `()`.
pub trait Component: Send {
    type Props: Clone;
    type State: Default + Clone + Send + Sync + 'static;

    fn view(&self, props: &Self::Props, state: &Self::State) -> Element;
}

/// Node of the tree a view returns; drawn by `Renderer`
#[derive(Clone)]
pub enum Element {
    /// Leaf drawn straight into the buffer
    Widget(Box<dyn ElementWidget>),

    /// Children laid out one per constraint; extra children are dropped
    Container {
        children: Vec<Element>,
        layout: ContainerLayout,
    },

    /// Leaves its area blank
    None,
}

impl Element {
    /// Wrap a leaf widget
    pub fn widget(widget: impl ElementWidget + 'static) -> Self {
        Self::Widget(Box::new(widget))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContainerLayout {
    Vertical(Vec<Constraint>),
    Horizontal(Vec<Constraint>),
}

/// Size of one container slot, mapped onto ratatui's constraints
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Constraint {
    Length(u16),
    Min(u16),
    Percentage(u16),
}

/// Work requested by the reducer and carried out by the runtime
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Queue another action
    Action(Action),
    Batch(Vec<Effect>),
    /// Arm a repeating ticker, replacing any running instance
    StartTicker(Ticker),
    /// Cancel a ticker; a no-op when it is not running
    StopTicker(Ticker),
}

/// Leaf widget that can sit in an element tree
///
/// Unlike `ratatui::widgets::Widget` it renders by reference and gets the
/// display colours, so one tree can be drawn on every frame.
pub trait ElementWidget: Send + Sync {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    fn clone_box(&self) -> Box<dyn ElementWidget>;
}

impl Clone for Box<dyn ElementWidget> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Stack `children` top to bottom, one per constraint
pub fn vertical<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Vertical(constraints.to_vec()),
    }
}
