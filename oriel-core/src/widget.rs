use crate::app::info::AppInfo;
use crate::app::update::Update;
use crate::layout::{LayoutNode, LayoutStyle, StyleNode};
use crate::signal::MaybeSignal;
use crate::vgi::Graphics;
use oriel_theme::id::WidgetId;

/// A boxed widget.
pub type BoxedWidget = Box<dyn Widget>;

/// The base trait for all widgets.
///
/// The host drives a widget in two phases: [`update`](Widget::update) reacts
/// to the input snapshot and reports what needs to happen next, and
/// [`render`](Widget::render) draws the widget into the provided graphics.
/// Both receive the [LayoutNode] previously solved from the widget's
/// [`layout_style`](Widget::layout_style) tree.
pub trait Widget {
    /// Render the widget to the canvas.
    fn render(&mut self, graphics: &mut dyn Graphics, layout_node: &LayoutNode, info: &mut AppInfo);

    /// Return the layout style node for layout computation.
    fn layout_style(&self) -> StyleNode;

    /// Update the widget state with given info and layout. Returns what the
    /// host should do next.
    fn update(&mut self, layout: &LayoutNode, info: &mut AppInfo) -> Update;

    /// Return the widget id.
    fn widget_id(&self) -> WidgetId;
}

/// An extension trait for widgets with a layout style.
pub trait WidgetLayoutExt {
    /// Sets the layout style of the widget.
    fn set_layout_style(&mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>);

    /// Sets the layout style of the widget and returns self.
    fn with_layout_style(mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>) -> Self
    where
        Self: Sized,
    {
        self.set_layout_style(layout_style);
        self
    }
}
