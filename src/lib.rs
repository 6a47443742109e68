#![warn(missing_docs)]

//! Popup-menu widgets for Rust: selectable rows with icons, checkmarks and
//! hover states, plus the style and layout plumbing they are built on.

pub use nalgebra as math;
pub use vello::peniko as color;

pub use oriel_core as core;
pub use oriel_theme as theme;
pub use oriel_widgets as widgets;

/// A "prelude" for users of the oriel widget kit.
///
/// Importing this module brings into scope the most common types needed to
/// build and drive menu rows.
///
/// ```rust
/// use oriel::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::app::info::AppInfo;
    pub use crate::core::app::update::Update;
    pub use crate::core::layout::*;
    pub use crate::core::menu::{Icon, MenuItem, RowId};
    pub use crate::core::signal::{MaybeSignal, StateSignal};
    pub use crate::core::widget::{BoxedWidget, Widget, WidgetLayoutExt};
    pub use crate::theme::style::{Alignment, ContentInsets, MenuPalette, MenuStyle};
    pub use crate::widgets::checkmark::Checkmark;
    pub use crate::widgets::menu_row::MenuRow;
}
