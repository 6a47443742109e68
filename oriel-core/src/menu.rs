//! The menu item data model.

use std::fmt;
use std::sync::Arc;

use vello::kurbo::BezPath;
use vello::peniko::{Blob, ImageAlphaType, ImageData, ImageFormat};

use crate::app::update::Update;
use crate::widget::{BoxedWidget, Widget};

/// Callback run when a menu item is activated.
pub type MenuAction = Arc<dyn Fn() -> Update + Send + Sync>;

/// Identity of a menu row, forwarded with activation notifications.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub String);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An icon displayed next to a menu item's label.
pub enum Icon {
    /// A template shape whose pixels act as a mask; it is recolored with
    /// the row's current content tint.
    Template(BezPath),
    /// An opaque bitmap, drawn unmodified.
    Bitmap(ImageData),
}

impl Icon {
    /// Whether this icon is recolorable.
    pub fn is_template(&self) -> bool {
        matches!(self, Icon::Template(_))
    }

    /// Convenience helper to build a bitmap icon from raw RGBA pixels.
    pub fn from_rgba(size: (u32, u32), pixels: impl Into<Vec<u8>>) -> Self {
        let (width, height) = size;
        Icon::Bitmap(ImageData {
            data: Blob::from(pixels.into()),
            format: ImageFormat::Rgba8,
            alpha_type: ImageAlphaType::Alpha,
            width,
            height,
        })
    }
}

/// One entry of a popup menu.
///
/// An item either carries standard content (title, optional icon) or a
/// fully custom view; the row decides its mode once, at construction, from
/// whether [`custom_view`](MenuItem::custom_view) is present.
pub struct MenuItem {
    /// Unique identifier for the menu item.
    pub id: String,
    /// Display text for the menu item.
    pub title: String,
    /// Optional icon rendered next to the title.
    pub icon: Option<Icon>,
    /// Callback run when the item is activated; `None` means activation is
    /// a no-op (the row still notifies outward).
    pub action: Option<MenuAction>,
    /// Optional caller-supplied view replacing the standard content.
    pub custom_view: Option<BoxedWidget>,
    /// Whether the item reacts to pointer input.
    pub enabled: bool,
}

impl MenuItem {
    /// Create a new menu item.
    pub fn new(id: impl ToString, title: impl ToString) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            icon: None,
            action: None,
            custom_view: None,
            enabled: true,
        }
    }

    /// Set the icon for this item.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the callback for when this item is activated.
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn() -> Update + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Replace the standard content with a custom view.
    pub fn with_custom_view(mut self, view: impl Widget + 'static) -> Self {
        self.custom_view = Some(Box::new(view));
        self
    }

    /// Set whether this item is enabled.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Check if this item supplies a custom view.
    pub fn has_custom_view(&self) -> bool {
        self.custom_view.is_some()
    }
}
