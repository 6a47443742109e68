//! Per-frame input snapshot handed to widgets.

use nalgebra::Vector2;

use crate::window::{ElementState, MouseButton};

/// Opaque identifier of the pointer device an event came from.
pub type PointerDeviceId = u64;

/// Snapshot of the input state for one update pass.
///
/// The host fills this from its event loop before walking the widget tree;
/// widgets read it inside [`crate::widget::Widget::update`]. Button events
/// are drained after every pass, the cursor position persists between them.
#[derive(Debug, Default)]
pub struct AppInfo {
    /// Current cursor position in window coordinates, if the cursor is
    /// inside the window.
    pub cursor_pos: Option<Vector2<f64>>,
    /// Mouse button state changes since the last pass.
    pub buttons: Vec<(PointerDeviceId, MouseButton, ElementState)>,
}

impl AppInfo {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the per-frame events, keeping the cursor position.
    pub fn reset_frame(&mut self) {
        self.buttons.clear();
    }
}
