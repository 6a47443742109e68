// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interaction logic for the menu row widget (hover and click tracking)

use std::sync::Arc;

use nalgebra::Vector2;
use oriel_core::app::info::AppInfo;
use oriel_core::app::update::Update;
use oriel_core::vg::kurbo::Rect;
use oriel_core::window::{ElementState, MouseButton};

/// Callback fired when the hover state flips. Receives the new state.
pub type HoverCallback = Arc<dyn Fn(bool) -> Update + Send + Sync>;

/// Callback fired on a primary click inside the surface.
pub type ClickCallback = Arc<dyn Fn() -> Update + Send + Sync>;

/// What happened during one [`InteractionSurface::update`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceEvents {
    /// `Some(state)` when the hover state flipped this pass.
    pub hover_changed: Option<bool>,
    /// Number of primary clicks that landed on the surface this pass.
    pub clicks: u32,
}

/// An invisible, full-bleed layer tracking pointer hover and clicks over a
/// row.
///
/// The surface never draws anything and never takes part in layout; the
/// owning row feeds it the row bounds each update pass. A disabled surface
/// stays inert: it reports no hover changes and no clicks.
pub struct InteractionSurface {
    enabled: bool,
    hovering: bool,
    on_hover_changed: Option<HoverCallback>,
    on_click: Option<ClickCallback>,
}

impl InteractionSurface {
    /// Create a new surface. The enabled flag is fixed for the surface's
    /// lifetime.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            hovering: false,
            on_hover_changed: None,
            on_click: None,
        }
    }

    /// Set the callback fired when the hover state flips.
    pub fn set_on_hover_changed<F>(&mut self, callback: F)
    where
        F: Fn(bool) -> Update + Send + Sync + 'static,
    {
        self.on_hover_changed = Some(Arc::new(callback));
    }

    /// Set the callback fired on a primary click.
    pub fn set_on_click<F>(&mut self, callback: F)
    where
        F: Fn() -> Update + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(callback));
    }

    /// Whether the surface reacts to pointer input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the pointer is currently over the surface.
    pub fn is_hovering(&self) -> bool {
        self.enabled && self.hovering
    }

    /// Whether the cursor position falls inside the given bounds.
    pub fn hit_test(bounds: Rect, cursor_pos: Option<Vector2<f64>>) -> bool {
        cursor_pos.is_some_and(|pos| {
            pos.x >= bounds.x0 && pos.x <= bounds.x1 && pos.y >= bounds.y0 && pos.y <= bounds.y1
        })
    }

    /// Process one input snapshot against the given bounds.
    ///
    /// Fires the registered callbacks, accumulates their update flags into
    /// the returned value, and reports the transitions so the owner can
    /// react as well. Repeated passes with the pointer parked inside (or
    /// outside) the bounds report nothing new.
    pub fn update(&mut self, bounds: Rect, info: &AppInfo) -> (SurfaceEvents, Update) {
        let mut events = SurfaceEvents::default();
        let mut update = Update::empty();

        if !self.enabled {
            return (events, update);
        }

        let inside = Self::hit_test(bounds, info.cursor_pos);
        if inside != self.hovering {
            self.hovering = inside;
            events.hover_changed = Some(inside);
            if let Some(callback) = &self.on_hover_changed {
                update |= callback(inside);
            }
        }

        if inside {
            for (_, button, state) in &info.buttons {
                if *button == MouseButton::Left && *state == ElementState::Pressed {
                    events.clicks += 1;
                    if let Some(callback) = &self.on_click {
                        update |= callback();
                    }
                }
            }
        }

        (events, update)
    }
}
