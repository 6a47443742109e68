//! Core functionality for the oriel widget kit: layout solving, the widget
//! trait, input snapshots, signals, text rendering and the menu data model.

/// Vector graphics re-export. Contains `kurbo` geometry and `peniko` brushes.
pub use vello as vg;

/// Windowing re-exports (pointer/keyboard event types).
pub mod window {
    pub use winit::event::*;
    pub use winit::keyboard::*;
}

/// Application-side plumbing: per-frame input snapshots and update flags.
pub mod app;

/// Layout styles and the flexbox solver.
pub mod layout;

/// The menu item data model.
pub mod menu;

/// Value-or-signal containers for widget state.
pub mod signal;

/// Text layout and glyph rendering.
pub mod text_render;

/// The graphics abstraction widgets draw through.
pub mod vgi;

/// The base widget trait.
pub mod widget;
