// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constants for the menu row widget

/// Horizontal margin of the hover background inside the row bounds.
pub const HOVER_BG_MARGIN: f64 = 4.0;

/// Corner radius of the hover background.
pub const HOVER_BG_RADIUS: f64 = 4.0;

/// Vertical margin of the default square icon inside the row.
pub const ICON_EDGE_MARGIN: f64 = 6.0;

/// Estimated line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Rough per-character width estimate used when no font metrics are
/// available.
pub const TEXT_CHAR_WIDTH: f64 = 7.2;

/// Minimum width a row asks for regardless of content.
pub const MIN_ROW_WIDTH: f64 = 60.0;
