// SPDX-License-Identifier: MIT OR Apache-2.0

//! Color resolution for menu row content

use oriel_core::vg::peniko::Color;
use oriel_theme::style::MenuStyle;

/// Colors a menu row paints its label and template icons with.
#[derive(Clone, Debug, PartialEq)]
pub struct RowPalette {
    /// Content color of a plain row.
    pub idle: Color,
    /// Content color while hovered.
    pub hovered: Color,
    /// Content color of the selected row.
    pub selected: Color,
    /// Content color of a disabled row.
    pub disabled: Color,
    /// Optional fill behind a hovered row.
    pub hover_background: Option<Color>,
}

impl RowPalette {
    /// Extract the row palette from the shared style.
    pub fn from_style(style: &MenuStyle) -> Self {
        Self {
            idle: style.palette.color_idle,
            hovered: style.palette.color_hovered,
            selected: style.palette.color_selected,
            disabled: style.palette.color_disabled,
            hover_background: style.palette.hover_background,
        }
    }
}

/// Resolve the content color for a row's visual state.
///
/// A disabled row always takes the disabled color; otherwise hover wins
/// over selection, and selection over the idle color.
pub fn resolve_color(enabled: bool, hovering: bool, selected: bool, palette: &RowPalette) -> Color {
    if !enabled {
        palette.disabled
    } else if hovering {
        palette.hovered
    } else if selected {
        palette.selected
    } else {
        palette.idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> RowPalette {
        RowPalette {
            idle: Color::from_rgb8(1, 1, 1),
            hovered: Color::from_rgb8(2, 2, 2),
            selected: Color::from_rgb8(3, 3, 3),
            disabled: Color::from_rgb8(4, 4, 4),
            hover_background: None,
        }
    }

    #[test]
    fn test_hover_wins_over_selection() {
        let p = palette();
        assert_eq!(resolve_color(true, true, true, &p), p.hovered);
        assert_eq!(resolve_color(true, true, false, &p), p.hovered);
    }

    #[test]
    fn test_selection_wins_over_idle() {
        let p = palette();
        assert_eq!(resolve_color(true, false, true, &p), p.selected);
        assert_eq!(resolve_color(true, false, false, &p), p.idle);
    }

    #[test]
    fn test_disabled_overrides_everything() {
        let p = palette();
        assert_eq!(resolve_color(false, true, true, &p), p.disabled);
        assert_eq!(resolve_color(false, false, false, &p), p.disabled);
    }
}
