//! Menu style values shared by every row of a menu.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use vello::peniko::Color;

/// Horizontal alignment of menu row content.
///
/// Two independent instances are carried by a [MenuStyle]: one for the label
/// (and the custom-view pinning) and one for the icon. The checkmark always
/// takes the edge-ordering opposite the icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Content anchors to the leading (left) edge.
    #[default]
    Left,
    /// Content anchors to the trailing (right) edge.
    Right,
}

impl Alignment {
    /// The opposite alignment.
    pub fn mirrored(self) -> Self {
        match self {
            Alignment::Left => Alignment::Right,
            Alignment::Right => Alignment::Left,
        }
    }
}

/// Per-edge padding applied before the arranged content within a row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentInsets {
    /// Padding before the first arranged element.
    pub leading: f64,
    /// Padding after the last arranged element.
    pub trailing: f64,
}

impl ContentInsets {
    /// Create insets with the given leading and trailing padding.
    pub const fn new(leading: f64, trailing: f64) -> Self {
        Self { leading, trailing }
    }
}

impl Default for ContentInsets {
    fn default() -> Self {
        Self::new(12.0, 12.0)
    }
}

/// Colors used to paint a menu row's label and template icons.
///
/// When a row is enabled, the resolution precedence is hovered over selected
/// over idle; a disabled row always uses `color_disabled`.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuPalette {
    /// Content color of a plain, unhovered row.
    pub color_idle: Color,
    /// Content color while the pointer is over the row.
    pub color_hovered: Color,
    /// Content color of the currently selected row.
    pub color_selected: Color,
    /// Content color of a disabled row.
    pub color_disabled: Color,
    /// Optional fill drawn behind a hovered row.
    pub hover_background: Option<Color>,
}

impl Default for MenuPalette {
    fn default() -> Self {
        Self {
            color_idle: Color::from_rgb8(25, 25, 25),
            color_hovered: Color::from_rgb8(0, 0, 0),
            color_selected: Color::from_rgb8(36, 98, 212),
            color_disabled: Color::from_rgb8(150, 150, 150),
            hover_background: Some(Color::from_rgb8(208, 210, 216)),
        }
    }
}

/// Immutable style configuration for a menu and all of its rows.
///
/// A `MenuStyle` is built once (in code or via [`crate::config`]) and shared
/// read-only between rows; nothing mutates it afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuStyle {
    /// Font family used for row labels; `None` picks the system default.
    pub font_family: Option<String>,
    /// Font size of row labels, in logical pixels.
    pub font_size: f32,
    /// Fixed height of every row. Constant across all rows of a menu.
    pub item_height: f64,
    /// Spacing between arranged elements (icon, label, checkmark).
    pub item_horizontal_spacing: f64,
    /// Optional override of the square icon's edge length.
    pub item_image_height: Option<f64>,
    /// Edge length of the square checkmark slot.
    pub item_checkmark_height: f64,
    /// Leading/trailing padding around the arranged content.
    pub content_insets: ContentInsets,
    /// Which edge the label text (and a custom view) anchors to.
    pub text_alignment: Alignment,
    /// Which edge the icon renders on.
    pub icon_alignment: Alignment,
    /// Whether rows display a persistent checkmark for the chosen item.
    pub remember_selection: bool,
    /// Duration of the checkmark's on/off transition.
    pub check_animation_duration: Duration,
    /// Opacity applied to a disabled row's content.
    pub disabled_opacity: f32,
    /// Content colors, see [MenuPalette].
    pub palette: MenuPalette,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 13.0,
            item_height: 28.0,
            item_horizontal_spacing: 8.0,
            item_image_height: None,
            item_checkmark_height: 14.0,
            content_insets: ContentInsets::default(),
            text_alignment: Alignment::Left,
            icon_alignment: Alignment::Left,
            remember_selection: false,
            check_animation_duration: Duration::from_millis(150),
            disabled_opacity: 0.5,
            palette: MenuPalette::default(),
        }
    }
}

impl MenuStyle {
    fn apply_with(mut self, f: impl FnOnce(&mut Self)) -> Self {
        f(&mut self);
        self
    }

    /// Set the label alignment.
    pub fn with_text_alignment(self, alignment: Alignment) -> Self {
        self.apply_with(|s| s.text_alignment = alignment)
    }

    /// Set the icon alignment.
    pub fn with_icon_alignment(self, alignment: Alignment) -> Self {
        self.apply_with(|s| s.icon_alignment = alignment)
    }

    /// Enable or disable the persistent selection checkmark.
    pub fn with_remember_selection(self, remember: bool) -> Self {
        self.apply_with(|s| s.remember_selection = remember)
    }

    /// Set the fixed row height.
    pub fn with_item_height(self, height: f64) -> Self {
        self.apply_with(|s| s.item_height = height)
    }

    /// Override the square icon edge length.
    pub fn with_item_image_height(self, height: f64) -> Self {
        self.apply_with(|s| s.item_image_height = Some(height))
    }

    /// Set the content insets.
    pub fn with_content_insets(self, insets: ContentInsets) -> Self {
        self.apply_with(|s| s.content_insets = insets)
    }

    /// Replace the palette.
    pub fn with_palette(self, palette: MenuPalette) -> Self {
        self.apply_with(|s| s.palette = palette)
    }
}
