//! Loading a [MenuStyle] from a TOML file.
//!
//! The on-disk representation keeps colors as hex strings and durations in
//! milliseconds; everything is optional and falls back to the built-in
//! defaults.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use vello::peniko::Color;

use crate::serde_color;
use crate::style::{Alignment, ContentInsets, MenuPalette, MenuStyle};

/// Errors raised while loading a style configuration.
#[derive(Debug, Error)]
pub enum StyleConfigError {
    /// The config file could not be read.
    #[error("failed to read style config: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid TOML or has the wrong shape.
    #[error("failed to parse style config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// On-disk representation of a [MenuStyle].
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuStyleConfig {
    font_family: Option<String>,
    font_size: f32,
    item_height: f64,
    item_horizontal_spacing: f64,
    item_image_height: Option<f64>,
    item_checkmark_height: f64,
    insets_leading: f64,
    insets_trailing: f64,
    text_alignment: Alignment,
    icon_alignment: Alignment,
    remember_selection: bool,
    check_animation_ms: u64,
    disabled_opacity: f32,
    #[serde(with = "serde_color")]
    color_idle: Color,
    #[serde(with = "serde_color")]
    color_hovered: Color,
    #[serde(with = "serde_color")]
    color_selected: Color,
    #[serde(with = "serde_color")]
    color_disabled: Color,
    #[serde(with = "serde_color::opt")]
    hover_background: Option<Color>,
}

impl Default for MenuStyleConfig {
    fn default() -> Self {
        let style = MenuStyle::default();
        Self {
            font_family: style.font_family,
            font_size: style.font_size,
            item_height: style.item_height,
            item_horizontal_spacing: style.item_horizontal_spacing,
            item_image_height: style.item_image_height,
            item_checkmark_height: style.item_checkmark_height,
            insets_leading: style.content_insets.leading,
            insets_trailing: style.content_insets.trailing,
            text_alignment: style.text_alignment,
            icon_alignment: style.icon_alignment,
            remember_selection: style.remember_selection,
            check_animation_ms: style.check_animation_duration.as_millis() as u64,
            disabled_opacity: style.disabled_opacity,
            color_idle: style.palette.color_idle,
            color_hovered: style.palette.color_hovered,
            color_selected: style.palette.color_selected,
            color_disabled: style.palette.color_disabled,
            hover_background: style.palette.hover_background,
        }
    }
}

impl From<MenuStyleConfig> for MenuStyle {
    fn from(config: MenuStyleConfig) -> Self {
        MenuStyle {
            font_family: config.font_family,
            font_size: config.font_size,
            item_height: config.item_height,
            item_horizontal_spacing: config.item_horizontal_spacing,
            item_image_height: config.item_image_height,
            item_checkmark_height: config.item_checkmark_height,
            content_insets: ContentInsets::new(config.insets_leading, config.insets_trailing),
            text_alignment: config.text_alignment,
            icon_alignment: config.icon_alignment,
            remember_selection: config.remember_selection,
            check_animation_duration: Duration::from_millis(config.check_animation_ms),
            disabled_opacity: config.disabled_opacity,
            palette: MenuPalette {
                color_idle: config.color_idle,
                color_hovered: config.color_hovered,
                color_selected: config.color_selected,
                color_disabled: config.color_disabled,
                hover_background: config.hover_background,
            },
        }
    }
}

impl MenuStyle {
    /// Parse a style from a TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, StyleConfigError> {
        let config: MenuStyleConfig = toml::from_str(toml)?;
        Ok(config.into())
    }

    /// Load a style from a TOML file.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self, StyleConfigError> {
        let path = path.as_ref();
        log::debug!("loading menu style from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
