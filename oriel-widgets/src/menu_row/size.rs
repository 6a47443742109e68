// SPDX-License-Identifier: MIT OR Apache-2.0

//! Preferred-size calculation for menu rows

use oriel_core::menu::MenuItem;
use oriel_core::text_render::TextRenderContext;
use oriel_theme::style::MenuStyle;

use super::constants::{MIN_ROW_WIDTH, TEXT_CHAR_WIDTH};
use super::layout::icon_edge;

/// Calculate the width a standard row needs to show its content without
/// truncation.
///
/// When a [TextRenderContext] is available the label is measured with real
/// font metrics; otherwise a per-character estimate is used. The owning
/// menu typically takes the maximum over its rows. Rows never negotiate
/// width themselves; they fill whatever the menu provides.
pub fn preferred_row_width(
    item: &MenuItem,
    style: &MenuStyle,
    text: Option<&mut TextRenderContext>,
) -> f64 {
    let label_width = match text {
        Some(context) => context.measure_text_width(
            &item.title,
            style.font_family.as_deref(),
            style.font_size,
        ) as f64,
        None => item.title.chars().count() as f64 * TEXT_CHAR_WIDTH,
    };

    let mut width = style.content_insets.leading + style.content_insets.trailing + label_width;
    if item.icon.is_some() {
        width += icon_edge(style) + style.item_horizontal_spacing;
    }
    if style.remember_selection {
        width += style.item_checkmark_height + style.item_horizontal_spacing;
    }

    width.max(MIN_ROW_WIDTH)
}
