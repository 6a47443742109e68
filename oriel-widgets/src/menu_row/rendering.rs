// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering logic for the menu row widget

use oriel_core::menu::Icon;
use oriel_core::text_render::TextRenderContext;
use oriel_core::vg::kurbo::{Affine, Rect, RoundedRect, RoundedRectRadii, Shape, Vec2};
use oriel_core::vg::peniko::{Brush, Color, Fill, ImageBrush};
use oriel_core::vgi::Graphics;
use oriel_theme::style::{Alignment, MenuStyle};

use super::constants::{HOVER_BG_MARGIN, HOVER_BG_RADIUS, LINE_HEIGHT_FACTOR};
use oriel_core::layout::Layout;

fn slot_rect(layout: Layout) -> Rect {
    Rect::new(
        layout.location.x as f64,
        layout.location.y as f64,
        (layout.location.x + layout.size.width) as f64,
        (layout.location.y + layout.size.height) as f64,
    )
}

/// Uniformly scale and center `content` into `target`.
fn fit_transform(content: Rect, target: Rect) -> Affine {
    if content.width() <= 0.0 || content.height() <= 0.0 {
        return Affine::translate(Vec2::new(target.x0, target.y0));
    }

    let scale = (target.width() / content.width()).min(target.height() / content.height());
    let offset_x = target.x0 + (target.width() - content.width() * scale) / 2.0 - content.x0 * scale;
    let offset_y =
        target.y0 + (target.height() - content.height() * scale) / 2.0 - content.y0 * scale;
    Affine::new([scale, 0.0, 0.0, scale, offset_x, offset_y])
}

/// Draw the hover highlight behind a row's content.
pub fn render_hover_background(graphics: &mut dyn Graphics, row: Rect, color: Color) {
    let rounded = RoundedRect::new(
        row.x0 + HOVER_BG_MARGIN,
        row.y0,
        row.x1 - HOVER_BG_MARGIN,
        row.y1,
        RoundedRectRadii::from_single_radius(HOVER_BG_RADIUS),
    );
    graphics.fill(
        Fill::NonZero,
        Affine::IDENTITY,
        &Brush::Solid(color),
        None,
        &rounded.to_path(0.1),
    );
}

/// Draw an icon into its slot.
///
/// Template icons are filled with the row's current tint; bitmaps render
/// unmodified.
pub fn render_icon(graphics: &mut dyn Graphics, icon: &Icon, slot: Layout, tint: Color) {
    let target = slot_rect(slot);
    match icon {
        Icon::Template(path) => {
            let transform = fit_transform(path.bounding_box(), target);
            graphics.fill(Fill::NonZero, transform, &Brush::Solid(tint), None, path);
        }
        Icon::Bitmap(data) => {
            let Some(scene) = graphics.as_scene_mut() else {
                log::warn!("bitmap icons require scene access, skipping");
                return;
            };
            let content = Rect::new(0.0, 0.0, data.width as f64, data.height as f64);
            let transform = fit_transform(content, target);
            scene.draw_image(&ImageBrush::new(data.clone()), transform);
        }
    }
}

/// Draw the row's label into its slot.
///
/// The text is truncated from the tail with an ellipsis when the slot is
/// too narrow, anchored horizontally per the style's text alignment and
/// vertically centered.
pub fn render_label(
    graphics: &mut dyn Graphics,
    text: &mut TextRenderContext,
    title: &str,
    slot: Layout,
    style: &MenuStyle,
    color: Color,
) {
    let rect = slot_rect(slot);
    let family = style.font_family.as_deref();

    let display = text.truncate_to_width(title, family, style.font_size, slot.size.width);
    let x = match style.text_alignment {
        Alignment::Left => rect.x0,
        Alignment::Right => {
            let width = text.measure_text_width(&display, family, style.font_size) as f64;
            rect.x1 - width
        }
    };
    let line_height = style.font_size as f64 * LINE_HEIGHT_FACTOR;
    let y = rect.y0 + (rect.height() - line_height) / 2.0;

    text.render_text(
        graphics,
        &display,
        family,
        style.font_size,
        Brush::Solid(color),
        Affine::translate(Vec2::new(x, y)),
        true,
    );
}
