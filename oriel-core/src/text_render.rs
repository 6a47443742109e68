// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text rendering using Parley for proper text layout and glyph mapping

use parley::fontique::{Collection, CollectionOptions};
use parley::style::FontStack;
use parley::{Alignment, FontContext, Layout, LayoutContext, StyleProperty};
use vello::kurbo::Affine;
use vello::peniko::{Brush, Fill};

use crate::vgi::Graphics;

/// Text rendering context that manages font and layout contexts.
///
/// Each widget that draws text owns one of these; the font collection is
/// loaded once per context.
pub struct TextRenderContext {
    font_cx: FontContext,
    layout_cx: LayoutContext,
}

impl TextRenderContext {
    /// Create a new text rendering context with system fonts loaded.
    pub fn new() -> Self {
        let font_cx = FontContext {
            collection: Collection::new(CollectionOptions {
                system_fonts: true,
                ..Default::default()
            }),
            source_cache: Default::default(),
        };

        Self {
            font_cx,
            layout_cx: LayoutContext::new(),
        }
    }

    /// Render a single run of text at the given transform.
    ///
    /// Silently does nothing when the graphics backend exposes no scene.
    pub fn render_text(
        &mut self,
        graphics: &mut dyn Graphics,
        text: &str,
        family: Option<&str>,
        font_size: f32,
        color: Brush,
        transform: Affine,
        hint: bool,
    ) {
        if text.is_empty() {
            return;
        }

        let layout = self.build_layout(text, family, font_size);

        let Some(scene) = graphics.as_scene_mut() else {
            log::warn!("text rendering requires scene access, skipping '{text}'");
            return;
        };

        for line in layout.lines() {
            for item in line.items() {
                let parley::PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };

                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let font = run.font();
                let font_size = run.font_size();
                let synthesis = run.synthesis();
                let glyph_xform = synthesis
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));
                let coords = run.normalized_coords();

                let glyphs: Vec<_> = glyph_run.glyphs().collect();
                if glyphs.is_empty() {
                    continue;
                }

                scene
                    .draw_glyphs(font)
                    .brush(&color)
                    .hint(hint)
                    .transform(transform)
                    .glyph_transform(glyph_xform)
                    .font_size(font_size)
                    .normalized_coords(coords)
                    .draw(
                        Fill::NonZero,
                        glyphs.into_iter().map(|glyph| {
                            let gx = x + glyph.x;
                            let gy = y - glyph.y;
                            x += glyph.advance;
                            vello::Glyph {
                                id: glyph.id as _,
                                x: gx,
                                y: gy,
                            }
                        }),
                    );
            }
        }
    }

    /// Measure the width of a run of text by summing glyph advances.
    pub fn measure_text_width(&mut self, text: &str, family: Option<&str>, font_size: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }

        let layout = self.build_layout(text, family, font_size);

        let mut total_width = 0.0;
        for line in layout.lines() {
            for item in line.items() {
                let parley::PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                for glyph in glyph_run.glyphs() {
                    total_width += glyph.advance;
                }
            }
        }

        total_width
    }

    /// Truncate text from the tail so it fits within `max_width`, appending
    /// an ellipsis when anything was cut.
    pub fn truncate_to_width(
        &mut self,
        text: &str,
        family: Option<&str>,
        font_size: f32,
        max_width: f32,
    ) -> String {
        if self.measure_text_width(text, family, font_size) <= max_width {
            return text.to_string();
        }

        let mut kept: String = text.to_string();
        while kept.pop().is_some() {
            let candidate = format!("{}…", kept.trim_end());
            if self.measure_text_width(&candidate, family, font_size) <= max_width {
                return candidate;
            }
        }

        String::from("…")
    }

    fn build_layout(&mut self, text: &str, family: Option<&str>, font_size: f32) -> Layout<[u8; 4]> {
        let display_scale = 1.0;
        let mut builder = self
            .layout_cx
            .ranged_builder(&mut self.font_cx, text, display_scale, true);

        builder.push_default(StyleProperty::FontSize(font_size));
        if let Some(family) = family {
            builder.push_default(StyleProperty::FontStack(FontStack::Source(family.into())));
        }

        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, Default::default());
        layout
    }
}

impl Default for TextRenderContext {
    fn default() -> Self {
        Self::new()
    }
}
