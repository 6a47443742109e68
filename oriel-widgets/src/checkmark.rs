use std::time::{Duration, Instant};

use nalgebra::Vector2;
use oriel_core::app::info::AppInfo;
use oriel_core::app::update::Update;
use oriel_core::layout::{Dimension, LayoutNode, LayoutStyle, StyleNode};
use oriel_core::signal::MaybeSignal;
use oriel_core::vg::kurbo::{Affine, Line, Point, Shape, Stroke};
use oriel_core::vg::peniko::{Brush, Color};
use oriel_core::vgi::Graphics;
use oriel_core::widget::{Widget, WidgetLayoutExt};
use oriel_theme::id::WidgetId;

const STROKE_WIDTH: f64 = 2.5;

/// A checkmark indicator widget.
///
/// Draws a two-segment check stroke and animates it in and out over a fixed
/// duration. `set_checked(_, true)` skips the animation entirely.
pub struct Checkmark {
    checked: bool,
    /// Drawn fraction of the check stroke, `0.0..=1.0`.
    progress: f32,
    transition: Option<Transition>,
    duration: Duration,
    color: Color,
    layout_style: MaybeSignal<LayoutStyle>,
}

struct Transition {
    start: Instant,
    from: f32,
}

impl Checkmark {
    /// Create a checkmark occupying a square of the given edge length.
    pub fn new(edge: f64, duration: Duration) -> Self {
        Self {
            checked: false,
            progress: 0.0,
            transition: None,
            duration,
            color: Color::BLACK,
            layout_style: LayoutStyle {
                size: Vector2::new(
                    Dimension::length(edge as f32),
                    Dimension::length(edge as f32),
                ),
                ..Default::default()
            }
            .into(),
        }
    }

    /// Set the checked state, optionally skipping the transition.
    pub fn set_checked(&mut self, checked: bool, immediate: bool) {
        self.checked = checked;
        let target = self.target();
        if immediate || self.duration.is_zero() {
            self.progress = target;
            self.transition = None;
        } else if self.progress != target {
            self.transition = Some(Transition {
                start: Instant::now(),
                from: self.progress,
            });
        }
    }

    /// Set the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Whether the indicator is checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Current drawn fraction of the check stroke.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    fn target(&self) -> f32 {
        if self.checked {
            1.0
        } else {
            0.0
        }
    }
}

impl WidgetLayoutExt for Checkmark {
    fn set_layout_style(&mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>) {
        self.layout_style = layout_style.into();
    }
}

impl Widget for Checkmark {
    fn render(&mut self, graphics: &mut dyn Graphics, layout_node: &LayoutNode, _: &mut AppInfo) {
        if self.progress <= 0.0 {
            return;
        }

        let layout = &layout_node.layout;
        let center_x = (layout.location.x + layout.size.width / 2.0) as f64;
        let center_y = (layout.location.y + layout.size.height / 2.0) as f64;
        let size = (layout.size.width.min(layout.size.height) as f64) * 0.45;

        // The stroke runs down into the valley and up to the tip.
        let start = Point::new(center_x - size * 0.5, center_y);
        let valley = Point::new(center_x - size * 0.1, center_y + size * 0.4);
        let tip = Point::new(center_x + size * 0.6, center_y - size * 0.4);

        let first_len = start.distance(valley);
        let second_len = valley.distance(tip);
        let total = first_len + second_len;
        let drawn = total * self.progress as f64;

        let brush = Brush::Solid(self.color);
        let stroke = Stroke::new(STROKE_WIDTH);

        if drawn <= first_len {
            let t = if first_len == 0.0 { 1.0 } else { drawn / first_len };
            let end = start.lerp(valley, t);
            graphics.stroke(
                &stroke,
                Affine::IDENTITY,
                &brush,
                None,
                &Line::new(start, end).to_path(0.1),
            );
        } else {
            graphics.stroke(
                &stroke,
                Affine::IDENTITY,
                &brush,
                None,
                &Line::new(start, valley).to_path(0.1),
            );

            let t = if second_len == 0.0 {
                1.0
            } else {
                (drawn - first_len) / second_len
            };
            let end = valley.lerp(tip, t.min(1.0));
            graphics.stroke(
                &stroke,
                Affine::IDENTITY,
                &brush,
                None,
                &Line::new(valley, end).to_path(0.1),
            );
        }
    }

    fn layout_style(&self) -> StyleNode {
        StyleNode {
            style: self.layout_style.get().clone(),
            children: Vec::new(),
        }
    }

    fn update(&mut self, _layout: &LayoutNode, _info: &mut AppInfo) -> Update {
        let Some(transition) = &self.transition else {
            return Update::empty();
        };

        let target = self.target();
        let elapsed = transition.start.elapsed();
        if elapsed >= self.duration {
            self.progress = target;
            self.transition = None;
        } else {
            let f = elapsed.as_secs_f32() / self.duration.as_secs_f32();
            self.progress = transition.from + (target - transition.from) * f;
        }

        Update::DRAW
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("oriel-widgets", "Checkmark")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_check_skips_animation() {
        let mut checkmark = Checkmark::new(14.0, Duration::from_millis(150));
        checkmark.set_checked(true, true);
        assert!(checkmark.is_checked());
        assert_eq!(checkmark.progress(), 1.0);

        let mut info = AppInfo::new();
        assert_eq!(
            checkmark.update(&LayoutNode::default(), &mut info),
            Update::empty()
        );
    }

    #[test]
    fn test_animated_check_requests_draw() {
        let mut checkmark = Checkmark::new(14.0, Duration::from_secs(10));
        checkmark.set_checked(true, false);
        assert_eq!(checkmark.progress(), 0.0);

        let mut info = AppInfo::new();
        assert_eq!(
            checkmark.update(&LayoutNode::default(), &mut info),
            Update::DRAW
        );
        assert!(checkmark.progress() < 1.0);
    }

    #[test]
    fn test_zero_duration_is_always_immediate() {
        let mut checkmark = Checkmark::new(14.0, Duration::ZERO);
        checkmark.set_checked(true, false);
        assert_eq!(checkmark.progress(), 1.0);
    }
}
