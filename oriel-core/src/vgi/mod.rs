//! The graphics abstraction widgets draw through.

use vello::kurbo::{Affine, BezPath, Shape, Stroke};
use vello::peniko::{Brush, Fill};

/// The drawing surface handed to widgets.
pub trait Graphics {
    /// Fill a shape with the given brush.
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Stroke a shape with the given brush.
    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Append another scene to this one.
    fn append(&mut self, other: &vello::Scene, transform: Option<Affine>);

    /// Push a new layer with the given blend mode, alpha and clip shape.
    fn push_layer(&mut self, mix: vello::peniko::Mix, alpha: f32, transform: Affine, shape: &BezPath);

    /// Pop the most recent layer.
    fn pop_layer(&mut self);

    /// Access the underlying Scene for operations that require it (e.g.
    /// glyph or image drawing). Returns None if the backend doesn't provide
    /// Scene access.
    fn as_scene_mut(&mut self) -> Option<&mut vello::Scene>;
}

/// Helper function to convert a shape to BezPath for use with the
/// [Graphics] trait.
pub fn shape_to_path(shape: &impl Shape) -> BezPath {
    shape.to_path(0.1)
}

/// A default graphics implementation using Vello.
pub mod vello_vg;
