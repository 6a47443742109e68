//! Layout styles and the flexbox solver.
//!
//! Widgets describe their layout as a tree of [StyleNode]s; [solve] runs the
//! tree through taffy and returns a matching tree of [LayoutNode]s with
//! absolute positions.

use nalgebra::Vector2;
use taffy::{AvailableSpace, NodeId, TaffyTree};
use thiserror::Error;

pub use taffy::geometry::{Rect, Size};
pub use taffy::style::{
    AlignItems, Dimension, Display, FlexDirection, JustifyContent, LengthPercentage,
    LengthPercentageAuto,
};

/// Errors raised while solving a layout tree.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The underlying flexbox solver rejected the tree.
    #[error("layout solver failed: {0}")]
    Solver(#[from] taffy::TaffyError),
}

/// Layout properties of a single node.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutStyle {
    /// Preferred size of the node.
    pub size: Vector2<Dimension>,
    /// Minimum size of the node.
    pub min_size: Vector2<Dimension>,
    /// Maximum size of the node.
    pub max_size: Vector2<Dimension>,
    /// Inner padding.
    pub padding: Rect<LengthPercentage>,
    /// Outer margin.
    pub margin: Rect<LengthPercentageAuto>,
    /// Gap between adjacent children.
    pub gap: Vector2<LengthPercentage>,
    /// Main-axis direction for children.
    pub flex_direction: FlexDirection,
    /// How much the node grows relative to its siblings.
    pub flex_grow: f32,
    /// How much the node shrinks relative to its siblings.
    pub flex_shrink: f32,
    /// Cross-axis alignment of children.
    pub align_items: Option<AlignItems>,
    /// Main-axis distribution of children.
    pub justify_content: Option<JustifyContent>,
    /// Display mode; `Display::None` removes the node from layout entirely.
    pub display: Display,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            size: Vector2::new(Dimension::auto(), Dimension::auto()),
            min_size: Vector2::new(Dimension::auto(), Dimension::auto()),
            max_size: Vector2::new(Dimension::auto(), Dimension::auto()),
            padding: Rect {
                left: LengthPercentage::length(0.0),
                right: LengthPercentage::length(0.0),
                top: LengthPercentage::length(0.0),
                bottom: LengthPercentage::length(0.0),
            },
            margin: Rect {
                left: LengthPercentageAuto::length(0.0),
                right: LengthPercentageAuto::length(0.0),
                top: LengthPercentageAuto::length(0.0),
                bottom: LengthPercentageAuto::length(0.0),
            },
            gap: Vector2::new(LengthPercentage::length(0.0), LengthPercentage::length(0.0)),
            flex_direction: FlexDirection::Row,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            align_items: None,
            justify_content: None,
            display: Display::Flex,
        }
    }
}

impl From<&LayoutStyle> for taffy::Style {
    fn from(style: &LayoutStyle) -> Self {
        taffy::Style {
            display: style.display,
            flex_direction: style.flex_direction,
            flex_grow: style.flex_grow,
            flex_shrink: style.flex_shrink,
            align_items: style.align_items,
            justify_content: style.justify_content,
            size: Size {
                width: style.size.x,
                height: style.size.y,
            },
            min_size: Size {
                width: style.min_size.x,
                height: style.min_size.y,
            },
            max_size: Size {
                width: style.max_size.x,
                height: style.max_size.y,
            },
            padding: style.padding,
            margin: style.margin,
            gap: Size {
                width: style.gap.x,
                height: style.gap.y,
            },
            ..Default::default()
        }
    }
}

/// A styled node with styled children, as produced by
/// [`crate::widget::Widget::layout_style`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleNode {
    /// Layout style of this node.
    pub style: LayoutStyle,
    /// Styles of the node's children, in arrangement order.
    pub children: Vec<StyleNode>,
}

/// Resolved placement of a single node, in absolute window coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Layout {
    /// Top-left corner of the node.
    pub location: taffy::geometry::Point<f32>,
    /// Resolved size of the node.
    pub size: Size<f32>,
}

/// A resolved node with resolved children, mirroring the [StyleNode] tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutNode {
    /// Resolved placement of this node.
    pub layout: Layout,
    /// Resolved children, in arrangement order. A `Display::None` child is
    /// still present here but resolves to zero size.
    pub children: Vec<LayoutNode>,
}

/// Solve a style tree against the given available space.
///
/// Returns a [LayoutNode] tree with locations accumulated to absolute
/// coordinates starting at the origin.
pub fn solve(root: &StyleNode, width: f32, height: f32) -> Result<LayoutNode, LayoutError> {
    let mut tree: TaffyTree<()> = TaffyTree::new();
    let root_id = build(&mut tree, root)?;
    tree.compute_layout(
        root_id,
        Size {
            width: AvailableSpace::Definite(width),
            height: AvailableSpace::Definite(height),
        },
    )?;
    collect(&tree, root_id, 0.0, 0.0)
}

fn build(tree: &mut TaffyTree<()>, node: &StyleNode) -> Result<NodeId, taffy::TaffyError> {
    let children = node
        .children
        .iter()
        .map(|child| build(tree, child))
        .collect::<Result<Vec<_>, _>>()?;
    tree.new_with_children(taffy::Style::from(&node.style), &children)
}

fn collect(
    tree: &TaffyTree<()>,
    node: NodeId,
    offset_x: f32,
    offset_y: f32,
) -> Result<LayoutNode, LayoutError> {
    let layout = tree.layout(node)?;
    let x = offset_x + layout.location.x;
    let y = offset_y + layout.location.y;
    let resolved = Layout {
        location: taffy::geometry::Point { x, y },
        size: layout.size,
    };

    let children = tree
        .children(node)?
        .into_iter()
        .map(|child| collect(tree, child, x, y))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LayoutNode {
        layout: resolved,
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(width: f32, height: f32) -> StyleNode {
        StyleNode {
            style: LayoutStyle {
                size: Vector2::new(Dimension::length(width), Dimension::length(height)),
                ..Default::default()
            },
            children: Vec::new(),
        }
    }

    #[test]
    fn test_row_with_gap_and_padding() {
        let root = StyleNode {
            style: LayoutStyle {
                size: Vector2::new(Dimension::percent(1.0), Dimension::length(30.0)),
                padding: Rect {
                    left: LengthPercentage::length(10.0),
                    right: LengthPercentage::length(10.0),
                    top: LengthPercentage::length(0.0),
                    bottom: LengthPercentage::length(0.0),
                },
                gap: Vector2::new(LengthPercentage::length(5.0), LengthPercentage::length(0.0)),
                align_items: Some(AlignItems::Center),
                ..Default::default()
            },
            children: vec![
                leaf(20.0, 20.0),
                StyleNode {
                    style: LayoutStyle {
                        flex_grow: 1.0,
                        size: Vector2::new(Dimension::auto(), Dimension::percent(1.0)),
                        min_size: Vector2::new(Dimension::length(0.0), Dimension::auto()),
                        ..Default::default()
                    },
                    children: Vec::new(),
                },
                leaf(20.0, 20.0),
            ],
        };

        let solved = solve(&root, 200.0, 30.0).unwrap();
        assert_eq!(solved.layout.size.width, 200.0);
        assert_eq!(solved.layout.size.height, 30.0);
        assert_eq!(solved.children.len(), 3);

        let first = &solved.children[0];
        let middle = &solved.children[1];
        let last = &solved.children[2];

        assert_eq!(first.layout.location.x, 10.0);
        assert_eq!(middle.layout.location.x, 10.0 + 20.0 + 5.0);
        // The flexible middle child absorbs the remaining space.
        assert_eq!(middle.layout.size.width, 200.0 - 20.0 - 50.0);
        assert_eq!(last.layout.location.x + last.layout.size.width, 190.0);
        // Fixed-size children center vertically.
        assert_eq!(first.layout.location.y, 5.0);
    }

    #[test]
    fn test_display_none_child_takes_no_space() {
        let mut hidden = leaf(20.0, 20.0);
        hidden.style.display = Display::None;

        let root = StyleNode {
            style: LayoutStyle {
                size: Vector2::new(Dimension::length(100.0), Dimension::length(30.0)),
                gap: Vector2::new(LengthPercentage::length(5.0), LengthPercentage::length(0.0)),
                ..Default::default()
            },
            children: vec![hidden, leaf(20.0, 20.0)],
        };

        let solved = solve(&root, 100.0, 30.0).unwrap();
        // The hidden child neither occupies width nor contributes a gap.
        assert_eq!(solved.children[1].layout.location.x, 0.0);
    }
}
