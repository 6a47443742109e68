// SPDX-License-Identifier: MIT OR Apache-2.0

//! Row composition: slot arrangement and layout-style construction

use nalgebra::Vector2;
use oriel_core::layout::{
    AlignItems, Dimension, JustifyContent, Layout, LayoutNode, LayoutStyle, LengthPercentage,
    Rect, StyleNode,
};
use oriel_theme::style::{Alignment, MenuStyle};

use super::constants::ICON_EDGE_MARGIN;

/// One arranged element of a standard row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// The square icon.
    Icon,
    /// The label, absorbing the remaining width.
    Label,
    /// The square checkmark indicator.
    Checkmark,
}

/// The arrangement of slots for a standard row.
///
/// The icon takes the edge named by its alignment and the checkmark always
/// takes the opposite one, so the two can never collide. An absent icon or
/// checkmark drops out of the arrangement entirely and contributes neither
/// width nor spacing.
pub fn arranged_slots(
    icon_alignment: Alignment,
    has_icon: bool,
    has_checkmark: bool,
) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(3);
    match icon_alignment {
        Alignment::Left => {
            if has_icon {
                slots.push(Slot::Icon);
            }
            slots.push(Slot::Label);
            if has_checkmark {
                slots.push(Slot::Checkmark);
            }
        }
        Alignment::Right => {
            if has_checkmark {
                slots.push(Slot::Checkmark);
            }
            slots.push(Slot::Label);
            if has_icon {
                slots.push(Slot::Icon);
            }
        }
    }
    slots
}

/// Edge length of the square icon slot.
pub fn icon_edge(style: &MenuStyle) -> f64 {
    style
        .item_image_height
        .unwrap_or(style.item_height - 2.0 * ICON_EDGE_MARGIN)
        .max(0.0)
}

fn row_container(style: &MenuStyle) -> LayoutStyle {
    LayoutStyle {
        size: Vector2::new(
            Dimension::percent(1.0),
            Dimension::length(style.item_height as f32),
        ),
        padding: Rect {
            left: LengthPercentage::length(style.content_insets.leading as f32),
            right: LengthPercentage::length(style.content_insets.trailing as f32),
            top: LengthPercentage::length(0.0),
            bottom: LengthPercentage::length(0.0),
        },
        ..Default::default()
    }
}

fn square_leaf(edge: f64) -> StyleNode {
    StyleNode {
        style: LayoutStyle {
            size: Vector2::new(Dimension::length(edge as f32), Dimension::length(edge as f32)),
            flex_shrink: 0.0,
            ..Default::default()
        },
        children: Vec::new(),
    }
}

/// Build the style tree of a standard row: the arranged slots inside the
/// content insets, vertically centered, separated by the configured
/// spacing.
pub fn standard_style_node(
    style: &MenuStyle,
    slots: &[Slot],
    checkmark: Option<&StyleNode>,
) -> StyleNode {
    let mut container = row_container(style);
    container.gap = Vector2::new(
        LengthPercentage::length(style.item_horizontal_spacing as f32),
        LengthPercentage::length(0.0),
    );
    container.align_items = Some(AlignItems::Center);

    let children = slots
        .iter()
        .map(|slot| match slot {
            Slot::Icon => square_leaf(icon_edge(style)),
            Slot::Label => StyleNode {
                style: LayoutStyle {
                    flex_grow: 1.0,
                    flex_shrink: 1.0,
                    size: Vector2::new(Dimension::auto(), Dimension::percent(1.0)),
                    min_size: Vector2::new(Dimension::length(0.0), Dimension::auto()),
                    ..Default::default()
                },
                children: Vec::new(),
            },
            Slot::Checkmark => checkmark
                .cloned()
                .unwrap_or_else(|| square_leaf(style.item_checkmark_height)),
        })
        .collect();

    StyleNode {
        style: container,
        children,
    }
}

/// Build the style tree of a custom-view row.
///
/// The view sits inside the content insets, stretched to the row's full
/// height. Its anchored edge is pinned exactly to the matching inset while
/// the opposite edge may fall short of (but never exceed) the other inset,
/// so a narrow view stays anchored instead of being stretched.
pub fn custom_style_node(style: &MenuStyle, view: StyleNode) -> StyleNode {
    let mut container = row_container(style);
    container.justify_content = Some(match style.text_alignment {
        Alignment::Left => JustifyContent::FlexStart,
        Alignment::Right => JustifyContent::FlexEnd,
    });

    let shim = StyleNode {
        style: LayoutStyle {
            size: Vector2::new(Dimension::auto(), Dimension::percent(1.0)),
            max_size: Vector2::new(Dimension::percent(1.0), Dimension::auto()),
            ..Default::default()
        },
        children: vec![view],
    };

    StyleNode {
        style: container,
        children: vec![shim],
    }
}

/// Resolved placement of a standard row's slots.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowGeometry {
    /// Placement of the icon, if the row has one.
    pub icon: Option<Layout>,
    /// Placement of the label.
    pub label: Option<Layout>,
    /// Placement of the checkmark, if the row shows one.
    pub checkmark: Option<Layout>,
}

/// Map a solved row back onto its slots.
pub fn row_geometry(slots: &[Slot], node: &LayoutNode) -> RowGeometry {
    let mut geometry = RowGeometry::default();
    for (slot, child) in slots.iter().zip(&node.children) {
        match slot {
            Slot::Icon => geometry.icon = Some(child.layout),
            Slot::Label => geometry.label = Some(child.layout),
            Slot::Checkmark => geometry.checkmark = Some(child.layout),
        }
    }
    geometry
}
