// SPDX-License-Identifier: MIT OR Apache-2.0

//! Menu row widget for popup menus
//!
//! One selectable row: an icon/label/checkmark arrangement that reacts to
//! pointer hover and persisted selection, or a caller-supplied custom view.
//! Rows are built once per visible item when a menu opens and rebuilt when
//! the item list (or the selection) changes; only hover state and colors
//! mutate in between.

mod constants;
mod interaction;
mod layout;
mod rendering;
mod size;
mod theme;

pub use constants::*;
pub use interaction::*;
pub use layout::*;
pub use rendering::*;
pub use size::*;
pub use theme::*;

use std::sync::Arc;

use oriel_core::app::info::AppInfo;
use oriel_core::app::update::Update;
use oriel_core::layout::{LayoutNode, LayoutStyle, StyleNode};
use oriel_core::menu::{Icon, MenuAction, MenuItem, RowId};
use oriel_core::signal::MaybeSignal;
use oriel_core::text_render::TextRenderContext;
use oriel_core::vg::kurbo::{Affine, Rect};
use oriel_core::vg::peniko::{Color, Mix};
use oriel_core::vgi::{shape_to_path, Graphics};
use oriel_core::widget::{BoxedWidget, Widget, WidgetLayoutExt};
use oriel_theme::id::WidgetId;
use oriel_theme::style::MenuStyle;

use crate::checkmark::Checkmark;

/// Callback fired after a row was activated, carrying the row's identity.
pub type ActivatedCallback = Arc<dyn Fn(RowId) -> Update + Send + Sync>;

/// The content mode of a row, decided once at construction.
enum RowContent {
    /// A caller-supplied view fills the row.
    Custom { view: BoxedWidget },
    /// The standard icon/label/checkmark arrangement.
    Standard { icon: Option<Icon>, title: String },
}

/// One selectable row of a popup menu.
///
/// A row is constructed from a [MenuItem], the selection flag and the
/// shared [MenuStyle]; neither input is mutated. Rows fill whatever width
/// the owning menu provides and are always [`fixed_height`](MenuRow::fixed_height)
/// tall.
///
/// Clicking an enabled row runs the item's action (a no-op when absent)
/// and then fires the outward [`with_on_activated`](MenuRow::with_on_activated)
/// callback, exactly once per click. Disabled rows render
/// dimmed and never report hover or clicks. A row hosting a custom view
/// installs no interaction layer at all, so the view stays independently
/// interactive.
pub struct MenuRow {
    id: RowId,
    content: RowContent,
    slots: Vec<Slot>,
    surface: Option<InteractionSurface>,
    checkmark: Option<Checkmark>,
    style: Arc<MenuStyle>,
    palette: RowPalette,
    enabled: bool,
    selected: bool,
    hovering: bool,
    content_color: Color,
    text_render_context: TextRenderContext,
    action: Option<MenuAction>,
    on_activated: Option<ActivatedCallback>,
    layout_style: MaybeSignal<LayoutStyle>,
}

impl MenuRow {
    /// Create a row for the given item.
    ///
    /// The content mode is decided here, once: an item with a custom view
    /// embeds it, anything else gets the standard arrangement. When the
    /// style remembers the selection, a selected row's checkmark is set
    /// immediately and its colors start from the selected palette.
    pub fn new(item: MenuItem, is_selected: bool, style: Arc<MenuStyle>) -> Self {
        let MenuItem {
            id,
            title,
            icon,
            action,
            custom_view,
            enabled,
        } = item;

        let palette = RowPalette::from_style(&style);
        let content_color = resolve_color(enabled, false, is_selected, &palette);

        let (content, slots, surface, checkmark) = match custom_view {
            Some(view) => (RowContent::Custom { view }, Vec::new(), None, None),
            None => {
                let slots = arranged_slots(
                    style.icon_alignment,
                    icon.is_some(),
                    style.remember_selection,
                );
                let checkmark = style.remember_selection.then(|| {
                    let mut checkmark = Checkmark::new(
                        style.item_checkmark_height,
                        style.check_animation_duration,
                    );
                    if is_selected {
                        checkmark.set_checked(true, true);
                    }
                    checkmark.set_color(content_color);
                    checkmark
                });
                (
                    RowContent::Standard { icon, title },
                    slots,
                    Some(InteractionSurface::new(enabled)),
                    checkmark,
                )
            }
        };

        Self {
            id: RowId(id),
            content,
            slots,
            surface,
            checkmark,
            style,
            palette,
            enabled,
            selected: is_selected,
            hovering: false,
            content_color,
            text_render_context: TextRenderContext::new(),
            action,
            on_activated: None,
            layout_style: LayoutStyle::default().into(),
        }
    }

    /// Set the callback fired after the row was activated.
    pub fn with_on_activated<F>(mut self, callback: F) -> Self
    where
        F: Fn(RowId) -> Update + Send + Sync + 'static,
    {
        self.on_activated = Some(Arc::new(callback));
        self
    }

    /// The fixed height of this row, from the shared style.
    pub fn fixed_height(&self) -> f64 {
        self.style.item_height
    }

    /// The identity forwarded with activation notifications.
    pub fn row_id(&self) -> &RowId {
        &self.id
    }

    /// Whether the row reacts to pointer input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the row was built as the selected one.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the pointer is currently over the row.
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// The color the label and template icon are currently painted with.
    pub fn content_color(&self) -> Color {
        self.content_color
    }

    /// The row's checkmark indicator, when the style remembers selection.
    pub fn checkmark(&self) -> Option<&Checkmark> {
        self.checkmark.as_ref()
    }

    /// Whether the row hosts a caller-supplied view.
    pub fn has_custom_view(&self) -> bool {
        matches!(self.content, RowContent::Custom { .. })
    }

    /// Map a solved layout back onto the row's slots.
    ///
    /// Returns `None` for custom-view rows, which have no slots.
    pub fn geometry(&self, layout_node: &LayoutNode) -> Option<RowGeometry> {
        match self.content {
            RowContent::Custom { .. } => None,
            RowContent::Standard { .. } => Some(row_geometry(&self.slots, layout_node)),
        }
    }

    fn refresh_colors(&mut self) {
        self.content_color =
            resolve_color(self.enabled, self.hovering, self.selected, &self.palette);
        if let Some(checkmark) = self.checkmark.as_mut() {
            checkmark.set_color(self.content_color);
        }
    }

    /// Run the item's action, then notify outward. The notification always
    /// follows the action, so observers see its side effects.
    fn activate(&self) -> Update {
        let mut update = match &self.action {
            Some(action) => action(),
            None => Update::empty(),
        };

        log::debug!("menu row {} activated", self.id);

        if let Some(on_activated) = &self.on_activated {
            update |= on_activated(self.id.clone());
        }

        update
    }

    fn row_bounds(layout_node: &LayoutNode) -> Rect {
        let layout = &layout_node.layout;
        Rect::new(
            layout.location.x as f64,
            layout.location.y as f64,
            (layout.location.x + layout.size.width) as f64,
            (layout.location.y + layout.size.height) as f64,
        )
    }
}

impl WidgetLayoutExt for MenuRow {
    fn set_layout_style(&mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>) {
        self.layout_style = layout_style.into();
    }
}

impl Widget for MenuRow {
    fn render(&mut self, graphics: &mut dyn Graphics, layout_node: &LayoutNode, info: &mut AppInfo) {
        let bounds = Self::row_bounds(layout_node);

        let dimmed = !self.enabled;
        if dimmed {
            graphics.push_layer(
                Mix::Normal,
                self.style.disabled_opacity,
                Affine::IDENTITY,
                &shape_to_path(&bounds),
            );
        }

        match &mut self.content {
            RowContent::Custom { view } => {
                if let Some(view_node) = layout_node
                    .children
                    .first()
                    .and_then(|shim| shim.children.first())
                {
                    view.render(graphics, view_node, info);
                }
            }
            RowContent::Standard { icon, title } => {
                if self.hovering {
                    if let Some(background) = self.palette.hover_background {
                        render_hover_background(graphics, bounds, background);
                    }
                }

                let geometry = row_geometry(&self.slots, layout_node);

                if let (Some(icon), Some(slot)) = (icon.as_ref(), geometry.icon) {
                    render_icon(graphics, icon, slot, self.content_color);
                }

                if let Some(slot) = geometry.label {
                    render_label(
                        graphics,
                        &mut self.text_render_context,
                        title,
                        slot,
                        &self.style,
                        self.content_color,
                    );
                }

                if let (Some(checkmark), Some(slot)) = (self.checkmark.as_mut(), geometry.checkmark)
                {
                    let node = LayoutNode {
                        layout: slot,
                        children: Vec::new(),
                    };
                    checkmark.render(graphics, &node, info);
                }
            }
        }

        if dimmed {
            graphics.pop_layer();
        }
    }

    fn layout_style(&self) -> StyleNode {
        let mut node = match &self.content {
            RowContent::Custom { view } => custom_style_node(&self.style, view.layout_style()),
            RowContent::Standard { .. } => {
                let checkmark_node = self.checkmark.as_ref().map(|c| c.layout_style());
                standard_style_node(&self.style, &self.slots, checkmark_node.as_ref())
            }
        };
        // Callers may still adjust the row's outer margin.
        node.style.margin = self.layout_style.get().margin;
        node
    }

    fn update(&mut self, layout: &LayoutNode, info: &mut AppInfo) -> Update {
        let mut update = Update::empty();

        if let RowContent::Custom { view } = &mut self.content {
            if let Some(view_node) = layout.children.first().and_then(|shim| shim.children.first())
            {
                update |= view.update(view_node, info);
            }
            return update;
        }

        let bounds = Self::row_bounds(layout);
        let (events, surface_update) = match self.surface.as_mut() {
            Some(surface) => surface.update(bounds, info),
            None => (SurfaceEvents::default(), Update::empty()),
        };
        update |= surface_update;

        if let Some(hovering) = events.hover_changed {
            self.hovering = hovering;
            self.refresh_colors();
            update |= Update::DRAW;
        }

        for _ in 0..events.clicks {
            update |= self.activate();
        }

        if let Some(checkmark) = self.checkmark.as_mut() {
            update |= checkmark.update(layout, info);
        }

        update
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("oriel-widgets", "MenuRow")
    }
}
