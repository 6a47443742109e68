use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use nalgebra::Vector2;
use oriel_core::app::info::AppInfo;
use oriel_core::app::update::Update;
use oriel_core::layout::{solve, Dimension, LayoutNode, LayoutStyle, StyleNode};
use oriel_core::menu::{Icon, MenuItem};
use oriel_core::vg::kurbo::{Rect, Shape};
use oriel_core::vgi::Graphics;
use oriel_core::widget::Widget;
use oriel_core::window::{ElementState, MouseButton};
use oriel_theme::id::WidgetId;
use oriel_theme::style::{Alignment, MenuStyle};
use oriel_widgets::menu_row::MenuRow;

const ROW_WIDTH: f32 = 200.0;

fn style() -> MenuStyle {
    MenuStyle::default()
}

fn template_icon() -> Icon {
    Icon::Template(Rect::new(0.0, 0.0, 10.0, 10.0).to_path(0.1))
}

fn solved(row: &MenuRow) -> LayoutNode {
    solve(&row.layout_style(), ROW_WIDTH, row.fixed_height() as f32).unwrap()
}

fn hover(x: f64, y: f64) -> AppInfo {
    AppInfo {
        cursor_pos: Some(Vector2::new(x, y)),
        buttons: Vec::new(),
    }
}

fn click(x: f64, y: f64) -> AppInfo {
    AppInfo {
        cursor_pos: Some(Vector2::new(x, y)),
        buttons: vec![(0, MouseButton::Left, ElementState::Pressed)],
    }
}

/// A stand-in custom view that counts how often it is updated.
struct Probe {
    width: f32,
    updates: Rc<RefCell<u32>>,
}

impl Widget for Probe {
    fn render(&mut self, _: &mut dyn Graphics, _: &LayoutNode, _: &mut AppInfo) {}

    fn layout_style(&self) -> StyleNode {
        StyleNode {
            style: LayoutStyle {
                size: Vector2::new(Dimension::length(self.width), Dimension::length(20.0)),
                ..Default::default()
            },
            children: Vec::new(),
        }
    }

    fn update(&mut self, _: &LayoutNode, _: &mut AppInfo) -> Update {
        *self.updates.borrow_mut() += 1;
        Update::empty()
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("oriel-widgets-tests", "Probe")
    }
}

#[test]
fn test_label_only_row_layout() {
    let style = Arc::new(style());
    let row = MenuRow::new(MenuItem::new("open", "Open"), false, style.clone());
    let node = solved(&row);
    let geometry = row.geometry(&node).unwrap();

    // No image: the icon slot contributes nothing at all.
    assert!(geometry.icon.is_none());
    assert!(geometry.checkmark.is_none());

    let label = geometry.label.unwrap();
    assert_eq!(label.location.x as f64, style.content_insets.leading);
    assert_eq!(
        (label.location.x + label.size.width) as f64,
        ROW_WIDTH as f64 - style.content_insets.trailing
    );
}

#[test]
fn test_row_height_is_fixed() {
    let style = Arc::new(style());
    let row = MenuRow::new(MenuItem::new("open", "Open"), false, style.clone());
    assert_eq!(row.fixed_height(), style.item_height);

    let node = solved(&row);
    assert_eq!(node.layout.size.height as f64, style.item_height);

    let custom = MenuRow::new(
        MenuItem::new("custom", "").with_custom_view(Probe {
            width: 50.0,
            updates: Rc::new(RefCell::new(0)),
        }),
        false,
        style.clone(),
    );
    let node = solved(&custom);
    assert_eq!(node.layout.size.height as f64, style.item_height);
}

#[test]
fn test_checkmark_never_shares_the_icon_edge() {
    for icon_alignment in [Alignment::Left, Alignment::Right] {
        for text_alignment in [Alignment::Left, Alignment::Right] {
            let style = Arc::new(
                style()
                    .with_remember_selection(true)
                    .with_icon_alignment(icon_alignment)
                    .with_text_alignment(text_alignment),
            );
            let row = MenuRow::new(
                MenuItem::new("save", "Save").with_icon(template_icon()),
                true,
                style.clone(),
            );
            let node = solved(&row);
            let geometry = row.geometry(&node).unwrap();

            let icon = geometry.icon.unwrap();
            let label = geometry.label.unwrap();
            let checkmark = geometry.checkmark.unwrap();

            match icon_alignment {
                Alignment::Left => {
                    assert!(icon.location.x < label.location.x);
                    assert!(label.location.x < checkmark.location.x);
                    assert_eq!(
                        (checkmark.location.x + checkmark.size.width) as f64,
                        ROW_WIDTH as f64 - style.content_insets.trailing
                    );
                }
                Alignment::Right => {
                    assert!(checkmark.location.x < label.location.x);
                    assert!(label.location.x < icon.location.x);
                    assert_eq!(
                        checkmark.location.x as f64,
                        style.content_insets.leading
                    );
                }
            }
        }
    }
}

#[test]
fn test_exactly_one_mode_is_active() {
    let style = Arc::new(style().with_remember_selection(true));

    let standard = MenuRow::new(MenuItem::new("open", "Open"), false, style.clone());
    assert!(!standard.has_custom_view());
    assert!(standard.checkmark().is_some());
    assert!(standard.geometry(&solved(&standard)).is_some());

    let custom = MenuRow::new(
        MenuItem::new("custom", "ignored").with_custom_view(Probe {
            width: 50.0,
            updates: Rc::new(RefCell::new(0)),
        }),
        false,
        style.clone(),
    );
    assert!(custom.has_custom_view());
    // Custom rows carry no standard slots, not even the checkmark.
    assert!(custom.checkmark().is_none());
    assert!(custom.geometry(&solved(&custom)).is_none());
}

#[test]
fn test_selected_row_is_prechecked_and_precolored() {
    let style = Arc::new(style().with_remember_selection(true));
    let row = MenuRow::new(MenuItem::new("open", "Open"), true, style.clone());

    let checkmark = row.checkmark().unwrap();
    assert!(checkmark.is_checked());
    assert_eq!(checkmark.progress(), 1.0);
    assert_eq!(row.content_color(), style.palette.color_selected);

    let unselected = MenuRow::new(MenuItem::new("open", "Open"), false, style.clone());
    assert!(!unselected.checkmark().unwrap().is_checked());
    assert_eq!(unselected.content_color(), style.palette.color_idle);
}

#[test]
fn test_hover_recolors_and_is_idempotent() {
    let style = Arc::new(style());
    let mut row = MenuRow::new(MenuItem::new("open", "Open"), false, style.clone());
    let node = solved(&row);

    let update = row.update(&node, &mut hover(20.0, 10.0));
    assert!(update.contains(Update::DRAW));
    assert!(row.is_hovering());
    assert_eq!(row.content_color(), style.palette.color_hovered);

    // Parked inside the row: nothing new happens.
    let update = row.update(&node, &mut hover(21.0, 10.0));
    assert_eq!(update, Update::empty());

    let update = row.update(&node, &mut hover(300.0, 10.0));
    assert!(update.contains(Update::DRAW));
    assert!(!row.is_hovering());
    assert_eq!(row.content_color(), style.palette.color_idle);

    // Parked outside: exits are no-ops too.
    let update = row.update(&node, &mut hover(301.0, 10.0));
    assert_eq!(update, Update::empty());
}

#[test]
fn test_hover_beats_selection_until_exit() {
    let style = Arc::new(style().with_remember_selection(true));
    let mut row = MenuRow::new(MenuItem::new("open", "Open"), true, style.clone());
    let node = solved(&row);

    row.update(&node, &mut hover(20.0, 10.0));
    assert_eq!(row.content_color(), style.palette.color_hovered);

    row.update(&node, &mut hover(300.0, 10.0));
    assert_eq!(row.content_color(), style.palette.color_selected);
}

#[test]
fn test_click_runs_action_before_notification() {
    let events: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

    let style = Arc::new(style());
    let action_events = events.clone();
    let activated_events = events.clone();
    let mut row = MenuRow::new(
        MenuItem::new("open", "Open").with_action(move || {
            action_events.lock().unwrap().push("action");
            Update::DRAW
        }),
        false,
        style.clone(),
    )
    .with_on_activated(move |id| {
        assert_eq!(id.0, "open");
        activated_events.lock().unwrap().push("activated");
        Update::DRAW
    });

    let node = solved(&row);

    // Enter, click, exit: one hover-on, one activation, one hover-off.
    let update = row.update(&node, &mut hover(20.0, 10.0));
    assert!(update.contains(Update::DRAW));

    let update = row.update(&node, &mut click(20.0, 10.0));
    assert!(update.contains(Update::DRAW));
    assert_eq!(*events.lock().unwrap(), vec!["action", "activated"]);

    let update = row.update(&node, &mut hover(300.0, 10.0));
    assert!(update.contains(Update::DRAW));
    assert_eq!(events.lock().unwrap().len(), 2);
}

#[test]
fn test_activation_without_action_still_notifies() {
    let activations = Arc::new(Mutex::new(0u32));

    let style = Arc::new(style());
    let count = activations.clone();
    let mut row = MenuRow::new(MenuItem::new("open", "Open"), false, style)
        .with_on_activated(move |_| {
            *count.lock().unwrap() += 1;
            Update::empty()
        });

    let node = solved(&row);
    row.update(&node, &mut click(20.0, 10.0));
    assert_eq!(*activations.lock().unwrap(), 1);
}

#[test]
fn test_disabled_row_is_silent() {
    let calls = Arc::new(Mutex::new(0u32));

    let style = Arc::new(style());
    let action_calls = calls.clone();
    let activated_calls = calls.clone();
    let mut row = MenuRow::new(
        MenuItem::new("open", "Open")
            .with_enabled(false)
            .with_action(move || {
                *action_calls.lock().unwrap() += 1;
                Update::DRAW
            }),
        false,
        style.clone(),
    )
    .with_on_activated(move |_| {
        *activated_calls.lock().unwrap() += 1;
        Update::DRAW
    });

    assert!(!row.is_enabled());
    assert_eq!(row.content_color(), style.palette.color_disabled);

    let node = solved(&row);
    assert_eq!(row.update(&node, &mut hover(20.0, 10.0)), Update::empty());
    assert_eq!(row.update(&node, &mut click(20.0, 10.0)), Update::empty());
    assert_eq!(row.update(&node, &mut hover(300.0, 10.0)), Update::empty());

    assert!(!row.is_hovering());
    assert_eq!(*calls.lock().unwrap(), 0);
    assert_eq!(row.content_color(), style.palette.color_disabled);
}

#[test]
fn test_custom_view_is_pinned_per_text_alignment() {
    for (alignment, expect_leading) in [(Alignment::Left, true), (Alignment::Right, false)] {
        let style = Arc::new(style().with_text_alignment(alignment));
        let row = MenuRow::new(
            MenuItem::new("custom", "").with_custom_view(Probe {
                width: 50.0,
                updates: Rc::new(RefCell::new(0)),
            }),
            false,
            style.clone(),
        );

        let node = solved(&row);
        let view = &node.children[0].children[0];

        if expect_leading {
            assert_eq!(view.layout.location.x as f64, style.content_insets.leading);
        } else {
            assert_eq!(
                (view.layout.location.x + view.layout.size.width) as f64,
                ROW_WIDTH as f64 - style.content_insets.trailing
            );
        }
        // The view keeps its own width; the row never stretches it.
        assert_eq!(view.layout.size.width, 50.0);
    }
}

#[test]
fn test_custom_view_never_exceeds_the_insets() {
    let style = Arc::new(style());
    let row = MenuRow::new(
        MenuItem::new("custom", "").with_custom_view(Probe {
            width: 500.0,
            updates: Rc::new(RefCell::new(0)),
        }),
        false,
        style.clone(),
    );

    let node = solved(&row);
    let view = &node.children[0].children[0];
    let max = ROW_WIDTH as f64 - style.content_insets.leading - style.content_insets.trailing;
    assert!((view.layout.size.width as f64) <= max + 0.5);
}

#[test]
fn test_custom_view_stays_interactive() {
    let updates = Rc::new(RefCell::new(0u32));
    let activations = Arc::new(Mutex::new(0u32));

    let style = Arc::new(style());
    let count = activations.clone();
    let mut row = MenuRow::new(
        MenuItem::new("custom", "").with_custom_view(Probe {
            width: 50.0,
            updates: updates.clone(),
        }),
        false,
        style,
    )
    .with_on_activated(move |_| {
        *count.lock().unwrap() += 1;
        Update::empty()
    });

    let node = solved(&row);
    row.update(&node, &mut click(20.0, 10.0));

    // The embedded view saw the pass; the row itself claimed nothing.
    assert_eq!(*updates.borrow(), 1);
    assert_eq!(*activations.lock().unwrap(), 0);
    assert!(!row.is_hovering());
}

#[test]
fn test_template_icon_slot_is_square() {
    let style = Arc::new(style().with_item_image_height(18.0));
    let row = MenuRow::new(
        MenuItem::new("save", "Save").with_icon(template_icon()),
        false,
        style,
    );

    let node = solved(&row);
    let icon = row.geometry(&node).unwrap().icon.unwrap();
    assert_eq!(icon.size.width, 18.0);
    assert_eq!(icon.size.height, 18.0);
}

#[test]
fn test_paths_of_two_rows_share_fixed_height() {
    let style = Arc::new(style().with_remember_selection(true));

    let plain = MenuRow::new(MenuItem::new("a", "A"), false, style.clone());
    let busy = MenuRow::new(
        MenuItem::new("b", "A much longer label that will truncate")
            .with_icon(template_icon()),
        true,
        style.clone(),
    );

    assert_eq!(
        solved(&plain).layout.size.height,
        solved(&busy).layout.size.height
    );
}
