mod common;

use common::{line, named, point, square, Harness};
use feature_select_mode::app::Interaction;
use feature_select_mode::{
    Actionable, CoordPath, Cursor, DrawEvent, FeatureStore, Geometry, InputEvent,
    ModeTransition, PointerEvent, Properties, RenderHint, SelectOptions, WorldBoundsConstraint,
};
use glam::{DVec2, Vec2};

fn click(event: PointerEvent) -> InputEvent {
    InputEvent::Click(event)
}

#[test]
fn test_activate_filters_unknown_ids_and_reports_actionability() {
    let mut store = FeatureStore::new();
    let a = store.add(line(&[(0.0, 0.0), (1.0, 1.0)]), Properties::new());
    let mut harness = Harness::new(store);

    harness.activate(&[99, a]);

    assert_eq!(harness.selection(), vec![a]);
    assert!(harness.mode.is_active());
    assert_eq!(
        harness.take_events(),
        vec![
            DrawEvent::Actionable {
                actions: Actionable::all_enabled()
            },
            DrawEvent::Actionable {
                actions: Actionable {
                    combine_features: false,
                    uncombine_features: false,
                    trash: true,
                }
            },
        ]
    );
}

#[test]
fn test_plain_click_replaces_selection_with_singleton() {
    let mut store = FeatureStore::new();
    let a = store.add(point(0.0, 0.0), Properties::new());
    let b = store.add(point(5.0, 5.0), Properties::new());
    let c = store.add(point(9.0, 9.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[a, b]);

    harness.send(click(PointerEvent::at(DVec2::new(9.0, 9.0)).on_feature(c, false)));

    assert_eq!(harness.selection(), vec![c]);
    assert_eq!(harness.surface.cursor(), Some(Cursor::Move));
    assert!(!harness.surface.double_click_zoom_enabled());
    let renders = harness.surface.renders();
    assert!(renders.contains(&a) && renders.contains(&b));
    assert_eq!(renders.last(), Some(&c));
}

#[test]
fn test_shift_click_adds_and_removes_preserving_order() {
    let mut store = FeatureStore::new();
    let a = store.add(point(0.0, 0.0), Properties::new());
    let b = store.add(point(1.0, 0.0), Properties::new());
    let c = store.add(point(2.0, 0.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[c, a]);

    harness.send(click(PointerEvent::at(DVec2::ZERO).on_feature(b, false).with_shift()));
    assert_eq!(harness.selection(), vec![c, a, b]);

    harness.send(click(PointerEvent::at(DVec2::ZERO).on_feature(a, true).with_shift()));
    assert_eq!(harness.selection(), vec![c, b]);
    assert_eq!(harness.surface.cursor(), Some(Cursor::Pointer));
}

#[test]
fn test_shift_click_removing_last_feature_restores_double_click_zoom() {
    let mut store = FeatureStore::new();
    let a = store.add(point(0.0, 0.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[a]);

    harness.send(click(PointerEvent::at(DVec2::ZERO).on_feature(a, true).with_shift()));

    assert!(harness.selection().is_empty());
    assert!(harness.surface.double_click_zoom_enabled());
}

#[test]
fn test_click_on_selected_line_requests_direct_select() {
    let mut store = FeatureStore::new();
    let a = store.add(line(&[(0.0, 0.0), (1.0, 1.0)]), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[a]);
    harness.take_events();

    harness.send(click(PointerEvent::at(DVec2::ZERO).on_feature(a, true)));

    assert_eq!(
        harness.take_events(),
        vec![DrawEvent::ModeChange {
            transition: ModeTransition::DirectSelect {
                feature_id: a,
                coord_path: None,
                start_pos: None,
            }
        }]
    );
    assert_eq!(harness.selection(), vec![a]);
}

#[test]
fn test_click_on_selected_point_keeps_selection_without_transition() {
    let mut store = FeatureStore::new();
    let a = store.add(point(0.0, 0.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[a]);
    harness.take_events();

    harness.send(click(PointerEvent::at(DVec2::ZERO).on_feature(a, true)));

    assert!(harness.take_events().is_empty());
    assert_eq!(harness.selection(), vec![a]);
}

#[test]
fn test_click_on_vertex_requests_direct_select_at_vertex() {
    let mut store = FeatureStore::new();
    let a = store.add(square(0.0, 0.0, 4.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[a]);
    harness.take_events();

    let path = CoordPath(vec![0, 2]);
    harness.send(click(
        PointerEvent::at(DVec2::new(4.0, 4.0)).on_vertex(a, path.clone()),
    ));

    assert_eq!(
        harness.take_events(),
        vec![DrawEvent::ModeChange {
            transition: ModeTransition::DirectSelect {
                feature_id: a,
                coord_path: Some(path),
                start_pos: Some(DVec2::new(4.0, 4.0)),
            }
        }]
    );
    assert_eq!(harness.surface.cursor(), Some(Cursor::Move));
}

#[test]
fn test_click_on_empty_space_clears_selection() {
    let mut store = FeatureStore::new();
    let a = store.add(point(0.0, 0.0), Properties::new());
    let b = store.add(point(3.0, 0.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[a, b]);
    harness.send(click(PointerEvent::at(DVec2::ZERO).on_feature(a, true).with_shift()));

    harness.send(InputEvent::Tap(PointerEvent::at(DVec2::new(50.0, 50.0))));

    assert!(harness.selection().is_empty());
    assert!(harness.surface.double_click_zoom_enabled());
    assert_eq!(harness.surface.renders().last(), Some(&b));
}

#[test]
fn test_click_on_unknown_feature_is_ignored() {
    let mut store = FeatureStore::new();
    let a = store.add(point(0.0, 0.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[a]);

    harness.send(click(PointerEvent::at(DVec2::ZERO).on_feature(404, false)));

    assert_eq!(harness.selection(), vec![a]);
}

#[test]
fn test_drag_point_moves_by_pointer_delta_and_fires_update() {
    let mut store = FeatureStore::new();
    let p = store.add(point(0.0, 0.0), named("p"));
    let mut harness = Harness::new(store);
    harness.activate(&[p]);
    harness.take_events();

    harness.send(InputEvent::PointerDown(
        PointerEvent::at(DVec2::ZERO).on_feature(p, true),
    ));
    assert!(!harness.surface.drag_pan_enabled());
    harness.send(InputEvent::Drag(PointerEvent::at(DVec2::new(1.0, 2.0)).held()));
    harness.send(InputEvent::PointerUp(PointerEvent::at(DVec2::new(1.0, 2.0))));

    assert_eq!(harness.geometry(p), Some(point(1.0, 2.0)));
    assert!(harness.surface.drag_pan_enabled());

    let events = harness.take_events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        DrawEvent::Update { features, .. } => {
            assert_eq!(features.len(), 1);
            assert_eq!(features[0].geometry, point(1.0, 2.0));
        }
        other => panic!("Unerwartete Benachrichtigung: {other:?}"),
    }
}

#[test]
fn test_touch_drag_moves_active_feature() {
    let mut store = FeatureStore::new();
    let p = store.add(point(0.0, 0.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[p]);
    harness.take_events();

    harness.send(InputEvent::TouchStart(
        PointerEvent::at(DVec2::ZERO).on_feature(p, true),
    ));
    assert!(!harness.surface.drag_pan_enabled());
    harness.send(InputEvent::Drag(PointerEvent::at(DVec2::new(2.0, -1.0)).held()));
    harness.send(InputEvent::TouchEnd(PointerEvent::at(DVec2::new(2.0, -1.0))));

    assert_eq!(harness.geometry(p), Some(point(2.0, -1.0)));
    assert!(harness.surface.drag_pan_enabled());
    let updates = harness
        .take_events()
        .into_iter()
        .filter(|e| matches!(e, DrawEvent::Update { .. }))
        .count();
    assert_eq!(updates, 1);
}

#[test]
fn test_touch_start_with_shift_does_not_arm_box_select() {
    let mut store = FeatureStore::new();
    store.add(point(1.0, 1.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[]);

    harness.send(InputEvent::TouchStart(PointerEvent::at(DVec2::ZERO).with_shift()));
    assert_eq!(
        harness.mode.session().map(|s| s.interaction),
        Some(Interaction::Idle)
    );
    harness.send(InputEvent::Drag(PointerEvent::at(DVec2::new(5.0, 5.0)).held()));
    harness.send(InputEvent::TouchEnd(PointerEvent::at(DVec2::new(5.0, 5.0))));

    assert_eq!(harness.surface.box_overlay_count(), 0);
    assert!(harness.selection().is_empty());
    assert!(harness.surface.drag_pan_enabled());
}

#[test]
fn test_drag_moves_whole_selection() {
    let mut store = FeatureStore::new();
    let a = store.add(square(0.0, 0.0, 2.0), Properties::new());
    let b = store.add(line(&[(5.0, 5.0), (6.0, 6.0)]), Properties::new());
    let c = store.add(point(9.0, 9.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[a, b]);

    harness.send(InputEvent::PointerDown(
        PointerEvent::at(DVec2::new(1.0, 1.0)).on_feature(a, true),
    ));
    harness.send(InputEvent::Drag(PointerEvent::at(DVec2::new(2.0, 1.0)).held()));
    harness.send(InputEvent::Drag(PointerEvent::at(DVec2::new(4.0, 0.0)).held()));
    harness.send(InputEvent::PointerUp(PointerEvent::at(DVec2::new(4.0, 0.0))));

    assert_eq!(harness.geometry(a), Some(square(3.0, -1.0, 2.0)));
    assert_eq!(harness.geometry(b), Some(line(&[(8.0, 4.0), (9.0, 5.0)])));
    assert_eq!(harness.geometry(c), Some(point(9.0, 9.0)));
}

#[test]
fn test_pointer_down_on_inactive_feature_does_not_arm_drag() {
    let mut store = FeatureStore::new();
    let a = store.add(point(0.0, 0.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[]);

    harness.send(InputEvent::PointerDown(
        PointerEvent::at(DVec2::ZERO).on_feature(a, false),
    ));
    harness.send(InputEvent::Drag(PointerEvent::at(DVec2::ONE).held()));

    assert_eq!(harness.geometry(a), Some(point(0.0, 0.0)));
    assert!(harness.surface.drag_pan_enabled());
}

#[test]
fn test_drag_continues_across_pointer_leave() {
    let mut store = FeatureStore::new();
    let p = store.add(point(0.0, 0.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[p]);
    harness.take_events();

    harness.send(InputEvent::PointerDown(
        PointerEvent::at(DVec2::ZERO).on_feature(p, true),
    ));
    harness.send(InputEvent::Drag(PointerEvent::at(DVec2::new(1.0, 0.0)).held()));
    let hint = harness.send(InputEvent::PointerLeave);
    harness.send(InputEvent::Drag(PointerEvent::at(DVec2::new(3.0, 0.0)).held()));
    harness.send(InputEvent::PointerUp(PointerEvent::at(DVec2::new(3.0, 0.0))));

    assert_eq!(hint, RenderHint::Render);
    assert_eq!(harness.geometry(p), Some(point(3.0, 0.0)));
    let updates = harness
        .take_events()
        .into_iter()
        .filter(|e| matches!(e, DrawEvent::Update { .. }))
        .count();
    assert_eq!(updates, 2);
}

#[test]
fn test_pointer_move_without_held_button_ends_drag() {
    let mut store = FeatureStore::new();
    let p = store.add(point(0.0, 0.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[p]);

    harness.send(InputEvent::PointerDown(
        PointerEvent::at(DVec2::ZERO).on_feature(p, true),
    ));
    harness.send(InputEvent::Drag(PointerEvent::at(DVec2::new(1.0, 0.0)).held()));
    let hint = harness.send(InputEvent::PointerMove(PointerEvent::at(DVec2::new(1.0, 0.0))));
    harness.send(InputEvent::Drag(PointerEvent::at(DVec2::new(5.0, 0.0)).held()));

    assert_eq!(hint, RenderHint::Skip);
    assert_eq!(harness.geometry(p), Some(point(1.0, 0.0)));
    assert!(harness.surface.drag_pan_enabled());
}

#[test]
fn test_drag_respects_world_bounds_constraint() {
    let mut store = FeatureStore::new();
    let p = store.add(point(0.0, 80.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.constraint = Box::new(WorldBoundsConstraint::default());
    harness.activate(&[p]);

    harness.send(InputEvent::PointerDown(
        PointerEvent::at(DVec2::new(0.0, 80.0)).on_feature(p, true),
    ));
    harness.send(InputEvent::Drag(PointerEvent::at(DVec2::new(0.0, 100.0)).held()));

    assert_eq!(harness.geometry(p), Some(point(0.0, 85.0)));
}

#[test]
fn test_box_select_adds_features_in_rectangle() {
    let mut store = FeatureStore::new();
    let a = store.add(point(1.0, 1.0), Properties::new());
    let b = store.add(point(3.0, 3.0), Properties::new());
    let c = store.add(point(10.0, 10.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[b]);

    harness.send(InputEvent::PointerDown(PointerEvent::at(DVec2::ZERO).with_shift()));
    harness.send(InputEvent::Drag(PointerEvent::at(DVec2::new(5.0, 5.0)).held()));

    assert_eq!(harness.surface.cursor(), Some(Cursor::Add));
    assert_eq!(
        harness.surface.box_overlay(),
        Some((Vec2::ZERO, Vec2::new(5.0, 5.0)))
    );

    harness.send(InputEvent::PointerUp(PointerEvent::at(DVec2::new(5.0, 5.0))));

    assert_eq!(harness.selection(), vec![b, a]);
    assert!(!harness.selection().contains(&c));
    assert_eq!(harness.surface.box_overlay_count(), 0);
    assert_eq!(harness.surface.cursor(), Some(Cursor::Move));
    assert!(harness.surface.drag_pan_enabled());
}

#[test]
fn test_box_select_uses_pixel_positions() {
    let mut store = FeatureStore::new();
    let a = store.add(point(1.0, 1.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[]);

    harness.send(InputEvent::PointerDown(
        PointerEvent::at(DVec2::new(100.0, 100.0))
            .with_screen_pos(Vec2::ZERO)
            .with_shift(),
    ));
    harness.send(InputEvent::Drag(
        PointerEvent::at(DVec2::new(200.0, 200.0))
            .with_screen_pos(Vec2::new(5.0, 5.0))
            .held(),
    ));
    harness.send(InputEvent::PointerUp(
        PointerEvent::at(DVec2::new(200.0, 200.0)).with_screen_pos(Vec2::new(5.0, 5.0)),
    ));

    assert_eq!(harness.selection(), vec![a]);
}

#[test]
fn test_box_select_normalizes_reverse_drag() {
    let mut store = FeatureStore::new();
    let a = store.add(point(2.0, 2.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[]);

    harness.send(InputEvent::PointerDown(
        PointerEvent::at(DVec2::new(4.0, 4.0)).with_shift(),
    ));
    harness.send(InputEvent::Drag(PointerEvent::at(DVec2::new(0.0, 0.0)).held()));
    harness.send(InputEvent::PointerUp(PointerEvent::at(DVec2::new(0.0, 0.0))));

    assert_eq!(harness.selection(), vec![a]);
}

#[test]
fn test_box_select_cancelled_when_pointer_leaves() {
    let mut store = FeatureStore::new();
    store.add(point(1.0, 1.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[]);

    harness.send(InputEvent::PointerDown(PointerEvent::at(DVec2::ZERO).with_shift()));
    harness.send(InputEvent::Drag(PointerEvent::at(DVec2::new(5.0, 5.0)).held()));
    harness.send(InputEvent::PointerLeave);
    harness.send(InputEvent::PointerUp(PointerEvent::at(DVec2::new(5.0, 5.0))));

    assert!(harness.selection().is_empty());
    assert_eq!(harness.surface.box_overlay_count(), 0);
    assert_eq!(
        harness.mode.session().map(|s| s.interaction),
        Some(Interaction::Idle)
    );
}

#[test]
fn test_box_select_disabled_by_options() {
    let mut store = FeatureStore::new();
    store.add(point(1.0, 1.0), Properties::new());
    let options = SelectOptions {
        box_select: false,
        ..SelectOptions::default()
    };
    let mut harness = Harness::with_options(store, options);
    harness.activate(&[]);

    harness.send(InputEvent::PointerDown(PointerEvent::at(DVec2::ZERO).with_shift()));
    harness.send(InputEvent::Drag(PointerEvent::at(DVec2::new(5.0, 5.0)).held()));
    harness.send(InputEvent::PointerUp(PointerEvent::at(DVec2::new(5.0, 5.0))));

    assert!(harness.selection().is_empty());
    assert_eq!(harness.surface.box_overlay_count(), 0);
}

#[test]
fn test_display_adds_vertex_handles_for_active_polygon() {
    let mut store = FeatureStore::new();
    let a = store.add(square(0.0, 0.0, 1.0), Properties::new());
    let b = store.add(point(5.0, 5.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[a, b]);

    let polygon = harness.display(a);
    let lone_point = harness.display(b);

    assert_eq!(polygon.len(), 5);
    assert!(polygon[0].active);
    let paths: Vec<String> = polygon[1..]
        .iter()
        .filter_map(|f| f.coord_path.as_ref().map(|p| p.to_string()))
        .collect();
    assert_eq!(paths, vec!["0.0", "0.1", "0.2", "0.3"]);
    assert_eq!(polygon[2].geometry, Geometry::Point(DVec2::new(1.0, 0.0)));
    assert_eq!(lone_point.len(), 1);
}

#[test]
fn test_inactive_mode_ignores_input_but_logs_it() {
    let mut store = FeatureStore::new();
    let a = store.add(point(0.0, 0.0), Properties::new());
    let mut harness = Harness::new(store);

    let hint = harness.send(click(PointerEvent::at(DVec2::ZERO).on_feature(a, false)));

    assert_eq!(hint, RenderHint::Skip);
    assert!(harness.selection().is_empty());
    assert_eq!(harness.mode.input_log().len(), 1);
}

#[test]
fn test_deactivate_restores_surface_and_drops_session() {
    let mut store = FeatureStore::new();
    let a = store.add(point(0.0, 0.0), Properties::new());
    let mut harness = Harness::new(store);
    harness.activate(&[a]);
    harness.send(click(PointerEvent::at(DVec2::ZERO).on_feature(a, true)));
    harness.send(InputEvent::PointerDown(PointerEvent::at(DVec2::ZERO).with_shift()));

    harness.deactivate();

    assert!(!harness.mode.is_active());
    assert!(harness.surface.double_click_zoom_enabled());
    assert!(harness.surface.drag_pan_enabled());
}
