//! Handler für Klicks und Taps auf der Kartenoberfläche.

use super::{markers, stop_extended_interactions, ModeContext};
use crate::app::events::{DrawEvent, ModeTransition, PointerEvent};
use crate::app::host::{Cursor, RenderHint};
use crate::app::predicates;
use crate::app::state::SessionState;
use crate::app::use_cases::click_decision::{decide_click, ClickDecision, ClickEffect};
use crate::core::{CoordPath, FeatureId};
use glam::DVec2;

/// Klick oder Tap: leere Fläche, Vertex-Handle oder Feature.
pub fn on_click(
    state: &mut SessionState,
    ctx: &mut ModeContext<'_, '_>,
    event: &PointerEvent,
) -> RenderHint {
    if predicates::no_target(event) {
        click_on_empty_space(state, ctx);
    } else if let Some((parent, coord_path)) = predicates::vertex_target(event) {
        click_on_vertex(ctx, parent, coord_path.clone(), event.map_pos);
    } else if let Some(feature_id) = predicates::feature_target(event) {
        click_on_feature(state, ctx, feature_id, predicates::is_shift_down(event));
    }
    RenderHint::Render
}

/// Hebt die Selektion auf und setzt die Overlays der bisherigen Selektion zurück.
pub fn click_on_empty_space(state: &mut SessionState, ctx: &mut ModeContext<'_, '_>) {
    if state.marker_interaction {
        log::debug!("Klick auf leere Fläche während Marker-Interaktion ignoriert");
        return;
    }

    let previous = ctx.host.store.clear_selection();
    for feature_id in previous {
        ctx.host.surface.request_render(feature_id);
        markers::show_selection_state(ctx, feature_id, false);
    }
    ctx.host.surface.set_double_click_zoom(true);
    stop_extended_interactions(state, ctx);
}

/// Fordert die Vertex-Bearbeitung am angeklickten Vertex an.
pub fn click_on_vertex(
    ctx: &mut ModeContext<'_, '_>,
    parent: FeatureId,
    coord_path: CoordPath,
    map_pos: DVec2,
) {
    ctx.emit(DrawEvent::ModeChange {
        transition: ModeTransition::DirectSelect {
            feature_id: parent,
            coord_path: Some(coord_path),
            start_pos: Some(map_pos),
        },
    });
    ctx.host.surface.set_cursor(Cursor::Move);
}

/// Klick auf ein Feature: Selektion nach [`decide_click`] anpassen.
pub fn click_on_feature(
    state: &mut SessionState,
    ctx: &mut ModeContext<'_, '_>,
    feature_id: FeatureId,
    shift: bool,
) {
    ctx.host.surface.set_double_click_zoom(false);
    stop_extended_interactions(state, ctx);

    let Some(kind) = ctx.host.store.get(feature_id).map(|f| f.kind()) else {
        log::debug!("Klick auf unbekanntes Feature {} ignoriert", feature_id);
        return;
    };

    let decision = decide_click(ctx.host.store.selected_ids(), feature_id, shift, kind);
    apply_click_decision(ctx, decision);
}

/// Setzt die neue Selektion und führt die Folgeaktionen der Reihe nach aus.
pub fn apply_click_decision(ctx: &mut ModeContext<'_, '_>, decision: ClickDecision) {
    if let Some(selection) = decision.selection {
        ctx.host.store.set_selected(&selection);
    }

    for effect in decision.effects {
        match effect {
            ClickEffect::EnterDirectSelect(feature_id) => ctx.emit(DrawEvent::ModeChange {
                transition: ModeTransition::DirectSelect {
                    feature_id,
                    coord_path: None,
                    start_pos: None,
                },
            }),
            ClickEffect::SetCursor(cursor) => ctx.host.surface.set_cursor(cursor),
            ClickEffect::EnableDoubleClickZoom => ctx.host.surface.set_double_click_zoom(true),
            ClickEffect::Render(feature_id) => ctx.host.surface.request_render(feature_id),
            ClickEffect::ResetMarkers { except } => markers::reset_all_except(ctx, except),
            ClickEffect::ShowMarker {
                feature_id,
                selected,
            } => markers::show_selection_state(ctx, feature_id, selected),
        }
    }
}
