//! Handler für Marker-Overlays von Marker-Punkten.
//!
//! Ein Marker-Punkt ist ein Point-Feature, dessen Property
//! `options.marker.mode_property` den Wert `options.marker.mode_value` trägt.
//! Jeder Marker-Punkt bekommt ein eigenes, ziehbares Overlay-Element, das den
//! Selektionszustand des Features spiegelt.

use super::click::apply_click_decision;
use super::drag::move_features;
use super::{fire_update, stop_extended_interactions, ModeContext};
use crate::app::host::RenderHint;
use crate::app::state::{Interaction, MarkerEntry, SessionState};
use crate::app::use_cases::click_decision::decide_click;
use crate::core::{Feature, FeatureId, Geometry};
use crate::shared::MarkerOptions;
use glam::DVec2;

/// Gibt `true` zurück, wenn `feature` als Marker-Overlay dargestellt wird.
pub fn is_marker_point(feature: &Feature, options: &MarkerOptions) -> bool {
    feature.is_point() && feature.property_str(&options.mode_property) == Some(&options.mode_value)
}

fn point_position(feature: &Feature) -> Option<DVec2> {
    match feature.geometry {
        Geometry::Point(p) => Some(p),
        _ => None,
    }
}

/// Eigenfarbe eines Marker-Punkts
fn base_color(feature: &Feature, options: &MarkerOptions) -> String {
    feature
        .property_str(&options.color_property)
        .unwrap_or(&options.default_color)
        .to_string()
}

/// Legt das Overlay eines Marker-Punkts bei Bedarf an und gleicht es
/// mit dem Selektionszustand ab.
pub fn sync_marker(ctx: &mut ModeContext<'_, '_>, feature_id: FeatureId) {
    let Some(feature) = ctx.host.store.get(feature_id) else {
        return;
    };
    let marker_options = &ctx.options.marker;
    if !is_marker_point(feature, marker_options) {
        return;
    }
    let Some(position) = point_position(feature) else {
        return;
    };
    let selected = ctx.host.store.is_selected(feature_id);

    if !ctx.markers.contains(feature_id) {
        let base = base_color(feature, marker_options);
        let color = if selected {
            marker_options.selected_color.clone()
        } else {
            base.clone()
        };
        let handle = ctx.host.overlays.create(feature_id, position, &color);
        if selected {
            ctx.host.overlays.set_draggable(handle, true);
        }
        log::debug!("Marker-Overlay für Feature {} angelegt", feature_id);
        ctx.markers.insert(
            feature_id,
            MarkerEntry {
                handle,
                base_color: base,
                color,
                draggable: selected,
            },
        );
        return;
    }

    show_selection_state(ctx, feature_id, selected);
}

/// Setzt Farbe und Ziehbarkeit eines vorhandenen Overlays auf den Zustand
/// `selected`. Features ohne Overlay werden ignoriert.
pub fn show_selection_state(ctx: &mut ModeContext<'_, '_>, feature_id: FeatureId, selected: bool) {
    let selected_color = &ctx.options.marker.selected_color;
    let Some(entry) = ctx.markers.get_mut(feature_id) else {
        return;
    };

    let color = if selected {
        selected_color.clone()
    } else {
        entry.base_color.clone()
    };
    if entry.color != color {
        ctx.host.overlays.set_color(entry.handle, &color);
        entry.color = color;
    }
    if entry.draggable != selected {
        ctx.host.overlays.set_draggable(entry.handle, selected);
        entry.draggable = selected;
    }
}

/// Setzt alle Overlays außer `except` auf Eigenfarbe und nicht ziehbar.
pub fn reset_all_except(ctx: &mut ModeContext<'_, '_>, except: FeatureId) {
    for feature_id in ctx.markers.feature_ids() {
        if feature_id != except {
            show_selection_state(ctx, feature_id, false);
        }
    }
}

/// Zieht das Overlay eines verschobenen Features an dessen neue Position.
pub fn follow_feature(ctx: &mut ModeContext<'_, '_>, feature_id: FeatureId) {
    let Some(entry) = ctx.markers.get(feature_id) else {
        return;
    };
    if let Some(position) = ctx.host.store.get(feature_id).and_then(point_position) {
        ctx.host.overlays.set_position(entry.handle, position);
    }
}

/// Entfernt das Overlay eines Features.
pub fn remove(ctx: &mut ModeContext<'_, '_>, feature_id: FeatureId) {
    if let Some(entry) = ctx.markers.remove(feature_id) {
        ctx.host.overlays.remove(entry.handle);
    }
}

/// Entfernt alle Overlays, deren Feature nicht mehr im Store liegt.
pub fn prune(ctx: &mut ModeContext<'_, '_>) {
    let orphans: Vec<FeatureId> = ctx
        .markers
        .feature_ids()
        .into_iter()
        .filter(|&id| !ctx.host.store.contains(id))
        .collect();

    for feature_id in orphans {
        log::debug!("Verwaistes Marker-Overlay {} entfernt", feature_id);
        remove(ctx, feature_id);
    }
}

/// Taste auf einem Overlay gedrückt: Oberflächen-Klicks bis zum Ende ignorieren.
pub fn on_pointer_down(state: &mut SessionState) -> RenderHint {
    state.marker_interaction = true;
    RenderHint::Skip
}

/// Klick auf ein Overlay: gleiche Entscheidung wie ein Klick auf das Feature.
pub fn on_click(
    state: &mut SessionState,
    ctx: &mut ModeContext<'_, '_>,
    feature_id: FeatureId,
    shift: bool,
) -> RenderHint {
    ctx.host.surface.set_double_click_zoom(false);
    stop_extended_interactions(state, ctx);

    let Some(feature) = ctx.host.store.get(feature_id) else {
        state.marker_interaction = false;
        return RenderHint::Skip;
    };
    if !ctx.markers.contains(feature_id) {
        state.marker_interaction = false;
        return RenderHint::Skip;
    }
    let kind = feature.kind();
    state.drag_anchor = point_position(feature);

    let decision = decide_click(ctx.host.store.selected_ids(), feature_id, shift, kind);
    apply_click_decision(ctx, decision);

    state.marker_interaction = false;
    RenderHint::Render
}

/// Drag auf einem Overlay beginnt: Anker auf die Feature-Koordinate setzen.
pub fn on_drag_start(
    state: &mut SessionState,
    ctx: &mut ModeContext<'_, '_>,
    feature_id: FeatureId,
) -> RenderHint {
    state.marker_interaction = true;
    if let Some(position) = ctx.host.store.get(feature_id).and_then(point_position) {
        state.drag_anchor = Some(position);
    }
    RenderHint::Skip
}

/// Overlay wurde auf `position` gezogen: ganze Selektion mitverschieben.
pub fn on_drag(
    state: &mut SessionState,
    ctx: &mut ModeContext<'_, '_>,
    feature_id: FeatureId,
    position: DVec2,
) -> RenderHint {
    if !ctx.host.store.is_selected(feature_id) {
        return RenderHint::Skip;
    }
    let Some(anchor) = state.drag_anchor else {
        state.drag_anchor = Some(position);
        return RenderHint::Skip;
    };

    state.interaction = Interaction::Drag { moved: true };
    let ids: Vec<FeatureId> = ctx.host.store.selected_ids().iter().copied().collect();
    move_features(ctx, &ids, position - anchor);
    state.drag_anchor = Some(position);
    RenderHint::Render
}

/// Drag auf einem Overlay endet: wie Loslassen auf der Oberfläche.
pub fn on_drag_end(state: &mut SessionState, ctx: &mut ModeContext<'_, '_>) -> RenderHint {
    state.marker_interaction = false;
    if state.is_dragging() {
        fire_update(ctx);
    }
    stop_extended_interactions(state, ctx);
    RenderHint::Render
}
