//! Handler für Drag-Verschieben der Selektion.

use super::{markers, stop_extended_interactions, ModeContext};
use crate::app::state::{Interaction, SessionState};
use crate::core::{translate, Feature, FeatureId};
use glam::DVec2;

/// Schaltet Drag-Verschieben auf einem bereits selektierten Feature scharf.
pub fn start_on_active_feature(
    state: &mut SessionState,
    ctx: &mut ModeContext<'_, '_>,
    feature_id: FeatureId,
    map_pos: DVec2,
) {
    stop_extended_interactions(state, ctx);
    ctx.host.surface.set_drag_pan(false);
    ctx.host.surface.request_render(feature_id);
    state.interaction = Interaction::Drag { moved: false };
    state.drag_anchor = Some(map_pos);
}

/// Ein Drag-Frame: verschiebt die Selektion um `map_pos - anchor`.
pub fn drag_move(state: &mut SessionState, ctx: &mut ModeContext<'_, '_>, map_pos: DVec2) {
    state.interaction = Interaction::Drag { moved: true };

    let Some(anchor) = state.drag_anchor else {
        state.drag_anchor = Some(map_pos);
        return;
    };

    let ids: Vec<FeatureId> = ctx.host.store.selected_ids().iter().copied().collect();
    move_features(ctx, &ids, map_pos - anchor);
    state.drag_anchor = Some(map_pos);
}

/// Verschiebt die Features `ids` um `delta` (nach Anwendung der Bewegungs-Begrenzung)
/// und zieht deren Marker-Overlays nach.
pub fn move_features(ctx: &mut ModeContext<'_, '_>, ids: &[FeatureId], delta: DVec2) {
    if ids.is_empty() {
        return;
    }

    let moved: Vec<(FeatureId, crate::core::Geometry)> = {
        let features: Vec<&Feature> =
            ids.iter().filter_map(|&id| ctx.host.store.get(id)).collect();
        let constrained = ctx.host.constraint.constrain(&features, delta);
        if constrained == DVec2::ZERO {
            return;
        }
        features
            .iter()
            .map(|f| (f.id, translate(&f.geometry, constrained)))
            .collect()
    };

    for (id, geometry) in moved {
        ctx.host.store.set_geometry(id, geometry);
        markers::follow_feature(ctx, id);
    }
}
