//! Handler für die Rechteck-Selektion (Shift + Drag).

use super::{markers, stop_extended_interactions, ModeContext};
use crate::app::host::{Cursor, QueryKind};
use crate::app::state::{Interaction, SessionState};
use crate::app::use_cases::selection::{new_box_selection, rect_min_max};
use glam::Vec2;

/// Schaltet die Rechteck-Selektion mit erster Ecke `anchor` (Pixel) scharf.
pub fn start(state: &mut SessionState, ctx: &mut ModeContext<'_, '_>, anchor: Vec2) {
    stop_extended_interactions(state, ctx);
    ctx.host.surface.set_drag_pan(false);
    state.interaction = Interaction::BoxSelect {
        anchor,
        overlay: None,
        selecting: false,
    };
}

/// Ein Drag-Frame: Auswahlrechteck bis `current` aufziehen.
pub fn update(state: &mut SessionState, ctx: &mut ModeContext<'_, '_>, current: Vec2) {
    let Interaction::BoxSelect {
        anchor, overlay, ..
    } = state.interaction
    else {
        return;
    };

    ctx.host.surface.set_cursor(Cursor::Add);
    let handle = match overlay {
        Some(handle) => handle,
        None => ctx.host.surface.create_box_overlay(),
    };
    let (min, max) = rect_min_max(anchor, current);
    ctx.host.surface.update_box_overlay(handle, min, max);

    state.interaction = Interaction::BoxSelect {
        anchor,
        overlay: Some(handle),
        selecting: true,
    };
}

/// Loslassen: Features im Rechteck `anchor`..`current` zur Selektion hinzufügen.
pub fn resolve(state: &mut SessionState, ctx: &mut ModeContext<'_, '_>, current: Vec2) {
    let Interaction::BoxSelect { anchor, .. } = state.interaction else {
        return;
    };

    let (min, max) = rect_min_max(anchor, current);
    let hits = ctx
        .host
        .surface
        .features_in_box(ctx.host.store, min, max, QueryKind::Click);
    let added = new_box_selection(ctx.host.store, &hits);

    if !added.is_empty() {
        log::debug!("Rechteck-Selektion: {} Features hinzugefügt", added.len());
        for &feature_id in &added {
            ctx.host.store.select(feature_id);
            ctx.host.surface.request_render(feature_id);
            markers::show_selection_state(ctx, feature_id, true);
        }
        ctx.host.surface.set_cursor(Cursor::Move);
    }

    stop_extended_interactions(state, ctx);
}
