//! Handler für Pointer-Bewegung, Drücken, Ziehen und Loslassen.

use super::{box_select, drag, fire_update, stop_extended_interactions, ModeContext};
use crate::app::events::PointerEvent;
use crate::app::host::RenderHint;
use crate::app::predicates;
use crate::app::state::SessionState;

/// Bewegung ohne Drag. Beendet erweiterte Interaktionen, sobald die Taste
/// nicht mehr gehalten wird.
pub fn on_pointer_move(
    state: &mut SessionState,
    ctx: &mut ModeContext<'_, '_>,
    event: &PointerEvent,
) -> RenderHint {
    if predicates::is_feature(event) && state.is_dragging() {
        fire_update(ctx);
    }
    if !event.button_held {
        stop_extended_interactions(state, ctx);
    }
    RenderHint::Skip
}

/// Pointer verlässt die Oberfläche. Ein Drag läuft weiter, eine
/// Rechteck-Selektion wird abgebrochen.
pub fn on_pointer_leave(state: &mut SessionState, ctx: &mut ModeContext<'_, '_>) -> RenderHint {
    if state.is_dragging() {
        fire_update(ctx);
        return RenderHint::Render;
    }
    if state.can_box_select() {
        log::debug!("Rechteck-Selektion beim Verlassen der Oberfläche abgebrochen");
        stop_extended_interactions(state, ctx);
    }
    RenderHint::Skip
}

/// Taste gedrückt: Drag auf aktivem Feature oder Rechteck-Selektion mit Shift.
pub fn on_pointer_down(
    state: &mut SessionState,
    ctx: &mut ModeContext<'_, '_>,
    event: &PointerEvent,
) -> RenderHint {
    if let Some(feature_id) = predicates::active_feature_target(event) {
        drag::start_on_active_feature(state, ctx, feature_id, event.map_pos);
    } else if ctx.options.box_select && predicates::is_shift_press(event) {
        box_select::start(state, ctx, event.screen_pos);
    }
    RenderHint::Render
}

/// Touch beginnt: nur Drag auf aktivem Feature.
pub fn on_touch_start(
    state: &mut SessionState,
    ctx: &mut ModeContext<'_, '_>,
    event: &PointerEvent,
) -> RenderHint {
    if let Some(feature_id) = predicates::active_feature_target(event) {
        drag::start_on_active_feature(state, ctx, feature_id, event.map_pos);
    }
    RenderHint::Render
}

/// Bewegung mit gedrückter Taste.
pub fn on_drag(
    state: &mut SessionState,
    ctx: &mut ModeContext<'_, '_>,
    event: &PointerEvent,
) -> RenderHint {
    if state.can_drag_move() {
        drag::drag_move(state, ctx, event.map_pos);
    } else if ctx.options.box_select && state.can_box_select() {
        box_select::update(state, ctx, event.screen_pos);
    }
    RenderHint::Render
}

/// Loslassen (Maus oder Touch).
pub fn on_release(
    state: &mut SessionState,
    ctx: &mut ModeContext<'_, '_>,
    event: &PointerEvent,
) -> RenderHint {
    if state.is_dragging() {
        fire_update(ctx);
    } else if state.is_box_selecting() {
        box_select::resolve(state, ctx, event.screen_pos);
    }
    stop_extended_interactions(state, ctx);
    RenderHint::Render
}
