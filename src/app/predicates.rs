//! Zustandslose Klassifikation von Pointer-Events.

use super::events::{EventTarget, PointerButton, PointerEvent};
use crate::core::{CoordPath, FeatureId};

/// Kein Element unter dem Pointer
pub fn no_target(event: &PointerEvent) -> bool {
    event.target.is_none()
}

/// ID des Features unter dem Pointer
pub fn feature_target(event: &PointerEvent) -> Option<FeatureId> {
    match event.target {
        Some(EventTarget::Feature { id, .. }) => Some(id),
        _ => None,
    }
}

pub fn is_feature(event: &PointerEvent) -> bool {
    feature_target(event).is_some()
}

/// ID eines bereits selektiert gerenderten Features unter dem Pointer
pub fn active_feature_target(event: &PointerEvent) -> Option<FeatureId> {
    match event.target {
        Some(EventTarget::Feature { id, active: true }) => Some(id),
        _ => None,
    }
}

/// Eltern-Feature und Koordinatenpfad eines Vertex-Handles unter dem Pointer
pub fn vertex_target(event: &PointerEvent) -> Option<(FeatureId, &CoordPath)> {
    match &event.target {
        Some(EventTarget::Vertex { parent, coord_path }) => Some((*parent, coord_path)),
        _ => None,
    }
}

pub fn is_shift_down(event: &PointerEvent) -> bool {
    event.shift
}

/// Shift + primäre Taste gedrückt
pub fn is_shift_press(event: &PointerEvent) -> bool {
    event.shift && event.button == PointerButton::Primary
}
