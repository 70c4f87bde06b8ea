//! Use-Case: Rechteck-Selektion (Shift + Drag).

use crate::app::host::BoxHit;
use crate::core::{FeatureId, FeatureStore};
use glam::Vec2;
use indexmap::IndexSet;

/// Berechnet das achsen-alignierte Bounding-Rect aus zwei Eckpunkten.
pub fn rect_min_max(a: Vec2, b: Vec2) -> (Vec2, Vec2) {
    (a.min(b), a.max(b))
}

/// Features aus den Rechteck-Treffern, die neu zur Selektion hinzukommen.
///
/// Reihenfolge des ersten Auftretens bleibt erhalten; Treffer ohne ID,
/// unbekannte und bereits selektierte Features entfallen.
pub fn new_box_selection(store: &FeatureStore, hits: &[BoxHit]) -> Vec<FeatureId> {
    let unique: IndexSet<FeatureId> = hits.iter().filter_map(|hit| hit.feature_id).collect();

    unique
        .into_iter()
        .filter(|&id| store.contains(id) && !store.is_selected(id))
        .collect()
}
