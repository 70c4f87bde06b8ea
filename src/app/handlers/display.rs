//! Darstellung: GeoJSON-Features für die Render-Engine aufbereiten.

use super::{fire_actionable, markers, ModeContext};
use crate::core::{CoordPath, FeatureId, Geometry, Properties};
use serde::Serialize;

/// Rolle eines dargestellten Features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMeta {
    Feature,
    /// Vertex-Handle eines aktiven Features
    Vertex,
}

/// Ein an die Render-Engine übergebenes Feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayFeature {
    pub meta: DisplayMeta,
    /// Als selektiert darstellen
    pub active: bool,
    /// ID des Features (bei Vertex-Handles: des Eltern-Features)
    pub feature_id: FeatureId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<FeatureId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coord_path: Option<CoordPath>,
    pub geometry: Geometry,
    pub properties: Properties,
}

/// Baut die darzustellenden Features für `feature_id`.
///
/// Aktive Nicht-Point-Features bekommen zusätzlich ein Handle je Vertex.
/// Nebenbei werden Marker-Overlay und Sammelbefehl-Verfügbarkeit abgeglichen.
/// Overlays von Features, die außerhalb des Modus gelöscht wurden, werden
/// hier entfernt.
pub fn display_features(ctx: &mut ModeContext<'_, '_>, feature_id: FeatureId) -> Vec<DisplayFeature> {
    markers::prune(ctx);
    let Some(feature) = ctx.host.store.get(feature_id) else {
        return Vec::new();
    };
    let active = ctx.host.store.is_selected(feature_id);

    let mut out = vec![DisplayFeature {
        meta: DisplayMeta::Feature,
        active,
        feature_id,
        parent: None,
        coord_path: None,
        geometry: feature.geometry.clone(),
        properties: feature.properties.clone(),
    }];

    if active && !feature.is_point() {
        out.extend(
            feature
                .geometry
                .vertices()
                .into_iter()
                .map(|(coord_path, position)| DisplayFeature {
                    meta: DisplayMeta::Vertex,
                    active: false,
                    feature_id,
                    parent: Some(feature_id),
                    coord_path: Some(coord_path),
                    geometry: Geometry::Point(position),
                    properties: Properties::new(),
                }),
        );
    }

    markers::sync_marker(ctx, feature_id);
    fire_actionable(ctx);
    out
}
