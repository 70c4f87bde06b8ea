use crate::core::{CoordPath, Feature, FeatureId};
use glam::DVec2;
use serde::Serialize;

/// Art eines `draw.update`-Events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateAction {
    /// Features wurden verschoben
    Move,
}

/// Aktuell verfügbare Sammelbefehle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Actionable {
    pub combine_features: bool,
    pub uncombine_features: bool,
    pub trash: bool,
}

impl Actionable {
    /// Alle Sammelbefehle freigegeben
    pub fn all_enabled() -> Self {
        Self {
            combine_features: true,
            uncombine_features: true,
            trash: true,
        }
    }
}

/// Angeforderter Wechsel in einen anderen Editor-Modus.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ModeTransition {
    /// Vertex-Bearbeitung eines einzelnen Features
    DirectSelect {
        feature_id: FeatureId,
        #[serde(skip_serializing_if = "Option::is_none")]
        coord_path: Option<CoordPath>,
        #[serde(skip_serializing_if = "Option::is_none")]
        start_pos: Option<DVec2>,
    },
}

/// Benachrichtigungen des Select-Modus an den Host (Observer-Events).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum DrawEvent {
    /// Geometrien der Selektion haben sich geändert
    #[serde(rename = "draw.update")]
    Update {
        action: UpdateAction,
        features: Vec<Feature>,
    },
    /// Selektion wurde zu einem Multi-Feature zusammengeführt
    #[serde(rename = "draw.combine")]
    CombineFeatures {
        created_features: Vec<Feature>,
        deleted_features: Vec<Feature>,
    },
    /// Multi-Features wurden in Einzel-Features aufgeteilt
    #[serde(rename = "draw.uncombine")]
    UncombineFeatures {
        created_features: Vec<Feature>,
        deleted_features: Vec<Feature>,
    },
    /// Features wurden gelöscht
    #[serde(rename = "draw.delete")]
    Delete { features: Vec<Feature> },
    /// Verfügbarkeit der Sammelbefehle hat sich geändert
    #[serde(rename = "draw.actionable")]
    Actionable { actions: Actionable },
    /// Modus-Wechsel angefordert
    #[serde(rename = "draw.modechange")]
    ModeChange { transition: ModeTransition },
}
