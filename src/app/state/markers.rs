use crate::app::host::MarkerHandle;
use crate::core::FeatureId;
use indexmap::IndexMap;

/// Sichtbarer Zustand eines Marker-Overlays
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerEntry {
    /// Handle beim Overlay-Treiber
    pub handle: MarkerHandle,
    /// Eigene Farbe des Features
    pub base_color: String,
    /// Aktuell angezeigte Farbe
    pub color: String,
    /// Ziehbar (genau dann, wenn das Feature selektiert ist)
    pub draggable: bool,
}

/// Marker-Overlays je Feature-ID, in Erstellungsreihenfolge.
///
/// Einträge überleben Redraws und Modus-Wechsel; sie werden erst entfernt,
/// wenn das zugehörige Feature gelöscht wird.
#[derive(Debug, Clone, Default)]
pub struct MarkerRegistry {
    entries: IndexMap<FeatureId, MarkerEntry>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, feature_id: FeatureId) -> bool {
        self.entries.contains_key(&feature_id)
    }

    pub fn get(&self, feature_id: FeatureId) -> Option<&MarkerEntry> {
        self.entries.get(&feature_id)
    }

    pub fn get_mut(&mut self, feature_id: FeatureId) -> Option<&mut MarkerEntry> {
        self.entries.get_mut(&feature_id)
    }

    pub fn insert(&mut self, feature_id: FeatureId, entry: MarkerEntry) {
        self.entries.insert(feature_id, entry);
    }

    pub fn remove(&mut self, feature_id: FeatureId) -> Option<MarkerEntry> {
        self.entries.shift_remove(&feature_id)
    }

    /// IDs aller Features mit Overlay
    pub fn feature_ids(&self) -> Vec<FeatureId> {
        self.entries.keys().copied().collect()
    }
}
