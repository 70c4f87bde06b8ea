//! In-Memory Feature-Store mit geordneter Selektion.

use super::{Feature, FeatureId, Geometry, Properties};
use indexmap::{IndexMap, IndexSet};

/// Container für alle editierbaren Features und die aktuelle Selektion.
///
/// Jede selektierte ID verweist auf ein existierendes Feature: Löschen
/// entfernt die ID immer auch aus der Selektion.
#[derive(Debug, Clone)]
pub struct FeatureStore {
    /// Features in Einfügereihenfolge
    features: IndexMap<FeatureId, Feature>,
    /// Selektierte IDs in Selektionsreihenfolge
    selection: IndexSet<FeatureId>,
    /// Nächste freie ID für neue Features
    next_id: FeatureId,
}

impl FeatureStore {
    /// Erstellt einen leeren Store
    pub fn new() -> Self {
        Self {
            features: IndexMap::new(),
            selection: IndexSet::new(),
            next_id: 1,
        }
    }

    /// Baut einen Store aus bestehenden Features (IDs bleiben erhalten).
    pub fn from_features(features: impl IntoIterator<Item = Feature>) -> Self {
        let mut store = Self::new();
        for feature in features {
            store.insert(feature);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, id: FeatureId) -> Option<&Feature> {
        self.features.get(&id)
    }

    pub fn contains(&self, id: FeatureId) -> bool {
        self.features.contains_key(&id)
    }

    /// Alle Features in Einfügereihenfolge
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.values()
    }

    /// Legt ein neues Feature aus einer Geometrie an und gibt dessen ID zurück.
    pub fn add(&mut self, geometry: Geometry, properties: Properties) -> FeatureId {
        let id = self.allocate_id();
        self.features
            .insert(id, Feature::new(id, geometry, properties));
        id
    }

    /// Fügt ein Feature mit vorgegebener ID ein (ersetzt ein vorhandenes gleicher ID).
    pub fn insert(&mut self, feature: Feature) -> FeatureId {
        let id = feature.id;
        self.next_id = self.next_id.max(id.saturating_add(1));
        self.features.insert(id, feature);
        id
    }

    /// Nächste freie ID. Nach `u64::MAX` wird wieder bei 1 gesucht.
    fn allocate_id(&mut self) -> FeatureId {
        loop {
            let id = self.next_id;
            self.next_id = match id.checked_add(1) {
                Some(next) => next,
                None => {
                    log::warn!("Feature-IDs erschöpft, Suche beginnt wieder bei 1");
                    1
                }
            };
            if !self.features.contains_key(&id) {
                return id;
            }
        }
    }

    /// Entfernt ein Feature und dessen Selektion.
    pub fn delete(&mut self, id: FeatureId) -> Option<Feature> {
        self.selection.shift_remove(&id);
        self.features.shift_remove(&id)
    }

    /// Entfernt mehrere Features; liefert die tatsächlich gelöschten.
    pub fn delete_many(&mut self, ids: &[FeatureId]) -> Vec<Feature> {
        ids.iter().filter_map(|id| self.delete(*id)).collect()
    }

    /// Ersetzt die Geometrie eines Features. `false`, wenn die ID unbekannt ist.
    pub fn set_geometry(&mut self, id: FeatureId, geometry: Geometry) -> bool {
        let Some(feature) = self.features.get_mut(&id) else {
            return false;
        };
        feature.geometry = geometry;
        true
    }

    // ── Selektion ───────────────────────────────────────────────────

    /// Selektierte IDs in Selektionsreihenfolge
    pub fn selected_ids(&self) -> &IndexSet<FeatureId> {
        &self.selection
    }

    /// Selektierte Features in Selektionsreihenfolge
    pub fn selected_features(&self) -> Vec<&Feature> {
        self.selection
            .iter()
            .filter_map(|id| self.features.get(id))
            .collect()
    }

    pub fn is_selected(&self, id: FeatureId) -> bool {
        self.selection.contains(&id)
    }

    /// Fügt eine ID zur Selektion hinzu. Unbekannte IDs werden ignoriert.
    pub fn select(&mut self, id: FeatureId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.selection.insert(id)
    }

    /// Entfernt eine ID aus der Selektion.
    pub fn deselect(&mut self, id: FeatureId) -> bool {
        self.selection.shift_remove(&id)
    }

    /// Ersetzt die Selektion; unbekannte IDs werden herausgefiltert.
    pub fn set_selected(&mut self, ids: &[FeatureId]) {
        self.selection.clear();
        for &id in ids {
            self.select(id);
        }
    }

    /// Leert die Selektion und gibt die zuvor selektierten IDs zurück.
    pub fn clear_selection(&mut self) -> Vec<FeatureId> {
        self.selection.drain(..).collect()
    }
}

impl Default for FeatureStore {
    fn default() -> Self {
        Self::new()
    }
}
