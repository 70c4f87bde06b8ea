//! Gemeinsamer Test-Aufbau: Select-Modus mit Headless-Kollaborateuren.

#![allow(dead_code)]

use feature_select_mode::{
    DisplayFeature, DrawEvent, FeatureId, FeatureStore, Geometry, HeadlessSurface, InputEvent,
    ModeHost, MovementConstraint, Properties, RecordingOverlays, RenderHint, SelectMode,
    SelectOptions, Unconstrained,
};
use glam::DVec2;
use serde_json::json;

pub struct Harness {
    pub store: FeatureStore,
    pub surface: HeadlessSurface,
    pub overlays: RecordingOverlays,
    pub events: Vec<DrawEvent>,
    pub mode: SelectMode,
    pub constraint: Box<dyn MovementConstraint>,
}

impl Harness {
    pub fn new(store: FeatureStore) -> Self {
        Self::with_options(store, SelectOptions::default())
    }

    pub fn with_options(store: FeatureStore, options: SelectOptions) -> Self {
        Self {
            store,
            surface: HeadlessSurface::new(),
            overlays: RecordingOverlays::new(),
            events: Vec::new(),
            mode: SelectMode::new(options),
            constraint: Box::new(Unconstrained),
        }
    }

    fn run<R>(&mut self, f: impl FnOnce(&mut SelectMode, &mut ModeHost<'_>) -> R) -> R {
        let mut host = ModeHost {
            store: &mut self.store,
            surface: &mut self.surface,
            overlays: &mut self.overlays,
            constraint: self.constraint.as_ref(),
            events: &mut self.events,
        };
        f(&mut self.mode, &mut host)
    }

    pub fn activate(&mut self, ids: &[FeatureId]) {
        self.run(|mode, host| mode.activate(host, ids));
    }

    pub fn deactivate(&mut self) {
        self.run(|mode, host| mode.deactivate(host));
    }

    pub fn send(&mut self, event: InputEvent) -> RenderHint {
        self.run(|mode, host| mode.handle_input(host, event))
    }

    pub fn display(&mut self, feature_id: FeatureId) -> Vec<DisplayFeature> {
        self.run(|mode, host| mode.display_features(host, feature_id))
    }

    /// Stellt alle Features dar (wie ein Render-Frame des Hosts).
    pub fn redraw(&mut self) {
        let ids: Vec<FeatureId> = self.store.iter().map(|f| f.id).collect();
        for id in ids {
            self.display(id);
        }
    }

    pub fn take_events(&mut self) -> Vec<DrawEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn selection(&self) -> Vec<FeatureId> {
        self.store.selected_ids().iter().copied().collect()
    }

    pub fn geometry(&self, feature_id: FeatureId) -> Option<Geometry> {
        self.store.get(feature_id).map(|f| f.geometry.clone())
    }
}

pub fn point(x: f64, y: f64) -> Geometry {
    Geometry::Point(DVec2::new(x, y))
}

pub fn line(coords: &[(f64, f64)]) -> Geometry {
    Geometry::LineString(coords.iter().map(|&(x, y)| DVec2::new(x, y)).collect())
}

/// Achsenparalleles Quadrat mit geschlossenem Außenring
pub fn square(x: f64, y: f64, size: f64) -> Geometry {
    Geometry::Polygon(vec![vec![
        DVec2::new(x, y),
        DVec2::new(x + size, y),
        DVec2::new(x + size, y + size),
        DVec2::new(x, y + size),
        DVec2::new(x, y),
    ]])
}

pub fn named(name: &str) -> Properties {
    let mut props = Properties::new();
    props.insert("name".into(), json!(name));
    props
}

/// Properties eines Marker-Punkts mit optionaler Eigenfarbe
pub fn marker_props(color: Option<&str>) -> Properties {
    let mut props = Properties::new();
    props.insert("mode".into(), json!("marker"));
    if let Some(color) = color {
        props.insert("marker-color".into(), json!(color));
    }
    props
}
