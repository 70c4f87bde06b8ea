//! Kollaborateure ohne Render-Engine für Replay und Tests.
//!
//! [`HeadlessSurface`] verwendet eine Identitäts-Projektion: Pixel- und
//! Kartenkoordinaten stimmen überein.

use crate::app::host::{BoxHandle, BoxHit, Cursor, MapSurface, MarkerHandle, OverlayDriver, QueryKind};
use crate::core::{FeatureId, FeatureStore};
use glam::{DVec2, Vec2};
use indexmap::IndexMap;

/// Kartenoberfläche, die alle Aufrufe des Select-Modus aufzeichnet.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    drag_pan: bool,
    double_click_zoom: bool,
    cursor: Option<Cursor>,
    /// Angeforderte Redraws in Aufrufreihenfolge
    renders: Vec<FeatureId>,
    /// Sichtbare Auswahlrechtecke
    boxes: IndexMap<BoxHandle, (Vec2, Vec2)>,
    next_box: u64,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self {
            drag_pan: true,
            double_click_zoom: true,
            cursor: None,
            renders: Vec::new(),
            boxes: IndexMap::new(),
            next_box: 1,
        }
    }

    pub fn drag_pan_enabled(&self) -> bool {
        self.drag_pan
    }

    pub fn double_click_zoom_enabled(&self) -> bool {
        self.double_click_zoom
    }

    /// Zuletzt gesetzter Mauszeiger
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    pub fn renders(&self) -> &[FeatureId] {
        &self.renders
    }

    /// Leert die aufgezeichneten Redraws.
    pub fn take_renders(&mut self) -> Vec<FeatureId> {
        std::mem::take(&mut self.renders)
    }

    /// Aktuell sichtbares Auswahlrechteck (falls vorhanden)
    pub fn box_overlay(&self) -> Option<(Vec2, Vec2)> {
        self.boxes.values().next().copied()
    }

    pub fn box_overlay_count(&self) -> usize {
        self.boxes.len()
    }
}

impl MapSurface for HeadlessSurface {
    fn set_drag_pan(&mut self, enabled: bool) {
        self.drag_pan = enabled;
    }

    fn set_double_click_zoom(&mut self, enabled: bool) {
        self.double_click_zoom = enabled;
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = Some(cursor);
    }

    fn request_render(&mut self, feature_id: FeatureId) {
        self.renders.push(feature_id);
    }

    fn create_box_overlay(&mut self) -> BoxHandle {
        let handle = BoxHandle(self.next_box);
        self.next_box += 1;
        self.boxes.insert(handle, (Vec2::ZERO, Vec2::ZERO));
        handle
    }

    fn update_box_overlay(&mut self, handle: BoxHandle, min: Vec2, max: Vec2) {
        if let Some(rect) = self.boxes.get_mut(&handle) {
            *rect = (min, max);
        }
    }

    fn remove_box_overlay(&mut self, handle: BoxHandle) {
        self.boxes.shift_remove(&handle);
    }

    /// Alle Features, deren Bounding-Box das Rechteck schneidet (inkl. Rand),
    /// in Store-Reihenfolge.
    fn features_in_box(
        &self,
        store: &FeatureStore,
        min: Vec2,
        max: Vec2,
        _kind: QueryKind,
    ) -> Vec<BoxHit> {
        let (min, max) = (min.as_dvec2(), max.as_dvec2());
        store
            .iter()
            .filter(|feature| {
                feature.geometry.bounds().is_some_and(|(lo, hi)| {
                    lo.x <= max.x && hi.x >= min.x && lo.y <= max.y && hi.y >= min.y
                })
            })
            .map(|feature| BoxHit {
                feature_id: Some(feature.id),
            })
            .collect()
    }
}

/// Aufgezeichneter Zustand eines Marker-Overlays
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRecord {
    pub feature_id: FeatureId,
    pub position: DVec2,
    pub color: String,
    pub draggable: bool,
}

/// Overlay-Treiber, der alle Marker-Overlays im Speicher hält.
#[derive(Debug, Clone, Default)]
pub struct RecordingOverlays {
    overlays: IndexMap<MarkerHandle, OverlayRecord>,
    next_handle: u64,
}

impl RecordingOverlays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    pub fn get(&self, handle: MarkerHandle) -> Option<&OverlayRecord> {
        self.overlays.get(&handle)
    }

    /// Overlay eines Features
    pub fn for_feature(&self, feature_id: FeatureId) -> Option<&OverlayRecord> {
        self.overlays
            .values()
            .find(|record| record.feature_id == feature_id)
    }
}

impl OverlayDriver for RecordingOverlays {
    fn create(&mut self, feature_id: FeatureId, position: DVec2, color: &str) -> MarkerHandle {
        self.next_handle += 1;
        let handle = MarkerHandle(self.next_handle);
        self.overlays.insert(
            handle,
            OverlayRecord {
                feature_id,
                position,
                color: color.to_string(),
                draggable: false,
            },
        );
        handle
    }

    fn set_color(&mut self, handle: MarkerHandle, color: &str) {
        if let Some(record) = self.overlays.get_mut(&handle) {
            record.color = color.to_string();
        }
    }

    fn set_draggable(&mut self, handle: MarkerHandle, draggable: bool) {
        if let Some(record) = self.overlays.get_mut(&handle) {
            record.draggable = draggable;
        }
    }

    fn set_position(&mut self, handle: MarkerHandle, position: DVec2) {
        if let Some(record) = self.overlays.get_mut(&handle) {
            record.position = position;
        }
    }

    fn remove(&mut self, handle: MarkerHandle) {
        self.overlays.shift_remove(&handle);
    }
}
