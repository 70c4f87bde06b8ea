//! Schnittstellen zu den externen Kollaborateuren des Select-Modus.
//!
//! Der Modus greift nie direkt auf eine Render-Oberfläche zu, sondern
//! ausschließlich über [`MapSurface`] und [`OverlayDriver`].

use super::events::DrawEvent;
use crate::core::{FeatureId, FeatureStore, MovementConstraint};
use glam::{DVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Mauszeiger-Stil der Kartenoberfläche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cursor {
    Pointer,
    Move,
    Add,
}

/// Art einer Feature-Abfrage (bestimmt die Trefferpuffer der Engine)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Click,
}

/// Handle auf das sichtbare Auswahlrechteck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxHandle(pub u64);

/// Handle auf ein Marker-Overlay-Element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// Ein gerendertes Element innerhalb eines Abfrage-Rechtecks.
/// Elemente ohne Feature-ID (z.B. Hilfsgeometrie) tragen `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxHit {
    pub feature_id: Option<FeatureId>,
}

/// Render-/Kamera-Engine der Karte.
pub trait MapSurface {
    /// Kamera-Verschieben per Drag aktivieren/deaktivieren
    fn set_drag_pan(&mut self, enabled: bool);
    /// Doppelklick-Zoom aktivieren/deaktivieren
    fn set_double_click_zoom(&mut self, enabled: bool);
    fn set_cursor(&mut self, cursor: Cursor);
    /// Feature beim nächsten Frame neu zeichnen
    fn request_render(&mut self, feature_id: FeatureId);

    /// Legt ein (noch leeres) Auswahlrechteck an.
    fn create_box_overlay(&mut self) -> BoxHandle;
    /// Setzt Lage und Größe des Auswahlrechtecks in Pixeln.
    fn update_box_overlay(&mut self, handle: BoxHandle, min: Vec2, max: Vec2);
    fn remove_box_overlay(&mut self, handle: BoxHandle);

    /// Gerenderte Elemente, die das Pixel-Rechteck `min`..`max` schneiden.
    fn features_in_box(
        &self,
        store: &FeatureStore,
        min: Vec2,
        max: Vec2,
        kind: QueryKind,
    ) -> Vec<BoxHit>;
}

/// Erzeugt und verändert Marker-Overlay-Elemente.
pub trait OverlayDriver {
    /// Legt ein nicht ziehbares Overlay an `position` an.
    fn create(&mut self, feature_id: FeatureId, position: DVec2, color: &str) -> MarkerHandle;
    fn set_color(&mut self, handle: MarkerHandle, color: &str);
    fn set_draggable(&mut self, handle: MarkerHandle, draggable: bool);
    fn set_position(&mut self, handle: MarkerHandle, position: DVec2);
    fn remove(&mut self, handle: MarkerHandle);
}

/// Alle Kollaborateure, die der Host pro Aufruf an den Modus übergibt.
pub struct ModeHost<'h> {
    pub store: &'h mut FeatureStore,
    pub surface: &'h mut dyn MapSurface,
    pub overlays: &'h mut dyn OverlayDriver,
    pub constraint: &'h dyn MovementConstraint,
    /// Ausgehende Benachrichtigungen (vom Host geleert)
    pub events: &'h mut Vec<DrawEvent>,
}

/// Rückgabe eines Handlers: soll der Host neu zeichnen?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderHint {
    Render,
    Skip,
}
