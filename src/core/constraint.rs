//! Bewegungs-Beschränkung für das Verschieben selektierter Features.

use super::Feature;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Passt ein vorgeschlagenes Verschiebe-Delta an (z.B. Clamping an Weltgrenzen).
pub trait MovementConstraint {
    /// Liefert das tatsächlich anzuwendende Delta für die übergebenen Features.
    fn constrain(&self, features: &[&Feature], delta: DVec2) -> DVec2;
}

/// Keine Beschränkung: das Delta wird unverändert übernommen.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconstrained;

impl MovementConstraint for Unconstrained {
    fn constrain(&self, _features: &[&Feature], delta: DVec2) -> DVec2 {
        delta
    }
}

/// Grenzwerte für [`WorldBoundsConstraint`] (Grad).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementBounds {
    /// Kein Feature darf südlich davon liegen
    pub lat_min: f64,
    /// Kein Feature darf nördlich davon liegen
    pub lat_max: f64,
    /// Jedes Feature muss teilweise nördlich davon sichtbar bleiben
    pub lat_rendered_min: f64,
    /// Jedes Feature muss teilweise südlich davon sichtbar bleiben
    pub lat_rendered_max: f64,
    /// Westgrenze, ab der um 360° umgebrochen wird
    pub lng_min: f64,
    /// Ostgrenze, ab der um 360° umgebrochen wird
    pub lng_max: f64,
}

impl Default for MovementBounds {
    fn default() -> Self {
        Self {
            lat_min: -90.0,
            lat_max: 90.0,
            lat_rendered_min: -85.0,
            lat_rendered_max: 85.0,
            lng_min: -270.0,
            lng_max: 270.0,
        }
    }
}

/// Hält verschobene Features innerhalb der darstellbaren Welt.
///
/// Breitengrad: Das Delta wird so begrenzt, dass kein Feature die Pole
/// überschreitet und jedes Feature teilweise im gerenderten Bereich bleibt.
/// Längengrad: Beim Erreichen der West-/Ostgrenze wird das Delta um
/// Vielfache von 360° umgebrochen.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldBoundsConstraint {
    pub bounds: MovementBounds,
}

impl WorldBoundsConstraint {
    pub fn new(bounds: MovementBounds) -> Self {
        Self { bounds }
    }
}

/// Kleinstes Vielfaches von 360°, das `|dx|` abdeckt
fn full_turns(dx: f64) -> f64 {
    (dx.abs() / 360.0).ceil() * 360.0
}

impl MovementConstraint for WorldBoundsConstraint {
    fn constrain(&self, features: &[&Feature], delta: DVec2) -> DVec2 {
        let b = &self.bounds;

        // Innere Kanten: südlichster Nordrand / nördlichster Südrand
        let mut north_inner = b.lat_min;
        let mut south_inner = b.lat_max;
        let mut north_outer = b.lat_min;
        let mut south_outer = b.lat_max;
        let mut west = b.lng_max;
        let mut east = b.lng_min;
        let mut any = false;

        for (min, max) in features.iter().filter_map(|f| f.geometry.bounds()) {
            any = true;
            north_inner = north_inner.max(min.y);
            south_inner = south_inner.min(max.y);
            north_outer = north_outer.max(max.y);
            south_outer = south_outer.min(min.y);
            west = west.min(min.x);
            east = east.max(max.x);
        }

        if !any {
            return delta;
        }

        let mut constrained = delta;

        if north_inner + constrained.y > b.lat_rendered_max {
            constrained.y = b.lat_rendered_max - north_inner;
        }
        if north_outer + constrained.y > b.lat_max {
            constrained.y = b.lat_max - north_outer;
        }
        if south_inner + constrained.y < b.lat_rendered_min {
            constrained.y = b.lat_rendered_min - south_inner;
        }
        if south_outer + constrained.y < b.lat_min {
            constrained.y = b.lat_min - south_outer;
        }

        // Umlauf jeweils aus dem bereits korrigierten Delta
        if west + constrained.x <= b.lng_min {
            constrained.x += full_turns(constrained.x);
        }
        if east + constrained.x >= b.lng_max {
            constrained.x -= full_turns(constrained.x);
        }

        constrained
    }
}
