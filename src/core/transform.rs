//! Geometrie-Transformation: Verschieben aller Koordinaten um ein Delta.
//!
//! Reine Strukturabbildung: Anzahl der Punkte und Umlaufsinn der Ringe
//! bleiben unverändert.

use super::Geometry;
use glam::DVec2;

fn move_ring(ring: &[DVec2], delta: DVec2) -> Vec<DVec2> {
    ring.iter().map(|position| *position + delta).collect()
}

fn move_rings(rings: &[Vec<DVec2>], delta: DVec2) -> Vec<Vec<DVec2>> {
    rings.iter().map(|ring| move_ring(ring, delta)).collect()
}

/// Verschiebt jede Position der Geometrie um `delta` (x = lng, y = lat).
pub fn translate(geometry: &Geometry, delta: DVec2) -> Geometry {
    match geometry {
        Geometry::Point(p) => Geometry::Point(*p + delta),
        Geometry::LineString(line) => Geometry::LineString(move_ring(line, delta)),
        Geometry::MultiPoint(points) => Geometry::MultiPoint(move_ring(points, delta)),
        Geometry::Polygon(rings) => Geometry::Polygon(move_rings(rings, delta)),
        Geometry::MultiLineString(lines) => Geometry::MultiLineString(move_rings(lines, delta)),
        Geometry::MultiPolygon(polygons) => Geometry::MultiPolygon(
            polygons
                .iter()
                .map(|rings| move_rings(rings, delta))
                .collect(),
        ),
    }
}

impl Geometry {
    /// Verschobene Kopie der Geometrie.
    pub fn translated(&self, delta: DVec2) -> Geometry {
        translate(self, delta)
    }

    /// Achsen-alignierte Bounding-Box als `(min, max)`. `None` bei leerer Geometrie.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let mut bounds: Option<(DVec2, DVec2)> = None;
        let mut extend = |p: DVec2| {
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(p), max.max(p)),
                None => (p, p),
            });
        };

        match self {
            Geometry::Point(p) => extend(*p),
            Geometry::LineString(line) | Geometry::MultiPoint(line) => {
                line.iter().copied().for_each(&mut extend)
            }
            Geometry::Polygon(rings) | Geometry::MultiLineString(rings) => rings
                .iter()
                .flatten()
                .copied()
                .for_each(&mut extend),
            Geometry::MultiPolygon(polygons) => polygons
                .iter()
                .flatten()
                .flatten()
                .copied()
                .for_each(&mut extend),
        }

        bounds
    }
}
