//! Feature-Datenmodell: IDs, Geometrie-Arten und GeoJSON-Serialisierung.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Eindeutige Feature-ID im Store
pub type FeatureId = u64;

/// Offene Key/Value-Properties eines Features (GeoJSON `properties`)
pub type Properties = Map<String, Value>;

/// Geometrie-Art eines Features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
}

impl FeatureKind {
    /// Gibt `true` zurück für alle `Multi*`-Arten.
    pub fn is_multi(self) -> bool {
        matches!(
            self,
            FeatureKind::MultiPoint | FeatureKind::MultiLineString | FeatureKind::MultiPolygon
        )
    }

    /// Basis-Art ohne `Multi`-Präfix (`MultiPolygon` → `Polygon`).
    pub fn base(self) -> FeatureKind {
        match self {
            FeatureKind::Point | FeatureKind::MultiPoint => FeatureKind::Point,
            FeatureKind::LineString | FeatureKind::MultiLineString => FeatureKind::LineString,
            FeatureKind::Polygon | FeatureKind::MultiPolygon => FeatureKind::Polygon,
        }
    }

    /// GeoJSON-Typname
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureKind::Point => "Point",
            FeatureKind::LineString => "LineString",
            FeatureKind::Polygon => "Polygon",
            FeatureKind::MultiPoint => "MultiPoint",
            FeatureKind::MultiLineString => "MultiLineString",
            FeatureKind::MultiPolygon => "MultiPolygon",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Einzelne Teilform einer Geometrie (Eintrag einer Multi-Geometrie).
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(DVec2),
    LineString(Vec<DVec2>),
    Polygon(Vec<Vec<DVec2>>),
}

/// GeoJSON-Geometrie. Art und Verschachtelungstiefe der Koordinaten
/// sind durch die Variante festgelegt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(DVec2),
    LineString(Vec<DVec2>),
    Polygon(Vec<Vec<DVec2>>),
    MultiPoint(Vec<DVec2>),
    MultiLineString(Vec<Vec<DVec2>>),
    MultiPolygon(Vec<Vec<Vec<DVec2>>>),
}

impl Geometry {
    /// Geometrie-Art
    pub fn kind(&self) -> FeatureKind {
        match self {
            Geometry::Point(_) => FeatureKind::Point,
            Geometry::LineString(_) => FeatureKind::LineString,
            Geometry::Polygon(_) => FeatureKind::Polygon,
            Geometry::MultiPoint(_) => FeatureKind::MultiPoint,
            Geometry::MultiLineString(_) => FeatureKind::MultiLineString,
            Geometry::MultiPolygon(_) => FeatureKind::MultiPolygon,
        }
    }

    /// Zerlegt die Geometrie in ihre Teilformen.
    ///
    /// Einfache Geometrien liefern genau einen Eintrag, Multi-Geometrien
    /// einen Eintrag je Teilform.
    pub fn shapes(&self) -> Vec<Shape> {
        match self {
            Geometry::Point(p) => vec![Shape::Point(*p)],
            Geometry::LineString(line) => vec![Shape::LineString(line.clone())],
            Geometry::Polygon(rings) => vec![Shape::Polygon(rings.clone())],
            Geometry::MultiPoint(points) => points.iter().copied().map(Shape::Point).collect(),
            Geometry::MultiLineString(lines) => {
                lines.iter().cloned().map(Shape::LineString).collect()
            }
            Geometry::MultiPolygon(polygons) => {
                polygons.iter().cloned().map(Shape::Polygon).collect()
            }
        }
    }

    /// Baut eine Multi-Geometrie der Basis-Art `base` aus Teilformen.
    ///
    /// Gibt `None` zurück, wenn eine Teilform nicht zur Basis-Art passt.
    pub fn multi_from_shapes(base: FeatureKind, shapes: Vec<Shape>) -> Option<Geometry> {
        match base.base() {
            FeatureKind::Point => shapes
                .into_iter()
                .map(|shape| match shape {
                    Shape::Point(p) => Some(p),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(Geometry::MultiPoint),
            FeatureKind::LineString => shapes
                .into_iter()
                .map(|shape| match shape {
                    Shape::LineString(line) => Some(line),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(Geometry::MultiLineString),
            _ => shapes
                .into_iter()
                .map(|shape| match shape {
                    Shape::Polygon(rings) => Some(rings),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(Geometry::MultiPolygon),
        }
    }

    /// Teilt eine Multi-Geometrie in einfache Geometrien auf.
    /// Einfache Geometrien liefern eine leere Liste.
    pub fn split(&self) -> Vec<Geometry> {
        if !self.kind().is_multi() {
            return Vec::new();
        }
        self.shapes().into_iter().map(Geometry::from).collect()
    }

    /// Alle Vertices mit ihrem Koordinatenpfad (Ring-Schlusspunkte ausgenommen).
    pub fn vertices(&self) -> Vec<(CoordPath, DVec2)> {
        let mut out = Vec::new();
        match self {
            Geometry::Point(p) => out.push((CoordPath::default(), *p)),
            Geometry::LineString(line) | Geometry::MultiPoint(line) => {
                push_line_vertices(&mut out, &[], line, false);
            }
            Geometry::Polygon(rings) => push_polygon_vertices(&mut out, &[], rings),
            Geometry::MultiLineString(lines) => {
                for (i, line) in lines.iter().enumerate() {
                    push_line_vertices(&mut out, &[i], line, false);
                }
            }
            Geometry::MultiPolygon(polygons) => {
                for (i, rings) in polygons.iter().enumerate() {
                    push_polygon_vertices(&mut out, &[i], rings);
                }
            }
        }
        out
    }
}

fn push_line_vertices(
    out: &mut Vec<(CoordPath, DVec2)>,
    prefix: &[usize],
    line: &[DVec2],
    closed_ring: bool,
) {
    let count = if closed_ring {
        line.len().saturating_sub(1)
    } else {
        line.len()
    };
    for (i, position) in line.iter().take(count).enumerate() {
        let mut path = prefix.to_vec();
        path.push(i);
        out.push((CoordPath(path), *position));
    }
}

fn push_polygon_vertices(out: &mut Vec<(CoordPath, DVec2)>, prefix: &[usize], rings: &[Vec<DVec2>]) {
    for (r, ring) in rings.iter().enumerate() {
        let mut ring_prefix = prefix.to_vec();
        ring_prefix.push(r);
        push_line_vertices(out, &ring_prefix, ring, true);
    }
}

impl From<Shape> for Geometry {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Point(p) => Geometry::Point(p),
            Shape::LineString(line) => Geometry::LineString(line),
            Shape::Polygon(rings) => Geometry::Polygon(rings),
        }
    }
}

/// Pfad zu einer Koordinate innerhalb einer Geometrie (z.B. `0.3` = Ring 0, Vertex 3).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordPath(pub Vec<usize>);

impl fmt::Display for CoordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

/// Editierbares Feature (serialisiert als GeoJSON `Feature`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub id: FeatureId,
    #[serde(default)]
    pub properties: Properties,
    pub geometry: Geometry,
}

impl Feature {
    /// Erstellt ein neues Feature
    pub fn new(id: FeatureId, geometry: Geometry, properties: Properties) -> Self {
        Self {
            id,
            properties,
            geometry,
        }
    }

    /// Geometrie-Art
    pub fn kind(&self) -> FeatureKind {
        self.geometry.kind()
    }

    /// Gibt `true` zurück, wenn das Feature ein einzelner Punkt ist.
    pub fn is_point(&self) -> bool {
        matches!(self.geometry, Geometry::Point(_))
    }

    /// Liest eine String-Property.
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}
