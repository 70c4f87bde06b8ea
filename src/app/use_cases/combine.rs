//! Use-Case: Features zu Multi-Features zusammenführen und wieder aufteilen.

use crate::core::{Feature, Geometry, Properties};

/// Ergebnis einer gültigen Zusammenführung
#[derive(Debug, Clone, PartialEq)]
pub struct CombinePlan {
    pub geometry: Geometry,
    /// Properties des ersten Features der Selektion
    pub properties: Properties,
}

/// Plant die Zusammenführung von `selected` (in Selektionsreihenfolge).
///
/// Gibt `None` zurück bei weniger als zwei Features oder
/// unterschiedlichen Basis-Arten.
pub fn plan_combine(selected: &[&Feature]) -> Option<CombinePlan> {
    let (first, rest) = selected.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let base = first.kind().base();
    if rest.iter().any(|f| f.kind().base() != base) {
        return None;
    }

    let shapes = selected.iter().flat_map(|f| f.geometry.shapes()).collect();
    let geometry = Geometry::multi_from_shapes(base, shapes)?;

    Some(CombinePlan {
        geometry,
        properties: first.properties.clone(),
    })
}

/// Teilgeometrien eines Multi-Features. Einfache Features liefern nichts.
pub fn plan_uncombine(feature: &Feature) -> Vec<Geometry> {
    feature.geometry.split()
}
