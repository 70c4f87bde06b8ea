//! Use-Case: Klick auf ein Feature (Oberfläche oder Marker-Overlay).

use crate::app::host::Cursor;
use crate::core::{FeatureId, FeatureKind};
use indexmap::IndexSet;

/// Einzelne Folgeaktion einer Klick-Entscheidung, in Ausführungsreihenfolge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickEffect {
    /// In die Vertex-Bearbeitung des Features wechseln
    EnterDirectSelect(FeatureId),
    SetCursor(Cursor),
    EnableDoubleClickZoom,
    /// Feature neu zeichnen
    Render(FeatureId),
    /// Alle Marker-Overlays außer `except` auf Eigenfarbe und nicht ziehbar setzen
    ResetMarkers { except: FeatureId },
    /// Marker-Overlay des Features an den Selektionszustand anpassen
    ShowMarker { feature_id: FeatureId, selected: bool },
}

/// Ergebnis von [`decide_click`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickDecision {
    /// Neue Selektion (`None` = unverändert)
    pub selection: Option<Vec<FeatureId>>,
    /// Folgeaktionen, nach dem Setzen der Selektion auszuführen
    pub effects: Vec<ClickEffect>,
}

/// Entscheidet über Selektion und Folgeaktionen eines Klicks auf `target`.
///
/// | selektiert | Shift | Ergebnis |
/// |---|---|---|
/// | ja | nein (kein Point) | Wechsel in die Vertex-Bearbeitung |
/// | ja | ja | aus Selektion entfernen |
/// | nein | ja | zur Selektion hinzufügen |
/// | nein | nein | Selektion durch `{target}` ersetzen |
pub fn decide_click(
    selection: &IndexSet<FeatureId>,
    target: FeatureId,
    shift: bool,
    kind: FeatureKind,
) -> ClickDecision {
    let is_selected = selection.contains(&target);

    if is_selected && !shift && kind != FeatureKind::Point {
        return ClickDecision {
            selection: None,
            effects: vec![ClickEffect::EnterDirectSelect(target)],
        };
    }

    let mut effects = Vec::new();
    let new_selection = match (is_selected, shift) {
        (true, true) => {
            let remaining: Vec<FeatureId> =
                selection.iter().copied().filter(|&id| id != target).collect();
            effects.push(ClickEffect::SetCursor(Cursor::Pointer));
            effects.push(ClickEffect::ShowMarker {
                feature_id: target,
                selected: false,
            });
            if remaining.is_empty() {
                effects.push(ClickEffect::EnableDoubleClickZoom);
            }
            Some(remaining)
        }
        (false, true) => {
            let mut extended: Vec<FeatureId> = selection.iter().copied().collect();
            extended.push(target);
            effects.push(ClickEffect::SetCursor(Cursor::Move));
            effects.push(ClickEffect::ShowMarker {
                feature_id: target,
                selected: true,
            });
            Some(extended)
        }
        (false, false) => {
            effects.extend(selection.iter().map(|&id| ClickEffect::Render(id)));
            effects.push(ClickEffect::ResetMarkers { except: target });
            effects.push(ClickEffect::ShowMarker {
                feature_id: target,
                selected: true,
            });
            effects.push(ClickEffect::SetCursor(Cursor::Move));
            Some(vec![target])
        }
        // Selektierter Point ohne Shift: Selektion bleibt
        (true, false) => None,
    };

    effects.push(ClickEffect::Render(target));
    ClickDecision {
        selection: new_selection,
        effects,
    }
}
