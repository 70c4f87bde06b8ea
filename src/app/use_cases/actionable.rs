//! Use-Case: Verfügbarkeit der Sammelbefehle aus der Selektion ableiten.

use crate::app::events::Actionable;
use crate::core::Feature;

/// Berechnet die verfügbaren Sammelbefehle für die selektierten Features.
pub fn compute_actionable(selected: &[&Feature]) -> Actionable {
    let combine_features = selected.len() > 1
        && selected
            .windows(2)
            .all(|pair| pair[0].kind().base() == pair[1].kind().base());

    Actionable {
        combine_features,
        uncombine_features: selected.iter().any(|f| f.kind().is_multi()),
        trash: !selected.is_empty(),
    }
}
