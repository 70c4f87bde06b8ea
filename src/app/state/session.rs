use crate::app::host::BoxHandle;
use crate::core::FeatureId;
use glam::{DVec2, Vec2};

/// Laufende erweiterte Interaktion. Drag und Rechteck-Selektion schließen
/// sich gegenseitig aus.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Drag-Verschieben ist scharf geschaltet; `moved` nach dem ersten Frame
    Drag { moved: bool },
    /// Rechteck-Selektion ist scharf geschaltet
    BoxSelect {
        /// Erste Ecke in Pixeln
        anchor: Vec2,
        /// Sichtbares Rechteck (ab dem ersten Frame)
        overlay: Option<BoxHandle>,
        /// `true` nach dem ersten Frame
        selecting: bool,
    },
}

/// Zustand einer Aktivierung des Select-Modus.
///
/// Wird bei der Aktivierung erzeugt und bei der Deaktivierung verworfen.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Letzte Kartenposition während eines Drags
    pub drag_anchor: Option<DVec2>,
    /// Aktive erweiterte Interaktion
    pub interaction: Interaction,
    /// Beim Aktivieren übergebene IDs
    pub initial_selection: Vec<FeatureId>,
    /// Ein Marker-Overlay verarbeitet gerade Pointer-Eingaben
    pub marker_interaction: bool,
}

impl SessionState {
    pub fn new(initial_selection: Vec<FeatureId>) -> Self {
        Self {
            initial_selection,
            ..Self::default()
        }
    }

    /// Drag-Verschieben ist scharf geschaltet
    pub fn can_drag_move(&self) -> bool {
        matches!(self.interaction, Interaction::Drag { .. })
    }

    /// Mindestens ein Drag-Frame wurde verarbeitet
    pub fn is_dragging(&self) -> bool {
        matches!(self.interaction, Interaction::Drag { moved: true })
    }

    /// Rechteck-Selektion ist scharf geschaltet
    pub fn can_box_select(&self) -> bool {
        matches!(self.interaction, Interaction::BoxSelect { .. })
    }

    /// Das Auswahlrechteck wird gerade aufgezogen
    pub fn is_box_selecting(&self) -> bool {
        matches!(
            self.interaction,
            Interaction::BoxSelect {
                selecting: true,
                ..
            }
        )
    }
}
