use crate::core::{CoordPath, FeatureId};
use glam::{DVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Maustaste eines Pointer-Events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// Element unter dem Pointer, wie es die Render-Engine meldet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "meta", rename_all = "snake_case")]
pub enum EventTarget {
    /// Gerendertes Feature (`active` = als selektiert gerendert)
    Feature {
        id: FeatureId,
        #[serde(default)]
        active: bool,
    },
    /// Vertex-Handle eines selektierten Features
    Vertex {
        parent: FeatureId,
        coord_path: CoordPath,
    },
}

/// Pointer-/Touch-Event auf der Kartenoberfläche.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Kartenposition (x = lng, y = lat)
    pub map_pos: DVec2,
    /// Pixelposition relativ zum Karten-Container
    pub screen_pos: Vec2,
    /// Getroffenes Element (None = leere Fläche)
    #[serde(default)]
    pub target: Option<EventTarget>,
    /// Shift gedrückt
    #[serde(default)]
    pub shift: bool,
    /// Auslösende Taste
    #[serde(default)]
    pub button: PointerButton,
    /// Taste wird während der Bewegung gehalten
    #[serde(default)]
    pub button_held: bool,
}

impl PointerEvent {
    /// Event über leerer Fläche. Die Pixelposition entspricht der Kartenposition.
    pub fn at(map_pos: DVec2) -> Self {
        Self {
            map_pos,
            screen_pos: map_pos.as_vec2(),
            target: None,
            shift: false,
            button: PointerButton::Primary,
            button_held: false,
        }
    }

    /// Setzt ein Feature als Ziel.
    pub fn on_feature(mut self, id: FeatureId, active: bool) -> Self {
        self.target = Some(EventTarget::Feature { id, active });
        self
    }

    /// Setzt ein Vertex-Handle als Ziel.
    pub fn on_vertex(mut self, parent: FeatureId, coord_path: CoordPath) -> Self {
        self.target = Some(EventTarget::Vertex { parent, coord_path });
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn held(mut self) -> Self {
        self.button_held = true;
        self
    }

    /// Überschreibt die Pixelposition.
    pub fn with_screen_pos(mut self, screen_pos: Vec2) -> Self {
        self.screen_pos = screen_pos;
        self
    }
}

/// Eingaben an den Select-Modus.
/// Oberflächen-Events, Marker-Overlay-Callbacks und Sammelbefehle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer bewegt sich ohne Drag
    PointerMove(PointerEvent),
    /// Pointer verlässt die Kartenoberfläche
    PointerLeave,
    Click(PointerEvent),
    Tap(PointerEvent),
    PointerDown(PointerEvent),
    TouchStart(PointerEvent),
    /// Bewegung mit gedrückter Taste
    Drag(PointerEvent),
    PointerUp(PointerEvent),
    TouchEnd(PointerEvent),

    /// Taste auf einem Marker-Overlay gedrückt
    MarkerPointerDown { feature_id: FeatureId },
    /// Klick auf ein Marker-Overlay
    MarkerClick {
        feature_id: FeatureId,
        #[serde(default)]
        shift: bool,
    },
    MarkerDragStart { feature_id: FeatureId },
    /// Marker-Overlay wurde auf `position` gezogen
    MarkerDrag {
        feature_id: FeatureId,
        position: DVec2,
    },
    MarkerDragEnd { feature_id: FeatureId },

    /// Selektierte Features zu einem Multi-Feature zusammenführen
    CombineFeatures,
    /// Selektierte Multi-Features aufteilen
    UncombineFeatures,
    /// Selektierte Features löschen
    Trash,
}

impl InputEvent {
    /// Kurzname für Logs
    pub fn name(&self) -> &'static str {
        match self {
            InputEvent::PointerMove(_) => "pointer_move",
            InputEvent::PointerLeave => "pointer_leave",
            InputEvent::Click(_) => "click",
            InputEvent::Tap(_) => "tap",
            InputEvent::PointerDown(_) => "pointer_down",
            InputEvent::TouchStart(_) => "touch_start",
            InputEvent::Drag(_) => "drag",
            InputEvent::PointerUp(_) => "pointer_up",
            InputEvent::TouchEnd(_) => "touch_end",
            InputEvent::MarkerPointerDown { .. } => "marker_pointer_down",
            InputEvent::MarkerClick { .. } => "marker_click",
            InputEvent::MarkerDragStart { .. } => "marker_drag_start",
            InputEvent::MarkerDrag { .. } => "marker_drag",
            InputEvent::MarkerDragEnd { .. } => "marker_drag_end",
            InputEvent::CombineFeatures => "combine_features",
            InputEvent::UncombineFeatures => "uncombine_features",
            InputEvent::Trash => "trash",
        }
    }
}
