//! Select-Modus für einen Vektor-Feature-Karteneditor.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod headless;
pub mod shared;

pub use app::{
    Actionable, Cursor, DisplayFeature, DrawEvent, EventTarget, InputEvent, MapSurface,
    ModeHost, ModeTransition, OverlayDriver, PointerButton, PointerEvent, RenderHint, SelectMode,
};
pub use core::{
    translate, CoordPath, Feature, FeatureId, FeatureKind, FeatureStore, Geometry,
    MovementBounds, MovementConstraint, Properties, Unconstrained, WorldBoundsConstraint,
};
pub use headless::{HeadlessSurface, RecordingOverlays};
pub use shared::{MarkerOptions, SelectOptions};
