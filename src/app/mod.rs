//! Application-Layer: Select-Modus, Events, Handler und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
pub mod host;
pub mod input_log;
pub mod predicates;
pub mod state;
pub mod use_cases;

pub use controller::SelectMode;
pub use events::{
    Actionable, DrawEvent, EventTarget, InputEvent, ModeTransition, PointerButton, PointerEvent,
    UpdateAction,
};
pub use handlers::display::{DisplayFeature, DisplayMeta};
pub use host::{
    BoxHandle, BoxHit, Cursor, MapSurface, MarkerHandle, ModeHost, OverlayDriver, QueryKind,
    RenderHint,
};
pub use input_log::InputLog;
pub use state::{Interaction, MarkerEntry, MarkerRegistry, SessionState};
