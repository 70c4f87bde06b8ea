//! InputEvent- und DrawEvent-Enums für den Datenfluss Host ↔ Select-Modus.

mod draw_event;
mod input;

pub use draw_event::{Actionable, DrawEvent, ModeTransition, UpdateAction};
pub use input::{EventTarget, InputEvent, PointerButton, PointerEvent};
