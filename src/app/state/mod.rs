//! Zustand des Select-Modus: Sitzungszustand und Marker-Overlay-Registry.

mod markers;
mod session;

pub use markers::{MarkerEntry, MarkerRegistry};
pub use session::{Interaction, SessionState};
