//! Use-Cases des Select-Modus: reine Entscheidungslogik ohne Seiteneffekte
//! auf Oberfläche oder Overlays.

pub mod actionable;
pub mod click_decision;
pub mod combine;
pub mod selection;
