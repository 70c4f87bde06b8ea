//! Handler des Select-Modus.
//!
//! Jeder Handler bekommt den Sitzungszustand und einen [`ModeContext`]
//! explizit übergeben. Der Controller dispatcht an die passende
//! Handler-Funktion.

pub mod box_select;
pub mod click;
pub mod combine;
pub mod display;
pub mod drag;
pub mod markers;
pub mod pointer;

use super::events::{Actionable, DrawEvent, UpdateAction};
use super::host::ModeHost;
use super::state::{Interaction, MarkerRegistry, SessionState};
use super::use_cases::actionable::compute_actionable;
use crate::core::Feature;
use crate::shared::SelectOptions;

/// Alles, was ein Handler außer dem Sitzungszustand braucht.
pub struct ModeContext<'m, 'h> {
    /// Vom Host geliehene Kollaborateure
    pub host: &'m mut ModeHost<'h>,
    /// Marker-Overlays (überdauern die Sitzung)
    pub markers: &'m mut MarkerRegistry,
    pub options: &'m SelectOptions,
    /// Zuletzt gemeldete Verfügbarkeit der Sammelbefehle
    pub actionable: &'m mut Option<Actionable>,
}

impl ModeContext<'_, '_> {
    /// Hängt eine Benachrichtigung an die Ausgangs-Queue des Hosts.
    pub fn emit(&mut self, event: DrawEvent) {
        log::debug!("Benachrichtigung: {:?}", event);
        self.host.events.push(event);
    }

    /// Aktuelle GeoJSON-Kopien aller selektierten Features
    pub fn selected_snapshot(&self) -> Vec<Feature> {
        self.host
            .store
            .selected_features()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Meldet `actions`, sofern sie sich vom zuletzt gemeldeten Wert unterscheiden.
    pub fn set_actionable(&mut self, actions: Actionable) {
        if *self.actionable == Some(actions) {
            return;
        }
        *self.actionable = Some(actions);
        self.emit(DrawEvent::Actionable { actions });
    }
}

/// Beendet Drag-Verschieben und Rechteck-Selektion.
///
/// Entfernt ein sichtbares Auswahlrechteck und gibt das Kamera-Verschieben
/// wieder frei, falls eine der Interaktionen scharf geschaltet war.
pub fn stop_extended_interactions(state: &mut SessionState, ctx: &mut ModeContext<'_, '_>) {
    match state.interaction {
        Interaction::Idle => return,
        Interaction::BoxSelect {
            overlay: Some(handle),
            ..
        } => ctx.host.surface.remove_box_overlay(handle),
        _ => {}
    }

    ctx.host.surface.set_drag_pan(true);
    state.interaction = Interaction::Idle;
}

/// Meldet die aktuellen Geometrien der Selektion als `draw.update` (move).
pub fn fire_update(ctx: &mut ModeContext<'_, '_>) {
    let features = ctx.selected_snapshot();
    ctx.emit(DrawEvent::Update {
        action: UpdateAction::Move,
        features,
    });
}

/// Berechnet die Verfügbarkeit der Sammelbefehle neu und meldet Änderungen.
pub fn fire_actionable(ctx: &mut ModeContext<'_, '_>) {
    let actions = compute_actionable(&ctx.host.store.selected_features());
    ctx.set_actionable(actions);
}
