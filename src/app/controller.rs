//! Select-Modus: zentrale Event-Verarbeitung.

use super::events::{Actionable, InputEvent};
use super::handlers::display::DisplayFeature;
use super::handlers::{self, stop_extended_interactions, ModeContext};
use super::host::{ModeHost, RenderHint};
use super::input_log::InputLog;
use super::state::{MarkerRegistry, SessionState};
use crate::core::FeatureId;
use crate::shared::SelectOptions;

/// Zustandsmaschine des Select-Modus.
///
/// Der Host übergibt bei jedem Aufruf seine Kollaborateure als [`ModeHost`].
/// Der Sitzungszustand existiert nur zwischen [`activate`](Self::activate)
/// und [`deactivate`](Self::deactivate); Marker-Overlays überdauern ihn.
#[derive(Debug)]
pub struct SelectMode {
    options: SelectOptions,
    session: Option<SessionState>,
    markers: MarkerRegistry,
    actionable: Option<Actionable>,
    input_log: InputLog,
}

impl Default for SelectMode {
    fn default() -> Self {
        Self::new(SelectOptions::default())
    }
}

impl SelectMode {
    pub fn new(options: SelectOptions) -> Self {
        let input_log = InputLog::with_capacity(options.input_log_capacity);
        Self {
            options,
            session: None,
            markers: MarkerRegistry::new(),
            actionable: None,
            input_log,
        }
    }

    /// Aktiviert den Modus mit einer Start-Selektion.
    /// Unbekannte IDs werden verworfen.
    pub fn activate(&mut self, host: &mut ModeHost<'_>, initial_ids: &[FeatureId]) {
        let mut ctx = ModeContext {
            host,
            markers: &mut self.markers,
            options: &self.options,
            actionable: &mut self.actionable,
        };
        if let Some(mut previous) = self.session.take() {
            stop_extended_interactions(&mut previous, &mut ctx);
        }

        ctx.host.store.set_selected(initial_ids);
        let selected: Vec<FeatureId> = ctx.host.store.selected_ids().iter().copied().collect();
        log::info!("Select-Modus aktiviert ({} Features selektiert)", selected.len());

        ctx.set_actionable(Actionable::all_enabled());
        handlers::fire_actionable(&mut ctx);
        self.session = Some(SessionState::new(selected));
    }

    /// Deaktiviert den Modus und verwirft den Sitzungszustand.
    pub fn deactivate(&mut self, host: &mut ModeHost<'_>) {
        let Some(mut state) = self.session.take() else {
            return;
        };
        let mut ctx = ModeContext {
            host,
            markers: &mut self.markers,
            options: &self.options,
            actionable: &mut self.actionable,
        };
        ctx.host.surface.set_double_click_zoom(true);
        stop_extended_interactions(&mut state, &mut ctx);
        log::info!("Select-Modus deaktiviert");
    }

    /// Verarbeitet eine Eingabe und meldet, ob neu gezeichnet werden soll.
    pub fn handle_input(&mut self, host: &mut ModeHost<'_>, event: InputEvent) -> RenderHint {
        self.input_log.record(&event);

        let Some(state) = self.session.as_mut() else {
            log::debug!("Eingabe '{}' ohne aktiven Select-Modus ignoriert", event.name());
            return RenderHint::Skip;
        };
        let mut ctx = ModeContext {
            host,
            markers: &mut self.markers,
            options: &self.options,
            actionable: &mut self.actionable,
        };
        log::debug!("Eingabe: {}", event.name());

        use handlers::{click, combine, markers, pointer};

        match event {
            // === Oberfläche ===
            InputEvent::PointerMove(e) => pointer::on_pointer_move(state, &mut ctx, &e),
            InputEvent::PointerLeave => pointer::on_pointer_leave(state, &mut ctx),
            InputEvent::Click(e) | InputEvent::Tap(e) => click::on_click(state, &mut ctx, &e),
            InputEvent::PointerDown(e) => pointer::on_pointer_down(state, &mut ctx, &e),
            InputEvent::TouchStart(e) => pointer::on_touch_start(state, &mut ctx, &e),
            InputEvent::Drag(e) => pointer::on_drag(state, &mut ctx, &e),
            InputEvent::PointerUp(e) | InputEvent::TouchEnd(e) => {
                pointer::on_release(state, &mut ctx, &e)
            }

            // === Marker-Overlays ===
            InputEvent::MarkerPointerDown { .. } => markers::on_pointer_down(state),
            InputEvent::MarkerClick { feature_id, shift } => {
                markers::on_click(state, &mut ctx, feature_id, shift)
            }
            InputEvent::MarkerDragStart { feature_id } => {
                markers::on_drag_start(state, &mut ctx, feature_id)
            }
            InputEvent::MarkerDrag {
                feature_id,
                position,
            } => markers::on_drag(state, &mut ctx, feature_id, position),
            InputEvent::MarkerDragEnd { .. } => markers::on_drag_end(state, &mut ctx),

            // === Sammelbefehle ===
            InputEvent::CombineFeatures => combine::combine(&mut ctx),
            InputEvent::UncombineFeatures => combine::uncombine(&mut ctx),
            InputEvent::Trash => combine::trash(&mut ctx),
        }
    }

    /// Darzustellende Features für `feature_id` (inkl. Vertex-Handles).
    pub fn display_features(
        &mut self,
        host: &mut ModeHost<'_>,
        feature_id: FeatureId,
    ) -> Vec<DisplayFeature> {
        let mut ctx = ModeContext {
            host,
            markers: &mut self.markers,
            options: &self.options,
            actionable: &mut self.actionable,
        };
        handlers::display::display_features(&mut ctx, feature_id)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Sitzungszustand (nur während der Modus aktiv ist)
    pub fn session(&self) -> Option<&SessionState> {
        self.session.as_ref()
    }

    pub fn markers(&self) -> &MarkerRegistry {
        &self.markers
    }

    pub fn options(&self) -> &SelectOptions {
        &self.options
    }

    /// Zuletzt gemeldete Verfügbarkeit der Sammelbefehle
    pub fn actionable(&self) -> Option<Actionable> {
        self.actionable
    }

    pub fn input_log(&self) -> &InputLog {
        &self.input_log
    }
}
