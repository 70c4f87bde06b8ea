//! Select-Replay.
//!
//! Spielt ein Szenario (Features, Start-Selektion, Eingaben) gegen den
//! Select-Modus ab und gibt alle Benachrichtigungen als JSON-Zeilen aus.

use anyhow::Context;
use feature_select_mode::{
    DrawEvent, Feature, FeatureId, FeatureStore, HeadlessSurface, InputEvent, ModeHost,
    MovementConstraint, RecordingOverlays, RenderHint, SelectMode, SelectOptions, Unconstrained,
    WorldBoundsConstraint,
};
use serde::Deserialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Bewegungs-Beschränkung eines Szenarios
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ConstraintKind {
    #[default]
    None,
    WorldBounds,
}

/// Eingabedatei des Replays
#[derive(Debug, Deserialize)]
struct Scenario {
    features: Vec<Feature>,
    #[serde(default)]
    selected: Vec<FeatureId>,
    #[serde(default)]
    events: Vec<InputEvent>,
    #[serde(default)]
    constraint: ConstraintKind,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Select-Replay v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let scenario_path = args
        .next()
        .map(PathBuf::from)
        .context("Aufruf: select-replay <scenario.json> [options.toml]")?;
    let options = match args.next() {
        Some(path) => SelectOptions::load_from_file(Path::new(&path)),
        None => SelectOptions::load_from_file(&SelectOptions::config_path()),
    };

    let scenario = load_scenario(&scenario_path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(scenario, options, &mut out)
}

fn load_scenario(path: &Path) -> anyhow::Result<Scenario> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Szenario nicht lesbar: {}", path.display()))?;
    let scenario: Scenario = serde_json::from_str(&content)
        .with_context(|| format!("Szenario fehlerhaft: {}", path.display()))?;
    log::info!(
        "Szenario geladen: {} Features, {} Eingaben",
        scenario.features.len(),
        scenario.events.len()
    );
    Ok(scenario)
}

fn run(scenario: Scenario, options: SelectOptions, out: &mut impl Write) -> anyhow::Result<()> {
    let world_bounds = WorldBoundsConstraint::new(options.movement);
    let constraint: &dyn MovementConstraint = match scenario.constraint {
        ConstraintKind::None => &Unconstrained,
        ConstraintKind::WorldBounds => &world_bounds,
    };

    let mut store = FeatureStore::from_features(scenario.features);
    let mut surface = HeadlessSurface::new();
    let mut overlays = RecordingOverlays::new();
    let mut events: Vec<DrawEvent> = Vec::new();
    let mut host = ModeHost {
        store: &mut store,
        surface: &mut surface,
        overlays: &mut overlays,
        constraint,
        events: &mut events,
    };

    let mut mode = SelectMode::new(options);
    mode.activate(&mut host, &scenario.selected);
    redraw(&mut mode, &mut host);
    flush(&mut host, out)?;

    for event in scenario.events {
        if mode.handle_input(&mut host, event) == RenderHint::Render {
            redraw(&mut mode, &mut host);
        }
        flush(&mut host, out)?;
    }

    mode.deactivate(&mut host);
    flush(&mut host, out)?;
    Ok(())
}

/// Baut die Darstellung aller Features neu auf (wie ein Render-Frame des Hosts).
fn redraw(mode: &mut SelectMode, host: &mut ModeHost<'_>) {
    let ids: Vec<FeatureId> = host.store.iter().map(|f| f.id).collect();
    for id in ids {
        mode.display_features(host, id);
    }
}

/// Schreibt alle angefallenen Benachrichtigungen als JSON-Zeilen.
fn flush(host: &mut ModeHost<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    for event in host.events.drain(..) {
        let line = serde_json::to_string(&event).context("Benachrichtigung nicht serialisierbar")?;
        writeln!(out, "{}", line).context("Ausgabe fehlgeschlagen")?;
    }
    Ok(())
}
