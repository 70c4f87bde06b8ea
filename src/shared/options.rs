//! Zentrale Konfiguration für den Select-Modus.
//!
//! `SelectOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::MovementBounds;
use serde::{Deserialize, Serialize};

// ── Marker ──────────────────────────────────────────────────────────

/// Property-Schlüssel, der den Darstellungsstil eines Punkts festlegt.
pub const MARKER_MODE_PROPERTY: &str = "mode";
/// Wert von [`MARKER_MODE_PROPERTY`] für Marker-Punkte.
pub const MARKER_MODE_VALUE: &str = "marker";
/// Property-Schlüssel für die eigene Marker-Farbe.
pub const MARKER_COLOR_PROPERTY: &str = "marker-color";
/// Marker-Farbe, wenn das Feature keine eigene Farbe setzt.
pub const MARKER_DEFAULT_COLOR: &str = "red";
/// Farbe selektierter Marker.
pub const MARKER_SELECTED_COLOR: &str = "#3bb2d0";

// ── Diagnose ────────────────────────────────────────────────────────

/// Maximale Anzahl gespeicherter Eingabe-Events.
pub const INPUT_LOG_CAPACITY: usize = 1000;

/// Darstellung und Erkennung von Marker-Punkten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerOptions {
    /// Property-Schlüssel für den Darstellungsstil
    pub mode_property: String,
    /// Stil-Wert, der einen Punkt als Marker kennzeichnet
    pub mode_value: String,
    /// Property-Schlüssel der eigenen Farbe
    pub color_property: String,
    /// Fallback-Farbe ohne eigene Farbe
    pub default_color: String,
    /// Farbe selektierter Marker
    pub selected_color: String,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            mode_property: MARKER_MODE_PROPERTY.to_string(),
            mode_value: MARKER_MODE_VALUE.to_string(),
            color_property: MARKER_COLOR_PROPERTY.to_string(),
            default_color: MARKER_DEFAULT_COLOR.to_string(),
            selected_color: MARKER_SELECTED_COLOR.to_string(),
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen des Select-Modus.
/// Wird als `feature_select_mode.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOptions {
    /// Rechteck-Selektion (Shift + Drag) erlaubt
    pub box_select: bool,
    /// Kapazität des Eingabe-Logs
    pub input_log_capacity: usize,
    /// Marker-Darstellung
    pub marker: MarkerOptions,
    /// Grenzen für die Welt-Beschränkung beim Verschieben
    pub movement: MovementBounds,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            box_select: true,
            input_log_capacity: INPUT_LOG_CAPACITY,
            marker: MarkerOptions::default(),
            movement: MovementBounds::default(),
        }
    }
}

impl SelectOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("select-replay"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("feature_select_mode.toml")
    }
}
