//! Begrenztes Log aller an den Select-Modus übergebenen Eingaben.

use super::events::InputEvent;

/// Speichert übergebene Eingaben in Reihenfolge.
#[derive(Debug, Clone)]
pub struct InputLog {
    entries: Vec<InputEvent>,
    capacity: usize,
}

impl Default for InputLog {
    fn default() -> Self {
        Self::with_capacity(crate::shared::options::INPUT_LOG_CAPACITY)
    }
}

impl InputLog {
    /// Erstellt ein leeres Log mit maximal `capacity` Einträgen.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(2),
        }
    }

    /// Fügt eine Eingabe hinzu.
    /// Bei vollem Log wird die ältere Hälfte verworfen.
    pub fn record(&mut self, event: &InputEvent) {
        if self.entries.len() >= self.capacity {
            self.entries.drain(..self.capacity / 2);
        }
        self.entries.push(event.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[InputEvent] {
        &self.entries
    }
}
