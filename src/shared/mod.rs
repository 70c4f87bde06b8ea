//! Gemeinsam genutzte Typen ohne Abhängigkeit zur Modus-Logik.

pub mod options;

pub use options::{MarkerOptions, SelectOptions};
