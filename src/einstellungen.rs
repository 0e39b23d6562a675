//! Konfigurationswerte der Simulation, optional aus einer YAML-Datei geladen.
//!
//! Beispiel:
//!
//! ```yaml
//! breite: 600.0          # Breite der Zeichenfläche
//! hoehe: 600.0           # Höhe der Zeichenfläche
//! linien: 5              # Anzahl der parallelen Linien (>= 2)
//! laengenfaktor: 0.5     # Nadellänge / Linienabstand, aus [0, 1]
//! stellen: 4             # angezeigte Nachkommastellen von π
//! geschwindigkeit: 0.5   # Animationsgeschwindigkeit, aus [0, 1]
//! seed: 42               # optional, für reproduzierbare Läufe
//! ```
//!
//! Fehlende Felder bekommen ihren Standardwert.

use crate::fehler::KonfigurationsFehler;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Einstellungen {
    pub breite: f64,
    pub hoehe: f64,
    pub linien: usize,
    pub laengenfaktor: f64,
    pub stellen: usize,
    pub geschwindigkeit: f64,
    pub seed: Option<u64>,
}

impl Default for Einstellungen {
    fn default() -> Self {
        Einstellungen {
            breite: 600.0,
            hoehe: 600.0,
            linien: 5,
            laengenfaktor: 0.5,
            stellen: 4,
            geschwindigkeit: 0.5,
            seed: None,
        }
    }
}

impl Einstellungen {
    /// Liest die Einstellungen aus einem YAML-Text.
    pub fn aus_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Prüft alle Wertebereiche, bevor damit konfiguriert wird.
    pub fn validiere(&self) -> Result<(), KonfigurationsFehler> {
        pruefe_geometrie(self.breite, self.hoehe, self.linien, self.laengenfaktor)?;
        verzoegerung(self.geschwindigkeit)?;
        Ok(())
    }
}

/// Gemeinsame Prüfung für Einstellungen und `Simulation::configure`:
/// Linienanzahl, Zeichenfläche und Längenfaktor, in dieser Reihenfolge.
pub fn pruefe_geometrie(
    breite: f64,
    hoehe: f64,
    linien: usize,
    laengenfaktor: f64,
) -> Result<(), KonfigurationsFehler> {
    if linien < 2 {
        return Err(KonfigurationsFehler::ZuWenigeLinien(linien));
    }
    if !(breite.is_finite() && breite > 0.0 && hoehe.is_finite() && hoehe > 0.0) {
        return Err(KonfigurationsFehler::UngueltigeFlaeche { breite, hoehe });
    }
    if !(0.0..=1.0).contains(&laengenfaktor) {
        return Err(KonfigurationsFehler::UngueltigerLaengenfaktor(laengenfaktor));
    }
    Ok(())
}

/// Zeit zwischen zwei Würfen für eine Geschwindigkeit aus [0, 1].
/// 0.0 entspricht 1000 ms, 1.0 ist so schnell wie möglich (ca. 45 µs, abgeschnitten auf 0 ms).
pub fn verzoegerung(geschwindigkeit: f64) -> Result<Duration, KonfigurationsFehler> {
    if !(0.0..=1.0).contains(&geschwindigkeit) {
        return Err(KonfigurationsFehler::UngueltigeGeschwindigkeit(geschwindigkeit));
    }
    let millis = (1000.0 * (-10.0 * geschwindigkeit).exp()) as u64;
    Ok(Duration::from_millis(millis))
}
