//! Laufende Statistik der Simulation: geworfene Nadeln, Treffer und die π-Schätzung.
//!
//! Die Schätzung folgt dem Buffonschen Nadelproblem:
//! - Trefferwahrscheinlichkeit P = 2 * l / (π * d) für l <= d
//! - Daraus folgt: π ≈ 2 * l / d * (Geworfen / Treffer)
//!
//! Sie wird nach jedem Treffer neu berechnet, die Anzeige ist also immer auf dem Stand des letzten Treffers.

use crate::gitter::Liniengitter;
use crate::nadel::Nadel;
use crate::schnitt::landed_on_line;

/// Veränderlicher Zustand eines Simulationslaufs.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationsZustand {
    pub geworfen: u64,             // Nadeln seit dem letzten Reset.
    pub treffer: u64,              // Davon auf einer Linie gelandet.
    pub pi_schaetzung: Option<f64>, // None, solange es keinen Treffer gab.
    pub nadel_laenge: f64,         // laengenfaktor * abstand, einmal pro Gitter berechnet.
}

impl SimulationsZustand {
    /// Leerer Zustand für die gegebene Nadellänge.
    pub fn new(nadel_laenge: f64) -> Self {
        SimulationsZustand {
            geworfen: 0,
            treffer: 0,
            pi_schaetzung: None,
            nadel_laenge,
        }
    }

    /// Setzt Zähler und Schätzung zurück. Die Nadellänge hängt am Gitter und bleibt.
    pub fn reset(&mut self) {
        self.geworfen = 0;
        self.treffer = 0;
        self.pi_schaetzung = None;
    }

    pub fn momentaufnahme(&self) -> Momentaufnahme {
        Momentaufnahme {
            geworfen: self.geworfen,
            treffer: self.treffer,
            pi_schaetzung: self.pi_schaetzung,
        }
    }
}

/// Verbucht einen Wurf. Gibt zurück, ob die Nadel eine Linie getroffen hat.
pub fn record_drop(nadel: &Nadel, gitter: &Liniengitter, zustand: &mut SimulationsZustand) -> bool {
    zustand.geworfen += 1;

    let getroffen = landed_on_line(nadel, gitter.positionen());
    if getroffen {
        zustand.treffer += 1;
        // treffer > 0 ist hier garantiert
        zustand.pi_schaetzung = Some(
            2.0 * zustand.nadel_laenge / gitter.abstand() * zustand.geworfen as f64 / zustand.treffer as f64,
        );
    }
    getroffen
}

/// Unveränderliche Kopie der Statistik, wie sie nach außen gereicht wird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Momentaufnahme {
    pub geworfen: u64,
    pub treffer: u64,
    pub pi_schaetzung: Option<f64>,
}

impl Momentaufnahme {
    /// π mit `stellen` Nachkommastellen, oder "-" solange die Schätzung undefiniert ist.
    pub fn pi_text(&self, stellen: usize) -> String {
        match self.pi_schaetzung {
            Some(pi) => format!("{:.*}", stellen, pi),
            None => "-".to_string(),
        }
    }

    /// Betrag der Abweichung vom echten π.
    pub fn abweichung(&self) -> Option<f64> {
        self.pi_schaetzung.map(|pi| (pi - std::f64::consts::PI).abs())
    }
}
