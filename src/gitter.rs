//! Liniengitter: N gleichmäßig verteilte, senkrechte Linien über eine Fläche der Breite W.

use crate::fehler::KonfigurationsFehler;

/// Die parallelen Linien, auf die die Nadeln fallen.
#[derive(Debug, Clone, PartialEq)]
pub struct Liniengitter {
    linienanzahl: usize,   // N >= 2
    abstand: f64,          // Abstand zwischen zwei benachbarten Linien.
    positionen: Vec<f64>,  // 0, abstand, 2*abstand, ..., (N-1)*abstand
}

impl Liniengitter {
    /// Baut das Gitter. Der Abstand wird mit Gleitkomma-Division berechnet,
    /// da er direkt in Nadellänge und π-Formel eingeht.
    pub fn build_grid(breite: f64, linienanzahl: usize) -> Result<Self, KonfigurationsFehler> {
        if linienanzahl < 2 {
            return Err(KonfigurationsFehler::ZuWenigeLinien(linienanzahl));
        }
        if !breite.is_finite() || breite <= 0.0 {
            return Err(KonfigurationsFehler::UngueltigeBreite(breite));
        }

        let abstand = breite / (linienanzahl - 1) as f64;
        let positionen = (0..linienanzahl).map(|i| i as f64 * abstand).collect();

        Ok(Liniengitter {
            linienanzahl,
            abstand,
            positionen,
        })
    }

    /// Baut das Gitter neu auf und ersetzt die alten Positionen (kein Anhängen).
    pub fn neu_aufbauen(&mut self, breite: f64, linienanzahl: usize) -> Result<(), KonfigurationsFehler> {
        *self = Self::build_grid(breite, linienanzahl)?;
        Ok(())
    }

    pub fn linienanzahl(&self) -> usize {
        self.linienanzahl
    }

    pub fn abstand(&self) -> f64 {
        self.abstand
    }

    pub fn positionen(&self) -> &[f64] {
        &self.positionen
    }
}
