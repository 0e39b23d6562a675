// Fehlertyp für ungültige Konfigurationen der Simulation.
use std::fmt;

/// Wird synchron beim Konfigurieren zurückgegeben; solange er besteht, darf keine Nadel geworfen werden.
#[derive(Debug, Clone, PartialEq)]
pub enum KonfigurationsFehler {
    ZuWenigeLinien(usize),                     // Mindestens zwei Linien nötig.
    UngueltigeBreite(f64),                     // Gitterbreite muss endlich und > 0 sein.
    UngueltigeFlaeche { breite: f64, hoehe: f64 }, // Breite und Höhe müssen endlich und > 0 sein.
    UngueltigerLaengenfaktor(f64),             // Faktor muss in [0, 1] liegen.
    UngueltigeGeschwindigkeit(f64),            // Geschwindigkeit muss in [0, 1] liegen.
}

impl fmt::Display for KonfigurationsFehler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KonfigurationsFehler::ZuWenigeLinien(n) => {
                write!(f, "Linienanzahl muss mindestens 2 sein (erhalten: {})", n)
            }
            KonfigurationsFehler::UngueltigeBreite(breite) => {
                write!(f, "Gitterbreite muss größer als 0 sein (erhalten: {})", breite)
            }
            KonfigurationsFehler::UngueltigeFlaeche { breite, hoehe } => {
                write!(f, "Ungültige Zeichenfläche {}x{}, beide Maße müssen größer als 0 sein", breite, hoehe)
            }
            KonfigurationsFehler::UngueltigerLaengenfaktor(faktor) => {
                write!(f, "Längenfaktor muss zwischen 0 und 1 liegen (erhalten: {})", faktor)
            }
            KonfigurationsFehler::UngueltigeGeschwindigkeit(s) => {
                write!(f, "Geschwindigkeit muss zwischen 0 und 1 liegen (erhalten: {})", s)
            }
        }
    }
}

impl std::error::Error for KonfigurationsFehler {}
