//! Terminal-Ausgabe: Fortschrittsbalken, Statuszeilen, Cursor und eine kleine ASCII-Leinwand.

use crate::nadel::Nadel;
use crate::statistik::Momentaufnahme;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Erstellt einen Balken.
pub fn erstelle_fortschrittsbalken(prozent: f64, breite: usize) -> String {
    // Gefüllte Breite proportional zu `prozent`, nie breiter als der Balken.
    let gefuellte_breite = (((prozent / 100.0) * breite as f64) as usize).min(breite);
    let leere_breite = breite - gefuellte_breite;

    let balken = "█".repeat(gefuellte_breite) + &"░".repeat(leere_breite);
    format!("[{}] {:.1}%", balken, prozent)
}

/// Eine Zeile mit dem aktuellen Stand der Statistik.
pub fn statuszeile(statistik: &Momentaufnahme, stellen: usize) -> String {
    format!(
        "Geworfen: {:>10}   Treffer: {:>10}   π ≈ {}",
        statistik.geworfen,
        statistik.treffer,
        statistik.pi_text(stellen)
    )
}

/// Leert den Bildschirm.
pub fn leere_bildschirm() -> io::Result<()> {
    print!("\x1B[H\x1B[2J"); // ANSI-Escape-Code zum Löschen des Bildschirms.
    io::stdout().flush()
}

/// Zeichnet Fortschritt bzw. Animation immer an dieselbe Stelle (Cursor oben links).
/// Jeder Aufruf dreht das Spinner-Zeichen im Titel eine Stufe weiter; der Zähler ist atomar,
/// damit ein Anzeige-Thread die Anzeige über `&self` nutzen kann.
#[derive(Default)]
pub struct Anzeige {
    bilder: AtomicUsize, // Anzahl bisher gezeichneter Bilder
}

impl Anzeige {
    pub fn new() -> Self {
        Anzeige::default()
    }

    fn titel(&self, text: &str) -> String {
        let bild = self.bilder.fetch_add(1, Ordering::Relaxed);
        format!("{} {}", text, SPINNER[bild % SPINNER.len()])
    }

    /// Fortschritt eines Laufs ohne Animation.
    pub fn fortschritt(&self, verarbeitet: u64, gesamt: u64) -> io::Result<()> {
        let prozent = if gesamt == 0 {
            100.0
        } else {
            (verarbeitet as f64 / gesamt as f64 * 100.0).min(100.0)
        };

        print!("\x1B[H");
        println!("{}\n", self.titel("Berechne..."));
        println!("{}", erstelle_fortschrittsbalken(prozent, 50));
        io::stdout().flush()
    }

    /// Leinwand und Statuszeile neu zeichnen.
    pub fn animation(&self, leinwand: &Leinwand, statistik: &Momentaufnahme, stellen: usize) -> io::Result<()> {
        print!("\x1B[H");
        println!("{}\n", self.titel("Werfe Nadeln..."));
        print!("{}", leinwand.als_text());
        println!("\n{}", statuszeile(statistik, stellen));
        io::stdout().flush()
    }
}

/// Versteckt den Cursor, solange der Wächter lebt, und zeigt ihn beim Drop wieder an,
/// auch wenn der Aufrufer mit `?` vorzeitig zurückkehrt.
pub struct CursorWaechter<W: Write> {
    ausgabe: W,
}

impl<W: Write> CursorWaechter<W> {
    pub fn new(mut ausgabe: W) -> io::Result<Self> {
        ausgabe.write_all(b"\x1B[?25l")?;
        ausgabe.flush()?;
        Ok(CursorWaechter { ausgabe })
    }
}

impl<W: Write> Drop for CursorWaechter<W> {
    fn drop(&mut self) {
        // Fehler hier kann niemand mehr behandeln
        let _ = self.ausgabe.write_all(b"\x1B[?25h");
        let _ = self.ausgabe.flush();
    }
}

/// Grobe Zeichenfläche im Terminal: Linien als '|', Nadeln als '*' bzw. '#' für Treffer.
/// Sammelt alle Nadeln bis zum nächsten `leeren`.
pub struct Leinwand {
    spalten: usize,
    zeilen: usize,
    skala_x: f64, // Spalten pro Pixel
    skala_y: f64, // Zeilen pro Pixel
    zellen: Vec<char>,
    linien: Vec<usize>, // Spalten der Gitterlinien
}

impl Leinwand {
    pub fn new(spalten: usize, zeilen: usize, breite: f64, hoehe: f64, linien_positionen: &[f64]) -> Self {
        let spalten = spalten.max(2);
        let zeilen = zeilen.max(1);
        let skala_x = (spalten - 1) as f64 / breite;
        let skala_y = zeilen as f64 / hoehe;
        let linien = linien_positionen
            .iter()
            .map(|&p| ((p * skala_x).round() as usize).min(spalten - 1))
            .collect();

        let mut leinwand = Leinwand {
            spalten,
            zeilen,
            skala_x,
            skala_y,
            zellen: Vec::new(),
            linien,
        };
        leinwand.leeren();
        leinwand
    }

    /// Entfernt alle Nadeln, nur das Gitter bleibt.
    pub fn leeren(&mut self) {
        self.zellen = vec![' '; self.spalten * self.zeilen];
        for zeile in 0..self.zeilen {
            for &spalte in &self.linien {
                self.zellen[zeile * self.spalten + spalte] = '|';
            }
        }
    }

    /// Rastert die Nadel mit Bresenham; Punkte außerhalb der Fläche werden verworfen.
    pub fn zeichne(&mut self, nadel: &Nadel, getroffen: bool) {
        let zeichen = if getroffen { '#' } else { '*' };

        let (x1, y1, x2, y2) = nadel.anzeige_koordinaten();
        let mut x = (x1 as f64 * self.skala_x).floor() as i64;
        let mut y = (y1 as f64 * self.skala_y).floor() as i64;
        let x_ende = (x2 as f64 * self.skala_x).floor() as i64;
        let y_ende = (y2 as f64 * self.skala_y).floor() as i64;

        let dx = (x_ende - x).abs();
        let dy = -(y_ende - y).abs();
        let sx = if x < x_ende { 1 } else { -1 };
        let sy = if y < y_ende { 1 } else { -1 };
        let mut fehler = dx + dy;

        loop {
            self.setze(x, y, zeichen);
            if x == x_ende && y == y_ende {
                break;
            }
            let doppelt = 2 * fehler;
            if doppelt >= dy {
                fehler += dy;
                x += sx;
            }
            if doppelt <= dx {
                fehler += dx;
                y += sy;
            }
        }
    }

    fn setze(&mut self, x: i64, y: i64, zeichen: char) {
        if x < 0 || y < 0 || x >= self.spalten as i64 || y >= self.zeilen as i64 {
            return;
        }
        self.zellen[y as usize * self.spalten + x as usize] = zeichen;
    }

    pub fn zeichen_bei(&self, spalte: usize, zeile: usize) -> Option<char> {
        if spalte >= self.spalten || zeile >= self.zeilen {
            return None;
        }
        Some(self.zellen[zeile * self.spalten + spalte])
    }

    pub fn als_text(&self) -> String {
        self.zellen
            .chunks(self.spalten)
            .map(|zeile| zeile.iter().collect::<String>() + "\n")
            .collect()
    }
}
