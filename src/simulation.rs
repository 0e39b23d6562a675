//! Die Simulation als Ganzes: Gitter, Nadellänge, Statistik und Laufstatus.
//!
//! Ein Wurf läuft immer in derselben Reihenfolge ab:
//! Nadel erzeugen -> Schnitt prüfen -> Statistik verbuchen -> (außerhalb) zeichnen.
//! Alle Methoden nehmen `&mut self`, es kann also nie mehr als ein Wurf gleichzeitig laufen.
//! Wer die Simulation zwischen Threads teilt, muss sie in einen `Mutex` packen.

use crate::einstellungen::{pruefe_geometrie, verzoegerung, Einstellungen};
use crate::fehler::KonfigurationsFehler;
use crate::gitter::Liniengitter;
use crate::nadel::{generate_needle, Nadel};
use crate::statistik::{record_drop, Momentaufnahme, SimulationsZustand};
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use std::time::Duration;

/// Steuerzustand: Gestoppt -> (play) -> Laeuft -> (pause) -> Pausiert -> (play) -> Laeuft ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Laufstatus {
    Gestoppt,
    Laeuft,
    Pausiert,
}

/// Ergebnis eines einzelnen Wurfs, zum Zeichnen und Anzeigen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wurf {
    pub nadel: Nadel,
    pub getroffen: bool,
    pub statistik: Momentaufnahme,
}

pub struct Simulation {
    breite: f64,
    hoehe: f64,
    gitter: Liniengitter,
    zustand: SimulationsZustand,
    status: Laufstatus,
    verzoegerung: Duration,
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Erstellt eine konfigurierte, gestoppte Simulation.
    pub fn new(einstellungen: &Einstellungen) -> Result<Self, KonfigurationsFehler> {
        einstellungen.validiere()?;

        let rng = match einstellungen.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };
        let gitter = Liniengitter::build_grid(einstellungen.breite, einstellungen.linien)?;
        let nadel_laenge = einstellungen.laengenfaktor * gitter.abstand();

        Ok(Simulation {
            breite: einstellungen.breite,
            hoehe: einstellungen.hoehe,
            gitter,
            zustand: SimulationsZustand::new(nadel_laenge),
            status: Laufstatus::Gestoppt,
            verzoegerung: verzoegerung(einstellungen.geschwindigkeit)?,
            rng,
        })
    }

    /// Baut Gitter und Nadellänge neu auf und setzt die Statistik zurück.
    /// Bei einem Fehler bleibt die bisherige Konfiguration unverändert.
    pub fn configure(
        &mut self,
        breite: f64,
        hoehe: f64,
        linien: usize,
        laengenfaktor: f64,
    ) -> Result<(), KonfigurationsFehler> {
        pruefe_geometrie(breite, hoehe, linien, laengenfaktor)?;

        self.gitter.neu_aufbauen(breite, linien)?;
        self.breite = breite;
        self.hoehe = hoehe;
        self.zustand.nadel_laenge = laengenfaktor * self.gitter.abstand();
        self.reset();
        Ok(())
    }

    /// Wirft genau eine Nadel und verbucht sie, unabhängig vom Laufstatus.
    pub fn drop_one(&mut self) -> Wurf {
        let nadel = generate_needle(&mut self.rng, self.breite, self.hoehe, self.zustand.nadel_laenge);
        let getroffen = record_drop(&nadel, &self.gitter, &mut self.zustand);

        Wurf {
            nadel,
            getroffen,
            statistik: self.zustand.momentaufnahme(),
        }
    }

    /// Wirft `anzahl` Nadeln nacheinander und gibt die letzte Statistik zurück.
    pub fn wirf(&mut self, anzahl: u64) -> Momentaufnahme {
        for _ in 0..anzahl {
            self.drop_one();
        }
        self.zustand.momentaufnahme()
    }

    pub fn reset(&mut self) {
        self.zustand.reset();
    }

    pub fn line_positions(&self) -> &[f64] {
        self.gitter.positionen()
    }

    // Steuerung ===========================================================================

    /// Startet oder setzt fort. Läuft die Simulation schon, passiert nichts.
    pub fn play(&mut self) {
        self.status = Laufstatus::Laeuft;
    }

    /// Hält an, ohne die Statistik zu verwerfen.
    pub fn pause(&mut self) {
        if self.status == Laufstatus::Laeuft {
            self.status = Laufstatus::Pausiert;
        }
    }

    /// Hält an und verwirft die Statistik. Die Zeichenfläche muss der Aufrufer selbst leeren.
    pub fn stop(&mut self) {
        self.status = Laufstatus::Gestoppt;
        self.reset();
    }

    /// Vom Taktgeber aufgerufen: wirft eine Nadel, aber nur im Zustand `Laeuft`.
    pub fn tick(&mut self) -> Option<Wurf> {
        match self.status {
            Laufstatus::Laeuft => Some(self.drop_one()),
            Laufstatus::Gestoppt | Laufstatus::Pausiert => None,
        }
    }

    pub fn set_geschwindigkeit(&mut self, geschwindigkeit: f64) -> Result<(), KonfigurationsFehler> {
        self.verzoegerung = verzoegerung(geschwindigkeit)?;
        Ok(())
    }

    // Abfragen ============================================================================

    pub fn status(&self) -> Laufstatus {
        self.status
    }

    pub fn verzoegerung(&self) -> Duration {
        self.verzoegerung
    }

    pub fn statistik(&self) -> Momentaufnahme {
        self.zustand.momentaufnahme()
    }

    pub fn gitter(&self) -> &Liniengitter {
        &self.gitter
    }

    pub fn nadel_laenge(&self) -> f64 {
        self.zustand.nadel_laenge
    }

    pub fn flaeche(&self) -> (f64, f64) {
        (self.breite, self.hoehe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulation(seed: u64) -> Simulation {
        Simulation::new(&Einstellungen { seed: Some(seed), ..Default::default() }).unwrap()
    }

    #[test]
    fn standard_konfiguration() {
        let sim = simulation(1);
        assert_eq!(sim.gitter().abstand(), 150.0);
        assert_eq!(sim.nadel_laenge(), 75.0);
        assert_eq!(sim.line_positions(), &[0.0, 150.0, 300.0, 450.0, 600.0]);
        assert_eq!(sim.status(), Laufstatus::Gestoppt);
        assert_eq!(sim.verzoegerung(), Duration::from_millis(6));
    }

    #[test]
    fn tick_nur_im_laufenden_zustand() {
        let mut sim = simulation(2);
        assert!(sim.tick().is_none());

        sim.play();
        assert!(sim.tick().is_some());
        sim.play(); // kein Effekt
        assert_eq!(sim.status(), Laufstatus::Laeuft);
        assert_eq!(sim.statistik().geworfen, 1);

        sim.pause();
        assert!(sim.tick().is_none());
        assert_eq!(sim.statistik().geworfen, 1);

        sim.play();
        sim.tick();
        assert_eq!(sim.statistik().geworfen, 2);
    }

    #[test]
    fn stop_verwirft_statistik() {
        let mut sim = simulation(3);
        sim.play();
        for _ in 0..100 {
            sim.tick();
        }
        sim.stop();
        assert_eq!(sim.status(), Laufstatus::Gestoppt);
        assert_eq!(sim.statistik(), Momentaufnahme { geworfen: 0, treffer: 0, pi_schaetzung: None });
    }

    #[test]
    fn pause_im_gestoppten_zustand_bleibt_gestoppt() {
        let mut sim = simulation(4);
        sim.pause();
        assert_eq!(sim.status(), Laufstatus::Gestoppt);
    }

    #[test]
    fn fehlerhafte_konfiguration_aendert_nichts() {
        let mut sim = simulation(5);
        sim.wirf(20);

        assert_eq!(sim.configure(600.0, 600.0, 1, 0.5), Err(KonfigurationsFehler::ZuWenigeLinien(1)));
        assert!(sim.configure(600.0, -1.0, 5, 0.5).is_err());
        assert!(sim.configure(600.0, 600.0, 5, 2.0).is_err());

        assert_eq!(sim.statistik().geworfen, 20);
        assert_eq!(sim.line_positions().len(), 5);
    }

    #[test]
    fn configure_und_einstellungen_pruefen_gleich() {
        let faelle = [
            (600.0, 600.0, 1, 0.5),
            (0.0, 600.0, 5, 0.5),
            (600.0, f64::INFINITY, 5, 0.5),
            (600.0, 600.0, 5, -0.01),
            (600.0, 600.0, 0, 7.0),
            (300.0, 200.0, 3, 1.0),
        ];
        for (breite, hoehe, linien, laengenfaktor) in faelle {
            let mut sim = simulation(8);
            let e = Einstellungen { breite, hoehe, linien, laengenfaktor, ..Default::default() };
            assert_eq!(sim.configure(breite, hoehe, linien, laengenfaktor), e.validiere());
        }
    }

    #[test]
    fn configure_setzt_zurueck() {
        let mut sim = simulation(6);
        sim.wirf(20);
        sim.configure(800.0, 400.0, 3, 1.0).unwrap();

        assert_eq!(sim.statistik().geworfen, 0);
        assert_eq!(sim.line_positions(), &[0.0, 400.0, 800.0]);
        assert_eq!(sim.nadel_laenge(), 400.0);
        assert_eq!(sim.flaeche(), (800.0, 400.0));
    }

    #[test]
    fn geschwindigkeit_pruefen() {
        let mut sim = simulation(7);
        sim.set_geschwindigkeit(0.0).unwrap();
        assert_eq!(sim.verzoegerung(), Duration::from_millis(1000));
        assert!(sim.set_geschwindigkeit(2.0).is_err());
        assert_eq!(sim.verzoegerung(), Duration::from_millis(1000));
    }
}
