use buffon_nadel::anzeige::{self, Anzeige, CursorWaechter, Leinwand};
use buffon_nadel::{schaetze_parallel_mit_fortschritt, Einstellungen, Momentaufnahme, Simulation};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

const MIN_NADELN: u64 = 1;                // Mindestens eine Nadel
const DEFAULT_NADELN: u64 = 1_000_000;    // Standardwert, falls die Eingabe ungültig ist
const ANZEIGE_INTERVALL: u64 = 10_000;    // Würfe zwischen zwei Anzeige-Updates (ohne Animation)

/// Buffonsches Nadelproblem: Nadeln auf parallele Linien werfen und daraus π annähern.
#[derive(Parser, Debug)]
struct Args {
    /// YAML-Datei mit Einstellungen
    #[arg(short = 'f', long)]
    datei: Option<PathBuf>,

    /// Anzahl der zu werfenden Nadeln (sonst wird nachgefragt)
    #[arg(short = 'n', long)]
    nadeln: Option<u64>,

    #[arg(long)]
    linien: Option<usize>,

    #[arg(long)]
    laengenfaktor: Option<f64>,

    #[arg(long)]
    stellen: Option<usize>,

    #[arg(long)]
    geschwindigkeit: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Ohne Animation auf allen Threads rechnen
    #[arg(long, conflicts_with = "animiert")]
    parallel: bool,

    /// Jede Nadel im Terminal zeichnen, im Takt der Geschwindigkeit
    #[arg(long)]
    animiert: bool,
}

// Datei laden und Kommandozeilenwerte darüberlegen
fn lade_einstellungen(args: &Args) -> Result<Einstellungen> {
    let mut einstellungen = match &args.datei {
        Some(pfad) => {
            let text = fs::read_to_string(pfad)
                .with_context(|| format!("Konnte {} nicht lesen", pfad.display()))?;
            Einstellungen::aus_yaml(&text)
                .with_context(|| format!("Ungültiges YAML in {}", pfad.display()))?
        }
        None => Einstellungen::default(),
    };

    if let Some(linien) = args.linien {
        einstellungen.linien = linien;
    }
    if let Some(faktor) = args.laengenfaktor {
        einstellungen.laengenfaktor = faktor;
    }
    if let Some(stellen) = args.stellen {
        einstellungen.stellen = stellen;
    }
    if let Some(geschwindigkeit) = args.geschwindigkeit {
        einstellungen.geschwindigkeit = geschwindigkeit;
    }
    if args.seed.is_some() {
        einstellungen.seed = args.seed;
    }

    einstellungen.validiere()?;
    Ok(einstellungen)
}

// Hilfsfunktion für Benutzereingabe
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

// Validierung der eingegebenen Nadelzahl
fn validate_nadelzahl(input: &str) -> Result<u64, &'static str> {
    match input.parse::<u64>() {
        Ok(n) if n >= MIN_NADELN => Ok(n),
        Ok(_) => Err("Es muss mindestens eine Nadel geworfen werden."),
        Err(_) => Err("Ungültige Eingabe. Bitte gib eine ganze Zahl ein."),
    }
}

fn frage_nadelzahl() -> io::Result<u64> {
    let eingabe = get_user_input("\nGib die Anzahl der Nadeln ein: ")?;
    Ok(validate_nadelzahl(&eingabe).unwrap_or_else(|fehler| {
        println!("{} Verwende Standardwert von {} Nadeln.", fehler, DEFAULT_NADELN);
        DEFAULT_NADELN
    }))
}

fn laufe_sequentiell(sim: &mut Simulation, anzahl: u64) -> io::Result<Momentaufnahme> {
    let bildschirm = Anzeige::new();
    anzeige::leere_bildschirm()?;

    let mut geworfen = 0;
    while geworfen < anzahl {
        let batch_groesse = ANZEIGE_INTERVALL.min(anzahl - geworfen);
        sim.wirf(batch_groesse);
        geworfen += batch_groesse;
        bildschirm.fortschritt(geworfen, anzahl)?;
    }
    Ok(sim.statistik())
}

fn laufe_animiert(sim: &mut Simulation, anzahl: u64, stellen: usize) -> io::Result<Momentaufnahme> {
    let bildschirm = Anzeige::new();
    let (breite, hoehe) = sim.flaeche();
    let mut leinwand = Leinwand::new(80, 24, breite, hoehe, sim.line_positions());

    let _cursor = CursorWaechter::new(io::stdout())?; // Cursor unsichtbar bis zum Ende der Funktion
    anzeige::leere_bildschirm()?;

    sim.play();
    let mut geworfen = 0;
    while geworfen < anzahl {
        if let Some(wurf) = sim.tick() {
            leinwand.zeichne(&wurf.nadel, wurf.getroffen);
            bildschirm.animation(&leinwand, &wurf.statistik, stellen)?;
            geworfen += 1;
        }
        std::thread::sleep(sim.verzoegerung());
    }
    sim.pause();

    Ok(sim.statistik())
}

fn laufe_parallel(einstellungen: &Einstellungen, anzahl: u64) -> Result<(Momentaufnahme, Duration)> {
    let fortschritt = AtomicU64::new(0);
    let fertig = AtomicBool::new(false);
    let bildschirm = Anzeige::new();

    anzeige::leere_bildschirm()?;

    let ergebnis = std::thread::scope(|s| {
        // Anzeige-Thread, solange noch gerechnet wird
        s.spawn(|| {
            while !fertig.load(Ordering::SeqCst) {
                let verarbeitet = fortschritt.load(Ordering::SeqCst);
                if let Err(e) = bildschirm.fortschritt(verarbeitet, anzahl) {
                    eprintln!("Fehler beim Aktualisieren der Anzeige: {}", e);
                }
                std::thread::sleep(Duration::from_millis(50));
            }
        });

        let ergebnis = schaetze_parallel_mit_fortschritt(einstellungen, anzahl, &fortschritt);
        fertig.store(true, Ordering::SeqCst);
        ergebnis
    })?;

    bildschirm.fortschritt(ergebnis.geworfen, anzahl)?;
    println!("\nVerwendete Threads: {}", ergebnis.threads);

    let statistik = Momentaufnahme {
        geworfen: ergebnis.geworfen,
        treffer: ergebnis.treffer,
        pi_schaetzung: ergebnis.pi_schaetzung,
    };
    Ok((statistik, ergebnis.dauer))
}

fn gib_ergebnis_aus(statistik: &Momentaufnahme, stellen: usize, dauer: Duration) {
    println!("\nErgebnisse:");
    println!("π Annäherung:     {}", statistik.pi_text(stellen));
    println!("Eigentliches π:   {:.*}", stellen, std::f64::consts::PI);
    match statistik.abweichung() {
        Some(abweichung) => println!("Abweichung:       {:.*}", stellen, abweichung),
        None => println!("Abweichung:       -"),
    }
    println!("Geworfene Nadeln: {}", statistik.geworfen);
    println!("Treffer:          {}", statistik.treffer);
    println!("Berechnungszeit:  {:.2?}", dauer);
    println!(
        "Nadeln pro Sekunde: {:.2e}",
        statistik.geworfen as f64 / dauer.as_secs_f64()
    );
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("\nAnnäherung von Pi (π) mit dem Buffonschen Nadelproblem.");
    println!("Nadeln fallen zufällig auf parallele Linien, aus dem Anteil der Treffer folgt π.");

    let einstellungen = lade_einstellungen(&args)?;
    println!(
        "\nLinien: {}   Längenfaktor: {}   Fläche: {}x{}",
        einstellungen.linien, einstellungen.laengenfaktor, einstellungen.breite, einstellungen.hoehe
    );

    let anzahl = match args.nadeln {
        Some(n) => n,
        None => frage_nadelzahl()?,
    };

    if get_user_input("\nMöchtest du mit der Berechnung fortfahren? (Y/n): ")?
        .to_lowercase()
        .starts_with('n')
    {
        println!("\nBerechnung abgebrochen.");
        return Ok(());
    }

    let stellen = einstellungen.stellen;
    let (statistik, dauer) = if args.parallel {
        laufe_parallel(&einstellungen, anzahl)?
    } else {
        let mut sim = Simulation::new(&einstellungen)?;
        let start_zeit = Instant::now();
        let statistik = if args.animiert {
            laufe_animiert(&mut sim, anzahl, stellen)?
        } else {
            laufe_sequentiell(&mut sim, anzahl)?
        };
        (statistik, start_zeit.elapsed())
    };

    gib_ergebnis_aus(&statistik, stellen, dauer);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nadelzahl_validierung() {
        assert_eq!(validate_nadelzahl("500"), Ok(500));
        assert!(validate_nadelzahl("0").is_err());
        assert!(validate_nadelzahl("viele").is_err());
    }

    #[test]
    fn kommandozeile_ueberschreibt_standard() {
        let args = Args::parse_from(["buffon_nadel", "--linien", "7", "--seed", "9", "-n", "10"]);
        let e = lade_einstellungen(&args).unwrap();
        assert_eq!(e.linien, 7);
        assert_eq!(e.seed, Some(9));
        assert_eq!(e.laengenfaktor, 0.5);
    }

    #[test]
    fn ungueltige_kommandozeile() {
        let args = Args::parse_from(["buffon_nadel", "--linien", "1"]);
        assert!(lade_einstellungen(&args).is_err());
    }
}
