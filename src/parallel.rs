//! Schätzung ohne Animation: viele Nadeln auf alle verfügbaren Threads verteilt.
//!
//! Die Würfe werden in Chunks aufgeteilt, jeder Chunk zieht aus einem eigenen
//! ChaCha-Stream desselben Seeds. Damit ist das Ergebnis bei gleichem Seed unabhängig
//! davon, welcher Thread welchen Chunk bekommt.

use crate::einstellungen::Einstellungen;
use crate::fehler::KonfigurationsFehler;
use crate::gitter::Liniengitter;
use crate::nadel::generate_needle;
use crate::schnitt::landed_on_line;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

const CHUNK_SIZE: u64 = 10_000; // Minimale Chunk-Größe für die parallele Verarbeitung

/// Ergebnis eines parallelen Laufs.
#[derive(Debug, Clone, PartialEq)]
pub struct Ergebnis {
    pub geworfen: u64,              // Anzahl geworfener Nadeln
    pub treffer: u64,               // Davon auf einer Linie
    pub pi_schaetzung: Option<f64>, // None ohne Treffer
    pub dauer: Duration,            // Berechnungsdauer
    pub threads: usize,             // Anzahl verwendeter Threads
}

pub fn schaetze_parallel(einstellungen: &Einstellungen, anzahl: u64) -> Result<Ergebnis, KonfigurationsFehler> {
    schaetze_parallel_mit_fortschritt(einstellungen, anzahl, &AtomicU64::new(0))
}

/// Wie [`schaetze_parallel`], zählt aber jeden fertigen Chunk in `fortschritt` mit,
/// damit ein anderer Thread den Fortschritt anzeigen kann.
pub fn schaetze_parallel_mit_fortschritt(
    einstellungen: &Einstellungen,
    anzahl: u64,
    fortschritt: &AtomicU64,
) -> Result<Ergebnis, KonfigurationsFehler> {
    einstellungen.validiere()?;

    let gitter = Liniengitter::build_grid(einstellungen.breite, einstellungen.linien)?;
    let nadel_laenge = einstellungen.laengenfaktor * gitter.abstand();
    let seed = einstellungen.seed.unwrap_or_else(rand::random);
    let threads = rayon::current_num_threads();
    let start_zeit = Instant::now();

    if anzahl == 0 {
        return Ok(Ergebnis {
            geworfen: 0,
            treffer: 0,
            pi_schaetzung: None,
            dauer: start_zeit.elapsed(),
            threads,
        });
    }

    // Ziel: ca. 10 Chunks pro Thread, aber nie kleiner als CHUNK_SIZE
    let chunk_size = (anzahl / (threads as u64 * 10)).max(CHUNK_SIZE).min(anzahl);
    let chunks: Vec<u64> = (0..anzahl).step_by(chunk_size as usize).collect();

    let treffer = AtomicU64::new(0);

    chunks.par_iter().for_each(|&start| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(start / chunk_size);

        let ende = (start + chunk_size).min(anzahl);
        let mut lokale_treffer = 0;
        for _ in start..ende {
            let nadel = generate_needle(&mut rng, einstellungen.breite, einstellungen.hoehe, nadel_laenge);
            if landed_on_line(&nadel, gitter.positionen()) {
                lokale_treffer += 1;
            }
        }

        treffer.fetch_add(lokale_treffer, Ordering::Relaxed);
        fortschritt.fetch_add(ende - start, Ordering::Relaxed);
    });

    let treffer = treffer.load(Ordering::Relaxed);
    let pi_schaetzung = if treffer > 0 {
        Some(2.0 * nadel_laenge / gitter.abstand() * anzahl as f64 / treffer as f64)
    } else {
        None
    };

    Ok(Ergebnis {
        geworfen: anzahl,
        treffer,
        pi_schaetzung,
        dauer: start_zeit.elapsed(),
        threads,
    })
}
