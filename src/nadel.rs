//! Nadeln und ihre zufällige Erzeugung.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use std::f64::consts::TAU;

/// RGB-Farbe einer Nadel, jeder Kanal gleichverteilt aus [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Farbe {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Eine geworfene Nadel. Die Endpunkte bleiben Gleitkommazahlen, damit der Schnitttest
/// nicht durch Rundung verzerrt wird; ganzzahlig wird erst beim Zeichnen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nadel {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub farbe: Farbe,
}

impl Nadel {
    /// Linker und rechter Rand der horizontalen Ausdehnung.
    pub fn x_spanne(&self) -> (f64, f64) {
        (self.x1.min(self.x2), self.x1.max(self.x2))
    }

    /// Endpunkte als Pixel-Koordinaten (x1, y1, x2, y2), zum Zeichnen abgeschnitten.
    pub fn anzeige_koordinaten(&self) -> (i32, i32, i32, i32) {
        (self.x1 as i32, self.y1 as i32, self.x2 as i32, self.y2 as i32)
    }
}

/// Erzeugt eine Nadel mit gleichverteiltem Mittelpunkt in [0, breite) x [0, hoehe),
/// gleichverteiltem Winkel in [0, 2π) und zufälliger Farbe.
///
/// Der Winkel wird direkt als Gleitkommazahl gezogen, nicht als Ganzzahl modulo 2π.
pub fn generate_needle<R: Rng + ?Sized>(rng: &mut R, breite: f64, hoehe: f64, nadel_laenge: f64) -> Nadel {
    let x = rng.gen_range(0.0..breite);
    let y = rng.gen_range(0.0..hoehe);
    let winkel = Uniform::new(0.0, TAU).sample(rng);

    // Halbe Länge, projiziert auf beide Achsen.
    let dx = nadel_laenge / 2.0 * winkel.cos();
    let dy = nadel_laenge / 2.0 * winkel.sin();

    let farbe = Farbe {
        r: rng.gen(),
        g: rng.gen(),
        b: rng.gen(),
    };

    Nadel {
        x1: x - dx,
        y1: y - dy,
        x2: x + dx,
        y2: y + dy,
        farbe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    #[test]
    fn laenge_bleibt_erhalten() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let nadel = generate_needle(&mut rng, 600.0, 400.0, 75.0);
            let dx = nadel.x2 - nadel.x1;
            let dy = nadel.y2 - nadel.y1;
            let laenge = (dx * dx + dy * dy).sqrt();
            assert!((laenge - 75.0).abs() < 1e-9, "laenge = {}", laenge);
        }
    }

    #[test]
    fn mittelpunkt_liegt_auf_der_flaeche() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..1000 {
            let nadel = generate_needle(&mut rng, 300.0, 200.0, 0.0);
            // Ohne Länge fallen beide Endpunkte auf den Mittelpunkt.
            assert_eq!((nadel.x1, nadel.y1), (nadel.x2, nadel.y2));
            assert!((0.0..300.0).contains(&nadel.x1));
            assert!((0.0..200.0).contains(&nadel.y1));
        }
    }

    #[test]
    fn gleicher_seed_gleiche_nadeln() {
        let mut a = ChaCha8Rng::seed_from_u64(3);
        let mut b = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(
                generate_needle(&mut a, 600.0, 600.0, 75.0),
                generate_needle(&mut b, 600.0, 600.0, 75.0)
            );
        }
    }

    #[test]
    fn winkel_decken_alle_quadranten_ab() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut quadranten = [0usize; 4];
        for _ in 0..4000 {
            let nadel = generate_needle(&mut rng, 1000.0, 1000.0, 200.0);
            let rechts = nadel.x2 >= nadel.x1;
            let unten = nadel.y2 >= nadel.y1;
            quadranten[(rechts as usize) << 1 | unten as usize] += 1;
        }
        for anzahl in quadranten {
            assert!(anzahl > 700, "{:?}", quadranten);
        }
    }

    #[test]
    fn x_spanne_sortiert() {
        let nadel = Nadel { x1: 200.5, y1: 50.0, x2: 100.25, y2: 50.0, farbe: Farbe { r: 0, g: 0, b: 0 } };
        assert_eq!(nadel.x_spanne(), (100.25, 200.5));
    }

    #[test]
    fn anzeige_koordinaten_werden_abgeschnitten() {
        let nadel = Nadel { x1: 149.9, y1: 10.7, x2: 224.3, y2: -3.6, farbe: Farbe { r: 0, g: 0, b: 0 } };
        assert_eq!(nadel.anzeige_koordinaten(), (149, 10, 224, -3));
    }
}
