// Schnitttest zwischen Nadel und Liniengitter.
use crate::nadel::Nadel;

/// Prüft, ob die horizontale Ausdehnung der Nadel mindestens eine Linie überdeckt.
/// Eine senkrechte Nadel (x1 == x2) trifft nur, wenn ihr x genau auf einer Linie liegt.
pub fn landed_on_line(nadel: &Nadel, positionen: &[f64]) -> bool {
    let (x_min, x_max) = nadel.x_spanne();

    positionen.iter().any(|&p| x_min <= p && p <= x_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nadel::Farbe;

    fn nadel(x1: f64, x2: f64) -> Nadel {
        Nadel { x1, y1: 50.0, x2, y2: 50.0, farbe: Farbe { r: 255, g: 0, b: 0 } }
    }

    #[test]
    fn ueberdeckt_mittlere_linie() {
        assert!(landed_on_line(&nadel(100.0, 200.0), &[0.0, 150.0, 300.0]));
        assert!(landed_on_line(&nadel(200.0, 100.0), &[0.0, 150.0, 300.0]));
    }

    #[test]
    fn zwischen_zwei_linien() {
        assert!(!landed_on_line(&nadel(10.0, 140.0), &[0.0, 150.0, 300.0]));
        assert!(!landed_on_line(&nadel(299.0, 151.0), &[0.0, 150.0, 300.0]));
    }

    #[test]
    fn endpunkt_auf_linie_zaehlt() {
        assert!(landed_on_line(&nadel(150.0, 170.0), &[0.0, 150.0, 300.0]));
        assert!(landed_on_line(&nadel(280.0, 300.0), &[0.0, 150.0, 300.0]));
    }

    #[test]
    fn knapp_hinter_der_linie_kein_treffer() {
        // Bruchteile eines Pixels entscheiden, nichts wird vorher abgeschnitten.
        let linien = [0.0, 150.0, 300.0];
        assert!(!landed_on_line(&nadel(150.3, 170.0), &linien));
        assert!(!landed_on_line(&nadel(299.99, 150.01), &linien));
        assert!(landed_on_line(&nadel(149.99, 150.0), &linien));
    }

    #[test]
    fn senkrechte_nadel() {
        let linien = [0.0, 150.0, 300.0];
        for p in linien {
            assert!(landed_on_line(&nadel(p, p), &linien));
        }
        assert!(!landed_on_line(&nadel(151.0, 151.0), &linien));
    }

    #[test]
    fn gebrochene_linienposition() {
        let linien = [0.0, 500.0 / 3.0, 1000.0 / 3.0, 500.0];
        assert!(!landed_on_line(&nadel(166.0, 166.0), &linien));
        assert!(landed_on_line(&nadel(166.0, 167.0), &linien));
    }

    #[test]
    fn ausserhalb_der_flaeche() {
        assert!(landed_on_line(&nadel(-20.0, 10.0), &[0.0, 150.0]));
        assert!(!landed_on_line(&nadel(-20.0, -1.0), &[0.0, 150.0]));
    }
}
