pub mod anzeige;
pub mod einstellungen;
pub mod fehler;
pub mod gitter;
pub mod nadel;
pub mod parallel;
pub mod schnitt;
pub mod simulation;
pub mod statistik;

pub use einstellungen::{verzoegerung, Einstellungen};
pub use fehler::KonfigurationsFehler;
pub use gitter::Liniengitter;
pub use nadel::{generate_needle, Farbe, Nadel};
pub use parallel::{schaetze_parallel, schaetze_parallel_mit_fortschritt, Ergebnis};
pub use schnitt::landed_on_line;
pub use simulation::{Laufstatus, Simulation, Wurf};
pub use statistik::{record_drop, Momentaufnahme, SimulationsZustand};
