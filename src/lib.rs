//! Calculatrice π : noyau de calcul.
//!
//! π par la série de Bellard sur un flottant binaire à précision choisie.
//! L'interface (eframe) vit dans le binaire ; ici, rien que du calcul pur.

pub mod noyau;

pub use noyau::{evaluate, pi_bellard, Division, Flottant};
