//! Noyau π (Bellard)
//!
//! Organisation interne :
//! - flottant.rs   : flottant binaire à précision arbitraire (arrondi correct)
//! - format.rs     : notation fixe (n chiffres après la virgule)
//! - bellard.rs    : série de Bellard, division native ou exacte
//! - parametres.rs : défauts + garde-fous côté appelant

pub mod bellard;
pub mod flottant;
pub mod format;
pub mod parametres;


#[cfg(test)]
mod tests_bellard;


// API publique minimale
pub use bellard::{evaluate, evaluate_avec, pi_bellard, pi_bellard_avec, Division};
pub use flottant::Flottant;
pub use parametres::{ErreurParametres, Parametres, ResultatPi};
