// src/noyau/bellard.rs

//! π par la série de Bellard (type BBP, base 1024).
//!
//! π = 1/2^6 · Σ_k (-1)^k / 1024^k · ( -2^5/(4k+1) - 1/(4k+3) + 2^8/(10k+1)
//!                                    - 2^6/(10k+3) - 2^2/(10k+5) - 2^2/(10k+7) + 1/(10k+9) )
//!
//! Contrats :
//! - exactement `iterations` termes, pas d'arrêt sur convergence
//! - accumulateur initialisé à 0 : `iterations == 0` donne 0
//! - toutes les valeurs d'un appel partagent la même précision
//! - (-1)^k et 1024^k : puissances entières EXACTES avant passage en flottant
//! - fonction pure : aucun état partagé, appels concurrents indépendants

use num_bigint::BigInt;
use tracing::{debug, trace};

use super::flottant::{precision_effective, Flottant};
use super::format::to_fixed;

/// Comment sont évalués les sept quotients de chaque terme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Division {
    /// Division f64 puis élargissement à la précision de travail.
    /// Chaque quotient hérite de l'arrondi f64.
    #[default]
    Native,
    /// Quotient rationnel arrondi une seule fois à la précision de travail.
    Exacte,
}

/// num/den selon le mode : f64 puis élargi, ou rationnel exact arrondi.
fn quotient_terme(num: u32, den: u64, prec: u32, division: Division) -> Flottant {
    match division {
        Division::Native => Flottant::from_f64(f64::from(num) / den as f64, prec),
        // den >= 1 pour tout k
        Division::Exacte => Flottant::from_ratio(&BigInt::from(num), &BigInt::from(den), prec)
            .unwrap_or_else(|| Flottant::zero(prec)),
    }
}

/// π (série de Bellard) en division native (mode par défaut).
pub fn pi_bellard(iterations: u32, precision: u32) -> Flottant {
    pi_bellard_avec(iterations, precision, Division::Native)
}

pub fn pi_bellard_avec(iterations: u32, precision: u32, division: Division) -> Flottant {
    let prec = precision_effective(precision);
    debug!(
        iterations,
        precision,
        prec_effective = prec,
        ?division,
        "série de Bellard"
    );

    let moins_un = BigInt::from(-1);
    let base = BigInt::from(1024);

    let mut pi = Flottant::zero(prec);

    for k in 0..iterations {
        let k = u64::from(k);

        let k1 = quotient_terme(1, 10 * k + 9, prec, division);
        let k2 = quotient_terme(64, 10 * k + 3, prec, division);
        let k3 = quotient_terme(32, 4 * k + 1, prec, division);
        let groupe_a = &(&k1 - &k2) - &k3;

        let k4 = quotient_terme(4, 10 * k + 5, prec, division);
        let k5 = quotient_terme(4, 10 * k + 7, prec, division);
        let k6 = quotient_terme(1, 4 * k + 3, prec, division);
        let groupe_b = -(&(&k4 + &k5) + &k6);

        let terme = &groupe_a + &groupe_b;

        // exposant < iterations <= u32::MAX
        let e = k as u32;
        let signe = Flottant::from_bigint(&moins_un.pow(e), prec);
        let echelle = Flottant::from_bigint(&base.pow(e), prec);

        let k9 = quotient_terme(256, 10 * k + 1, prec, division);
        let interieur = &k9 + &terme;

        // echelle = 1024^k >= 1
        let contribution = &(&interieur * &signe) / &echelle;
        pi = &pi + &contribution;

        trace!(k, "terme ajouté");
    }

    let deux_puissance_six = Flottant::from_f64(2f64.powi(6), prec);
    &pi / &deux_puissance_six
}

/// Texte de π en notation fixe, `precision` chiffres après la virgule (division native).
pub fn evaluate(iterations: u32, precision: u32) -> String {
    evaluate_avec(iterations, precision, Division::Native)
}

pub fn evaluate_avec(iterations: u32, precision: u32, division: Division) -> String {
    to_fixed(
        &pi_bellard_avec(iterations, precision, division),
        precision as usize,
    )
}
