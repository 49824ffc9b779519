// src/noyau/parametres.rs

//! Paramètres d'un calcul de π côté appelant.
//!
//! Le noyau (bellard.rs) accepte toute entrée non signée et n'a pas de plafond :
//! c'est ici que l'on borne itérations et précision (coût ~ itérations × précision).

use thiserror::Error;
use tracing::warn;

use super::bellard::{evaluate_avec, Division};

/// Valeurs par défaut quand rien n'est précisé.
pub const ITERATIONS_DEFAUT: u32 = 100;
pub const PRECISION_DEFAUT: u32 = 10;

/// Garde-fous (anti-abus / anti-gel).
pub const ITERATIONS_MAX: u32 = 100_000;
pub const PRECISION_MAX: u32 = 8_192;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurParametres {
    #[error("nombre d’itérations illisible : '{0}'")]
    IterationsIllisibles(String),

    #[error("précision illisible : '{0}'")]
    PrecisionIllisible(String),

    #[error("trop d’itérations : {demande} (max {max})")]
    TropDIterations { demande: u32, max: u32 },

    #[error("précision trop grande : {demande} bits (max {max})")]
    PrecisionTropGrande { demande: u32, max: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parametres {
    iterations: u32,
    precision: u32,
}

impl Default for Parametres {
    fn default() -> Self {
        Self {
            iterations: ITERATIONS_DEFAUT,
            precision: PRECISION_DEFAUT,
        }
    }
}

/// Résultat d'un calcul : valeur + paramètres en écho.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultatPi {
    pub valeur: String,
    pub iterations: u32,
    pub precision: u32,
    pub division: Division,
}

impl Parametres {
    pub fn new(iterations: u32, precision: u32) -> Result<Self, ErreurParametres> {
        if iterations > ITERATIONS_MAX {
            return Err(ErreurParametres::TropDIterations {
                demande: iterations,
                max: ITERATIONS_MAX,
            });
        }
        if precision > PRECISION_MAX {
            return Err(ErreurParametres::PrecisionTropGrande {
                demande: precision,
                max: PRECISION_MAX,
            });
        }
        Ok(Self {
            iterations,
            precision,
        })
    }

    /// Lit deux champs texte (vide => valeur par défaut), puis applique les bornes.
    pub fn lire(iterations: &str, precision: &str) -> Result<Self, ErreurParametres> {
        let it = lire_entier(iterations, ITERATIONS_DEFAUT)
            .ok_or_else(|| ErreurParametres::IterationsIllisibles(iterations.trim().into()))?;
        let prec = lire_entier(precision, PRECISION_DEFAUT)
            .ok_or_else(|| ErreurParametres::PrecisionIllisible(precision.trim().into()))?;

        Self::new(it, prec).inspect_err(|e| warn!(erreur = %e, "paramètres refusés"))
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn evaluer(&self, division: Division) -> ResultatPi {
        ResultatPi {
            valeur: evaluate_avec(self.iterations, self.precision, division),
            iterations: self.iterations,
            precision: self.precision,
            division,
        }
    }
}

/// Chiffres décimaux seulement (pas de signe) ; vide => défaut.
fn lire_entier(txt: &str, defaut: u32) -> Option<u32> {
    let s = txt.trim();
    if s.is_empty() {
        return Some(defaut);
    }
    if !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
