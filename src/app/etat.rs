//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : champs saisis (itérations, précision), mode de division, dernier résultat,
//! erreur. Le calcul passe par `Parametres` (bornes) puis le noyau.

use calculatrice_pi::noyau::parametres::{ITERATIONS_DEFAUT, PRECISION_DEFAUT};
use calculatrice_pi::noyau::{Division, Parametres, ResultatPi};
use tracing::info;

#[derive(Clone, Debug)]
pub struct AppPi {
    // --- entrées utilisateur (texte brut, validé au calcul) ---
    pub iterations: String,
    pub precision: String,
    pub division: Division,

    // --- sorties ---
    pub resultat: Option<ResultatPi>,
    pub erreur: String,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppPi {
    fn default() -> Self {
        Self {
            iterations: ITERATIONS_DEFAUT.to_string(),
            precision: PRECISION_DEFAUT.to_string(),
            division: Division::Native,
            resultat: None,
            erreur: String::new(),
            focus_entree: true,
        }
    }
}

impl AppPi {
    /// AC : champs par défaut + résultats effacés.
    pub fn reset_total(&mut self) {
        *self = Self::default();
    }

    /// CLR : effacer résultat + erreur (sans toucher aux champs).
    pub fn clear_resultats(&mut self) {
        self.resultat = None;
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// Erreur : on CONSERVE le dernier résultat affiché.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, r: ResultatPi) {
        self.erreur.clear();
        self.resultat = Some(r);
        self.focus_entree = true;
    }

    /// Lit les champs, applique les garde-fous, calcule.
    pub fn calculer(&mut self) {
        match Parametres::lire(&self.iterations, &self.precision) {
            Ok(p) => {
                info!(
                    iterations = p.iterations(),
                    precision = p.precision(),
                    division = ?self.division,
                    "calcul de π"
                );
                let r = p.evaluer(self.division);
                self.set_resultat(r);
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}
