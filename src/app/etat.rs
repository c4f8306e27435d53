//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, affichage, mémoire, historique,
//! réglages) et offrir les actions des touches sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing d’expression).
//! - Actions déterministes, sans effet de bord caché.
//! - Historique borné (HISTORIQUE_MAX).
//! - Persisté par eframe (serde) ; l’état transitoire est `#[serde(skip)]`.

use serde::{Deserialize, Serialize};

use calculatrice_aurora::ModeAngle;

/// Garde-fou : nombre d’entrées d’historique conservées.
pub const HISTORIQUE_MAX: usize = 60;

/// Motifs effacés d’un coup par DEL.
const MOTIFS_FONCTIONS: [&str; 8] = [
    "sqrt(", "fact(", "sin(", "cos(", "tan(", "log(", "abs(", "ln(",
];

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    #[serde(skip)]
    pub affichage: String, // aperçu du résultat ("Error" si l’évaluation échoue)
    #[serde(skip)]
    pub erreur: String, // détail de l’erreur (sous l’affichage)
    #[serde(skip)]
    pub demarche: Demarche,

    // --- réglages ---
    pub degres: bool,
    pub theme_sombre: bool,

    // --- mémoire + historique ---
    pub memoire: f64,
    pub historique: Vec<EntreeHistorique>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    #[serde(skip)]
    pub focus_entree: bool,
    // Clé (entrée, mode) de l’aperçu courant : on ne réévalue que si elle change.
    #[serde(skip)]
    pub apercu_pour: Option<(String, bool)>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            affichage: "0".to_string(),
            erreur: String::new(),
            demarche: Demarche::default(),
            degres: true,
            theme_sombre: true,
            memoire: 0.0,
            historique: Vec::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
            apercu_pour: None,
        }
    }
}

impl AppCalc {
    pub fn mode_angle(&self) -> ModeAngle {
        if self.degres {
            ModeAngle::Degres
        } else {
            ModeAngle::Radians
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// C : effacer l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Ajoute du texte tel quel (chiffres, opérateurs, "sin(", ...).
    pub fn inserer(&mut self, texte: &str) {
        self.entree.push_str(texte);
        self.focus_entree = true;
    }

    /// rand : ajoute un tirage uniforme dans [0, 1).
    pub fn inserer_aleatoire(&mut self) {
        let x: f64 = rand::random();
        self.inserer(&x.to_string());
    }

    /// DEL : retire d’un coup les motifs utiles ("sin(", "sqrt(", ...), sinon un caractère.
    pub fn backspace_entree(&mut self) {
        match MOTIFS_FONCTIONS.iter().find(|pat| self.entree.ends_with(*pat)) {
            Some(pat) => {
                let reste = self.entree.len() - pat.len();
                self.entree.truncate(reste);
            }
            None => {
                self.entree.pop();
            }
        }

        self.focus_entree = true;
    }

    /// % : remplace le nombre final `n` par `(n/100)`.
    /// Sans nombre final, ne fait rien.
    pub fn appliquer_pourcent(&mut self) {
        let Some(debut) = debut_nombre_final(&self.entree) else {
            return;
        };
        let Ok(n) = self.entree[debut..].parse::<f64>() else {
            return;
        };

        self.entree.truncate(debut);
        self.entree.push_str(&format!("({})", n / 100.0));
        self.focus_entree = true;
    }

    /// Valeur actuellement affichée (0 si "Error" / NaN), comme lue par M+ / M-.
    pub fn valeur_affichee(&self) -> f64 {
        self.affichage
            .parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .unwrap_or(0.0)
    }

    pub fn memoire_clear(&mut self) {
        self.memoire = 0.0;
    }

    /// MR : ajoute la valeur mémoire à l’entrée.
    pub fn memoire_rappel(&mut self) {
        let texte = format!("{}", self.memoire);
        self.inserer(&texte);
    }

    pub fn memoire_plus(&mut self) {
        self.memoire += self.valeur_affichee();
    }

    pub fn memoire_moins(&mut self) {
        self.memoire -= self.valeur_affichee();
    }

    /// Ajoute en tête d’historique (plus récent d’abord), borné.
    pub fn pousser_historique(&mut self, expression: impl Into<String>, resultat: impl Into<String>) {
        self.historique.insert(
            0,
            EntreeHistorique {
                expression: expression.into(),
                resultat: resultat.into(),
            },
        );
        self.historique.truncate(HISTORIQUE_MAX);
    }

    pub fn clear_historique(&mut self) {
        self.historique.clear();
    }

    /// Clic sur une ligne d’historique : son résultat devient l’entrée.
    pub fn rappeler_historique(&mut self, index: usize) {
        if let Some(h) = self.historique.get(index) {
            self.entree = h.resultat.clone();
            self.focus_entree = true;
        }
    }

    pub fn basculer_angle(&mut self) {
        self.degres = !self.degres;
    }

    pub fn basculer_theme(&mut self) {
        self.theme_sombre = !self.theme_sombre;
    }

    /* ------------------------ Dépôt des sorties ------------------------ */

    /// Aperçu (ou "=") réussi : texte déjà formaté.
    pub fn set_affichage(&mut self, affiche: impl Into<String>, demarche: Demarche) {
        self.affichage = affiche.into();
        self.erreur.clear();
        self.demarche = demarche;
    }

    /// Choix UX : l’affichage passe à "Error", la démarche est effacée.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.affichage = "Error".to_string();
        self.erreur = msg.into();
        self.demarche = Demarche::default();
    }

    /// "=" réussi : historique + le résultat remplace l’entrée.
    pub fn valider_resultat(&mut self, affiche: &str) {
        let expression = std::mem::take(&mut self.entree);
        self.pousser_historique(expression, affiche);
        self.entree = affiche.to_string();
        self.apercu_pour = None;
        self.focus_entree = true;
    }
}

/// Début (octet) du nombre final de forme `\d+\.?\d*`, s’il existe.
fn debut_nombre_final(s: &str) -> Option<usize> {
    let run = s
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
        .last()
        .map(|(i, _)| i)?;

    // la suite est ASCII : chaque octet est une frontière de caractère
    (run..s.len()).find(|&i| {
        let suffixe = &s[i..];
        suffixe.starts_with(|c: char| c.is_ascii_digit()) && suffixe.matches('.').count() <= 1
    })
}
