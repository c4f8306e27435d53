//! Noyau flottant (calcul d’expressions texte)
//!
//! Organisation interne :
//! - jetons.rs    : tokenisation (moins unaire réécrit en "0 -")
//! - rpn.rs       : shunting-yard -> programme postfixé
//! - fonctions.rs : sin/cos/tan (degrés/radians), log, ln, sqrt, abs, fact
//! - eval.rs      : exécution sur pile f64 + pipeline complet
//! - format.rs    : affichage du résultat
//! - erreur.rs    : erreurs (seule l’évaluation échoue)

pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvalError;
pub use eval::{eval_expression, evaluate, DemarcheNoyau};
pub use fonctions::ModeAngle;
pub use format::format_resultat;
