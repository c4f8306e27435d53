// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Seul l’évaluateur échoue : jetons et RPN ne refusent jamais rien.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum EvalError {
    /// Pile vide au mauvais moment, ou plusieurs valeurs restantes à la fin
    /// (parenthèses mal appariées, opérande manquant, opérateur pendant...).
    InvalidExpression,
    /// Identifiant qui ne correspond à aucune fonction connue.
    UnknownFunction(String),
    /// `fact` appliquée à un argument négatif (valeur d’origine conservée).
    InvalidFactorial(f64),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExpression => write!(f, "expression invalide"),
            Self::UnknownFunction(name) => write!(f, "fonction inconnue: '{name}'"),
            Self::InvalidFactorial(arg) => write!(f, "factorielle invalide: {arg}"),
        }
    }
}

impl std::error::Error for EvalError {}
