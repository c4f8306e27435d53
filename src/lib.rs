//! Calculatrice Aurora — noyau de calcul
//!
//! Une seule opération exposée à l’appelant (l’UI) :
//! `evaluate(expression, mode)` -> `Result<f64, EvalError>`,
//! puis `format_resultat(v)` pour l’écran.

pub mod noyau;

pub use noyau::{evaluate, format_resultat, EvalError, ModeAngle};
