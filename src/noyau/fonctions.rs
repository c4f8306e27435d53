// src/noyau/fonctions.rs
//
// Fonctions nommées (un seul argument) + mode d’angle
// ---------------------------------------------------
// - sin/cos/tan : argument en degrés ou radians selon ModeAngle
// - log (base 10), ln, sqrt, abs
// - fact : troncature vers zéro, refus si négatif, débordement -> Infinity

use num_traits::ToPrimitive;

use super::erreur::EvalError;

/// Au-delà, n! dépasse f64::MAX.
const FACT_MAX: u64 = 170;

/// Lecture des arguments trigonométriques.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    fn en_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Degres => x.to_radians(),
            ModeAngle::Radians => x,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Abs,
    Fact,
}

impl Fonction {
    /// Identifiant (déjà en minuscules) -> fonction.
    pub fn depuis_nom(name: &str) -> Result<Self, EvalError> {
        let f = match name {
            "sin" => Fonction::Sin,
            "cos" => Fonction::Cos,
            "tan" => Fonction::Tan,
            "log" => Fonction::Log,
            "ln" => Fonction::Ln,
            "sqrt" => Fonction::Sqrt,
            "abs" => Fonction::Abs,
            "fact" => Fonction::Fact,
            _ => return Err(EvalError::UnknownFunction(name.to_string())),
        };
        Ok(f)
    }

    pub fn appliquer(self, arg: f64, mode: ModeAngle) -> Result<f64, EvalError> {
        let v = match self {
            Fonction::Sin => mode.en_radians(arg).sin(),
            Fonction::Cos => mode.en_radians(arg).cos(),
            Fonction::Tan => mode.en_radians(arg).tan(),
            Fonction::Log => arg.log10(),
            Fonction::Ln => arg.ln(),
            Fonction::Sqrt => arg.sqrt(),
            Fonction::Abs => arg.abs(),
            Fonction::Fact => factorielle(arg)?,
        };
        Ok(v)
    }
}

fn factorielle(arg: f64) -> Result<f64, EvalError> {
    let n = arg.trunc();
    if n < 0.0 {
        return Err(EvalError::InvalidFactorial(arg));
    }

    // NaN : produit vide
    if n.is_nan() {
        return Ok(1.0);
    }

    match n.to_u64() {
        Some(n) if n <= FACT_MAX => Ok((2..=n).fold(1.0, |acc, i| acc * i as f64)),
        _ => Ok(f64::INFINITY),
    }
}
