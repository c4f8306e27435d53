//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile f64 -> résultat
//!
//! Seule étape qui peut échouer : l’exécution de la RPN.
//! Le mode d’angle est un paramètre, jamais un état global.

use super::erreur::EvalError;
use super::fonctions::{Fonction, ModeAngle};
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize, Op};
use super::rpn::{format_rpn, to_rpn, Instr};

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression texte.
///
/// Une entrée vide (ou seulement des espaces) vaut 0.
pub fn evaluate(expression: &str, mode: ModeAngle) -> Result<f64, EvalError> {
    eval_expression(expression, mode).map(|(v, _d)| v)
}

/// Comme `evaluate`, mais retourne aussi la démarche (jetons + RPN).
pub fn eval_expression(
    expression: &str,
    mode: ModeAngle,
) -> Result<(f64, DemarcheNoyau), EvalError> {
    let s = expression.trim();
    if s.is_empty() {
        return Ok((0.0, DemarcheNoyau::default()));
    }

    // 1) Jetons
    let jetons = tokenize(s);

    // 2) RPN
    let rpn = to_rpn(&jetons);

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_rpn(&rpn),
    };
    tracing::trace!(jetons = %d.jetons, rpn = %d.rpn, "pipeline");

    // 3) Exécution
    match eval_rpn(&rpn, mode) {
        Ok(v) => {
            tracing::trace!(resultat = %format_resultat(v), "évalué");
            Ok((v, d))
        }
        Err(e) => {
            tracing::debug!(expression = s, erreur = %e, "évaluation refusée");
            Err(e)
        }
    }
}

/// Exécute un programme RPN sur une pile f64.
///
/// Échoue si la pile manque d’opérandes, si une fonction est inconnue,
/// ou s’il ne reste pas exactement une valeur à la fin.
pub fn eval_rpn(rpn: &[Instr], mode: ModeAngle) -> Result<f64, EvalError> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for instr in rpn {
        match instr {
            Instr::Push(v) => st.push(*v),

            Instr::Binaire(op) => {
                let b = st.pop().ok_or(EvalError::InvalidExpression)?;
                let a = st.pop().ok_or(EvalError::InvalidExpression)?;
                st.push(appliquer_op(*op, a, b));
            }

            Instr::Fonction(name) => {
                let f = Fonction::depuis_nom(name)?;
                let arg = st.pop().ok_or(EvalError::InvalidExpression)?;
                st.push(f.appliquer(arg, mode)?);
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::InvalidExpression),
    }
}

/// Arithmétique IEEE pure : pas de contrôle division par zéro.
fn appliquer_op(op: Op, a: f64, b: f64) -> f64 {
    match op {
        Op::Plus => a + b,
        Op::Minus => a - b,
        Op::Star => a * b,
        Op::Slash => a / b,
        Op::Caret => a.powf(b),
    }
}
