// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (programme postfixé)
// Objectif:
// - Convertir une suite de Tok en suite d’instructions Instr
// - Ne rien valider : une structure cassée (parenthèses, opérandes manquants)
//   donne une RPN que l’évaluateur refusera
//
// Règles:
// - précédences : + - = 2 ; * / = 3 ; ^ = 4 ; moins unaire = 5
// - ^ et moins unaire associatifs à droite, le reste à gauche
// - Ident(name) : fonction en attente, sortie juste après la ')' de son groupe
// - NumMalforme : ignoré

use super::jetons::{Op, Tok};

/// Instruction du programme postfixé.
#[derive(Clone, Debug, PartialEq)]
pub enum Instr {
    Push(f64),
    Binaire(Op),
    Fonction(String),
}

/// Entrée de la pile d’opérateurs.
#[derive(Debug)]
enum Pile {
    Op(Op),
    MoinsUnaire,
    LPar,
    Fonction(String),
}

impl Pile {
    /// Précédence des opérateurs ; None pour '(' et les fonctions
    /// (on ne dépile jamais à travers eux).
    fn precedence(&self) -> Option<i32> {
        match self {
            Pile::Op(Op::Plus | Op::Minus) => Some(2),
            Pile::Op(Op::Star | Op::Slash) => Some(3),
            Pile::Op(Op::Caret) => Some(4),
            Pile::MoinsUnaire => Some(5),
            Pile::LPar | Pile::Fonction(_) => None,
        }
    }

    fn is_right_associative(&self) -> bool {
        matches!(self, Pile::Op(Op::Caret) | Pile::MoinsUnaire)
    }

    /// '(' ne produit rien : une parenthèse orpheline disparaît.
    fn into_instr(self) -> Option<Instr> {
        match self {
            Pile::Op(op) => Some(Instr::Binaire(op)),
            Pile::MoinsUnaire => Some(Instr::Binaire(Op::Minus)),
            Pile::Fonction(name) => Some(Instr::Fonction(name)),
            Pile::LPar => None,
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Num(90), RPar, Op(Plus), Num(1)]
///   rpn:    [Push(90), Fonction("sin"), Push(1), Binaire(Plus)]
pub fn to_rpn(tokens: &[Tok]) -> Vec<Instr> {
    let mut out: Vec<Instr> = Vec::new();
    let mut ops: Vec<Pile> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(v) => out.push(Instr::Push(v)),

            Tok::NumMalforme(texte) => {
                tracing::trace!(%texte, "nombre malformé ignoré");
            }

            Tok::Ident(name) => ops.push(Pile::Fonction(name)),

            Tok::LPar => ops.push(Pile::LPar),

            Tok::RPar => {
                // dépile jusqu’à '('
                let mut ferme = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Pile::LPar) {
                        ferme = true;
                        break;
                    }
                    out.extend(top.into_instr());
                }

                // fonction juste sous la '(' : son groupe est complet
                if ferme && matches!(ops.last(), Some(Pile::Fonction(_))) {
                    out.extend(ops.pop().and_then(Pile::into_instr));
                }
            }

            Tok::Op(op) => empile_operateur(Pile::Op(op), &mut ops, &mut out),

            Tok::MoinsUnaire => empile_operateur(Pile::MoinsUnaire, &mut ops, &mut out),
        }
    }

    // vide la pile ops ('(' orphelines ignorées)
    while let Some(top) = ops.pop() {
        out.extend(top.into_instr());
    }

    out
}

fn empile_operateur(courant: Pile, ops: &mut Vec<Pile>, out: &mut Vec<Instr>) {
    let p_cur = courant.precedence().unwrap_or(0);

    while let Some(top) = ops.last() {
        let Some(p_top) = top.precedence() else {
            break;
        };

        let doit_pop = p_top > p_cur || (p_top == p_cur && !courant.is_right_associative());
        if !doit_pop {
            break;
        }
        out.extend(ops.pop().and_then(Pile::into_instr));
    }

    ops.push(courant);
}

/// Format utilitaire (“démarche”) : programme RPN en texte.
pub fn format_rpn(rpn: &[Instr]) -> String {
    rpn.iter()
        .map(|i| match i {
            Instr::Push(v) => format!("{v}"),
            Instr::Binaire(op) => op.symbole().to_string(),
            Instr::Fonction(name) => name.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
