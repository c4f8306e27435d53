//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - texte arbitraire : jamais de panique ; sans lettres, seule InvalidExpression
//! - invariant clé : un résultat fini affiché puis relu redonne le même affichage

use std::time::{Duration, Instant};

use super::{evaluate, format_resultat, EvalError, ModeAngle};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => format!("{}", rng.pick(10)),
        1 => format!("{}.{}", rng.pick(100), rng.pick(100)),
        2 => format!("{}", rng.pick(1000)),
        _ => format!("-{}", 1 + rng.pick(9)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let op = ["+", "-", "*", "/", "^"][rng.pick(5) as usize];
    match rng.pick(6) {
        0 => gen_nombre(rng),
        1 | 2 => format!(
            "{}{op}{}",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        3 => format!(
            "({}{op}{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        4 => {
            let f = ["sin", "cos", "tan", "log", "ln", "sqrt", "abs", "fact"]
                [rng.pick(8) as usize];
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
        _ => format!("-({})", gen_expr(rng, depth - 1)),
    }
}

/// Bruit sans lettres : chiffres, opérateurs, glyphes, symboles inconnus.
const BRUIT_SANS_LETTRES: &[char] = &[
    '0', '1', '9', '.', '+', '-', '*', '/', '^', '(', ')', '×', '÷', ' ', '$', 'é',
];

/// Bruit avec lettres : peut former des noms de fonctions (connus ou non).
const BRUIT_AVEC_LETTRES: &[char] = &[
    '0', '1', '9', '.', '+', '-', '*', '/', '^', '(', ')', 's', 'i', 'n', 'x', '×', ' ', 'f',
    'a', 'c', 't', 'q', 'r',
];

const FONCTIONS_CONNUES: [&str; 8] = ["sin", "cos", "tan", "log", "ln", "sqrt", "abs", "fact"];

/// Texte “poubelle” tiré dans un alphabet donné.
fn gen_bruit(rng: &mut Rng, alphabet: &[char], len: usize) -> String {
    (0..len)
        .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_aller_retour() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut seen_ok = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let mode = if rng.pick(2) == 0 {
            ModeAngle::Degres
        } else {
            ModeAngle::Radians
        };

        let r1 = evaluate(&expr, mode);
        let r2 = evaluate(&expr, mode);
        match (&r1, &r2) {
            (Ok(a), Ok(b)) => assert!(
                a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan()),
                "non déterministe: expr={expr:?}"
            ),
            (Err(a), Err(b)) => assert_eq!(a, b, "expr={expr:?}"),
            _ => panic!("non déterministe: expr={expr:?}"),
        }

        match r1 {
            Ok(v) => {
                seen_ok += 1;
                let affiche = format_resultat(v);

                // l’exponentiel ("1e+12") ne se relit pas : hors invariant
                if v.is_finite() && !affiche.contains('e') {
                    let relu = evaluate(&affiche, mode)
                        .unwrap_or_else(|e| panic!("relecture {affiche:?} err={e}"));
                    assert_eq!(format_resultat(relu), affiche, "expr={expr:?}");
                }
            }
            Err(e) => assert!(
                matches!(e, EvalError::InvalidFactorial(_)),
                "erreur non attendue: expr={expr:?} err={e}"
            ),
        }
    }

    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_bruit_sans_lettres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let len = rng.pick(16) as usize;
        let expr = gen_bruit(&mut rng, BRUIT_SANS_LETTRES, len);

        // sans identifiant, seule la structure peut échouer
        if let Err(e) = evaluate(&expr, ModeAngle::Degres) {
            assert_eq!(e, EvalError::InvalidExpression, "expr={expr:?}");
            seen_err += 1;
        }
    }

    assert!(seen_err > 0, "aucune erreur vue: bruit trop “sage”");
}

#[test]
fn fuzz_safe_bruit_avec_lettres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xFACADE_u64);
    let mut seen_inconnue = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let len = rng.pick(16) as usize;
        let expr = gen_bruit(&mut rng, BRUIT_AVEC_LETTRES, len);

        if let Err(EvalError::UnknownFunction(name)) = evaluate(&expr, ModeAngle::Radians) {
            // un nom connu ne doit jamais être rapporté inconnu
            assert!(
                !FONCTIONS_CONNUES.contains(&name.as_str()),
                "expr={expr:?} nom={name:?}"
            );
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase()) && name != "x",
                "expr={expr:?} nom={name:?}"
            );
            seen_inconnue += 1;
        }
    }

    assert!(seen_inconnue > 0, "aucun nom inconnu vu");
}

#[test]
fn fuzz_safe_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["0.5"; 2000].join("+");
    let v = evaluate(&expr, ModeAngle::Radians).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(format_resultat(v), "1000");
}
