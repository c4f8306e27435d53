//! Tests de propriétés : comportements attendus du noyau, bout à bout.
//!
//! - précédence / associativité
//! - moins unaire (lie plus fort que ^ : -3^2 = 9, choix assumé)
//! - degrés / radians
//! - factorielle
//! - formatage
//! - entrées cassées -> InvalidExpression
//! - aller-retour : format -> re-évaluation

use super::{evaluate, format_resultat, EvalError, ModeAngle};

const DEG: ModeAngle = ModeAngle::Degres;
const RAD: ModeAngle = ModeAngle::Radians;

fn eval_ok(expr: &str, mode: ModeAngle) -> f64 {
    evaluate(expr, mode).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, mode: ModeAngle, attendu: f64) {
    let v = eval_ok(expr, mode);
    assert!(
        (v - attendu).abs() < 1e-9,
        "expr={expr:?} : {v} au lieu de {attendu}"
    );
}

fn assert_erreur(expr: &str, attendue: EvalError) {
    assert_eq!(evaluate(expr, DEG), Err(attendue), "expr={expr:?}");
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn prop_precedence_entiers() {
    let cas = [
        ("1+2*3", 7.0),
        ("1*2+3", 5.0),
        ("8/2*4", 16.0),
        ("8-2+1", 7.0),
        ("2*(3+4)*5", 70.0),
        ("100/10/5", 2.0),
        ("((2))", 2.0),
    ];
    for (expr, attendu) in cas {
        assert_eq!(eval_ok(expr, DEG), attendu, "expr={expr:?}");
    }
}

#[test]
fn prop_puissance_droite() {
    assert_eq!(eval_ok("2^3^2", DEG), 512.0);
    assert_eq!(eval_ok("(2^3)^2", DEG), 64.0);
}

#[test]
fn prop_moins_unaire() {
    assert_eq!(eval_ok("-5+3", DEG), -2.0);
    assert_eq!(eval_ok("3*-2", DEG), -6.0);
    assert_eq!(eval_ok("-(2+3)", DEG), -5.0);
    assert_eq!(eval_ok("3--2", DEG), 5.0);
    assert_eq!(eval_ok("--3", DEG), 3.0);
    assert_eq!(eval_ok("2^-1", DEG), 0.5);
}

#[test]
fn prop_moins_unaire_avant_puissance() {
    // le moins réécrit lie plus fort que ^ : (-3)^2
    assert_eq!(eval_ok("-3^2", DEG), 9.0);
    // forme explicite pour -(3^2)
    assert_eq!(eval_ok("-(3^2)", DEG), -9.0);
}

#[test]
fn prop_glyphes() {
    assert_eq!(eval_ok("6×7", DEG), 42.0);
    assert_eq!(eval_ok("6x7", DEG), 42.0);
    assert_eq!(eval_ok("84÷2", DEG), 42.0);
}

/* ------------------------ Fonctions ------------------------ */

#[test]
fn prop_trig_modes() {
    assert_proche("sin(90)", DEG, 1.0);
    assert_eq!(eval_ok("sin(0)", RAD), 0.0);
    assert_proche("cos(60)", DEG, 0.5);
    assert_proche("3+4*sin(90)", DEG, 7.0);
    // la fonction s’applique à son groupe seulement
    assert_proche("sin(90)+1", DEG, 2.0);
}

#[test]
fn prop_fonctions_imbriquees() {
    assert_proche("sqrt(abs(-16))", DEG, 4.0);
    assert_proche("log(100)+ln(1)", DEG, 2.0);
    assert_proche("-sqrt(9)", DEG, -3.0);
}

#[test]
fn prop_factorielle() {
    assert_eq!(eval_ok("fact(5)", DEG), 120.0);
    assert_eq!(eval_ok("fact(0)", DEG), 1.0);
    assert_eq!(eval_ok("fact(3)+1", DEG), 7.0);
    assert_eq!(eval_ok("fact(200)", DEG), f64::INFINITY);
    assert_erreur("fact(-1)", EvalError::InvalidFactorial(-1.0));
}

#[test]
fn prop_fonction_inconnue() {
    assert_erreur("foo(1)", EvalError::UnknownFunction("foo".into()));
    // nom inconnu rencontré avant le manque d’argument
    assert_erreur("bar()", EvalError::UnknownFunction("bar".into()));
}

/* ------------------------ Entrées cassées ------------------------ */

#[test]
fn prop_structure_invalide() {
    for expr in ["(3+", "3+", "*", "2 3", "()", "1.2.3", "sin()", "+"] {
        assert_erreur(expr, EvalError::InvalidExpression);
    }
}

#[test]
fn prop_parenthese_non_fermee_tolere() {
    // '(' orpheline : ignorée si la structure reste complète
    assert_eq!(eval_ok("(1+2", DEG), 3.0);
    assert_eq!(eval_ok("sqrt(16", DEG), 4.0);
}

/* ------------------------ Formatage ------------------------ */

#[test]
fn prop_format() {
    assert!(format_resultat(1_000_000_000_000.0).contains('e'));
    assert_eq!(format_resultat(2.0), "2");
    assert_eq!(format_resultat(2.5), "2.5");
    assert_eq!(format_resultat(eval_ok("1/0", DEG)), "Infinity");
    assert_eq!(format_resultat(eval_ok("-1/0", DEG)), "Infinity");
}

#[test]
fn prop_aller_retour_format_eval() {
    let exprs = ["1/3", "2.5*4", "-7/8", "sqrt(2)", "123456.789", "-0.000123"];
    for expr in exprs {
        let v = eval_ok(expr, DEG);
        let affiche = format_resultat(v);

        let relu = eval_ok(&affiche, DEG);
        assert_eq!(
            format_resultat(relu),
            affiche,
            "expr={expr:?} affiché={affiche:?}"
        );
    }
}
