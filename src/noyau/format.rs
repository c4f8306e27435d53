// src/noyau/format.rs
//
// Affichage d’un résultat f64 (total, jamais d’erreur)
// - ±Infinity           -> "Infinity" (signe perdu, choix d’affichage)
// - |v| >= 1e12         -> exponentiel, 8 décimales ("1.00000000e+12")
// - 0 < |v| < 1e-6      -> exponentiel, 8 décimales ("1.50000000e-7")
// - entier              -> sans point
// - sinon               -> 10 décimales max, zéros finaux retirés

/// Seuil haut de la notation exponentielle.
const SEUIL_GRAND: f64 = 1e12;

/// Seuil bas (valeurs non nulles plus petites en valeur absolue).
const SEUIL_PETIT: f64 = 1e-6;

pub fn format_resultat(v: f64) -> String {
    if v.is_infinite() {
        return "Infinity".to_string();
    }
    if v.is_nan() {
        return "NaN".to_string();
    }

    let a = v.abs();
    if a >= SEUIL_GRAND || (a > 0.0 && a < SEUIL_PETIT) {
        return format_exponentiel(v);
    }

    // -0 s’affiche "0"
    if v == 0.0 {
        return "0".to_string();
    }

    if v.fract() == 0.0 {
        return format!("{v}");
    }

    let mut s = format!("{v:.10}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Rust écrit "1.5e12" / "1.5e-7" ; on force le signe de l’exposant.
fn format_exponentiel(v: f64) -> String {
    let s = format!("{v:.8e}");
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}
