// src/noyau/jetons.rs

/// Opérateurs binaires reconnus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
}

impl Op {
    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Caret => '^',
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Suite de chiffres/points illisible (ex: "1.2.3").
    // Pas d’erreur ici : la RPN l’ignore, l’évaluation échouera.
    NumMalforme(String),

    Op(Op),

    // '-' réécrit en "0 -" (début, après '(' ou après un opérateur).
    // S’évalue comme Op::Minus, mais lie plus fort que '^' dans la RPN.
    MoinsUnaire,

    LPar,
    RPar,

    // Nom de fonction candidat (normalisé en minuscules).
    Ident(String),
}

impl Tok {
    /// Vrai si un '-' qui suit ce jeton doit être lu comme moins unaire.
    fn attend_operande(&self) -> bool {
        matches!(self, Tok::LPar | Tok::Op(_) | Tok::MoinsUnaire)
    }
}

/// Tokenize une chaîne en jetons.
/// Ne refuse rien :
/// - nombres décimaux (12, 3.5, .5) ; un point de trop donne NumMalforme
/// - opérateurs + - * / ^ ; glyphes × et x (multiplication), ÷ (division)
/// - parenthèses ( )
/// - identifiants [a-zA-Z]+ (normalisés en minuscules)
/// - tout le reste (espaces, symboles inconnus) est sauté
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Nombre : chiffre, ou '.' suivi d’un chiffre ; lecture gloutonne.
        let debut_nombre = c.is_ascii_digit()
            || (c == '.' && chars.get(i + 1).is_some_and(|d| d.is_ascii_digit()));
        if debut_nombre {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            out.push(lire_nombre(texte));
            continue;
        }

        // Identifiants ASCII : [a-zA-Z]+
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let w = word.to_lowercase();

            // "x" seul = touche multiplier
            if w == "x" {
                out.push(Tok::Op(Op::Star));
            } else {
                out.push(Tok::Ident(w));
            }
            continue;
        }

        i += 1;

        let tok = match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            '+' => Tok::Op(Op::Plus),
            '*' | '×' => Tok::Op(Op::Star),
            '/' | '÷' => Tok::Op(Op::Slash),
            '^' => Tok::Op(Op::Caret),
            '-' => {
                let unaire = out.last().is_none_or(Tok::attend_operande);
                if unaire {
                    out.push(Tok::Num(0.0));
                    Tok::MoinsUnaire
                } else {
                    Tok::Op(Op::Minus)
                }
            }
            _ => continue,
        };
        out.push(tok);
    }

    out
}

fn lire_nombre(texte: String) -> Tok {
    if texte.matches('.').count() > 1 {
        return Tok::NumMalforme(texte);
    }
    match texte.parse::<f64>() {
        Ok(v) => Tok::Num(v),
        Err(_) => Tok::NumMalforme(texte),
    }
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::NumMalforme(texte) => format!("{texte}?"),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::MoinsUnaire => "-".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Ident(name) => name.clone(),
        };
        out.push(s);
    }
    out.join(" ")
}
