// src/noyau/jetons.rs
//
// Découpage en jetons (sur le tampon SANS espaces produit par nettoyage.rs).
//
// Chaque position est classée dans EXACTEMENT une catégorie, testée dans cet
// ordre fixe (le premier qui matche gagne, certaines catégories partagent des
// caractères) :
//   1. opérateur unaire préfixe (+ - ! ~), seulement en “contexte valeur”
//   2. constante nommée (pi)
//   3. littéral numérique
//   4. mot-clé fonction (table triée du plus long au plus court : log2 avant log)
//   5. parenthèse ouvrante
//   6. parenthèse fermante
//   7. opérateur binaire (+ - * / % ^)
// Sinon : ErreurSyntaxe à l'offset fautif.
//
// Notes :
// - Le `+` unaire est consommé et jeté (neutre).
// - Un `* / % ^` rencontré en contexte valeur n'a pas d'opérande gauche
//   possible : ErreurSyntaxe immédiate (ex: "1+*2" échoue sur le '*').

use super::erreur::ErreurCalc;

/// Opérateur binaire (deux opérandes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Plus,
    Moins,
    Fois,
    Division,
    Modulo,
    Puissance,
}

impl OpBinaire {
    fn depuis_octet(c: u8) -> Option<Self> {
        match c {
            b'+' => Some(OpBinaire::Plus),
            b'-' => Some(OpBinaire::Moins),
            b'*' => Some(OpBinaire::Fois),
            b'/' => Some(OpBinaire::Division),
            b'%' => Some(OpBinaire::Modulo),
            b'^' => Some(OpBinaire::Puissance),
            _ => None,
        }
    }

    /// Table de précédence : ^ = 4, * / % = 3, + - = 2.
    pub fn precedence(self) -> u8 {
        match self {
            OpBinaire::Puissance => 4,
            OpBinaire::Fois | OpBinaire::Division | OpBinaire::Modulo => 3,
            OpBinaire::Plus | OpBinaire::Moins => 2,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            OpBinaire::Plus => '+',
            OpBinaire::Moins => '-',
            OpBinaire::Fois => '*',
            OpBinaire::Division => '/',
            OpBinaire::Modulo => '%',
            OpBinaire::Puissance => '^',
        }
    }
}

/// Opérateur unaire préfixe (le `+` unaire n'existe pas ici : il est jeté).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpUnaire {
    Negation,   // -
    NonLogique, // !
    NonBinaire, // ~
}

impl OpUnaire {
    pub fn symbole(self) -> char {
        match self {
            OpUnaire::Negation => '-',
            OpUnaire::NonLogique => '!',
            OpUnaire::NonBinaire => '~',
        }
    }
}

/// Fonction unaire nommée.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Asin,
    Cos,
    Acos,
    Tan,
    Atan,
    Sqrt,
    Exp,
    Log2,
    Log,
}

impl Fonction {
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Asin => "asin",
            Fonction::Cos => "cos",
            Fonction::Acos => "acos",
            Fonction::Tan => "tan",
            Fonction::Atan => "atan",
            Fonction::Sqrt => "sqrt",
            Fonction::Exp => "exp",
            Fonction::Log2 => "log2",
            Fonction::Log => "log",
        }
    }
}

/// Jeton produit par le découpeur.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Pi,
    Unaire(OpUnaire),
    Fonction(Fonction),
    Binaire(OpBinaire),
    ParOuvrante,
    ParFermante,
}

/// Mots-clés fonctions, triés du plus long au plus court.
/// IMPORTANT : "log2" doit précéder "log" (préfixe commun).
const TABLE_FONCTIONS: [(&str, Fonction); 10] = [
    ("asin", Fonction::Asin),
    ("acos", Fonction::Acos),
    ("atan", Fonction::Atan),
    ("sqrt", Fonction::Sqrt),
    ("log2", Fonction::Log2),
    ("sin", Fonction::Sin),
    ("cos", Fonction::Cos),
    ("tan", Fonction::Tan),
    ("exp", Fonction::Exp),
    ("log", Fonction::Log),
];

/// Un opérateur est unaire si :
/// 1. il est au tout début de l'expression, ou
/// 2. le caractère précédent est un opérateur ou une parenthèse ouvrante.
fn contexte_valeur(octets: &[u8], i: usize) -> bool {
    if i == 0 {
        return true;
    }

    matches!(
        octets[i - 1],
        b'!' | b'%' | b'(' | b'*' | b'+' | b'-' | b'/' | b'^' | b'~'
    )
}

/// Littéral numérique : suite maximale de chiffres avec au plus un point.
/// Un point isolé ("." sans chiffre) est une erreur de syntaxe.
fn lire_nombre(tampon: &str, debut: usize) -> Result<(f64, usize), ErreurCalc> {
    let octets = tampon.as_bytes();
    let mut fin = debut;
    let mut point_vu = false;

    while fin < octets.len() {
        match octets[fin] {
            b'0'..=b'9' => fin += 1,
            b'.' if !point_vu => {
                point_vu = true;
                fin += 1;
            }
            _ => break,
        }
    }

    let valeur: f64 = tampon[debut..fin]
        .parse()
        .map_err(|_| ErreurCalc::ErreurSyntaxe { position: debut })?;

    Ok((valeur, fin))
}

/// Découpe le tampon (sans espaces) en jetons.
pub fn decouper(tampon: &str) -> Result<Vec<Jeton>, ErreurCalc> {
    let octets = tampon.as_bytes();
    let mut jetons: Vec<Jeton> = Vec::new();
    let mut i: usize = 0;

    while i < octets.len() {
        let c = octets[i];

        // 1) Unaire préfixe (seulement en contexte valeur)
        if contexte_valeur(octets, i) {
            match c {
                b'+' => {
                    // `+` unaire : neutre, consommé et jeté
                    i += 1;
                    continue;
                }
                b'-' => {
                    jetons.push(Jeton::Unaire(OpUnaire::Negation));
                    i += 1;
                    continue;
                }
                b'!' => {
                    jetons.push(Jeton::Unaire(OpUnaire::NonLogique));
                    i += 1;
                    continue;
                }
                b'~' => {
                    jetons.push(Jeton::Unaire(OpUnaire::NonBinaire));
                    i += 1;
                    continue;
                }
                _ => {}
            }
        }

        // 2) Constante nommée
        // (le README historique annonçait aussi `e`, jamais reconnue ; on
        //  n'ajoute pas : `e` rendrait `exp` ambigu — choix documenté dans
        //  DESIGN.md)
        if tampon[i..].starts_with("pi") {
            jetons.push(Jeton::Pi);
            i += 2;
            continue;
        }

        // 3) Littéral numérique
        if c.is_ascii_digit() || c == b'.' {
            let (valeur, fin) = lire_nombre(tampon, i)?;
            jetons.push(Jeton::Nombre(valeur));
            i = fin;
            continue;
        }

        // 4) Mot-clé fonction (longest match : log2 avant log)
        if let Some((nom, f)) = TABLE_FONCTIONS
            .iter()
            .find(|(nom, _)| tampon[i..].starts_with(nom))
        {
            jetons.push(Jeton::Fonction(*f));
            i += nom.len();
            continue;
        }

        // 5) Parenthèse ouvrante
        if c == b'(' {
            jetons.push(Jeton::ParOuvrante);
            i += 1;
            continue;
        }

        // 6) Parenthèse fermante
        if c == b')' {
            jetons.push(Jeton::ParFermante);
            i += 1;
            continue;
        }

        // 7) Opérateur binaire
        if let Some(op) = OpBinaire::depuis_octet(c) {
            // En contexte valeur, seuls + - ! ~ sont légaux (traités en 1) :
            // un binaire ici n'a pas d'opérande gauche (ex: "1+*2").
            if contexte_valeur(octets, i) {
                return Err(ErreurCalc::ErreurSyntaxe { position: i });
            }
            jetons.push(Jeton::Binaire(op));
            i += 1;
            continue;
        }

        return Err(ErreurCalc::ErreurSyntaxe { position: i });
    }

    Ok(jetons)
}

/// Format utilitaire (panneau “démarche”) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out: Vec<String> = Vec::with_capacity(jetons.len());

    for j in jetons {
        let s = match j {
            Jeton::Nombre(v) => format!("{v}"),
            Jeton::Pi => "pi".to_string(),
            Jeton::Unaire(u) => format!("u{}", u.symbole()),
            Jeton::Fonction(f) => f.nom().to_string(),
            Jeton::Binaire(op) => op.symbole().to_string(),
            Jeton::ParOuvrante => "(".to_string(),
            Jeton::ParFermante => ")".to_string(),
        };
        out.push(s);
    }

    out.join(" ")
}
