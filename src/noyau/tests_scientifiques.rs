//! Tests scientifiques (campagne) : précédence, unaires, fonctions, erreurs.
//!
//! But : vérifier les propriétés observables du noyau, pas son découpage
//! interne.
//! - tolérance 1e-9 pour les comparaisons flottantes
//! - chaque famille d'erreur est exercée avec sa variante typée
//! - les comportements VOULUS mais non conventionnels sont testés tels quels
//!   (puissance associative à gauche, unaire plus prioritaire que ^)

use super::erreur::ErreurCalc;
use super::evaluer;
use super::nettoyage::TAMPON_MAX;
use super::pile::CAPACITE_PILE;

fn ok(expr: &str) -> f64 {
    evaluer(expr).unwrap_or_else(|e| panic!("evaluer({expr:?}) erreur: {e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = ok(expr);
    assert!(
        (v - attendu).abs() < 1e-9,
        "expr={expr:?} attendu={attendu} obtenu={v}"
    );
}

fn assert_erreur(expr: &str, attendu: ErreurCalc) {
    match evaluer(expr) {
        Err(e) => assert_eq!(e, attendu, "expr={expr:?}"),
        Ok(v) => panic!("expr={expr:?} attendu {attendu:?}, obtenu Ok({v})"),
    }
}

/* ------------------------ Précédence et associativité ------------------------ */

#[test]
fn sci_precedence_de_base() {
    assert_proche("2+3*4", 14.0);
    assert_proche("(2+3)*4", 20.0);
    assert_proche("2+3*4^2", 50.0);
    assert_proche("7%4*2", 6.0); // % et * au même niveau, gauche à droite
}

#[test]
fn sci_soustraction_associative_gauche() {
    assert_proche("10-2-3", 5.0);
    assert_proche("100/10/2", 5.0);
}

#[test]
fn sci_puissance_associative_gauche() {
    // Comportement voulu, non conventionnel : 2^3^2 = (2^3)^2 = 64.
    assert_proche("2^3^2", 64.0);
    assert_proche("2^(3^2)", 512.0);
}

/* ------------------------ Unaires ------------------------ */

#[test]
fn sci_unaire_plus_serre_que_binaire() {
    // La négation s'applique à 2 AVANT ^ : (-2)^2 = 4, pas -4.
    assert_proche("-2^2", 4.0);
    assert_proche("-(2^2)", -4.0);
}

#[test]
fn sci_unaires_logique_et_bit_a_bit() {
    assert_proche("!0", 1.0);
    assert_proche("!5", 0.0);
    assert_proche("~0", -1.0);
    assert_proche("~5", -6.0);
    assert_proche("!(3-3)", 1.0);
}

#[test]
fn sci_unaires_empiles() {
    // Chaque unaire s'applique dès que son argument est réduit : -~2 = -(-3) = 3.
    assert_proche("-~2", 3.0);
    assert_proche("--2", 2.0);
    assert_proche("!-2", 0.0);
}

#[test]
fn sci_plus_unaire_neutre() {
    assert_proche("+5", 5.0);
    assert_proche("2*+3", 6.0);
    assert_proche("+(2+3)", 5.0);
}

#[test]
fn sci_unaire_sur_groupe() {
    assert_proche("-(2+3)", -5.0);
    assert_proche("-(2+3)*2", -10.0);
    // L'unaire appliqué à la fermante lie avant le ^ qui suit.
    assert_proche("-sqrt(16)^2", 16.0);
}

/* ------------------------ Constante et fonctions ------------------------ */

#[test]
fn sci_constante_pi() {
    assert_proche("pi", std::f64::consts::PI);
    assert_proche("2*pi", 2.0 * std::f64::consts::PI);
    assert_proche("sin(pi)", 0.0);
}

#[test]
fn sci_fonctions_directes() {
    assert_proche("sqrt(16)", 4.0);
    assert_proche("sin(0)", 0.0);
    assert_proche("cos(0)", 1.0);
    assert_proche("tan(0)", 0.0);
    assert_proche("exp(0)", 1.0);
    assert_proche("log(1)", 0.0);
    assert_proche("log2(8)", 3.0);
    assert_proche("asin(1)", std::f64::consts::FRAC_PI_2);
    assert_proche("acos(1)", 0.0);
    assert_proche("atan(1)", std::f64::consts::FRAC_PI_4);
}

#[test]
fn sci_fonctions_composees() {
    assert_proche("sqrt(sin(0)^2+cos(0)^2)", 1.0);
    assert_proche("log(exp(1))", 1.0);
    assert_proche("log2(2^10)", 10.0);
    assert_proche("sin(pi/2)", 1.0);
    assert_proche("cos(pi/3)", 0.5);
}

#[test]
fn sci_fonction_sans_parentheses_heritage() {
    // Forme historique tolérée : la fonction en attente s'applique à la
    // finalisation si aucune parenthèse ne l'a fait avant.
    assert_proche("sin0", 0.0);
    assert_proche("sqrt16", 4.0);
}

#[test]
fn sci_puissance_reelle() {
    assert_proche("2^0.5", std::f64::consts::SQRT_2);
    // base négative + exposant fractionnaire : NaN admis, pas d'erreur
    assert!(ok("(-8)^(1/3)").is_nan());
}

/* ------------------------ Erreurs typées ------------------------ */

#[test]
fn sci_erreurs_arithmetiques() {
    assert_erreur("5/0", ErreurCalc::DivisionParZero);
    assert_erreur("5%0", ErreurCalc::ModuloParZero);
    assert_erreur("1/(2-2)", ErreurCalc::DivisionParZero);
}

#[test]
fn sci_erreurs_de_domaine() {
    assert_erreur(
        "sqrt(-1)",
        ErreurCalc::DomaineInvalide {
            fonction: "sqrt",
            valeur: -1.0,
        },
    );
    assert_erreur(
        "log(0)",
        ErreurCalc::DomaineInvalide {
            fonction: "log",
            valeur: 0.0,
        },
    );
    assert_erreur(
        "log2(-3)",
        ErreurCalc::DomaineInvalide {
            fonction: "log2",
            valeur: -3.0,
        },
    );
}

#[test]
fn sci_entrees_mal_formees() {
    assert_erreur("", ErreurCalc::EntreeVide);
    assert_erreur("   ", ErreurCalc::EntreeVide);
    assert_erreur("(1+2", ErreurCalc::ParenthesesNonAppariees);
    assert_erreur("1+2)", ErreurCalc::ParenthesesNonAppariees);
    assert_erreur("1+*2", ErreurCalc::ErreurSyntaxe { position: 2 });
    assert_erreur("()", ErreurCalc::ExpressionMalFormee);
    assert_erreur("1+", ErreurCalc::ExpressionMalFormee);
    assert_erreur("2pi", ErreurCalc::ExpressionMalFormee);
}

#[test]
fn sci_entree_trop_longue() {
    let long = format!("1{}", "+1".repeat(TAMPON_MAX));
    assert_erreur(
        &long,
        ErreurCalc::EntreeTropLongue {
            longueur: 2 * TAMPON_MAX + 1,
            capacite: TAMPON_MAX,
        },
    );
}

#[test]
fn sci_debordement_de_pile_controle() {
    // Plus d'ouvrantes que la capacité : refus net, jamais de corruption.
    let profond = format!("{}1{}", "(".repeat(40), ")".repeat(40));
    assert_erreur(
        &profond,
        ErreurCalc::PilePleine {
            capacite: CAPACITE_PILE,
        },
    );

    // Variante mixte (binaires + ouvrantes en attente) : même refus.
    let imbrique = format!("{}1{}", "1+(".repeat(40), ")".repeat(40));
    match evaluer(&imbrique) {
        Err(ErreurCalc::PilePleine { .. }) => {}
        autre => panic!("attendu PilePleine, obtenu {autre:?}"),
    }
}

#[test]
fn sci_profondeur_raisonnable_passe() {
    // Sous la capacité, l'imbrication est acceptée.
    let expr = format!("{}1{}", "(".repeat(CAPACITE_PILE - 1), ")".repeat(CAPACITE_PILE - 1));
    assert_proche(&expr, 1.0);
}

/* ------------------------ Pureté ------------------------ */

#[test]
fn sci_purete_et_determinisme() {
    let exprs = ["2+3*4", "sin(pi/4)", "-2^2", "sqrt(2)/2", "7%3"];

    for expr in exprs {
        let premier = ok(expr);
        for _ in 0..10 {
            let suivant = ok(expr);
            assert_eq!(
                premier.to_bits(),
                suivant.to_bits(),
                "expr={expr:?} non déterministe"
            );
        }
    }
}

#[test]
fn sci_espaces_insignifiants() {
    assert_proche("  2   +    3  ", 5.0);
    assert_proche("s i n ( p i )", 0.0); // les espaces tombent AVANT le découpage
    assert_eq!(ok("2+3"), ok(" 2 + 3 "));
}
