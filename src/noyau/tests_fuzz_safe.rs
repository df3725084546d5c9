//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans faire chauffer la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, domaine,
//!   pile pleine, entrée trop longue…) mais JAMAIS de panique
//! - invariant clé : une expression bien formée générée ne produit jamais
//!   d'erreur de syntaxe ni de parenthèses non appariées

use std::time::{Duration, Instant};

use super::erreur::ErreurCalc;
use super::evaluer;

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions bien formées ------------------------ */

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "pi".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        3 => format!("{}", 1 + rng.pick(9)), // jamais zéro (les /0 viennent des sous-expr)
        4 => ".5".to_string(),
        _ => format!("{}", rng.pick(100)),
    }
}

fn gen_fonction(rng: &mut Rng) -> &'static str {
    match rng.pick(10) {
        0 => "sin",
        1 => "asin",
        2 => "cos",
        3 => "acos",
        4 => "tan",
        5 => "atan",
        6 => "sqrt",
        7 => "exp",
        8 => "log2",
        _ => "log",
    }
}

fn gen_binaire(rng: &mut Rng) -> char {
    match rng.pick(6) {
        0 => '+',
        1 => '-',
        2 => '*',
        3 => '/',
        4 => '%',
        _ => '^',
    }
}

fn gen_unaire(rng: &mut Rng) -> char {
    match rng.pick(4) {
        0 => '-',
        1 => '!',
        2 => '~',
        _ => '+',
    }
}

fn gen_expr(rng: &mut Rng, profondeur: usize) -> String {
    if profondeur == 0 {
        return gen_atome(rng);
    }

    match rng.pick(6) {
        0 => gen_atome(rng),
        1 => format!(
            "({}{}{})",
            gen_expr(rng, profondeur - 1),
            gen_binaire(rng),
            gen_expr(rng, profondeur - 1)
        ),
        2 => format!("{}({})", gen_fonction(rng), gen_expr(rng, profondeur - 1)),
        3 => format!("{}({})", gen_unaire(rng), gen_expr(rng, profondeur - 1)),
        4 => format!("({})", gen_expr(rng, profondeur - 1)),
        _ => format!(
            "{}{}{}",
            gen_expr(rng, profondeur - 1),
            gen_binaire(rng),
            gen_atome(rng)
        ),
    }
}

/// Erreurs *normales* pour des expressions bien formées : le domaine des
/// opérandes n'est pas contrôlé par le générateur.
fn erreur_attendue(e: &ErreurCalc) -> bool {
    matches!(
        e,
        ErreurCalc::DivisionParZero
            | ErreurCalc::ModuloParZero
            | ErreurCalc::DomaineInvalide { .. }
            | ErreurCalc::PilePleine { .. }
            | ErreurCalc::EntreeTropLongue { .. }
    )
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_expressions_bien_formees() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for tour in 0..800 {
        budget(start, max);

        let profondeur = 1 + (rng.pick(3) as usize);
        let expr = gen_expr(&mut rng, profondeur);

        match evaluer(&expr) {
            Ok(v) => {
                // NaN/inf légitimes (ex: puissance réelle), mais jamais de panique
                let _ = v;
            }
            Err(e) => assert!(
                erreur_attendue(&e),
                "tour={tour} expr={expr:?} erreur inattendue: {e:?}"
            ),
        }
    }
}

#[test]
fn fuzz_determinisme_bit_a_bit() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);

    for _ in 0..300 {
        budget(start, max);

        let expr = gen_expr(&mut rng, 2);
        let premier = evaluer(&expr);
        let second = evaluer(&expr);

        match (premier, second) {
            (Ok(a), Ok(b)) => assert_eq!(
                a.to_bits(),
                b.to_bits(),
                "expr={expr:?} : deux appels, deux valeurs"
            ),
            (Err(a), Err(b)) => assert_eq!(a, b, "expr={expr:?} : deux appels, deux erreurs"),
            (a, b) => panic!("expr={expr:?} : résultats divergents {a:?} vs {b:?}"),
        }
    }
}

#[test]
fn fuzz_soupe_de_caracteres_sans_panique() {
    // Entrées arbitraires (y compris invalides) : toujours une erreur typée
    // ou une valeur, jamais de panique ni de comportement indéfini.
    let alphabet: &[u8] = b"0123456789+-*/%^()!~.pisncotaqrlgex 2";

    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xDEAD_BEEF);

    for _ in 0..2000 {
        budget(start, max);

        let longueur = 1 + rng.pick(24) as usize;
        let soupe: String = (0..longueur)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize] as char)
            .collect();

        if rng.coin() {
            let _ = evaluer(&soupe);
        } else {
            // déterminisme aussi sur les entrées invalides
            assert_eq!(evaluer(&soupe).is_ok(), evaluer(&soupe).is_ok(), "{soupe:?}");
        }
    }
}

#[test]
fn fuzz_chaine_plate_ne_deborde_pas() {
    // Un long enchaînement plat se replie au fil de l'eau : la pile ne
    // grandit pas avec la longueur, seule la capacité du tampon borne.
    let expr = format!("1{}", "+1".repeat(100));
    assert_eq!(evaluer(&expr).unwrap(), 101.0);

    let expr = format!("2{}", "*1".repeat(100));
    assert_eq!(evaluer(&expr).unwrap(), 2.0);
}
