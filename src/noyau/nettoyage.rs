// src/noyau/nettoyage.rs
//
// Nettoyage de l'entrée brute.
//
// Rôle : produire le tampon de travail du découpeur, c'est-à-dire la même
// expression SANS espaces (ordre relatif préservé), bornée en taille.
//
// Contrats :
// - entrée vide (ou que des espaces)            => EntreeVide
// - longueur nettoyée > TAMPON_MAX              => EntreeTropLongue (on refuse,
//   on ne tronque jamais en silence)
// - sinon                                       => copie sans espaces

use super::erreur::ErreurCalc;

/// Capacité du tampon de travail, en octets (expression sans espaces).
pub const TAMPON_MAX: usize = 256;

/// Copie `brut` en retirant tous les espaces (au sens Unicode).
pub fn nettoyer(brut: &str) -> Result<String, ErreurCalc> {
    if brut.is_empty() {
        return Err(ErreurCalc::EntreeVide);
    }

    let longueur: usize = brut
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(char::len_utf8)
        .sum();

    if longueur == 0 {
        return Err(ErreurCalc::EntreeVide);
    }

    if longueur > TAMPON_MAX {
        return Err(ErreurCalc::EntreeTropLongue {
            longueur,
            capacite: TAMPON_MAX,
        });
    }

    Ok(brut.chars().filter(|c| !c.is_whitespace()).collect())
}
