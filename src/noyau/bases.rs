// src/noyau/bases.rs
//
// Conversions de bases (binaire / décimal / hexadécimal).
//
// Six conversions indépendantes, texte -> texte, sur des entiers non signés
// 64 bits. Jamais invoquées par l'évaluateur.
//
// Règles d'affichage :
// - sorties binaires : complétées de zéros en tête jusqu'à un multiple de 8
// - dec -> hex : complété jusqu'à un multiple de 4, hex en MAJUSCULES
// - bin -> hex et les sorties décimales : sans complément

use thiserror::Error;

/// Erreurs des conversions de bases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurBase {
    #[error("entrée vide")]
    EntreeVide,

    #[error("chiffre invalide pour la base {base} : '{caractere}'")]
    ChiffreInvalide { base: u32, caractere: char },

    #[error("valeur trop grande pour 64 bits")]
    Depassement,
}

/// Lit un entier non signé dans la base donnée (espaces de bord tolérés).
fn lire_entier(texte: &str, base: u32) -> Result<u64, ErreurBase> {
    let texte = texte.trim();
    if texte.is_empty() {
        return Err(ErreurBase::EntreeVide);
    }

    let mut valeur: u64 = 0;
    for caractere in texte.chars() {
        let chiffre = caractere
            .to_digit(base)
            .ok_or(ErreurBase::ChiffreInvalide { base, caractere })?;

        valeur = valeur
            .checked_mul(u64::from(base))
            .and_then(|v| v.checked_add(u64::from(chiffre)))
            .ok_or(ErreurBase::Depassement)?;
    }

    Ok(valeur)
}

/// Binaire, zéros en tête jusqu'à l'octet entier (8, 16, 24… chiffres).
fn en_binaire(valeur: u64) -> String {
    let bits = if valeur == 0 {
        1
    } else {
        64 - valeur.leading_zeros() as usize
    };
    let largeur = bits.div_ceil(8) * 8;

    format!("{valeur:0largeur$b}")
}

/// Hexadécimal MAJUSCULES, zéros en tête jusqu'au multiple de 4 chiffres.
fn en_hexadecimal(valeur: u64) -> String {
    let brut = format!("{valeur:X}");
    let largeur = brut.len().div_ceil(4) * 4;

    format!("{valeur:0largeur$X}")
}

pub fn bin_vers_dec(texte: &str) -> Result<String, ErreurBase> {
    Ok(lire_entier(texte, 2)?.to_string())
}

pub fn bin_vers_hex(texte: &str) -> Result<String, ErreurBase> {
    Ok(format!("{:X}", lire_entier(texte, 2)?))
}

pub fn dec_vers_bin(texte: &str) -> Result<String, ErreurBase> {
    Ok(en_binaire(lire_entier(texte, 10)?))
}

pub fn dec_vers_hex(texte: &str) -> Result<String, ErreurBase> {
    Ok(en_hexadecimal(lire_entier(texte, 10)?))
}

pub fn hex_vers_bin(texte: &str) -> Result<String, ErreurBase> {
    Ok(en_binaire(lire_entier(texte, 16)?))
}

pub fn hex_vers_dec(texte: &str) -> Result<String, ErreurBase> {
    Ok(lire_entier(texte, 16)?.to_string())
}
