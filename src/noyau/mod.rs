//! Noyau de calcul flottant
//!
//! Organisation interne :
//! - erreur.rs    : taxonomie des erreurs (une variante par cause)
//! - nettoyage.rs : validation + retrait des espaces (tampon borné)
//! - jetons.rs    : découpage en jetons (ordre fixe, longest match)
//! - pile.rs      : pile bornée (pousser contrôlé, jamais de débordement)
//! - reduction.rs : machine à deux piles (précédence, unaires, parenthèses)
//! - eval.rs      : pipeline complet
//! - bases.rs     : conversions binaire / décimal / hexadécimal

pub mod bases;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod nettoyage;
pub mod pile;
pub mod reduction;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalc;
pub use eval::{evaluer, evaluer_detaille, DemarcheNoyau};
