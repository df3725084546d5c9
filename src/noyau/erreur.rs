// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
//
// Contrat :
// - Chaque échec est détecté LOCALEMENT (là où il se produit) et remonte
//   au caller comme valeur. Jamais de panique, jamais de valeur sentinelle
//   (pas d'infini “magique” qui se confondrait avec un vrai résultat).
// - Les positions sont des offsets d'octets dans le tampon SANS espaces.

use thiserror::Error;

/// Erreurs possibles lors de l'évaluation d'une expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalc {
    /// Entrée vide (ou composée uniquement d'espaces).
    #[error("entrée vide")]
    EntreeVide,

    /// L'expression (espaces retirés) dépasse la capacité du tampon de travail.
    #[error("expression trop longue ({longueur} octets, capacité {capacite})")]
    EntreeTropLongue { longueur: usize, capacite: usize },

    /// Caractère ou lexème non reconnu à la position donnée (tampon sans espaces).
    #[error("erreur de syntaxe à la position {position}")]
    ErreurSyntaxe { position: usize },

    /// Parenthèse ouvrante sans fermante, ou fermante sans ouvrante.
    #[error("parenthèses non appariées")]
    ParenthesesNonAppariees,

    /// Division par zéro.
    #[error("division par zéro")]
    DivisionParZero,

    /// Modulo par zéro.
    #[error("modulo par zéro")]
    ModuloParZero,

    /// Argument hors du domaine d'une fonction (ex: sqrt d'un négatif).
    #[error("domaine invalide : {fonction}({valeur})")]
    DomaineInvalide { fonction: &'static str, valeur: f64 },

    /// Une des deux piles a atteint sa capacité.
    /// Jamais d'écriture au-delà : on refuse, on ne tronque pas.
    #[error("pile pleine (capacité {capacite})")]
    PilePleine { capacite: usize },

    /// L'expression ne se réduit pas à exactement une valeur
    /// (opérateur sans opérande, opérandes en trop, etc.).
    #[error("expression mal formée")]
    ExpressionMalFormee,
}
