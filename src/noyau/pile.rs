// src/noyau/pile.rs
//
// Pile bornée (LIFO).
//
// Contrat :
// - capacité fixée à la construction, JAMAIS d'écriture au-delà :
//   pousser() échoue avec PilePleine au lieu de déborder ou de tronquer.
// - dépiler sous zéro est impossible par construction (Option).

use super::erreur::ErreurCalc;

/// Capacité des piles de la machine d'évaluation (valeurs et opérations).
pub const CAPACITE_PILE: usize = 32;

#[derive(Debug)]
pub struct Pile<T> {
    elements: Vec<T>,
    capacite: usize,
}

impl<T> Pile<T> {
    pub fn bornee(capacite: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacite),
            capacite,
        }
    }

    /// Empile `valeur`, ou échoue avec PilePleine si la capacité est atteinte.
    pub fn pousser(&mut self, valeur: T) -> Result<(), ErreurCalc> {
        if self.elements.len() >= self.capacite {
            return Err(ErreurCalc::PilePleine {
                capacite: self.capacite,
            });
        }
        self.elements.push(valeur);
        Ok(())
    }

    pub fn depiler(&mut self) -> Option<T> {
        self.elements.pop()
    }

    pub fn sommet(&self) -> Option<&T> {
        self.elements.last()
    }

    pub fn longueur(&self) -> usize {
        self.elements.len()
    }

    pub fn est_vide(&self) -> bool {
        self.elements.is_empty()
    }
}
