//! Noyau — évaluation (pipeline réel)
//!
//! nettoyage -> jetons -> machine à deux piles -> valeur finale
//!
//! Le pipeline est pur : aucun état entre deux appels, aucune E/S, temps
//! linéaire en la longueur de l'expression. Deux appels concurrents ne
//! partagent rien.

use super::erreur::ErreurCalc;
use super::jetons::{decouper, format_jetons};
use super::nettoyage::nettoyer;
use super::reduction::Machine;

/// Trace du pipeline (panneau “démarche” de l'interface).
#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub tampon: String,
    pub jetons: String,
    pub note: String,
}

/// API publique : évalue une expression infixe et rend sa valeur.
pub fn evaluer(expression: &str) -> Result<f64, ErreurCalc> {
    let tampon = nettoyer(expression)?;
    let jetons = decouper(&tampon)?;
    Machine::executer(&jetons)
}

/// Variante détaillée : même évaluation, plus la trace pour l'affichage.
pub fn evaluer_detaille(expression: &str) -> Result<(f64, DemarcheNoyau), ErreurCalc> {
    let tampon = nettoyer(expression)?;
    let jetons = decouper(&tampon)?;
    let valeur = Machine::executer(&jetons)?;

    let demarche = DemarcheNoyau {
        jetons: format_jetons(&jetons),
        tampon,
        note: "Pipeline : nettoyage → jetons → machine à deux piles → valeur.".into(),
    };

    Ok((valeur, demarche))
}
