// src/noyau/reduction.rs
//
// Machine à deux piles : réduction sans arbre de syntaxe.
//
// Une pile de valeurs (f64) + une pile d'opérations en attente. La sémantique
// d'évaluation vit ici :
// - pliage binaire par précédence (^ = 4 ; * / % = 3 ; + - = 2), de gauche à
//   droite à précédence égale — Y COMPRIS pour ^ : la puissance est
//   ASSOCIATIVE À GAUCHE (2^3^2 = (2^3)^2 = 64), comportement voulu.
// - application “gourmande” des unaires : dès qu'un atome est posé, les
//   opérateurs unaires en sommet de pile s'appliquent immédiatement (c'est ce
//   qui fait -2^2 = 4). Les FONCTIONS, elles, attendent leur parenthèse
//   fermante.
// - fermeture de parenthèse : on replie jusqu'à l'ouvrante, puis on applique
//   les unaires/fonctions en attente au sous-résultat entier (c'est ce qui
//   fait -(…) et sqrt(…)).
//
// Politique d'erreur : échec immédiat. Une division par zéro, un modulo par
// zéro ou un argument hors domaine interrompt l'évaluation et remonte
// l'erreur ; aucune valeur sentinelle n'entre jamais dans la pile.

use super::erreur::ErreurCalc;
use super::jetons::{Fonction, Jeton, OpBinaire, OpUnaire};
use super::pile::{Pile, CAPACITE_PILE};

/// Entrée de la pile d'opérations en attente.
#[derive(Clone, Copy, Debug, PartialEq)]
enum EnAttente {
    Binaire(OpBinaire),
    Unaire(OpUnaire),
    Fonction(Fonction),
    ParOuvrante,
}

/// Applique un opérateur binaire. Échec immédiat sur /0 et %0.
/// `%` est le reste flottant (signe du dividende). `^` est la puissance
/// réelle : base négative + exposant fractionnaire donne NaN, non gardé.
pub fn appliquer_binaire(a: f64, b: f64, op: OpBinaire) -> Result<f64, ErreurCalc> {
    match op {
        OpBinaire::Plus => Ok(a + b),
        OpBinaire::Moins => Ok(a - b),
        OpBinaire::Fois => Ok(a * b),
        OpBinaire::Division => {
            if b == 0.0 {
                return Err(ErreurCalc::DivisionParZero);
            }
            Ok(a / b)
        }
        OpBinaire::Modulo => {
            if b == 0.0 {
                return Err(ErreurCalc::ModuloParZero);
            }
            Ok(a % b)
        }
        OpBinaire::Puissance => Ok(a.powf(b)),
    }
}

/// Applique un opérateur unaire.
/// - Negation : négation arithmétique
/// - NonLogique : NON logique (0.0 ou 1.0 selon la “vérité” de l'opérande)
/// - NonBinaire : troncature entière (i64), complément bit à bit, retour en f64
pub fn appliquer_unaire(op: OpUnaire, x: f64) -> f64 {
    match op {
        OpUnaire::Negation => -x,
        OpUnaire::NonLogique => {
            if x == 0.0 {
                1.0
            } else {
                0.0
            }
        }
        OpUnaire::NonBinaire => !(x as i64) as f64,
    }
}

/// Applique une fonction unaire. Les contrôles de domaine échouent
/// immédiatement (sqrt d'un négatif, log d'un non-positif).
pub fn appliquer_fonction(f: Fonction, x: f64) -> Result<f64, ErreurCalc> {
    match f {
        Fonction::Sin => Ok(x.sin()),
        Fonction::Asin => Ok(x.asin()),
        Fonction::Cos => Ok(x.cos()),
        Fonction::Acos => Ok(x.acos()),
        Fonction::Tan => Ok(x.tan()),
        Fonction::Atan => Ok(x.atan()),
        Fonction::Exp => Ok(x.exp()),
        Fonction::Sqrt => {
            if x < 0.0 {
                return Err(ErreurCalc::DomaineInvalide {
                    fonction: f.nom(),
                    valeur: x,
                });
            }
            Ok(x.sqrt())
        }
        Fonction::Log | Fonction::Log2 => {
            if x <= 0.0 {
                return Err(ErreurCalc::DomaineInvalide {
                    fonction: f.nom(),
                    valeur: x,
                });
            }
            match f {
                Fonction::Log => Ok(x.ln()),
                _ => Ok(x.log2()),
            }
        }
    }
}

/// Machine d'évaluation. Créée à l'entrée de l'appel, jetée à la sortie :
/// aucun état partagé entre deux évaluations.
pub struct Machine {
    valeurs: Pile<f64>,
    operations: Pile<EnAttente>,
}

impl Machine {
    fn nouvelle() -> Self {
        Self {
            valeurs: Pile::bornee(CAPACITE_PILE),
            operations: Pile::bornee(CAPACITE_PILE),
        }
    }

    /// Exécute le flux de jetons et rend l'unique valeur finale.
    pub fn executer(jetons: &[Jeton]) -> Result<f64, ErreurCalc> {
        let mut machine = Machine::nouvelle();

        for jeton in jetons {
            match *jeton {
                Jeton::Nombre(v) => machine.deposer_valeur(v)?,
                Jeton::Pi => machine.deposer_valeur(std::f64::consts::PI)?,
                Jeton::Unaire(u) => machine.operations.pousser(EnAttente::Unaire(u))?,
                Jeton::Fonction(f) => machine.operations.pousser(EnAttente::Fonction(f))?,
                Jeton::Binaire(op) => machine.plier_binaire(op)?,
                Jeton::ParOuvrante => machine.operations.pousser(EnAttente::ParOuvrante)?,
                Jeton::ParFermante => machine.fermer_parenthese()?,
            }
        }

        machine.finaliser()
    }

    fn depiler_valeur(&mut self) -> Result<f64, ErreurCalc> {
        // Dépiler sous zéro = opérateur sans opérande : expression mal formée,
        // jamais un comportement indéfini.
        self.valeurs
            .depiler()
            .ok_or(ErreurCalc::ExpressionMalFormee)
    }

    /// Pose un atome (nombre ou constante) sur la pile de valeurs, après
    /// application gourmande des opérateurs unaires en attente.
    /// Les fonctions ne s'appliquent PAS ici : elles attendent leur `)`.
    fn deposer_valeur(&mut self, valeur: f64) -> Result<(), ErreurCalc> {
        let mut v = valeur;

        while let Some(EnAttente::Unaire(u)) = self.operations.sommet() {
            v = appliquer_unaire(*u, v);
            self.operations.depiler();
        }

        self.valeurs.pousser(v)
    }

    /// Protocole de pliage binaire : replie tant que le sommet est un binaire
    /// de précédence ≥ celle de l'opérateur entrant, puis empile ce dernier.
    fn plier_binaire(&mut self, op: OpBinaire) -> Result<(), ErreurCalc> {
        while let Some(EnAttente::Binaire(sommet)) = self.operations.sommet() {
            if sommet.precedence() < op.precedence() {
                break;
            }

            let sommet = *sommet;
            self.operations.depiler();

            let b = self.depiler_valeur()?;
            let a = self.depiler_valeur()?;
            self.valeurs.pousser(appliquer_binaire(a, b, sommet)?)?;
        }

        self.operations.pousser(EnAttente::Binaire(op))
    }

    /// Applique l'entrée au sommet de la pile d'opérations (pliage générique,
    /// utilisé à la fermeture de parenthèse et à la finalisation).
    fn appliquer_sommet(&mut self) -> Result<(), ErreurCalc> {
        let op = self
            .operations
            .depiler()
            .ok_or(ErreurCalc::ExpressionMalFormee)?;

        match op {
            EnAttente::Unaire(u) => {
                let x = self.depiler_valeur()?;
                self.valeurs.pousser(appliquer_unaire(u, x))
            }
            EnAttente::Fonction(f) => {
                let x = self.depiler_valeur()?;
                self.valeurs.pousser(appliquer_fonction(f, x)?)
            }
            EnAttente::Binaire(op) => {
                let b = self.depiler_valeur()?;
                let a = self.depiler_valeur()?;
                self.valeurs.pousser(appliquer_binaire(a, b, op)?)
            }
            EnAttente::ParOuvrante => Err(ErreurCalc::ParenthesesNonAppariees),
        }
    }

    /// Protocole de fermeture : replie jusqu'à l'ouvrante (pile vide avant =>
    /// parenthèses non appariées), retire le marqueur, puis applique au
    /// sous-résultat les unaires et fonctions en attente. La boucle s'arrête
    /// d'elle-même sur une ouvrante ou un binaire : une fonction plus profonde
    /// est toujours séparée par sa propre ouvrante.
    fn fermer_parenthese(&mut self) -> Result<(), ErreurCalc> {
        loop {
            match self.operations.sommet() {
                None => return Err(ErreurCalc::ParenthesesNonAppariees),
                Some(EnAttente::ParOuvrante) => {
                    self.operations.depiler();
                    break;
                }
                Some(_) => self.appliquer_sommet()?,
            }
        }

        let mut v = self.depiler_valeur()?;

        loop {
            match self.operations.sommet() {
                Some(EnAttente::Unaire(u)) => {
                    v = appliquer_unaire(*u, v);
                    self.operations.depiler();
                }
                Some(EnAttente::Fonction(f)) => {
                    v = appliquer_fonction(*f, v)?;
                    self.operations.depiler();
                }
                _ => break,
            }
        }

        self.valeurs.pousser(v)
    }

    /// Fin d'entrée : draine les opérations en attente, puis exige EXACTEMENT
    /// une valeur sur la pile.
    fn finaliser(mut self) -> Result<f64, ErreurCalc> {
        while let Some(sommet) = self.operations.sommet() {
            if matches!(sommet, EnAttente::ParOuvrante) {
                return Err(ErreurCalc::ParenthesesNonAppariees);
            }
            self.appliquer_sommet()?;
        }

        if self.valeurs.longueur() != 1 {
            return Err(ErreurCalc::ExpressionMalFormee);
        }

        self.depiler_valeur()
    }
}
