//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'état de la calculatrice (entrée, résultat, erreur,
//! décimales, démarche, conversions) et offrir des opérations simples
//! (C/CLR/AC) sans logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Garde-fou sur le nombre de décimales affichées.

/// Décimales affichées par défaut (lecture du résultat).
const DECIMALES_DEFAUT: usize = 6;

/// Garde-fou : au-delà de 17, les décimales d'un f64 n'apportent plus rien.
const DECIMALES_MAX: usize = 17;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub tampon: String,
    pub jetons: String,
    pub note: String,
}

/// Sens de conversion du panneau bases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeConversion {
    BinVersDec,
    BinVersHex,
    DecVersBin,
    DecVersHex,
    HexVersBin,
    HexVersDec,
}

impl ModeConversion {
    pub const TOUS: [ModeConversion; 6] = [
        ModeConversion::BinVersDec,
        ModeConversion::BinVersHex,
        ModeConversion::DecVersBin,
        ModeConversion::DecVersHex,
        ModeConversion::HexVersBin,
        ModeConversion::HexVersDec,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            ModeConversion::BinVersDec => "bin → dec",
            ModeConversion::BinVersHex => "bin → hex",
            ModeConversion::DecVersBin => "dec → bin",
            ModeConversion::DecVersHex => "dec → hex",
            ModeConversion::HexVersBin => "hex → bin",
            ModeConversion::HexVersDec => "hex → dec",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // valeur formatée (ou vide)
    pub erreur: String,   // message d'erreur (si nettoyage/découpage/éval échoue)

    // --- démarche (panneau d'explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub decimales: usize,

    // --- conversions de bases ---
    pub conv_mode: ModeConversion,
    pub conv_entree: String,
    pub conv_sortie: String,
    pub conv_erreur: String,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            decimales: DECIMALES_DEFAUT,
            conv_mode: ModeConversion::DecVersBin,
            conv_entree: String::new(),
            conv_sortie: String::new(),
            conv_erreur: String::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + décimales par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.decimales = DECIMALES_DEFAUT;
        self.conv_entree.clear();
        self.conv_sortie.clear();
        self.conv_erreur.clear();
        self.focus_entree = true;
    }

    /// C : effacer seulement l'entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l'entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX : on CONSERVE `resultat` (dernier calcul réussi) pour ne pas
    /// “effacer l'écran” sur une faute ; la démarche, elle, n'est plus fiable.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur formatée + démarche).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : borne les décimales affichées.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.clamp(0, DECIMALES_MAX);
        self.focus_entree = true;
    }
}
