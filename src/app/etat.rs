//! src/app/etat.rs
//!
//! État du menu (sans affichage, sans noyau).
//!
//! Rôle : porter la console + les réglages, et interpréter les réponses tapées
//! (choix du menu, source du texte, oui/non, décalage).
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de chiffre).
//! - Interprétation déterministe : même ligne => même décision.

use crate::config::Config;

use super::console::Console;

/// Entrée du menu principal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choix {
    Chiffrer,
    Dechiffrer,
    Calculer,
    Quitter,
}

impl Choix {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::Chiffrer),
            "2" => Some(Self::Dechiffrer),
            "3" => Some(Self::Calculer),
            "4" => Some(Self::Quitter),
            _ => None,
        }
    }
}

/// D’où vient le texte à (dé)chiffrer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceTexte {
    Console,
    Fichier,
}

impl SourceTexte {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "console" => Some(Self::Console),
            "file" => Some(Self::Fichier),
            _ => None,
        }
    }
}

/// Réponse à une question (y/n) : seul le premier caractère compte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reponse {
    Oui,
    Non,
    Autre,
}

impl Reponse {
    pub fn parse(s: &str) -> Self {
        match s.trim_start().chars().next() {
            Some('y' | 'Y') => Self::Oui,
            Some('n' | 'N') => Self::Non,
            _ => Self::Autre,
        }
    }
}

/// Décalage saisi : un entier (signé), espaces autour tolérés.
pub fn parse_decalage(s: &str) -> Option<i64> {
    s.trim().parse::<i32>().ok().map(i64::from)
}

/// Fin de session, avec le code de sortie du processus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sortie {
    /// "4. Exit", "n" à "Continue?", ou fin de l’entrée.
    Normale,
    /// Ctrl-C.
    Interrompue,
    /// Réponse inattendue à "Continue?".
    Inattendue,
}

impl Sortie {
    pub fn code(self) -> i32 {
        match self {
            Self::Normale => 0,
            Self::Interrompue => 1,
            Self::Inattendue => 2,
        }
    }
}

pub struct AppCalc<C: Console> {
    // --- entrée/sortie ---
    pub console: C,

    // --- paramètres ---
    pub config: Config,

    // --- compteurs de session (journal de fin) ---
    pub evaluations: usize,
    pub erreurs: usize,
}

impl<C: Console> AppCalc<C> {
    pub fn new(console: C, config: Config) -> Self {
        Self {
            console,
            config,
            evaluations: 0,
            erreurs: 0,
        }
    }
}
