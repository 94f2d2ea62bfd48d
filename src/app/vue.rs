// src/app/vue.rs
//
// Vue (console) — une méthode par écran du menu
// ---------------------------------------------
// - Toutes les lectures passent par `lire` : fin d’entrée / Ctrl-C remontent en Arret::Fin
// - Erreurs utilisateur (fichier illisible, expression invalide...) : message + retour au menu
// - Aucune logique de calcul ici : noyau::evaluate_with_steps et chiffre::* seulement

use std::io::Write;

use log::warn;

use crate::chiffre::{self, Shift};
use crate::noyau::{evaluate_with_steps, format_result};

use super::console::{Console, Saisie};
use super::etat::{parse_decalage, AppCalc, Choix, Reponse, SourceTexte, Sortie};
use super::Arret;

pub const MENU: &str = "Please choose an option:\n\
                        1. Caesar Cipher Encryption\n\
                        2. Caesar Cipher Decryption\n\
                        3. Arithmetic Expression Evaluation\n\
                        4. Exit\n";

impl<C: Console> AppCalc<C> {
    fn lire(&mut self, invite: &str) -> Result<String, Arret> {
        match self.console.read_line(invite)? {
            Saisie::Ligne(l) => Ok(l),
            Saisie::Fin => Err(Arret::Fin(Sortie::Normale)),
            Saisie::Interruption => Err(Arret::Fin(Sortie::Interrompue)),
        }
    }

    /// Menu principal. `None` : choix invalide.
    pub(super) fn ui_menu(&mut self) -> Result<Option<Choix>, Arret> {
        writeln!(self.console, "{MENU}")?;
        let ligne = self.lire("Enter your choice: ")?;
        Ok(Choix::parse(&ligne))
    }

    /// Texte à traiter, depuis la console ou un fichier. `None` : message déjà affiché.
    fn lire_texte(&mut self, action: &str) -> Result<Option<String>, Arret> {
        let source = self.lire("Where is the text? (console/file): ")?;

        let texte = match SourceTexte::parse(&source) {
            Some(SourceTexte::Console) => self.lire(&format!("Enter text to {action}: "))?,
            Some(SourceTexte::Fichier) => {
                let chemin = self.lire("Enter the file path: ")?;
                match std::fs::read_to_string(chemin.trim()) {
                    Ok(t) => t,
                    Err(e) => {
                        warn!("read {:?}: {e}", chemin.trim());
                        writeln!(self.console, "Error reading file: {e}")?;
                        return Ok(None);
                    }
                }
            }
            None => {
                writeln!(self.console, "Error: unexpected text source.")?;
                return Ok(None);
            }
        };

        if texte.trim().is_empty() {
            writeln!(self.console, "Error: input text is empty.")?;
            return Ok(None);
        }
        Ok(Some(texte))
    }

    /// Redemande tant que la saisie n’est pas un entier.
    fn lire_decalage(&mut self) -> Result<i64, Arret> {
        loop {
            let ligne = self.lire("Enter shift value: ")?;
            match parse_decalage(&ligne) {
                Some(k) => return Ok(k),
                None => writeln!(
                    self.console,
                    "Invalid input. Enter an integer for the shift."
                )?,
            }
        }
    }

    pub(super) fn ui_chiffrer(&mut self) -> Result<(), Arret> {
        let Some(texte) = self.lire_texte("encrypt")? else {
            return Ok(());
        };
        let k = self.lire_decalage()?;
        let res = chiffre::encrypt(&texte, k);
        writeln!(self.console, "Result: {}", res.trim_end_matches('\n'))?;
        Ok(())
    }

    pub(super) fn ui_dechiffrer(&mut self) -> Result<(), Arret> {
        let Some(texte) = self.lire_texte("decrypt")? else {
            return Ok(());
        };
        let connu = self.lire("Is shift value known? (y/n): ")?;
        let shift = if Reponse::parse(&connu) == Reponse::Oui {
            Shift::Known(self.lire_decalage()?)
        } else {
            Shift::Unknown
        };
        let res = chiffre::decrypt(&texte, shift);
        writeln!(self.console, "Result:\n{}", res.trim_end_matches('\n'))?;
        Ok(())
    }

    pub(super) fn ui_calcul(&mut self) -> Result<(), Arret> {
        let expr = self.lire("Enter the expression: ")?;
        self.evaluations += 1;

        match evaluate_with_steps(&expr) {
            Ok((v, steps)) => {
                if self.config.show_steps {
                    writeln!(self.console, "{steps}")?;
                }
                writeln!(self.console, "{}", format_result(v))?;
            }
            Err(e) => {
                self.erreurs += 1;
                warn!("evaluate({expr:?}): {e}");
                writeln!(self.console, "Error: {e}")?;
            }
        }
        Ok(())
    }

    /// `None` : on repart au menu. `Some(..)` : fin de session.
    pub(super) fn ui_continuer(&mut self) -> Result<Option<Sortie>, Arret> {
        if !self.config.ask_continue {
            return Ok(None);
        }
        // ligne vide : on repose la question
        let ligne = loop {
            let ligne = self.lire("Continue? (y/n): ")?;
            if !ligne.trim().is_empty() {
                break ligne;
            }
        };
        match Reponse::parse(&ligne) {
            Reponse::Oui => Ok(None),
            Reponse::Non => Ok(Some(Sortie::Normale)),
            Reponse::Autre => {
                writeln!(self.console, "Error: unexpected character.")?;
                Ok(Some(Sortie::Inattendue))
            }
        }
    }
}
