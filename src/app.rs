// src/app.rs
//
// Menu interactif — module App (racine)
// -------------------------------------
// Rôle:
// - Déclarer les sous-modules (console.rs + etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Boucle du menu : un tour = menu -> action -> "Continue?"

pub mod console;
pub mod etat;
pub mod vue;

pub use console::ShellConsole;
pub use etat::{AppCalc, Sortie};

use std::io::Write;

use log::info;

use console::Console;
use etat::Choix;

/// Interrompt le tour en cours : fin de session, ou vraie erreur (I/O, terminal).
enum Arret {
    Fin(Sortie),
    Erreur(anyhow::Error),
}

impl From<std::io::Error> for Arret {
    fn from(e: std::io::Error) -> Self {
        Self::Erreur(e.into())
    }
}

impl From<anyhow::Error> for Arret {
    fn from(e: anyhow::Error) -> Self {
        Self::Erreur(e)
    }
}

impl<C: Console> AppCalc<C> {
    /// Boucle jusqu’à la fin de session ; retourne la façon dont elle s’est terminée.
    pub fn run(&mut self) -> anyhow::Result<Sortie> {
        info!("session start");
        let sortie = loop {
            match self.tour() {
                Ok(None) => continue,
                Ok(Some(s)) | Err(Arret::Fin(s)) => break s,
                Err(Arret::Erreur(e)) => return Err(e),
            }
        };
        self.console.flush()?;
        info!(
            "session end: {sortie:?} ({} evaluations, {} errors)",
            self.evaluations, self.erreurs
        );
        Ok(sortie)
    }

    fn tour(&mut self) -> Result<Option<Sortie>, Arret> {
        match self.ui_menu()? {
            Some(Choix::Chiffrer) => self.ui_chiffrer()?,
            Some(Choix::Dechiffrer) => self.ui_dechiffrer()?,
            Some(Choix::Calculer) => self.ui_calcul()?,
            Some(Choix::Quitter) => {
                writeln!(self.console, "Exiting...")?;
                return Ok(Some(Sortie::Normale));
            }
            None => writeln!(self.console, "Invalid choice.")?,
        }
        self.ui_continuer()
    }
}
