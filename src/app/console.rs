//! src/app/console.rs
//!
//! Entrée/sortie du menu : une ligne lue par invite, tout le reste écrit via `Write`.
//!
//! - ShellConsole  : terminal réel (rustyline, historique mémoire)
//! - ScriptConsole : lignes fournies d’avance + sortie capturée (tests)

use std::io::Write;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::history::MemHistory;
use rustyline::Editor;

/// Résultat d’une lecture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Saisie {
    Ligne(String),
    /// Fin de l’entrée (Ctrl-D, script épuisé).
    Fin,
    /// Ctrl-C.
    Interruption,
}

pub trait Console: Write {
    fn read_line(&mut self, prompt: &str) -> Result<Saisie>;
}

/* ------------------------ Terminal ------------------------ */

pub struct ShellConsole {
    rl: Editor<(), MemHistory>,
}

impl ShellConsole {
    pub fn new(rl: Editor<(), MemHistory>) -> Self {
        Self { rl }
    }
}

impl Write for ShellConsole {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        std::io::stdout().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stdout().flush()
    }
}

impl Console for ShellConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Saisie> {
        match self.rl.readline(prompt) {
            Ok(line) => {
                self.rl.add_history_entry(line.as_str())?;
                Ok(Saisie::Ligne(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Saisie::Interruption),
            Err(ReadlineError::Eof) => Ok(Saisie::Fin),
            Err(err) => Err(err.into()),
        }
    }
}

/* ------------------------ Script (tests) ------------------------ */

/// Ligne de script rejouée comme un Ctrl-C.
#[cfg(test)]
pub const INTERRUPTION: &str = "^C";

/// Les invites sont écrites dans la sortie capturée ; les lignes lues ne sont pas répétées.
#[cfg(test)]
#[derive(Default)]
pub struct ScriptConsole {
    lignes: std::collections::VecDeque<String>,
    sortie: Vec<u8>,
}

#[cfg(test)]
impl ScriptConsole {
    pub fn new(lignes: &[&str]) -> Self {
        Self {
            lignes: lignes.iter().map(|s| s.to_string()).collect(),
            sortie: Vec::new(),
        }
    }

    pub fn sortie(&self) -> String {
        String::from_utf8_lossy(&self.sortie).into_owned()
    }
}

#[cfg(test)]
impl Write for ScriptConsole {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.sortie.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl Console for ScriptConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Saisie> {
        self.sortie.extend_from_slice(prompt.as_bytes());
        Ok(match self.lignes.pop_front() {
            Some(l) if l == INTERRUPTION => Saisie::Interruption,
            Some(l) => Saisie::Ligne(l),
            None => Saisie::Fin,
        })
    }
}
