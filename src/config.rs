//! Chargement des réglages depuis un fichier TOML (toutes les clés sont optionnelles).
//!
//! ```toml
//! ask_continue = true   # "Continue? (y/n)" après chaque action
//! show_steps = false    # affiche jetons + RPN avant le résultat
//! history_size = 100    # historique mémoire de l’éditeur de ligne
//! ```
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub ask_continue: bool,
    pub show_steps: bool,
    pub history_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ask_continue: true,
            show_steps: false,
            history_size: 100,
        }
    }
}

pub fn load_config_str(config: &str) -> Result<Config> {
    let c: Config = toml::from_str(config)?;
    Ok(c)
}

pub fn load_config_file(path: &Path) -> Result<Config> {
    let texte = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    load_config_str(&texte).with_context(|| format!("invalid config file {}", path.display()))
}
