// src/main.rs
//
// Calcul & César — point d’entrée console
// ---------------------------------------
// - Sans --expr : menu interactif (chiffrer / déchiffrer / calculer)
// - Avec --expr : une seule évaluation, résultat sur stdout, code 1 si erreur
// - Journal sur stderr (RUST_LOG, ou -v / -vv / -vvv)

#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;
use rustyline::history::MemHistory;
use rustyline::Editor;

mod app;
mod chiffre;
mod config;
mod noyau;

use app::{AppCalc, ShellConsole, Sortie};
use config::Config;
use noyau::CalcError;

/// Caesar cipher and arithmetic expression evaluator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Evaluate one expression and exit instead of opening the menu.
    #[arg(short, long)]
    expr: Option<String>,

    /// Print the token and postfix sequences before each result.
    #[arg(long)]
    show_steps: bool,

    /// More logging on stderr (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Une évaluation hors menu : le texte à afficher, démarche comprise si demandée.
fn calcul_unique(expr: &str, show_steps: bool) -> Result<String, CalcError> {
    if !show_steps {
        return noyau::evaluate(expr).map(noyau::format_result);
    }
    let (v, steps) = noyau::evaluate_with_steps(expr)?;
    Ok(format!("{steps}\n{}", noyau::format_result(v)))
}

/// Filtre de journal par défaut selon le nombre de `-v`.
fn niveau_journal(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let env = env_logger::Env::default().default_filter_or(niveau_journal(args.verbose));
    env_logger::init_from_env(env);

    let mut config = match &args.config {
        Some(path) => config::load_config_file(path)?,
        None => Config::default(),
    };
    if args.show_steps {
        config.show_steps = true;
    }
    info!("config: {config:?}");

    // Mode une-seule-expression
    if let Some(expr) = &args.expr {
        match calcul_unique(expr, config.show_steps) {
            Ok(texte) => {
                println!("{texte}");
                return Ok(());
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    // Menu interactif
    let editeur = rustyline::Config::builder()
        .max_history_size(config.history_size)?
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .build();
    let rl: Editor<(), MemHistory> = Editor::with_history(editeur, MemHistory::new())?;

    let mut app = AppCalc::new(ShellConsole::new(rl), config);
    let sortie = app.run()?;
    if sortie != Sortie::Normale {
        std::process::exit(sortie.code());
    }
    Ok(())
}
