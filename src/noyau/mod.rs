//! Noyau : évaluateur d’expressions arithmétiques
//!
//! Organisation interne :
//! - erreur.rs   : les cinq sortes d’échec
//! - jetons.rs   : tokenisation (moins unaire compris)
//! - rpn.rs      : shunting-yard -> postfix
//! - eval.rs     : pile numérique + pipeline complet
//!
//! Fonctions pures, sans I/O : le menu (app) n’est qu’un appelant.

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::CalcError;
pub use eval::{evaluate, evaluate_with_steps, format_result, Steps};
