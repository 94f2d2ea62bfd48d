//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile numérique -> valeur
//!
//! Aucun état entre deux appels : jetons, piles et sortie vivent le temps de l’appel.
//! La première erreur rencontrée remonte telle quelle (tout ou rien).

use std::fmt;

use log::debug;
use num_traits::Zero;

use super::erreur::CalcError;
use super::jetons::{format_tokens, tokenize, Token, TokenKind};
use super::rpn::to_postfix;

/// Démarche : les étapes intermédiaires, déjà mises en texte.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Steps {
    pub tokens: String,
    pub postfix: String,
}

/// Deux lignes : `Tokens:  ...` puis `Postfix: ...` (sans saut de ligne final).
impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tokens:  {}\nPostfix: {}", self.tokens, self.postfix)
    }
}

/// Applique `gauche op droite`. `/` refuse un diviseur nul (pas d’infini, pas de NaN).
fn applique(op: &str, gauche: f64, droite: f64) -> Result<f64, CalcError> {
    match op {
        "+" => Ok(gauche + droite),
        "-" => Ok(gauche - droite),
        "*" => Ok(gauche * droite),
        "/" => {
            if droite.is_zero() {
                return Err(CalcError::DivisionByZero);
            }
            Ok(gauche / droite)
        }
        _ => Err(CalcError::MalformedExpression),
    }
}

/// Évalue une suite RPN avec sa propre pile de valeurs.
///
/// Opérateur : dépile `droite` puis `gauche` (la droite a été empilée en dernier).
/// À la fin, exactement une valeur doit rester, sinon MalformedExpression.
pub fn evaluate_postfix(tokens: &[Token]) -> Result<f64, CalcError> {
    let mut pile: Vec<f64> = Vec::with_capacity(tokens.len());

    for tok in tokens {
        match tok.kind() {
            TokenKind::Number => {
                let v = tok
                    .text()
                    .parse::<f64>()
                    .map_err(|_| CalcError::MalformedNumber {
                        literal: tok.text().to_string(),
                    })?;
                pile.push(v);
            }
            TokenKind::Operator => {
                let droite = pile.pop().ok_or(CalcError::MalformedExpression)?;
                let gauche = pile.pop().ok_or(CalcError::MalformedExpression)?;
                pile.push(applique(tok.text(), gauche, droite)?);
            }
            // une RPN bien formée n’en contient jamais
            TokenKind::Parenthesis => return Err(CalcError::MalformedExpression),
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(CalcError::MalformedExpression),
    }
}

/// API publique : évalue une expression et retourne la valeur + la démarche.
pub fn evaluate_with_steps(expr: &str) -> Result<(f64, Steps), CalcError> {
    // 1) Jetons
    let jetons = tokenize(expr)?;
    debug!("jetons: {}", format_tokens(&jetons));

    // 2) RPN
    let rpn = to_postfix(&jetons)?;

    // 3) Valeur
    let valeur = evaluate_postfix(&rpn)?;

    let steps = Steps {
        tokens: format_tokens(&jetons),
        postfix: format_tokens(&rpn),
    };
    Ok((valeur, steps))
}

/// Point d’entrée unique : `tokenize` -> `to_postfix` -> `evaluate_postfix`.
pub fn evaluate(expr: &str) -> Result<f64, CalcError> {
    evaluate_with_steps(expr).map(|(v, _)| v)
}

/// Affichage d’un résultat : entier sans partie décimale (`14`), sinon le plus court
/// texte qui relit la même valeur (`4.5`, `0.1`).
pub fn format_result(v: f64) -> String {
    // -0 s’affiche 0
    if v.is_zero() {
        return "0".into();
    }
    format!("{v}")
}
