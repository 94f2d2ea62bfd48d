// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
//
// Règles:
// - Number : sortie directe
// - Operator : dépile tant que le sommet est un opérateur de précédence >= (associativité gauche)
// - '(' : empile
// - ')' : dépile jusqu’à '(' (absente => MismatchedParentheses), puis jette la '('
// - fin : vide la pile ; une '(' restante => MismatchedParentheses
//
// La pile appartient à to_postfix : rien n’est partagé avec l’évaluation.

use log::debug;

use super::erreur::CalcError;
use super::jetons::{format_tokens, Token, TokenKind};

/// `+ -` => 1, `* /` => 2. Tout le reste => 0 (jamais dépilé comme opérateur).
fn precedence(t: &Token) -> u8 {
    match (t.kind(), t.text()) {
        (TokenKind::Operator, "+" | "-") => 1,
        (TokenKind::Operator, "*" | "/") => 2,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: ( 2 + 3 ) * 4
///   rpn:    2 3 + 4 *
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, CalcError> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    for tok in tokens {
        match tok.kind() {
            TokenKind::Number => out.push(tok.clone()),

            TokenKind::Operator => {
                let p_tok = precedence(tok);
                while let Some(top) = ops.last() {
                    if top.kind() != TokenKind::Operator || precedence(top) < p_tok {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok.clone());
            }

            TokenKind::Parenthesis if tok.is_open_paren() => ops.push(tok.clone()),

            TokenKind::Parenthesis => loop {
                match ops.pop() {
                    Some(top) if top.is_open_paren() => break,
                    Some(top) => out.push(top),
                    None => return Err(CalcError::MismatchedParentheses),
                }
            },
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op.is_open_paren() {
            return Err(CalcError::MismatchedParentheses);
        }
        out.push(op);
    }

    debug!("rpn: {}", format_tokens(&out));
    Ok(out)
}
