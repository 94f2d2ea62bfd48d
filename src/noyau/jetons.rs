// src/noyau/jetons.rs

use std::fmt;

use log::trace;

use super::erreur::CalcError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Operator,
    Parenthesis,
}

/// Jeton immuable : sa nature + le texte exact lu dans l’entrée.
///
/// - Number      : chiffres, au plus un `.`, éventuellement un `-` en tête (moins unaire)
/// - Operator    : exactement un de `+ - * /`
/// - Parenthesis : `(` ou `)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn number(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Number,
            text: text.into(),
        }
    }

    pub fn operator(op: char) -> Self {
        Self {
            kind: TokenKind::Operator,
            text: op.to_string(),
        }
    }

    pub fn parenthesis(p: char) -> Self {
        Self {
            kind: TokenKind::Parenthesis,
            text: p.to_string(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Vrai pour la parenthèse ouvrante `(`.
    pub fn is_open_paren(&self) -> bool {
        self.kind == TokenKind::Parenthesis && self.text == "("
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// `-` fait partie d’un nombre (moins unaire) si rien n’a encore été émis,
/// ou si le dernier jeton est un opérateur ou une `(`.
fn moins_unaire(out: &[Token]) -> bool {
    match out.last() {
        None => true,
        Some(t) => t.kind() == TokenKind::Operator || t.is_open_paren(),
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.14, .5, 5.)
/// - moins unaire collé au nombre (ex: -3, 2*-4, (-1))
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Tout autre caractère (hors espaces) => InvalidCharacter.
pub fn tokenize(s: &str) -> Result<Vec<Token>, CalcError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // espaces ASCII, tabulation verticale comprise
        if matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C') {
            i += 1;
            continue;
        }

        // Nombre (ou moins unaire qui ouvre un nombre)
        if c.is_ascii_digit() || c == '.' || (c == '-' && moins_unaire(&out)) {
            let start = i;
            if c == '-' {
                i += 1;
            }
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let litteral: String = chars[start..i].iter().collect();

            let points = litteral.chars().filter(|&ch| ch == '.').count();
            let a_chiffre = litteral.chars().any(|ch| ch.is_ascii_digit());
            if points > 1 || !a_chiffre {
                return Err(CalcError::MalformedNumber { literal: litteral });
            }

            out.push(Token::number(litteral));
            continue;
        }

        match c {
            '(' | ')' => out.push(Token::parenthesis(c)),
            '+' | '-' | '*' | '/' => out.push(Token::operator(c)),
            _ => {
                return Err(CalcError::InvalidCharacter {
                    character: c,
                    position: i,
                })
            }
        }
        i += 1;
    }

    trace!("tokenize({s:?}) -> {} jetons", out.len());
    Ok(out)
}

/// Format utilitaire (démarche) : textes des jetons séparés par une espace.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::text)
        .collect::<Vec<_>>()
        .join(" ")
}
