// src/noyau/erreur.rs
//
// Erreurs du noyau : une variante par étape qui peut échouer.
// Chaque étape échoue immédiatement (pas de reprise, pas de résultat partiel).

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CalcError {
    /// Caractère hors de l’alphabet accepté (espaces, chiffres, `.`, `+ - * /`, `( )`).
    InvalidCharacter {
        /// Le caractère refusé.
        character: char,
        /// Index (en caractères, base 0) dans l’entrée.
        position: usize,
    },
    /// Littéral numérique avec plus d’un `.` ou sans aucun chiffre.
    MalformedNumber {
        /// Le littéral tel qu’il a été lu.
        literal: String,
    },
    /// `)` sans `(` correspondante, ou `(` jamais refermée.
    MismatchedParentheses,
    /// Opérande droite d’un `/` nulle.
    DivisionByZero,
    /// La pile d’évaluation ne finit pas avec exactement une valeur.
    MalformedExpression,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Invalid character '{character}' at position {position}.")
            }
            Self::MalformedNumber { literal } => {
                write!(f, "Malformed number: '{literal}'.")
            }
            Self::MismatchedParentheses => write!(f, "Mismatched parentheses."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::MalformedExpression => {
                write!(f, "Malformed expression (missing operand or operator).")
            }
        }
    }
}

impl std::error::Error for CalcError {}
