//! Propriétés de l’évaluateur : précédence, associativité, moins unaire, erreurs typées,
//! déterminisme et relecture de la RPN.

use proptest::prelude::*;

use super::jetons::{format_tokens, tokenize};
use super::rpn::to_postfix;
use super::{evaluate, CalcError};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/* ------------------------ Valeurs ------------------------ */

#[test]
fn precedence() {
    assert_eq!(eval_ok("2+3*4"), 14.0);
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
    assert_eq!(eval_ok("10-6/2"), 7.0);
}

#[test]
fn associativite_gauche() {
    assert_eq!(eval_ok("8-3-2"), 3.0);
    assert_eq!(eval_ok("16/4/2"), 2.0);
    assert_eq!(eval_ok("8-(3-2)"), 7.0);
}

#[test]
fn moins_unaire() {
    assert_eq!(eval_ok("-5+3"), -2.0);
    assert_eq!(eval_ok("3*-2"), -6.0);
    assert_eq!(eval_ok("(-4)/2"), -2.0);
    assert_eq!(eval_ok("2 - -3"), 5.0);
}

#[test]
fn decimaux() {
    assert_eq!(eval_ok("1.5+2.5"), 4.0);
    assert_eq!(eval_ok(".5*4"), 2.0);
    assert_eq!(eval_ok(" 7 "), 7.0);
    assert_eq!(eval_ok("1\u{0B}+2"), 3.0);
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn division_par_zero() {
    assert_eq!(evaluate("4/0"), Err(CalcError::DivisionByZero));
}

#[test]
fn parentheses() {
    assert_eq!(evaluate("(1+2"), Err(CalcError::MismatchedParentheses));
    assert_eq!(evaluate("1+2)"), Err(CalcError::MismatchedParentheses));
}

#[test]
fn nombre_malforme() {
    assert!(matches!(
        evaluate("1.2.3"),
        Err(CalcError::MalformedNumber { .. })
    ));
}

#[test]
fn caractere_invalide() {
    assert!(matches!(
        evaluate("2+@"),
        Err(CalcError::InvalidCharacter { character: '@', .. })
    ));
}

#[test]
fn expression_incomplete() {
    assert_eq!(evaluate("2+"), Err(CalcError::MalformedExpression));
    assert_eq!(evaluate("2 3"), Err(CalcError::MalformedExpression));
    assert_eq!(evaluate(""), Err(CalcError::MalformedExpression));
    assert_eq!(evaluate("()"), Err(CalcError::MalformedExpression));
}

#[test]
fn messages_lisibles() {
    let e = evaluate("2+@").unwrap_err();
    assert_eq!(e.to_string(), "Invalid character '@' at position 2.");
    assert_eq!(
        evaluate("4/0").unwrap_err().to_string(),
        "Division by zero."
    );
}

/* ------------------------ Relecture de la RPN ------------------------ */

fn relecture_stable(expr: &str) {
    let rpn = to_postfix(&tokenize(expr).unwrap()).unwrap();
    let relu = tokenize(&format_tokens(&rpn)).unwrap();
    assert_eq!(relu, rpn, "expr={expr:?}");
}

#[test]
fn relecture_avec_moins_binaire() {
    // '-' binaire suivant un nombre dans la RPN : relu comme opérateur
    relecture_stable("8-3-2");
    relecture_stable("(1+2)*3-4");
    relecture_stable("1.5/(2-0.5)");
}

prop_compose! {
    fn arb_litteral()(n in 0u32..1000, demi in any::<bool>()) -> String {
        if demi { format!("{n}.5") } else { format!("{n}") }
    }
}

prop_compose! {
    /// Expression valide, littéraux positifs, opérateurs `+ * /`.
    fn arb_expr()(
        premier in arb_litteral(),
        suite in prop::collection::vec((0usize..3, arb_litteral(), any::<bool>()), 0..10),
    ) -> String {
        let mut expr = premier;
        for (op, n, entoure) in suite {
            let op = ["+", "*", "/"][op];
            expr = if entoure {
                format!("({expr}) {op} {n}")
            } else {
                format!("{expr} {op} {n}")
            };
        }
        expr
    }
}

proptest! {
    #[test]
    fn proptest_relecture_rpn(expr in arb_expr()) {
        let rpn = to_postfix(&tokenize(&expr).unwrap()).unwrap();
        let relu = tokenize(&format_tokens(&rpn)).unwrap();
        prop_assert_eq!(relu, rpn);
    }

    #[test]
    fn proptest_deterministe(expr in "[0-9+*/() .-]{0,30}") {
        let a = evaluate(&expr).map(f64::to_bits);
        let b = evaluate(&expr).map(f64::to_bits);
        prop_assert_eq!(a, b);
    }
}
