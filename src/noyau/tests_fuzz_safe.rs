//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - oracle : chaque expression générée porte sa valeur attendue (même ordre d’opérations)
//! - seule erreur attendue sur une expression bien formée : division par zéro

use std::time::{Duration, Instant};

use proptest::{prop_assert, proptest};

use super::{evaluate, CalcError};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Expression + valeur attendue. `None` : un diviseur nul a été rencontré.
struct Gen {
    texte: String,
    valeur: Option<f64>,
}

fn gen_atom(rng: &mut Rng) -> Gen {
    // petits entiers (0 inclus, utile pour la division), parfois négatifs ou décimaux
    let n = f64::from(rng.pick(8));
    let (texte, valeur) = match rng.pick(4) {
        0 => (format!("-{n}"), -n),
        1 => (format!("{n}.25"), n + 0.25),
        _ => (format!("{n}"), n),
    };
    Gen {
        texte,
        valeur: Some(valeur),
    }
}

fn gen_expr(rng: &mut Rng, profondeur: u32) -> Gen {
    if profondeur == 0 || rng.pick(3) == 0 {
        return gen_atom(rng);
    }

    let a = gen_expr(rng, profondeur - 1);
    let b = gen_expr(rng, profondeur - 1);
    let op = ['+', '-', '*', '/'][rng.pick(4) as usize];

    let valeur = match (a.valeur, b.valeur) {
        (Some(x), Some(y)) => match op {
            '+' => Some(x + y),
            '-' => Some(x - y),
            '*' => Some(x * y),
            _ if y == 0.0 => None,
            _ => Some(x / y),
        },
        _ => None,
    };

    // parenthèses complètes : la valeur ne dépend pas de la précédence
    let espace = if rng.coin() { " " } else { "" };
    Gen {
        texte: format!("({}{espace}{op}{espace}{})", a.texte, b.texte),
        valeur,
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_oracle_expressions_generees() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FF_EE00_D15E_A5E5);

    for _ in 0..2_000 {
        budget(start, max);

        let g = gen_expr(&mut rng, 5);
        match (evaluate(&g.texte), g.valeur) {
            (Ok(v), Some(attendu)) => {
                assert_eq!(v.to_bits(), attendu.to_bits(), "expr={:?}", g.texte)
            }
            (Err(CalcError::DivisionByZero), None) => {}
            (got, attendu) => panic!("expr={:?} got={got:?} attendu={attendu:?}", g.texte),
        }
    }
}

#[test]
fn fuzz_profondeur_parentheses() {
    // imbrication profonde : pas de récursion dans le noyau, donc pas de débordement
    let n = 10_000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(evaluate(&expr), Ok(1.0));

    let desequilibre = format!("{}1{}", "(".repeat(n), ")".repeat(n - 1));
    assert_eq!(evaluate(&desequilibre), Err(CalcError::MismatchedParentheses));
}

#[test]
fn fuzz_longue_chaine() {
    let expr = vec!["1"; 5_000].join("+");
    assert_eq!(evaluate(&expr), Ok(5_000.0));
}

proptest! {
    #[test]
    fn proptest_pas_de_panique(expr in "[0-9+*/() .-]{0,40}") {
        let _ = evaluate(&expr);
    }

    #[test]
    fn proptest_pas_de_panique_unicode(expr in "\\PC{0,20}") {
        // tout caractère hors alphabet => InvalidCharacter, jamais de panique
        if let Err(CalcError::InvalidCharacter { character, .. }) = evaluate(&expr) {
            prop_assert!(!"0123456789.+-*/()".contains(character));
            prop_assert!(!character.is_ascii_whitespace() && character != '\x0B');
        }
    }
}
