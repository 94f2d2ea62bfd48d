// src/chiffre.rs
//
// Chiffre de César — latin (26 lettres) + russe (33 lettres, Ё compris).
//
// Règles:
// - la casse est conservée, tout ce qui n’est pas une lettre passe tel quel
// - décalage quelconque (négatif accepté), rotation par reste euclidien
// - avec un filtre d’alphabet, les lettres de l’autre alphabet deviennent '-'

use log::debug;

const RUSSE_MAJ: [char; 33] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С',
    'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];
const RUSSE_MIN: [char; 33] = [
    'а', 'б', 'в', 'г', 'д', 'е', 'ё', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н', 'о', 'п', 'р', 'с',
    'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь', 'э', 'ю', 'я',
];

const LATIN_LEN: i64 = 26;
const RUSSE_LEN: i64 = 33;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alphabet {
    Latin,
    Russian,
}

/// Décalage de déchiffrement : connu, ou à chercher (liste de tous les candidats).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shift {
    Known(i64),
    Unknown,
}

fn rotation(idx: usize, shift: i64, len: i64) -> usize {
    // idx < 33 : la conversion ne perd rien
    (idx as i64 + shift.rem_euclid(len)).rem_euclid(len) as usize
}

/// Décale une lettre. `None` si `c` n’est pas une lettre d’un des deux alphabets.
fn decaler_lettre(c: char, shift: i64) -> Option<(char, Alphabet)> {
    if let Some(idx) = RUSSE_MAJ.iter().position(|&r| r == c) {
        return Some((RUSSE_MAJ[rotation(idx, shift, RUSSE_LEN)], Alphabet::Russian));
    }
    if let Some(idx) = RUSSE_MIN.iter().position(|&r| r == c) {
        return Some((RUSSE_MIN[rotation(idx, shift, RUSSE_LEN)], Alphabet::Russian));
    }

    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return None;
    };
    let idx = usize::from(c as u8 - base);
    // rotation(..) < 26
    let lettre = char::from(base + rotation(idx, shift, LATIN_LEN) as u8);
    Some((lettre, Alphabet::Latin))
}

/// Décale chaque lettre de `text`. Avec `filtre`, les lettres de l’autre alphabet => '-'.
pub fn shift_text(text: &str, shift: i64, filtre: Option<Alphabet>) -> String {
    text.chars()
        .map(|c| match decaler_lettre(c, shift) {
            None => c,
            Some((lettre, alpha)) => match filtre {
                Some(f) if f != alpha => '-',
                _ => lettre,
            },
        })
        .collect()
}

pub fn encrypt(text: &str, shift: i64) -> String {
    shift_text(text, shift, None)
}

pub fn decrypt(text: &str, shift: Shift) -> String {
    match shift {
        Shift::Known(k) => shift_text(text, -k, None),
        Shift::Unknown => list_all(text),
    }
}

fn contient(text: &str, alpha: Alphabet) -> bool {
    text.chars()
        .any(|c| matches!(decaler_lettre(c, 0), Some((_, a)) if a == alpha))
}

/// Force brute : tous les décalages possibles, par alphabet détecté.
pub fn list_all(text: &str) -> String {
    let text = text.trim();
    let russe = contient(text, Alphabet::Russian);
    let latin = contient(text, Alphabet::Latin);
    debug!("list_all: russe={russe} latin={latin}");

    let mut res = String::new();
    if russe {
        res.push_str("\n=== Possible Russian Decryptions (32 shifts) ===\n");
        for k in 1..RUSSE_LEN {
            let t = shift_text(text, -k, Some(Alphabet::Russian));
            res.push_str(&format!("Shift {k}: {t}\n"));
        }
    }
    if latin {
        res.push_str("\n=== Possible English Decryptions (25 shifts) ===\n");
        for k in 1..LATIN_LEN {
            let t = shift_text(text, -k, Some(Alphabet::Latin));
            res.push_str(&format!("Shift {k}: {t}\n"));
        }
    }
    if !russe && !latin {
        res.push_str(text);
        res.push_str("\n(No Russian or English letters detected)\n");
    }
    res
}
