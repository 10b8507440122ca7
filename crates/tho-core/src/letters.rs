//! POJ special letters: the nasal mark `ⁿ`/`ᴺ` and long o `o͘`.
//!
//! In ASCII these are spelled `nn`/`NN` and `oo`. Decoding the dot back to
//! ASCII is lossy with respect to case: `O͘` in an all upper-case syllable
//! is read as `OO`, never `Oo`.

use crate::tone::is_tone_mark;

pub const NASAL_SMALL: char = 'ⁿ';
pub const NASAL_CAPITAL: char = 'ᴺ';
/// Combining dot above right, the second half of `o͘`.
pub const LONG_O_DOT: char = '\u{358}';

pub fn is_special(c: char) -> bool {
    matches!(c, NASAL_SMALL | NASAL_CAPITAL | LONG_O_DOT)
}

fn is_nasal(c: char) -> bool {
    matches!(c, NASAL_SMALL | NASAL_CAPITAL)
}

/// No lower-case letter in `token`. `ᴺ` counts as upper case here even though
/// Unicode lists it as a lowercase modifier letter.
fn is_upper_token(token: &str) -> bool {
    !token
        .chars()
        .any(|c| c.is_ascii_lowercase() || c == NASAL_SMALL)
}

/// Spell the special letters of one syllable in ASCII.
pub fn decode(token: &str) -> String {
    let upper = is_upper_token(token);
    let mut out = String::with_capacity(token.len() + 2);
    for c in token.chars() {
        match c {
            NASAL_SMALL => out.push_str("nn"),
            NASAL_CAPITAL => out.push_str("NN"),
            LONG_O_DOT if upper => out.push('O'),
            LONG_O_DOT => out.push('o'),
            _ => out.push(c),
        }
    }
    out
}

/// `o` + optional tone mark + `o` becomes `o` + mark + dot, then `nn`
/// becomes `ⁿ` (`NN` becomes `ᴺ`) unless a `g` or a tone mark follows.
pub fn encode(text: &str) -> String {
    encode_nasal(&encode_long_o(text))
}

fn encode_long_o(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 2);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.eq_ignore_ascii_case(&'o') {
            let mark = chars.get(i + 1).copied().filter(|m| is_tone_mark(*m));
            let second = i + 1 + usize::from(mark.is_some());
            if chars.get(second).is_some_and(|o| o.eq_ignore_ascii_case(&'o')) {
                out.push(c);
                out.extend(mark);
                out.push(LONG_O_DOT);
                i = second + 1;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }
    out
}

fn encode_nasal(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let pair = (chars[i], chars.get(i + 1).copied());
        if let (first @ ('n' | 'N'), Some(second @ ('n' | 'N'))) = pair {
            let blocked = chars
                .get(i + 2)
                .is_some_and(|&next| next.eq_ignore_ascii_case(&'g') || is_tone_mark(next));
            if !blocked {
                out.push(if first == 'N' && second == 'N' {
                    NASAL_CAPITAL
                } else {
                    NASAL_SMALL
                });
                i += 2;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// `ⁿh` → `hⁿ`: the Campbell order after encoding.
pub fn h_before_nasal(text: &str) -> String {
    swap_pairs(text, |a, b| is_nasal(a) && b.eq_ignore_ascii_case(&'h'))
}

/// `hⁿ` → `ⁿh`: undo the Campbell order before decoding.
pub fn nasal_before_h(text: &str) -> String {
    swap_pairs(text, |a, b| a.eq_ignore_ascii_case(&'h') && is_nasal(b))
}

fn swap_pairs(text: &str, matches: impl Fn(char, char) -> bool) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i + 1 < chars.len() {
        if matches(chars[i], chars[i + 1]) {
            chars.swap(i, i + 1);
            i += 2;
        } else {
            i += 1;
        }
    }
    chars.into_iter().collect()
}

/// Accepted ASCII spellings: `ou` for `oo` and `hnn` for `nnh`.
pub fn normalize_ascii_variants(text: &str) -> String {
    text.replace("ou", "oo")
        .replace("Ou", "Oo")
        .replace("OU", "OO")
        .replace("hnn", "nnh")
        .replace("HNN", "NNH")
}

/// A capital `N` after a lower-case vowel is read as the nasal `nn`.
///
/// Off by default: it collides with all-caps text such as `SAN`.
pub fn expand_uppercase_n(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    let mut prev = None;
    for c in text.chars() {
        if c == 'N' && matches!(prev, Some('a' | 'e' | 'i' | 'o' | 'u')) {
            out.push_str("nn");
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}
