//! POJ spelling standards and the Campbell-only rewrites.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::options::ConfigError;

/// POJ standard. Tâi-lô has only one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Standard {
    #[default]
    Modern,
    Campbell,
}

/// Branches of the conversion that depend on the standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// `o` + `a|e` takes the tone only when a letter precedes the `o`.
    pub glide_needs_initial: bool,
    /// Tone 8 `ainnh` is marked on the `i`.
    pub ainnh_on_i: bool,
    /// `ⁿh` is written `hⁿ`.
    pub h_before_nasal: bool,
    /// Nasal `o` is spelled `o͘ⁿ`, and `noo`/`moo`/`ngoo` drop the nasal.
    pub nasal_long_o: bool,
    /// `ch` only before `e i h`, `ts` elsewhere.
    pub affricate_context: bool,
}

impl Standard {
    pub fn policy(self) -> Policy {
        let campbell = self == Standard::Campbell;
        Policy {
            glide_needs_initial: campbell,
            ainnh_on_i: campbell,
            h_before_nasal: campbell,
            nasal_long_o: campbell,
            affricate_context: campbell,
        }
    }
}

impl FromStr for Standard {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "campbell" => Ok(Standard::Campbell),
            other => Err(ConfigError::UnknownStandard(other.to_string())),
        }
    }
}

impl TryFrom<String> for Standard {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Standard::Modern => f.write_str("modern"),
            Standard::Campbell => f.write_str("campbell"),
        }
    }
}

fn is_front_or_h(c: Option<&char>) -> bool {
    matches!(c, Some('e' | 'i' | 'h' | 'E' | 'I' | 'H'))
}

// Mixed case with a capital second letter (`cH`) is not an affricate.
fn affricate_case(first: char, second: char) -> bool {
    !(first.is_ascii_lowercase() && second.is_ascii_uppercase())
}

/// Campbell affricates: `ch` before anything but `e i h` becomes `ts`, and
/// `ts` before `e i h` becomes `ch`. Accepts `ch`/`Ch`/`CH` and the same
/// three case forms of `ts`.
pub fn respell_affricates(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if let (Some(&first), Some(&second)) = (chars.get(i), chars.get(i + 1)) {
            let next = chars.get(i + 2);
            let replacement = match (first, second) {
                ('c' | 'C', 'h' | 'H') if !is_front_or_h(next) => Some(('t', 's')),
                ('t' | 'T', 's' | 'S') if is_front_or_h(next) => Some(('c', 'h')),
                _ => None,
            };
            if let Some((a, b)) = replacement.filter(|_| affricate_case(first, second)) {
                out.push(if first.is_ascii_uppercase() { a.to_ascii_uppercase() } else { a });
                out.push(if second.is_ascii_uppercase() { b.to_ascii_uppercase() } else { b });
                i += 2;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

fn is_o(c: Option<&char>) -> bool {
    matches!(c, Some('o' | 'O'))
}

fn is_n(c: Option<&char>) -> bool {
    matches!(c, Some('n' | 'N'))
}

fn same_case(a: char, like: char) -> char {
    if like.is_ascii_uppercase() {
        a.to_ascii_uppercase()
    } else {
        a.to_ascii_lowercase()
    }
}

/// ASCII to Campbell spelling of nasal `o`.
///
/// `onn` becomes `oonn` unless another `o` precedes it, `noo` becomes
/// `noonn` unless an `n` follows, and `moonn`/`ngoonn` lose the nasal.
pub fn expand_nasal_o(text: &str) -> String {
    let lengthened = lengthen_nasal_o(text);
    let nasalized = nasalize_noo(&lengthened);
    drop_nasal_after(&nasalized, &["m", "ng"], false)
}

// o + nn (not after o) -> oo + nn
fn lengthen_nasal_o(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 1);
    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        let lone_o = is_o(Some(&c)) && !(i > 0 && is_o(chars.get(i - 1)));
        if lone_o && is_n(chars.get(i + 1)) && is_n(chars.get(i + 2)) {
            out.push(same_case('o', chars[i + 1]));
        }
    }
    out
}

// n + oo (not before n) -> n + oo + nn
fn nasalize_noo(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 2);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        out.push(c);
        i += 1;
        if is_n(Some(&c)) && is_o(chars.get(i)) && is_o(chars.get(i + 1)) && !is_n(chars.get(i + 2)) {
            out.push(chars[i]);
            out.push(chars[i + 1]);
            let n = same_case('n', chars[i]);
            out.push(n);
            out.push(n);
            i += 2;
        }
    }
    out
}

/// Remove the `nn` of `oonn` after one of `initials` (case-insensitive).
/// With `shorten_rest`, every other `oonn` loses its second `o`.
fn drop_nasal_after(text: &str, initials: &[&str], shorten_rest: bool) -> String {
    let lower = text.to_ascii_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < text.len() {
        let rest = &lower[i..];
        let initial = initials
            .iter()
            .filter(|init| rest.starts_with(**init) && rest[init.len()..].starts_with("oonn"))
            .map(|init| init.len())
            .max();
        if let Some(len) = initial {
            out.push_str(&text[i..i + len + 2]);
            i += len + 4;
            continue;
        }
        if shorten_rest && rest.starts_with("oonn") {
            out.push_str(&text[i..i + 1]);
            out.push_str(&text[i + 2..i + 4]);
            i += 4;
            continue;
        }
        let Some(c) = text[i..].chars().next() else {
            break;
        };
        out.push(c);
        i += c.len_utf8();
    }
    out
}

/// Campbell spelling of nasal `o` back to ASCII: `moonn`/`noonn`/`ngoonn`
/// become `moo`/`noo`/`ngoo`, any other `oonn` becomes `onn`.
pub fn collapse_nasal_o(text: &str) -> String {
    drop_nasal_after(text, &["m", "n", "ng"], true)
}
