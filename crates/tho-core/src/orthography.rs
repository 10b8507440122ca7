//! Letter correspondences between POJ and Tâi-lô.
//!
//! | POJ | Tâi-lô | context |
//! |---|---|---|
//! | `ch` | `ts` | |
//! | `o` | `u` | before `a`/`e` |
//! | `e` | `i` | before `ng`/`k` |
//!
//! Both directions preserve letter case and leave everything else alone.

use crate::tone::{ToneTable, POJ, TAILO};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orthography {
    Poj,
    Tailo,
}

impl Orthography {
    pub fn table(self) -> &'static ToneTable {
        match self {
            Orthography::Poj => &POJ,
            Orthography::Tailo => &TAILO,
        }
    }
}

/// One direction of the correspondence table (lower-case letters).
struct LetterMap {
    affricate: [char; 2],
    affricate_to: [char; 2],
    glide: char,
    glide_to: char,
    coda_vowel: char,
    coda_vowel_to: char,
}

const POJ_TO_TAILO: LetterMap = LetterMap {
    affricate: ['c', 'h'],
    affricate_to: ['t', 's'],
    glide: 'o',
    glide_to: 'u',
    coda_vowel: 'e',
    coda_vowel_to: 'i',
};

const TAILO_TO_POJ: LetterMap = LetterMap {
    affricate: ['t', 's'],
    affricate_to: ['c', 'h'],
    glide: 'u',
    glide_to: 'o',
    coda_vowel: 'i',
    coda_vowel_to: 'e',
};

fn with_case(c: char, like: char) -> char {
    if like.is_ascii_uppercase() {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

fn is_letter(c: Option<&char>, lower: char) -> bool {
    c.is_some_and(|c| c.to_ascii_lowercase() == lower)
}

impl LetterMap {
    fn apply(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1);

            // Only `ch`, `Ch` and `CH`; `cH` is left as is.
            if c.to_ascii_lowercase() == self.affricate[0]
                && is_letter(next, self.affricate[1])
                && !(c.is_ascii_lowercase() && next.is_some_and(char::is_ascii_uppercase))
            {
                let second = chars[i + 1];
                out.push(with_case(self.affricate_to[0], c));
                out.push(with_case(self.affricate_to[1], second));
                i += 2;
                continue;
            }

            let lower = c.to_ascii_lowercase();
            let glide = lower == self.glide && (is_letter(next, 'a') || is_letter(next, 'e'));
            let coda = lower == self.coda_vowel
                && ((is_letter(next, 'n') && is_letter(chars.get(i + 2), 'g'))
                    || is_letter(next, 'k'));
            if glide {
                out.push(with_case(self.glide_to, c));
            } else if coda {
                out.push(with_case(self.coda_vowel_to, c));
            } else {
                out.push(c);
            }
            i += 1;
        }
        out
    }
}

pub fn poj_to_tailo(text: &str) -> String {
    POJ_TO_TAILO.apply(text)
}

pub fn tailo_to_poj(text: &str) -> String {
    TAILO_TO_POJ.apply(text)
}
