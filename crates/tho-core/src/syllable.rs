//! Syllable scanner.
//!
//! Splits text into syllables (runs of ASCII letters with an optional tone)
//! and opaque text. Letter rewrites and tone placement work on syllables;
//! everything else is carried through untouched.

use crate::letters;
use crate::tone::{default_tone, Tone, ToneTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    /// ASCII letters only; special letters are already spelled out.
    pub letters: String,
    pub tone: Option<Tone>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Text(String),
    Syllable(Syllable),
}

impl Piece {
    fn starts_with_digit(&self) -> bool {
        matches!(self, Piece::Text(t) if t.starts_with(|c: char| c.is_ascii_digit()))
    }
}

fn push_text(pieces: &mut Vec<Piece>, c: char) {
    if let Some(Piece::Text(t)) = pieces.last_mut() {
        t.push(c);
    } else {
        pieces.push(Piece::Text(c.to_string()));
    }
}

/// Scan digit-tone text. A letter run directly followed by a digit 1..=9
/// takes that digit as its tone.
pub fn read_ascii(text: &str) -> Vec<Piece> {
    let chars: Vec<char> = text.chars().collect();
    let mut pieces = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_alphabetic() {
            push_text(&mut pieces, chars[i]);
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && chars[i].is_ascii_alphabetic() {
            i += 1;
        }
        let letters: String = chars[start..i].iter().collect();
        let tone = chars.get(i).and_then(|&c| Tone::from_digit(c));
        if tone.is_some() {
            i += 1;
        }
        pieces.push(Piece::Syllable(Syllable { letters, tone }));
    }
    pieces
}

/// Scan decomposed (NFD) diacritic text.
///
/// A syllable starts at an ASCII letter and extends over letters and the
/// first tone mark of `table`. With `special_letters`, `ⁿ`, `ᴺ` and the
/// long-o dot belong to the syllable and are spelled out in ASCII. A second
/// tone mark ends the syllable and is kept as text.
pub fn read_unicode(text: &str, table: &ToneTable, special_letters: bool) -> Vec<Piece> {
    let chars: Vec<char> = text.chars().collect();
    let mut pieces = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_alphabetic() {
            push_text(&mut pieces, chars[i]);
            i += 1;
            continue;
        }
        let start = i;
        let mut tone = None;
        while let Some(&c) = chars.get(i) {
            if c.is_ascii_alphabetic() || (special_letters && letters::is_special(c)) {
                i += 1;
            } else if tone.is_none() && table.tone_of(c).is_some() {
                tone = table.tone_of(c);
                i += 1;
            } else {
                break;
            }
        }
        let raw: String = chars[start..i].iter().collect();
        let spelled = if special_letters {
            letters::decode(&raw)
        } else {
            raw
        };
        let letters = spelled.chars().filter(char::is_ascii_alphabetic).collect();
        pieces.push(Piece::Syllable(Syllable { letters, tone }));
    }
    pieces
}

/// Serialize with digit tones. With `fill_default`, toneless syllables get
/// their implicit tone unless a literal digit follows them.
pub fn write_ascii(pieces: &[Piece], fill_default: bool) -> String {
    let mut out = String::new();
    for (i, piece) in pieces.iter().enumerate() {
        match piece {
            Piece::Text(t) => out.push_str(t),
            Piece::Syllable(s) => {
                out.push_str(&s.letters);
                let followed_by_digit = pieces.get(i + 1).is_some_and(Piece::starts_with_digit);
                let tone = match s.tone {
                    Some(tone) => Some(tone),
                    None if fill_default && !followed_by_digit => Some(default_tone(&s.letters)),
                    None => None,
                };
                if let Some(tone) = tone {
                    out.push(tone.digit());
                }
            }
        }
    }
    out
}

/// Serialize, rendering each syllable with `render`.
pub fn write_with(pieces: &[Piece], mut render: impl FnMut(&Syllable) -> String) -> String {
    let mut out = String::new();
    for piece in pieces {
        match piece {
            Piece::Text(t) => out.push_str(t),
            Piece::Syllable(s) => out.push_str(&render(s)),
        }
    }
    out
}

/// Apply `f` to the letters of every syllable.
pub fn map_letters(pieces: &mut [Piece], mut f: impl FnMut(&str) -> String) {
    for piece in pieces {
        if let Piece::Syllable(s) = piece {
            s.letters = f(&s.letters);
        }
    }
}
