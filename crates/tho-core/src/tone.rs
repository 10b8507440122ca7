//! Tone numbers and the two tone-mark tables.

use std::fmt;

use tracing::debug;

use crate::normalize::decompose;

/// A tone number in 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tone(u8);

impl Tone {
    pub const fn new(number: u8) -> Option<Tone> {
        if number >= 1 && number <= 9 {
            Some(Tone(number))
        } else {
            None
        }
    }

    /// Parse an ASCII tone digit ('1'..='9').
    pub fn from_digit(c: char) -> Option<Tone> {
        c.to_digit(10).and_then(|d| Tone::new(d as u8))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn digit(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Combining marks for tones 1..=9. Slot 0 is a placeholder and tones 1
/// and 4 are unmarked.
#[derive(Debug, PartialEq, Eq)]
pub struct ToneTable {
    marks: [Option<char>; 10],
}

/// Tâi-lô marks. Tone 9 is the double acute.
pub const TAILO: ToneTable = ToneTable {
    marks: [
        None,
        None,
        Some('\u{301}'),
        Some('\u{300}'),
        None,
        Some('\u{302}'),
        Some('\u{30c}'),
        Some('\u{304}'),
        Some('\u{30d}'),
        Some('\u{30b}'),
    ],
};

/// POJ marks. Identical to Tâi-lô except tone 9, written with a breve.
pub const POJ: ToneTable = ToneTable {
    marks: [
        None,
        None,
        Some('\u{301}'),
        Some('\u{300}'),
        None,
        Some('\u{302}'),
        Some('\u{30c}'),
        Some('\u{304}'),
        Some('\u{30d}'),
        Some('\u{306}'),
    ],
};

impl ToneTable {
    pub fn mark(&self, tone: Tone) -> Option<char> {
        self.marks[tone.0 as usize]
    }

    pub fn tone_of(&self, mark: char) -> Option<Tone> {
        self.marks
            .iter()
            .position(|m| *m == Some(mark))
            .and_then(|i| Tone::new(i as u8))
    }
}

/// Combining diacritics in the range used for tones (U+0300..=U+030F).
pub fn is_tone_mark(c: char) -> bool {
    ('\u{300}'..='\u{30f}').contains(&c)
}

/// Letters a digit or mark may sit on: vowels and the syllabic nasals.
pub fn bears_tone(c: char) -> bool {
    matches!(
        c.to_ascii_lowercase(),
        'a' | 'e' | 'i' | 'o' | 'u' | 'm' | 'n'
    )
}

/// Implicit tone of an unmarked syllable: 4 after an entering coda, else 1.
pub fn default_tone(syllable: &str) -> Tone {
    match syllable.chars().last() {
        Some('p' | 't' | 'k' | 'h' | 'P' | 'T' | 'K' | 'H') => Tone(4),
        _ => Tone(1),
    }
}

/// Decompose `text` and replace every tone mark of `table` with its digit,
/// leaving the digit where the mark was.
pub fn accents_to_digits(text: &str, table: &ToneTable) -> String {
    decompose(text)
        .chars()
        .map(|c| match table.tone_of(c) {
            Some(tone) => tone.digit(),
            None => c,
        })
        .collect()
}

/// Replace each digit that follows a tone-bearing letter with the table's
/// mark. Digits elsewhere are left alone; unmarked tones drop the digit.
pub fn digits_to_accents(text: &str, table: &ToneTable) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 2);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        out.push(c);
        i += 1;
        if !bears_tone(c) {
            continue;
        }
        if let Some(d) = chars.get(i).and_then(|d| d.to_digit(10)) {
            if let Some(mark) = Tone::new(d as u8).and_then(|t| table.mark(t)) {
                out.push(mark);
            }
            i += 1;
        }
    }
    out
}

/// Render `letters` with `tone` attached at byte index `at`.
///
/// Unmarked tones produce the bare letters. A marked tone whose anchor
/// cannot carry a diacritic stays as a digit.
pub(crate) fn attach(letters: &str, tone: Option<Tone>, at: usize, table: &ToneTable) -> String {
    let Some(tone) = tone.filter(|t| table.mark(*t).is_some()) else {
        return letters.to_string();
    };
    let mut staged = String::with_capacity(letters.len() + 1);
    staged.push_str(&letters[..at]);
    staged.push(tone.digit());
    staged.push_str(&letters[at..]);
    if !letters[..at].chars().last().is_some_and(bears_tone) {
        debug!(letters, tone = tone.number(), "tone left unplaced");
        return staged;
    }
    digits_to_accents(&staged, table)
}
