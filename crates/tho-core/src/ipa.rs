//! Broad IPA transcription of Tâi-lô digit-tone text.
//!
//! Tones are written as tone categories, not contours. Neutral tone is not
//! handled.

use tracing::debug_span;

use crate::syllable::{read_ascii, write_ascii, write_with, Syllable};

const NASAL_TILDE: char = '\u{303}';

/// Tone category symbols, indexed by tone number.
const CATEGORY_SYMBOLS: [&str; 10] = ["", "꜀", "꜂", "꜄", "꜆", "꜁", "꜃", "꜅", "꜇", ""];
/// Tone category numbers, indexed by tone number.
const CATEGORY_NUMBERS: [&str; 10] = ["", "1", "3", "5", "7", "2", "4", "6", "8", "9"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IpaToneStyle {
    /// `꜀ka`, `tsiah꜆`: the level categories go before the syllable.
    #[default]
    Symbols,
    /// `ka1`, `tsiah7`.
    Numbers,
}

impl IpaToneStyle {
    fn mark(self, segments: String, tone: u8) -> String {
        let i = tone as usize;
        match self {
            IpaToneStyle::Symbols if matches!(tone, 1 | 2 | 5 | 6) => {
                format!("{}{segments}", CATEGORY_SYMBOLS[i])
            }
            IpaToneStyle::Symbols => segments + CATEGORY_SYMBOLS[i],
            IpaToneStyle::Numbers => segments + CATEGORY_NUMBERS[i],
        }
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// `Vnn`/`Vrnn` → nasalized vowel. In an `[aeo][iueo]` pair the tilde goes
/// on the first vowel.
fn nasalize(letters: &str) -> String {
    let chars: Vec<char> = letters.chars().collect();
    let mut out = String::with_capacity(letters.len() + 2);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let has_r = chars.get(i + 1) == Some(&'r');
        let n = i + 1 + usize::from(has_r);
        if is_vowel(c) && chars.get(n) == Some(&'n') && chars.get(n + 1) == Some(&'n') {
            let pair = out.ends_with(['a', 'e', 'o']) && matches!(c, 'i' | 'u' | 'e' | 'o');
            if pair {
                out.push(NASAL_TILDE);
                out.push(c);
            } else {
                out.push(c);
                out.push(NASAL_TILDE);
            }
            if has_r {
                out.push('r');
            }
            i = n + 2;
            continue;
        }
        out.push(c);
        i += 1;
    }
    out
}

fn segments(letters: &str) -> String {
    nasalize(letters)
        .replace("ng", "ŋ")
        .replace('g', "ɡ")
        .replace('j', "dz")
        .replace("ph", "pʰ")
        .replace("th", "tʰ")
        .replace("kh", "kʰ")
        .replace("sh", "sʰ")
        .replace("on", "ɔn")
        .replace("oŋ", "ɔŋ")
        .replace("ok", "ɔk")
        .replace("oo", "ɔ")
        .replace("ir", "ɯ")
        .replace("er", "ə")
        .replace("ee", "ɛ")
}

fn transcribe(syllable: &Syllable, style: IpaToneStyle) -> String {
    let segments = segments(&syllable.letters);
    match syllable.tone {
        Some(tone) => style.mark(segments, tone.number()),
        None => segments,
    }
}

/// `Tai5-uan5` → `꜁tai ꜁uan`.
pub fn tailo_ascii_to_ipa(text: &str, style: IpaToneStyle) -> String {
    let _span = debug_span!("tailo_ascii_to_ipa", text, ?style).entered();
    let lowered = text.to_lowercase().replace('-', " ");
    let toned = write_ascii(&read_ascii(&lowered), true);
    write_with(&read_ascii(&toned), |syllable| transcribe(syllable, style))
}
