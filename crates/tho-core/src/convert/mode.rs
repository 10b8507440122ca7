use std::fmt;
use std::str::FromStr;

use crate::options::{ConfigError, ConvertOptions};

use super::cross::*;
use super::poj::{poj_ascii_to_unicode, poj_unicode_to_ascii};
use super::tailo::{tailo_ascii_to_unicode, tailo_unicode_to_ascii};

/// A named conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    PojAsciiToUnicode,
    PojUnicodeToAscii,
    TailoAsciiToUnicode,
    TailoUnicodeToAscii,
    PojAsciiToTailoAscii,
    TailoAsciiToPojAscii,
    PojUnicodeToTailoUnicode,
    TailoUnicodeToPojUnicode,
    PojUnicodeToTailoUnicodeCascade,
    TailoUnicodeToPojUnicodeCascade,
}

impl Mode {
    pub const ALL: [Mode; 10] = [
        Mode::PojAsciiToUnicode,
        Mode::PojUnicodeToAscii,
        Mode::TailoAsciiToUnicode,
        Mode::TailoUnicodeToAscii,
        Mode::PojAsciiToTailoAscii,
        Mode::TailoAsciiToPojAscii,
        Mode::PojUnicodeToTailoUnicode,
        Mode::TailoUnicodeToPojUnicode,
        Mode::PojUnicodeToTailoUnicodeCascade,
        Mode::TailoUnicodeToPojUnicodeCascade,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mode::PojAsciiToUnicode => "poj_a2u",
            Mode::PojUnicodeToAscii => "poj_u2a",
            Mode::TailoAsciiToUnicode => "tl_a2u",
            Mode::TailoUnicodeToAscii => "tl_u2a",
            Mode::PojAsciiToTailoAscii => "poja2tla",
            Mode::TailoAsciiToPojAscii => "tla2poja",
            Mode::PojUnicodeToTailoUnicode => "poju2tlu",
            Mode::TailoUnicodeToPojUnicode => "tlu2poju",
            Mode::PojUnicodeToTailoUnicodeCascade => "poju2tlu_cascade",
            Mode::TailoUnicodeToPojUnicodeCascade => "tlu2poju_cascade",
        }
    }

    /// One-line summary for listings.
    pub fn description(self) -> &'static str {
        match self {
            Mode::PojAsciiToUnicode => "POJ digit tones to POJ diacritics",
            Mode::PojUnicodeToAscii => "POJ diacritics to POJ digit tones",
            Mode::TailoAsciiToUnicode => "Tâi-lô digit tones to Tâi-lô diacritics",
            Mode::TailoUnicodeToAscii => "Tâi-lô diacritics to Tâi-lô digit tones",
            Mode::PojAsciiToTailoAscii => "POJ digit tones to Tâi-lô digit tones",
            Mode::TailoAsciiToPojAscii => "Tâi-lô digit tones to POJ digit tones",
            Mode::PojUnicodeToTailoUnicode => "POJ diacritics to Tâi-lô diacritics",
            Mode::TailoUnicodeToPojUnicode => "Tâi-lô diacritics to POJ diacritics",
            Mode::PojUnicodeToTailoUnicodeCascade => "poju2tlu through the digit-tone forms",
            Mode::TailoUnicodeToPojUnicodeCascade => "tlu2poju through the digit-tone forms",
        }
    }

    pub fn function(self) -> fn(&str, &ConvertOptions) -> String {
        match self {
            Mode::PojAsciiToUnicode => poj_ascii_to_unicode,
            Mode::PojUnicodeToAscii => poj_unicode_to_ascii,
            Mode::TailoAsciiToUnicode => tailo_ascii_to_unicode,
            Mode::TailoUnicodeToAscii => tailo_unicode_to_ascii,
            Mode::PojAsciiToTailoAscii => poj_ascii_to_tailo_ascii,
            Mode::TailoAsciiToPojAscii => tailo_ascii_to_poj_ascii,
            Mode::PojUnicodeToTailoUnicode => poj_unicode_to_tailo_unicode,
            Mode::TailoUnicodeToPojUnicode => tailo_unicode_to_poj_unicode,
            Mode::PojUnicodeToTailoUnicodeCascade => poj_unicode_to_tailo_unicode_cascade,
            Mode::TailoUnicodeToPojUnicodeCascade => tailo_unicode_to_poj_unicode_cascade,
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| ConfigError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run the conversion named by `mode`.
pub fn convert(mode: Mode, text: &str, opts: &ConvertOptions) -> String {
    (mode.function())(text, opts)
}
