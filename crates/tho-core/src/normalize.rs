//! Canonical Unicode normalization.
//!
//! Only the canonical forms are ever used. The compatibility forms fold
//! `ⁿ` (U+207F) and `ᴺ` (U+1D3A) into plain `n`/`N`, which would erase the
//! POJ nasal letter, so they are not reachable from this module.

use unicode_normalization::UnicodeNormalization;

use crate::options::NormalizationForm;

/// Canonical decomposition (NFD): every tone mark gets its own code point.
pub fn decompose(text: &str) -> String {
    text.nfd().collect()
}

/// Compose or decompose the final output.
pub fn compose(text: &str, form: NormalizationForm) -> String {
    match form {
        NormalizationForm::Nfc => text.nfc().collect(),
        NormalizationForm::Nfd => text.nfd().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_splits_tone_mark() {
        assert_eq!(decompose("á"), "a\u{301}");
        assert_eq!(decompose("ô\u{358}"), "o\u{302}\u{358}");
    }

    #[test]
    fn test_decompose_orders_dot_after_tone_mark() {
        // U+0358 (ccc 232) sorts after U+0302 (ccc 230).
        assert_eq!(decompose("o\u{358}\u{302}"), "o\u{302}\u{358}");
    }

    #[test]
    fn test_compose_forms() {
        assert_eq!(compose("a\u{302}", NormalizationForm::Nfc), "â");
        assert_eq!(compose("â", NormalizationForm::Nfd), "a\u{302}");
        // No precomposed a + vertical line above.
        assert_eq!(compose("a\u{30d}", NormalizationForm::Nfc), "a\u{30d}");
    }

    #[test]
    fn test_nasal_letters_survive() {
        for form in [NormalizationForm::Nfc, NormalizationForm::Nfd] {
            assert_eq!(compose("oⁿ", form), "oⁿ");
            assert_eq!(compose("Oᴺ", form), "Oᴺ");
        }
        assert_eq!(decompose("óⁿ"), "o\u{301}ⁿ");
    }
}
