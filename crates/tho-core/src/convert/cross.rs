//! Conversions between the two orthographies.
//!
//! The Unicode pairs come in two flavours. The direct path scans the
//! diacritic text once and maps letters per syllable; the cascade path goes
//! through the digit-tone forms. Both give the same output on well-formed
//! input.

use tracing::debug_span;

use crate::normalize::{compose, decompose};
use crate::options::ConvertOptions;
use crate::orthography::{poj_to_tailo, tailo_to_poj};
use crate::standard::respell_affricates;
use crate::syllable::{map_letters, read_unicode, write_with};
use crate::tone::TAILO;

use super::poj::{poj_ascii_to_unicode, poj_unicode_to_ascii, prepare_poj, read_poj_unicode, render_poj};
use super::tailo::{render_tailo, tailo_ascii_to_unicode, tailo_unicode_to_ascii};

/// `Pe8h-oe7-ji7` → `Pe8h-ue7-ji7`. Tone digits are left where they are.
pub fn poj_ascii_to_tailo_ascii(text: &str, opts: &ConvertOptions) -> String {
    let _span = debug_span!("poj_ascii_to_tailo_ascii", text).entered();
    compose(&poj_to_tailo(&decompose(text)), opts.normalization)
}

/// `kuan5` → `koan5`. Under Campbell, affricates are respelled for the
/// following vowel.
pub fn tailo_ascii_to_poj_ascii(text: &str, opts: &ConvertOptions) -> String {
    let _span = debug_span!("tailo_ascii_to_poj_ascii", text, standard = %opts.standard).entered();
    let mut poj = tailo_to_poj(&decompose(text));
    if opts.campbell_spelling && opts.standard.policy().affricate_context {
        poj = respell_affricates(&poj);
    }
    compose(&poj, opts.normalization)
}

/// `Pe̍h-ōe-jī` → `Pe̍h-uē-jī`, in a single scan.
pub fn poj_unicode_to_tailo_unicode(text: &str, opts: &ConvertOptions) -> String {
    let _span = debug_span!("poj_unicode_to_tailo_unicode", text, standard = %opts.standard).entered();
    let mut pieces = read_poj_unicode(text, opts);
    map_letters(&mut pieces, poj_to_tailo);
    compose(&write_with(&pieces, render_tailo), opts.normalization)
}

/// `Tâi-uân` → `Tâi-oân`, in a single scan.
pub fn tailo_unicode_to_poj_unicode(text: &str, opts: &ConvertOptions) -> String {
    let _span = debug_span!("tailo_unicode_to_poj_unicode", text, standard = %opts.standard).entered();
    let mut pieces = read_unicode(&decompose(text), &TAILO, false);
    map_letters(&mut pieces, |letters| prepare_poj(&tailo_to_poj(letters), opts));
    let rendered = write_with(&pieces, |syllable| render_poj(syllable, opts.standard));
    compose(&rendered, opts.normalization)
}

/// Same as [`poj_unicode_to_tailo_unicode`], through POJ and Tâi-lô ASCII.
pub fn poj_unicode_to_tailo_unicode_cascade(text: &str, opts: &ConvertOptions) -> String {
    let _span = debug_span!("poj_unicode_to_tailo_unicode_cascade", text).entered();
    let poj_ascii = poj_unicode_to_ascii(text, opts);
    let tailo_ascii = poj_ascii_to_tailo_ascii(&poj_ascii, opts);
    let plain = ConvertOptions {
        foreign_letters: false,
        ..opts.clone()
    };
    tailo_ascii_to_unicode(&tailo_ascii, &plain)
}

/// Same as [`tailo_unicode_to_poj_unicode`], through Tâi-lô and POJ ASCII.
pub fn tailo_unicode_to_poj_unicode_cascade(text: &str, opts: &ConvertOptions) -> String {
    let _span = debug_span!("tailo_unicode_to_poj_unicode_cascade", text).entered();
    let tailo_ascii = tailo_unicode_to_ascii(text, opts);
    // The letter mapping itself is standard-independent; Campbell respelling
    // happens once, when the POJ ASCII is rendered.
    let poj_ascii = tailo_ascii_to_poj_ascii(&tailo_ascii, &ConvertOptions::default());
    let plain = ConvertOptions {
        foreign_letters: false,
        ..opts.clone()
    };
    poj_ascii_to_unicode(&poj_ascii, &plain)
}
