use tracing::debug_span;

use crate::normalize::{compose, decompose};
use crate::options::ConvertOptions;
use crate::orthography::{poj_to_tailo, Orthography};
use crate::placement::place;
use crate::standard::Standard;
use crate::syllable::{map_letters, read_ascii, read_unicode, write_ascii, write_with, Syllable};
use crate::tone::{attach, TAILO};

pub(super) fn render_tailo(syllable: &Syllable) -> String {
    let at = place(&syllable.letters, syllable.tone, Orthography::Tailo, Standard::Modern);
    attach(&syllable.letters, syllable.tone, at, &TAILO)
}

/// `Tai5-lo5` → `Tâi-lô`.
pub fn tailo_ascii_to_unicode(text: &str, opts: &ConvertOptions) -> String {
    let _span = debug_span!("tailo_ascii_to_unicode", text).entered();
    let mut pieces = read_ascii(&decompose(text));
    if opts.foreign_letters {
        map_letters(&mut pieces, poj_to_tailo);
    }
    compose(&write_with(&pieces, render_tailo), opts.normalization)
}

/// `Tâi-lô` → `Tai5-lo5`; unmarked syllables get their implicit tone.
pub fn tailo_unicode_to_ascii(text: &str, opts: &ConvertOptions) -> String {
    let _span = debug_span!("tailo_unicode_to_ascii", text).entered();
    let pieces = read_unicode(&decompose(text), &TAILO, false);
    compose(&write_ascii(&pieces, true), opts.normalization)
}
