use tracing::debug_span;

use crate::letters::{self, expand_uppercase_n, h_before_nasal, nasal_before_h};
use crate::normalize::{compose, decompose};
use crate::options::ConvertOptions;
use crate::orthography::{tailo_to_poj, Orthography};
use crate::placement::place;
use crate::standard::{collapse_nasal_o, expand_nasal_o, respell_affricates, Standard};
use crate::syllable::{map_letters, read_ascii, read_unicode, write_ascii, write_with, Piece, Syllable};
use crate::tone::{attach, POJ};

/// Spelling fixes on the ASCII letters of a POJ syllable before it is
/// rendered.
pub(super) fn prepare_poj(letters: &str, opts: &ConvertOptions) -> String {
    let mut letters = letters::normalize_ascii_variants(letters);
    if opts.uppercase_n_nasal {
        letters = expand_uppercase_n(&letters);
    }
    if opts.campbell_spelling {
        let policy = opts.standard.policy();
        if policy.nasal_long_o {
            letters = expand_nasal_o(&letters);
        }
        if policy.affricate_context {
            letters = respell_affricates(&letters);
        }
    }
    letters
}

pub(super) fn render_poj(syllable: &Syllable, standard: Standard) -> String {
    let at = place(&syllable.letters, syllable.tone, Orthography::Poj, standard);
    let marked = attach(&syllable.letters, syllable.tone, at, &POJ);
    let encoded = letters::encode(&marked);
    if standard.policy().h_before_nasal {
        h_before_nasal(&encoded)
    } else {
        encoded
    }
}

/// Scan POJ diacritic text into syllables with ASCII letters.
pub(super) fn read_poj_unicode(text: &str, opts: &ConvertOptions) -> Vec<Piece> {
    let policy = opts.standard.policy();
    let mut nfd = decompose(text);
    if policy.h_before_nasal {
        nfd = nasal_before_h(&nfd);
    }
    let mut pieces = read_unicode(&nfd, &POJ, true);
    // Campbell nasal o is read back whether or not input respelling is on.
    if policy.nasal_long_o {
        map_letters(&mut pieces, collapse_nasal_o);
    }
    pieces
}

/// `Pe8h-oe7-ji7` → `Pe̍h-ōe-jī`.
pub fn poj_ascii_to_unicode(text: &str, opts: &ConvertOptions) -> String {
    let _span = debug_span!("poj_ascii_to_unicode", text, standard = %opts.standard).entered();
    let mut pieces = read_ascii(&decompose(text));
    if opts.foreign_letters {
        map_letters(&mut pieces, tailo_to_poj);
    }
    map_letters(&mut pieces, |letters| prepare_poj(letters, opts));
    let rendered = write_with(&pieces, |syllable| render_poj(syllable, opts.standard));
    compose(&rendered, opts.normalization)
}

/// `Pe̍h-ōe-jī` → `Pe8h-oe7-ji7`; unmarked syllables get their implicit tone.
pub fn poj_unicode_to_ascii(text: &str, opts: &ConvertOptions) -> String {
    let _span = debug_span!("poj_unicode_to_ascii", text, standard = %opts.standard).entered();
    let pieces = read_poj_unicode(text, opts);
    compose(&write_ascii(&pieces, true), opts.normalization)
}
